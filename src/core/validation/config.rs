//! Declarative model schemas
//!
//! A [`ModelSchema`] is a data-only description of a model: its fields in
//! declaration order, each with a semantic kind, a required flag and an ordered
//! list of constraint predicates. One generic [`ModelSchema::validate`] consumes
//! every schema, so no model carries hand-written validation code.

use crate::core::error::{FieldValidationError, ValidationError};
use serde_json::{Map, Value};
use std::sync::Arc;

/// A field validator as produced by the functions in [`super::validators`]
pub type FieldValidator = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Semantic type of a field, used for coercion before constraints run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

impl FieldKind {
    /// Coerce a raw input value into this kind
    ///
    /// Query strings, form fields and path segments always arrive as text, so
    /// integers and booleans are also accepted in their textual form.
    pub fn coerce(self, value: &Value) -> Option<Value> {
        match self {
            FieldKind::String => value.as_str().map(|_| value.clone()),
            FieldKind::Integer => match value {
                Value::Number(n) => n.as_i64().map(Value::from).or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                        .map(|f| Value::from(f as i64))
                }),
                Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
                _ => None,
            },
            FieldKind::Boolean => match value {
                Value::Bool(_) => Some(value.clone()),
                Value::Number(n) => match n.as_i64() {
                    Some(0) => Some(Value::Bool(false)),
                    Some(1) => Some(Value::Bool(true)),
                    _ => None,
                },
                Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "true" | "1" | "yes" | "on" => Some(Value::Bool(true)),
                    "false" | "0" | "no" | "off" => Some(Value::Bool(false)),
                    _ => None,
                },
                _ => None,
            },
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldKind::String => "a valid string",
            FieldKind::Integer => "a valid integer",
            FieldKind::Boolean => "a valid boolean",
        }
    }
}

#[derive(Clone)]
struct FieldRule {
    constraint: &'static str,
    check: FieldValidator,
}

/// Declaration of one model field
#[derive(Clone)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    required: bool,
    rules: Vec<FieldRule>,
}

impl FieldSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Constraint names in the order they are checked
    pub fn constraints(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.constraint).collect()
    }

    fn check(&self, path: &str, raw: Option<&Value>) -> Result<Value, FieldValidationError> {
        let raw = match raw {
            None | Some(Value::Null) if self.required => {
                return Err(FieldValidationError::missing(path));
            }
            None | Some(Value::Null) => return Ok(Value::Null),
            Some(value) => value,
        };

        let value = self.kind.coerce(raw).ok_or_else(|| {
            FieldValidationError::violated(
                path,
                "type",
                format!("'{}' must be {}", path, self.kind.describe()),
                raw,
            )
        })?;

        for rule in &self.rules {
            (rule.check)(path, &value).map_err(|message| {
                FieldValidationError::violated(path, rule.constraint, message, raw)
            })?;
        }

        Ok(value)
    }
}

/// Validation configuration for a model
#[derive(Clone)]
pub struct ModelSchema {
    model: String,
    fields: Vec<FieldSpec>,
}

impl ModelSchema {
    /// Create an empty schema for the named model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            fields: Vec::new(),
        }
    }

    /// Create a schema that starts with every field of `base`
    pub fn extending(model: impl Into<String>, base: &ModelSchema) -> Self {
        Self {
            model: model.into(),
            fields: base.fields.clone(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declare a field; fields are optional until [`require`](Self::require)d
    pub fn add_field(&mut self, name: &str, kind: FieldKind) {
        self.field_mut(name).kind = kind;
    }

    /// Mark a field as required
    pub fn require(&mut self, name: &str) {
        self.field_mut(name).required = true;
    }

    /// Append a constraint to a field; constraints run in insertion order
    pub fn add_validator<F>(&mut self, name: &str, constraint: &'static str, validator: F)
    where
        F: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.field_mut(name).rules.push(FieldRule {
            constraint,
            check: Arc::new(validator),
        });
    }

    fn field_mut(&mut self, name: &str) -> &mut FieldSpec {
        let index = match self.fields.iter().position(|f| f.name == name) {
            Some(index) => index,
            None => {
                self.fields.push(FieldSpec {
                    name: name.to_string(),
                    kind: FieldKind::String,
                    required: false,
                    rules: Vec::new(),
                });
                self.fields.len() - 1
            }
        };
        &mut self.fields[index]
    }

    /// Validate a raw input object against every declared field
    ///
    /// All fields are checked before failing, so the error lists every
    /// violation of the input. On success the returned object holds exactly
    /// the declared fields, coerced to their kinds.
    pub fn validate(&self, raw: Value) -> Result<Value, ValidationError> {
        self.validate_at(None, raw)
            .map_err(ValidationError::FieldErrors)
    }

    /// Same as [`validate`](Self::validate), reporting field names as `prefix.field`
    pub fn validate_at(
        &self,
        prefix: Option<&str>,
        raw: Value,
    ) -> Result<Value, Vec<FieldValidationError>> {
        let input = match raw {
            Value::Object(map) => map,
            other => {
                let field = prefix.unwrap_or(&self.model);
                return Err(vec![FieldValidationError::violated(
                    field,
                    "type",
                    format!("'{}' must be an object", field),
                    &other,
                )]);
            }
        };

        let mut output = Map::new();
        let mut errors = Vec::new();

        for spec in &self.fields {
            let path = match prefix {
                Some(prefix) => format!("{}.{}", prefix, spec.name),
                None => spec.name.clone(),
            };
            match spec.check(&path, input.get(&spec.name)) {
                Ok(value) => {
                    output.insert(spec.name.clone(), value);
                }
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(errors)
        }
    }
}

impl std::fmt::Debug for ModelSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<(&str, FieldKind, bool, Vec<&'static str>)> = self
            .fields
            .iter()
            .map(|s| (s.name.as_str(), s.kind, s.required, s.constraints()))
            .collect();
        f.debug_struct("ModelSchema")
            .field("model", &self.model)
            .field("fields", &fields)
            .finish()
    }
}
