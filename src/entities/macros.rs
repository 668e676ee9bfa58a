//! Macros to declare model validation schemas
//!
//! The typed struct is written by hand with its serde derives; the macro
//! attaches the declarative schema and the `ValidatableModel` implementation.

/// Declare the validation schema of a model
///
/// Each field names its kind (`String`, `Integer`, `Boolean`) and an ordered
/// list of validators. Fields are optional unless `required` is listed.
///
/// # Example
///
/// ```rust,ignore
/// impl_validated_model!(
///     Location,
///     "location",
///     {
///         city: String [required, min_length(1)],
///         state: String [required, min_length(1)],
///         country: String [required, min_length(1)],
///     }
/// );
///
/// // A model may start from another model's fields
/// impl_validated_model!(
///     Person,
///     "person",
///     extends PersonBase,
///     {
///         password: String [required, min_length(8)],
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_validated_model {
    (
        $type:ident,
        $model_name:expr,
        {
            $( $field:ident : $kind:ident [ $( $validator:tt )* ] ),* $(,)?
        }
        $(,)?
    ) => {
        $crate::impl_validated_model!(@impl $type, $model_name,
            $crate::core::validation::ModelSchema::new($model_name),
            { $( $field : $kind [ $( $validator )* ] ),* }
        );
    };

    (
        $type:ident,
        $model_name:expr,
        extends $base:ident,
        {
            $( $field:ident : $kind:ident [ $( $validator:tt )* ] ),* $(,)?
        }
        $(,)?
    ) => {
        $crate::impl_validated_model!(@impl $type, $model_name,
            $crate::core::validation::ModelSchema::extending($model_name, $base::schema()),
            { $( $field : $kind [ $( $validator )* ] ),* }
        );
    };

    (
        @impl $type:ident,
        $model_name:expr,
        $initial:expr,
        {
            $( $field:ident : $kind:ident [ $( $validator:tt )* ] ),*
        }
    ) => {
        impl $type {
            /// Declarative validation schema of this model
            pub fn schema() -> &'static $crate::core::validation::ModelSchema {
                static SCHEMA: ::std::sync::OnceLock<$crate::core::validation::ModelSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    #[allow(unused_mut)]
                    let mut schema = $initial;
                    $(
                        schema.add_field(
                            stringify!($field),
                            $crate::core::validation::FieldKind::$kind,
                        );
                        $crate::add_validators_for_field!(schema, stringify!($field), $( $validator )*);
                    )*
                    schema
                })
            }
        }

        impl $crate::core::validation::ValidatableModel for $type {
            fn validate_raw(
                raw: ::serde_json::Value,
            ) -> Result<::serde_json::Value, $crate::core::error::ValidationError> {
                Self::schema().validate(raw)
            }
        }
    };
}

/// Helper macro to add validators to a field
#[macro_export]
macro_rules! add_validators_for_field {
    // Base case: empty
    ($schema:expr, $field:expr,) => {};

    // separator
    ($schema:expr, $field:expr, , $( $rest:tt )*) => {
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // required
    ($schema:expr, $field:expr, required $( $rest:tt )*) => {
        $schema.require($field);
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // optional (the default, kept for readability)
    ($schema:expr, $field:expr, optional $( $rest:tt )*) => {
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // positive
    ($schema:expr, $field:expr, positive $( $rest:tt )*) => {
        $schema.add_validator($field, "positive", $crate::core::validation::validators::positive());
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // max_value with parameter
    ($schema:expr, $field:expr, max_value($max:expr) $( $rest:tt )*) => {
        $schema.add_validator($field, "max_value", $crate::core::validation::validators::max_value($max));
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // string_length with parameters
    ($schema:expr, $field:expr, string_length($min:expr, $max:expr) $( $rest:tt )*) => {
        $schema.add_validator($field, "string_length", $crate::core::validation::validators::string_length($min, $max));
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // min_length with parameter
    ($schema:expr, $field:expr, min_length($min:expr) $( $rest:tt )*) => {
        $schema.add_validator($field, "min_length", $crate::core::validation::validators::min_length($min));
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // max_length with parameter
    ($schema:expr, $field:expr, max_length($max:expr) $( $rest:tt )*) => {
        $schema.add_validator($field, "max_length", $crate::core::validation::validators::max_length($max));
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // in_list with values
    ($schema:expr, $field:expr, in_list($( $value:expr ),* $(,)?) $( $rest:tt )*) => {
        $schema.add_validator($field, "in_list", $crate::core::validation::validators::in_list(vec![$( $value.to_string() ),*]));
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // in_list over any iterable of displayable values
    ($schema:expr, $field:expr, in_list_of($values:expr) $( $rest:tt )*) => {
        $schema.add_validator(
            $field,
            "in_list",
            $crate::core::validation::validators::in_list(
                $values.iter().map(|v| v.to_string()).collect(),
            ),
        );
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // pattern with a regular expression literal
    ($schema:expr, $field:expr, pattern($regex:expr) $( $rest:tt )*) => {
        $schema.add_validator(
            $field,
            "pattern",
            $crate::core::validation::validators::pattern(
                ::regex::Regex::new($regex).unwrap(),
            ),
        );
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };

    // email
    ($schema:expr, $field:expr, email $( $rest:tt )*) => {
        $schema.add_validator($field, "email", $crate::core::validation::validators::email());
        $crate::add_validators_for_field!($schema, $field, $( $rest )*);
    };
}
