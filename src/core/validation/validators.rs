//! Reusable field validators
//!
//! These validators are used by the macro system to validate model fields.
//! They run after type coercion, so a value of the wrong JSON type is let
//! through (the coercion step already reported it).

use regex::Regex;
use serde_json::Value;
use validator::ValidateEmail;

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num <= 0.0 {
                Err(format!("'{}' must be greater than 0 (value: {})", field, num))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: number must not exceed maximum
pub fn max_value(max: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num > max {
                Err(format!(
                    "'{}' must be less than or equal to {} (value: {})",
                    field, max, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string length (in characters) must be within range
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            let len = s.chars().count();
            if len < min {
                Err(format!(
                    "'{}' must have at least {} characters (currently: {})",
                    field, min, len
                ))
            } else if len > max {
                Err(format!(
                    "'{}' must have at most {} characters (currently: {})",
                    field, max, len
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must have at least `min` characters
pub fn min_length(min: usize) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    string_length(min, usize::MAX)
}

/// Validator: string must have at most `max` characters
pub fn max_length(max: usize) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    string_length(0, max)
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if !allowed.iter().any(|a| a == s) {
                Err(format!(
                    "'{}' must be one of {:?} (value: {})",
                    field, allowed, s
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must match the regular expression
pub fn pattern(regex: Regex) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if regex.is_match(s) {
                Ok(())
            } else {
                Err(format!(
                    "'{}' must match pattern '{}' (value: {})",
                    field,
                    regex.as_str(),
                    s
                ))
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must be a syntactically valid email address
pub fn email() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if s.to_string().validate_email() {
                Ok(())
            } else {
                Err(format!("'{}' is not a valid email address (value: {})", field, s))
            }
        } else {
            Ok(())
        }
    }
}
