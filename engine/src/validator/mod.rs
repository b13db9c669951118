//! Pure validation of a form record against a schema.
//!
//! For every checked field the rules run in a fixed order: presence,
//! type coercion, then range/length checks. The first failing rule wins
//! and produces the single message reported for that field. Invalid
//! input is a modeled outcome, never an `Err`; the function has no side
//! effects and is safe to call repeatedly.

use crate::schema::{Constraints, FieldSchema, FormSchema};
use crate::types::{FieldKind, FieldName, FieldValue, FormRecord, NormalizedRecord, RawValue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// One human-readable message per failing field.
pub type FieldErrors = BTreeMap<FieldName, String>;

/// local@domain with at least one dot in the domain.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

const MSG_REQUIRED: &str = "Required";

/// Either the coerced, normalized values of the checked fields, or a
/// field → message map. Pure function of schema, record, and the checked
/// set; never partially stale.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(NormalizedRecord),
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn normalized(&self) -> Option<&NormalizedRecord> {
        match self {
            ValidationResult::Valid(record) => Some(record),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    pub fn error_for(&self, name: &FieldName) -> Option<&str> {
        self.errors().and_then(|e| e.get(name)).map(String::as_str)
    }
}

/// First failing field in schema order, for jumping the UI back to the
/// step that contains it.
pub fn first_error_field<'a>(schema: &'a FormSchema, errors: &FieldErrors) -> Option<&'a FieldName> {
    schema.field_names().find(|name| errors.contains_key(*name))
}

/// Validate `fields_to_check` of `record` against `schema`.
pub fn validate(
    schema: &FormSchema,
    record: &FormRecord,
    fields_to_check: &BTreeSet<FieldName>,
) -> ValidationResult {
    let mut normalized = NormalizedRecord::new();
    let mut errors = FieldErrors::new();

    for field in schema.fields() {
        if !fields_to_check.contains(field.name()) {
            continue;
        }
        match check_field(field, record.get(field.name())) {
            Ok(Some(value)) => normalized.insert(field.name().clone(), value),
            // Optional and absent/blank: omitted from the normalized output.
            Ok(None) => {}
            Err(message) => {
                errors.insert(field.name().clone(), message);
            }
        }
    }

    if errors.is_empty() {
        ValidationResult::Valid(normalized)
    } else {
        ValidationResult::Invalid(errors)
    }
}

fn check_field(field: &FieldSchema, raw: Option<&RawValue>) -> Result<Option<FieldValue>, String> {
    let raw = match raw {
        Some(value) if !is_blank(value) => value,
        _ => {
            return if field.is_required() {
                Err(MSG_REQUIRED.to_string())
            } else {
                Ok(None)
            };
        }
    };

    let value = coerce(field.kind(), raw)?;
    check_constraints(field.constraints(), &value)?;
    Ok(Some(value))
}

/// Strings are trimmed before presence checks; numbers and booleans are
/// never blank.
fn is_blank(raw: &RawValue) -> bool {
    match raw {
        RawValue::Text(s) => s.trim().is_empty(),
        RawValue::Number(_) | RawValue::Bool(_) => false,
    }
}

fn coerce(kind: FieldKind, raw: &RawValue) -> Result<FieldValue, String> {
    match kind {
        FieldKind::Text | FieldKind::Phone => match raw {
            RawValue::Text(s) => Ok(FieldValue::Text(s.trim().to_string())),
            RawValue::Number(n) => Ok(FieldValue::Text(format_number(*n))),
            RawValue::Bool(_) => Err("Must be text".to_string()),
        },
        FieldKind::Email => match raw {
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if EMAIL_RE.is_match(trimmed) {
                    Ok(FieldValue::Text(trimmed.to_string()))
                } else {
                    Err("Must be a valid email address".to_string())
                }
            }
            _ => Err("Must be a valid email address".to_string()),
        },
        FieldKind::Url => match raw {
            RawValue::Text(s) => {
                let trimmed = s.trim();
                match url::Url::parse(trimmed) {
                    Ok(_) => Ok(FieldValue::Text(trimmed.to_string())),
                    Err(_) => Err("Must be an absolute URL".to_string()),
                }
            }
            _ => Err("Must be an absolute URL".to_string()),
        },
        FieldKind::Integer => match raw {
            RawValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| "Must be a whole number".to_string()),
            RawValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 {
                    Ok(FieldValue::Integer(*n as i64))
                } else {
                    Err("Must be a whole number".to_string())
                }
            }
            RawValue::Bool(_) => Err("Must be a whole number".to_string()),
        },
        FieldKind::Decimal => match raw {
            RawValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(FieldValue::Decimal)
                .ok_or_else(|| "Must be a number".to_string()),
            RawValue::Number(n) => {
                if n.is_finite() {
                    Ok(FieldValue::Decimal(*n))
                } else {
                    Err("Must be a number".to_string())
                }
            }
            RawValue::Bool(_) => Err("Must be a number".to_string()),
        },
        // Accept-terms: validates only when the coerced value is exactly true.
        FieldKind::AcceptTrue => match raw {
            RawValue::Bool(true) => Ok(FieldValue::Bool(true)),
            _ => Err(MSG_REQUIRED.to_string()),
        },
    }
}

fn check_constraints(constraints: &Constraints, value: &FieldValue) -> Result<(), String> {
    match value {
        FieldValue::Text(s) => {
            let len = s.chars().count();
            if let Some(min) = constraints.min_len {
                if len < min {
                    return Err(format!("Must be at least {min} characters"));
                }
            }
            if let Some(max) = constraints.max_len {
                if len > max {
                    return Err(format!("Must be at most {max} characters"));
                }
            }
            if let Some(choices) = &constraints.one_of {
                if !choices.iter().any(|c| c == s) {
                    return Err("Must be one of the allowed options".to_string());
                }
            }
            Ok(())
        }
        FieldValue::Integer(n) => check_numeric_range(constraints, *n as f64),
        FieldValue::Decimal(n) => check_numeric_range(constraints, *n),
        FieldValue::Bool(_) => Ok(()),
    }
}

fn check_numeric_range(constraints: &Constraints, value: f64) -> Result<(), String> {
    if let Some(min) = constraints.min {
        if value < min {
            return Err(format!("Must be at least {}", format_number(min)));
        }
    }
    if let Some(max) = constraints.max {
        if value > max {
            return Err(format!("Must be at most {}", format_number(max)));
        }
    }
    Ok(())
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
