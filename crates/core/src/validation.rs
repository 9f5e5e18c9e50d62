//! Bridges `validator` rule failures into [`CoreError::Validation`].

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Run the derived `validator` rules for `input`.
///
/// On failure the per-field messages are flattened into a single
/// human-readable string, sorted by field name so output is stable.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render validation errors as `field: message; field: message`.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(field_errors) => field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: failed '{}' rule", e.code),
                })
                .collect::<Vec<_>>(),
            ValidationErrorsKind::Struct(nested) => vec![format!("{field}: {}", describe(nested))],
            ValidationErrorsKind::List(_) => vec![format!("{field}: invalid list entry")],
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
