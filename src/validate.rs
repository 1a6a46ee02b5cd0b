//! Field validation rules for the contact form

use crate::state::FieldId;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum character count for the first name field
pub const MIN_FIRST_NAME_CHARS: usize = 5;

/// One `@` with a non-empty local part and a dotted domain
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles"));

/// A validation failure for a single field.
///
/// At most one of these exists per field at any time. The `Display`
/// output is the exact message shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is a required field.")]
    Required { field: FieldId },
    #[error("{field} must have at least {min} characters.")]
    TooShort { field: FieldId, min: usize },
    #[error("{field} must be a valid email address.")]
    InvalidFormat { field: FieldId },
}

impl ValidationError {
    /// The field this error belongs to
    pub fn field(&self) -> FieldId {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field } => *field,
        }
    }
}

/// Validate a field as the user types.
///
/// Only content rules (length/format) run live, and only once the field
/// has content: a blank field shows no error until submit.
pub fn validate_live(field: FieldId, value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }
    validate_content(field, value)
}

/// Validate a field for a submit attempt.
///
/// Required-field checks run first, then the same content rules used
/// live. The optional message field never produces an error.
pub fn validate_submit(field: FieldId, value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        if field.is_required() {
            return Some(ValidationError::Required { field });
        }
        return None;
    }
    validate_content(field, value)
}

/// Content rules shared by live and submit validation
fn validate_content(field: FieldId, value: &str) -> Option<ValidationError> {
    match field {
        FieldId::FirstName if value.chars().count() < MIN_FIRST_NAME_CHARS => {
            Some(ValidationError::TooShort {
                field,
                min: MIN_FIRST_NAME_CHARS,
            })
        }
        FieldId::Email if !EMAIL_PATTERN.is_match(value) => {
            Some(ValidationError::InvalidFormat { field })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod live_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_field_has_no_live_error() {
            for field in FieldId::ALL {
                assert_eq!(validate_live(field, ""), None);
            }
        }

        #[test]
        fn test_short_first_name_is_too_short() {
            let err = validate_live(FieldId::FirstName, "abc");
            assert_eq!(
                err,
                Some(ValidationError::TooShort {
                    field: FieldId::FirstName,
                    min: 5
                })
            );
        }

        #[test]
        fn test_first_name_boundary() {
            assert!(validate_live(FieldId::FirstName, "jess").is_some());
            assert_eq!(validate_live(FieldId::FirstName, "jessi"), None);
        }

        #[test]
        fn test_first_name_counts_chars_not_bytes() {
            // 5 characters, more than 5 bytes
            assert_eq!(validate_live(FieldId::FirstName, "renée"), None);
        }

        #[test]
        fn test_partial_email_is_invalid() {
            let err = validate_live(FieldId::Email, "spideyboi@");
            assert_eq!(
                err,
                Some(ValidationError::InvalidFormat {
                    field: FieldId::Email
                })
            );
        }

        #[test]
        fn test_valid_email_passes() {
            assert_eq!(validate_live(FieldId::Email, "spidey@wta.com"), None);
        }

        #[test]
        fn test_email_rejects_missing_at_and_dot() {
            assert!(validate_live(FieldId::Email, "spidey").is_some());
            assert!(validate_live(FieldId::Email, "spidey@wta").is_some());
            assert!(validate_live(FieldId::Email, "@wta.com").is_some());
            assert!(validate_live(FieldId::Email, "spidey@.com").is_some());
            assert!(validate_live(FieldId::Email, "a@b@c.com").is_some());
        }

        #[test]
        fn test_last_name_has_no_live_rule() {
            assert_eq!(validate_live(FieldId::LastName, "f"), None);
        }

        #[test]
        fn test_message_never_errors() {
            assert_eq!(validate_live(FieldId::Message, "hi"), None);
        }
    }

    mod submit_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_required_fields_error() {
            for field in [FieldId::FirstName, FieldId::LastName, FieldId::Email] {
                assert_eq!(
                    validate_submit(field, ""),
                    Some(ValidationError::Required { field })
                );
            }
        }

        #[test]
        fn test_empty_message_is_fine() {
            assert_eq!(validate_submit(FieldId::Message, ""), None);
        }

        #[test]
        fn test_short_first_name_errors_on_submit() {
            assert_eq!(
                validate_submit(FieldId::FirstName, "abc"),
                Some(ValidationError::TooShort {
                    field: FieldId::FirstName,
                    min: 5
                })
            );
        }

        #[test]
        fn test_valid_values_pass() {
            assert_eq!(validate_submit(FieldId::FirstName, "jessica"), None);
            assert_eq!(validate_submit(FieldId::LastName, "fuerte"), None);
            assert_eq!(validate_submit(FieldId::Email, "spidey@wta.com"), None);
        }
    }

    mod messages {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_message_text() {
            let err = ValidationError::Required {
                field: FieldId::LastName,
            };
            assert_eq!(err.to_string(), "lastName is a required field.");
        }

        #[test]
        fn test_too_short_message_text() {
            let err = ValidationError::TooShort {
                field: FieldId::FirstName,
                min: 5,
            };
            assert_eq!(
                err.to_string(),
                "firstName must have at least 5 characters."
            );
        }

        #[test]
        fn test_invalid_format_message_text() {
            let err = ValidationError::InvalidFormat {
                field: FieldId::Email,
            };
            assert_eq!(err.to_string(), "email must be a valid email address.");
        }

        #[test]
        fn test_error_reports_its_field() {
            let err = ValidationError::Required {
                field: FieldId::Email,
            };
            assert_eq!(err.field(), FieldId::Email);
        }
    }
}
