//! Field predicates of the contact form.
//!
//! Each predicate sees the trimmed value only; fields never depend on each other. Lengths are
//! counted in UTF-16 code units, as the browser counts them, so one emoji weighs two.

use aqua_domain::form::FieldId;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\+]?[0-9]{10,15}$").expect("phone pattern compiles"));

/// A field value rejected by its predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .field.error_message())]
pub struct ValidationError {
    pub field: FieldId,
}

impl ValidationError {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.field.error_message()
    }
}

/// Applies the predicate of `field` to `value` (trimmed first).
///
/// # Errors
/// Returns [`ValidationError`] carrying the field's static message when the predicate fails.
pub fn validate(field: FieldId, value: &str) -> Result<(), ValidationError> {
    if is_valid(field, value.trim()) { Ok(()) } else { Err(ValidationError { field }) }
}

fn is_valid(field: FieldId, value: &str) -> bool {
    match field {
        FieldId::Name => utf16_len(value) >= 3,
        FieldId::Email => EMAIL.is_match(value),
        FieldId::Phone => value.is_empty() || PHONE.is_match(value),
        FieldId::Subject => !value.is_empty(),
        FieldId::Message => utf16_len(value) >= 10,
    }
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_count_utf16_units() {
        assert!(validate(FieldId::Name, "😀😀").is_ok(), "two emoji are four units");
        assert!(validate(FieldId::Name, "😀").is_err());
        assert!(validate(FieldId::Name, "élé").is_ok());
        assert!(validate(FieldId::Message, "💧💧💧💧💧").is_ok());
        assert!(validate(FieldId::Message, "💧💧💧💧").is_err());
    }

    #[test]
    fn name_needs_three_characters() {
        let err = validate(FieldId::Name, "Jo").expect_err("two characters");
        assert_eq!(err.to_string(), "Name must be at least 3 characters long");
        assert!(validate(FieldId::Name, "Joe").is_ok());
        assert!(validate(FieldId::Name, "  Jo  ").is_err(), "whitespace is trimmed");
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(validate(FieldId::Email, "a@b").is_err());
        assert!(validate(FieldId::Email, "a@b.com").is_ok());
        assert!(validate(FieldId::Email, "a b@c.com").is_err());
        assert!(validate(FieldId::Email, "a@@b.com").is_err());
    }

    #[test]
    fn phone_is_optional() {
        assert!(validate(FieldId::Phone, "").is_ok());
        assert!(validate(FieldId::Phone, "   ").is_ok());
        assert!(validate(FieldId::Phone, "+923001234567").is_ok());
        assert!(validate(FieldId::Phone, "030012").is_err());
        assert!(validate(FieldId::Phone, "0300-1234567").is_err());
        assert!(validate(FieldId::Phone, "1234567890123456").is_err(), "sixteen digits");
    }

    #[test]
    fn subject_and_message() {
        assert_eq!(
            validate(FieldId::Subject, "").map_err(|e| e.message()),
            Err("Please select a subject")
        );
        assert!(validate(FieldId::Subject, "order").is_ok());
        assert!(validate(FieldId::Message, "too short").is_err());
        assert!(validate(FieldId::Message, "long enough").is_ok());
    }
}
