use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs of the contact form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Phone, Self::Subject, Self::Message];

    /// Element id of the input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Element id of the inline error next to the input.
    #[must_use]
    pub const fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Phone => "phoneError",
            Self::Subject => "subjectError",
            Self::Message => "messageError",
        }
    }

    /// Static message shown when the field fails validation.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 3 characters long",
            Self::Email => "Please enter a valid email address",
            Self::Phone => "Please enter a valid phone number",
            Self::Subject => "Please select a subject",
            Self::Message => "Message must be at least 10 characters long",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number (optional)",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of the subject `<select>`; the empty value is the placeholder.
pub const SUBJECT_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a subject"),
    ("general", "General Inquiry"),
    ("order", "Order Support"),
    ("wholesale", "Wholesale & Distribution"),
    ("school", "School Program"),
    ("feedback", "Feedback"),
];
