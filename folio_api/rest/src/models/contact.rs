use std::sync::LazyLock;

use folio_models::{
    contact::{
        ContactMessage, ContactMessageAuthor, ContactMessageAuthorName, ContactMessageContent,
        ContactMessageSubject,
    },
    email_address::EmailAddress,
};
use regex::Regex;
use serde::Deserialize;

/// Raw contact form submission. Validation happens on conversion into
/// [`ContactMessage`] so the endpoint controls the exact rejection messages.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMessageRejection {
    MissingField,
    InvalidEmail,
}

impl TryFrom<ApiContactMessage> for ContactMessage {
    type Error = ContactMessageRejection;

    fn try_from(value: ApiContactMessage) -> Result<Self, Self::Error> {
        let fields = [&value.name, &value.email, &value.subject, &value.message];
        if fields.into_iter().any(|field| field.trim().is_empty()) {
            return Err(ContactMessageRejection::MissingField);
        }

        // the pattern is matched against the email exactly as submitted, so
        // surrounding whitespace is rejected rather than trimmed away
        if !EMAIL_PATTERN.is_match(&value.email) {
            return Err(ContactMessageRejection::InvalidEmail);
        }
        let email = value
            .email
            .parse::<EmailAddress>()
            .map_err(|_| ContactMessageRejection::InvalidEmail)?;

        // presence was checked above, so the non-empty validations hold
        let name = ContactMessageAuthorName::try_new(value.name)
            .map_err(|_| ContactMessageRejection::MissingField)?;
        let subject = ContactMessageSubject::try_new(value.subject)
            .map_err(|_| ContactMessageRejection::MissingField)?;
        let content = ContactMessageContent::try_new(value.message)
            .map_err(|_| ContactMessageRejection::MissingField)?;

        Ok(ContactMessage {
            author: ContactMessageAuthor { name, email },
            subject,
            content,
        })
    }
}
