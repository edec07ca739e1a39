//! Contact form protocol: field validation, request encoding and response
//! classification. The HTTP call itself lives in the web frontend.

use crate::constants::{CONTACT_CONTENT_TYPE, CONTACT_ENDPOINT, CONTACT_FORM_NAME};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Form control `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field.")]
    MissingField(ContactField),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("The contact form is not open.")]
    NotAccepting,
    #[error("Your message is still being sent.")]
    Pending,
    #[error("Error: Form submission failed (HTTP {status})")]
    Rejected { status: u16 },
    #[error("Error: Form submission failed ({0})")]
    Transport(String),
    #[error("could not encode form: {0}")]
    Encode(String),
}

/// Raw values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Check required fields in form order and produce the wire payload.
    ///
    /// Whitespace only matters for the emptiness and email checks; the values
    /// go on the wire exactly as typed.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let required = |v: &str, f: ContactField| {
            if v.trim().is_empty() {
                Err(ContactError::MissingField(f))
            } else {
                Ok(())
            }
        };
        required(&self.name, ContactField::Name)?;
        required(&self.email, ContactField::Email)?;
        required(&self.message, ContactField::Message)?;
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(ContactSubmission {
            form_name: CONTACT_FORM_NAME,
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }
}

// Same bar as a browser `type=email` input: something@something, no spaces.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Validated field set in wire order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    #[serde(rename = "form-name")]
    pub form_name: &'static str,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> Result<String, ContactError> {
        serde_urlencoded::to_string(self).map_err(|e| ContactError::Encode(e.to_string()))
    }
}

/// One outbound submission attempt, always a POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    /// Sequence number of this attempt since page load, starting at 1.
    pub attempt: u64,
    pub endpoint: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl ContactRequest {
    pub fn new(attempt: u64, submission: &ContactSubmission) -> Result<Self, ContactError> {
        Ok(Self {
            attempt,
            endpoint: CONTACT_ENDPOINT,
            content_type: CONTACT_CONTENT_TYPE,
            body: submission.encode()?,
        })
    }
}

/// Any 2xx is success; everything else is a rejection.
#[inline]
pub fn classify_status(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Rejected { status })
    }
}
