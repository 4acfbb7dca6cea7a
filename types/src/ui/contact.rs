//! Contact form fields and validation.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::NonEmptyString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("a valid email address is required")]
    InvalidEmail,
    #[error("message is required")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: NonEmptyString,
    pub email: NonEmptyString,
    pub message: NonEmptyString,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn push(&mut self, field: ContactField, c: char) {
        if c.is_control() {
            return;
        }
        self.get_mut(field).push(c);
    }

    /// Remove the last grapheme cluster of `field`.
    pub fn backspace(&mut self, field: ContactField) {
        let text = self.get_mut(field);
        if let Some((idx, _)) = text.grapheme_indices(true).next_back() {
            text.truncate(idx);
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn validate(&self) -> Result<ValidContact, ContactError> {
        let name = NonEmptyString::new(self.name.trim()).map_err(|_| ContactError::MissingName)?;
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let email = NonEmptyString::new(email).map_err(|_| ContactError::InvalidEmail)?;
        let message =
            NonEmptyString::new(self.message.trim()).map_err(|_| ContactError::MissingMessage)?;
        Ok(ValidContact {
            name,
            email,
            message,
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
}
