//! Contact details collected by checkout, signup and the business profile form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Validation failures for contact fields.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was left blank.
    #[error("{0} is required")]
    Required(&'static str),
    /// The email address is not of the form `local@domain`.
    #[error("please enter a valid email address")]
    InvalidEmail,
    /// The phone number has too few digits or stray characters.
    #[error("please enter a valid phone number")]
    InvalidPhone,
    /// The postal code is not six digits.
    #[error("pincode must be 6 digits")]
    InvalidPincode,
}

/// An email address with a non-empty local part and a dotted domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an email, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Required`] for blank input and
    /// [`ContactError::InvalidEmail`] for anything not shaped like
    /// `local@domain.tld`.
    pub fn parse(input: &str) -> Result<Self, ContactError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ContactError::Required("email"));
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(ContactError::InvalidEmail);
        }
        let (local, domain) = s.split_once('@').ok_or(ContactError::InvalidEmail)?;
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(ContactError::InvalidEmail);
        }
        Ok(Self(s.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number as entered (`+91 98765 43210`), with at least ten digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    const MIN_DIGITS: usize = 10;
    const MAX_DIGITS: usize = 15;

    /// Parse a phone number. Spaces, dashes, parentheses and a leading `+`
    /// are allowed as formatting.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Required`] when blank, otherwise
    /// [`ContactError::InvalidPhone`].
    pub fn parse(input: &str) -> Result<Self, ContactError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ContactError::Required("phone"));
        }
        let body = s.strip_prefix('+').unwrap_or(s);
        if !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        {
            return Err(ContactError::InvalidPhone);
        }
        let digits = body.chars().filter(char::is_ascii_digit).count();
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits) {
            return Err(ContactError::InvalidPhone);
        }
        Ok(Self(s.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An Indian postal index number: exactly six digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Pincode(String);

impl Pincode {
    /// # Errors
    ///
    /// Returns [`ContactError::InvalidPincode`] unless the trimmed input is
    /// six ASCII digits.
    pub fn parse(input: &str) -> Result<Self, ContactError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ContactError::Required("pincode"));
        }
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactError::InvalidPincode);
        }
        Ok(Self(s.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim a free-text field, rejecting it when blank.
///
/// # Errors
///
/// Returns [`ContactError::Required`] naming `field`.
pub fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContactError::Required(field))
    } else {
        Ok(trimmed.to_owned())
    }
}
