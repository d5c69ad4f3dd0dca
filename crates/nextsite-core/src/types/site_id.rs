//! Site machine name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

const MAX_LENGTH: usize = 32;

/// A validated site identifier.
///
/// Site ids are machine names: lowercase ASCII letters, digits and
/// underscores, at most 32 characters. They double as storage file names.
///
/// # Example
///
/// ```
/// use nextsite_core::SiteId;
///
/// let id = SiteId::new("marketing_site").unwrap();
/// assert_eq!(id.as_str(), "marketing_site");
/// assert!(SiteId::new("Marketing Site").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteId(String);

impl SiteId {
    /// Create a new site id, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid machine name.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            "must be non-empty"
        } else if s.len() > MAX_LENGTH {
            "must be at most 32 characters"
        } else if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            "must contain only lowercase letters, digits and underscores"
        } else {
            return Ok(());
        };

        Err(InvalidInputError::SiteId {
            value: s.to_string(),
            reason: reason.to_string(),
        }
        .into())
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SiteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SiteId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SiteId> for String {
    fn from(id: SiteId) -> Self {
        id.0
    }
}

impl AsRef<str> for SiteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
