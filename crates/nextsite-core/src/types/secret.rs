//! Preview secret type.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The shared secret a front-end uses to verify preview requests.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Only exposed when building a preview query or exporting configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewSecret(String);

impl PreviewSecret {
    /// Create a preview secret from a string.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Generate a random secret of 32 hex characters.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the secret value.
    ///
    /// # Security
    ///
    /// Use only when building preview links or exporting site configuration.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the secret is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

// Hide secret value in Debug output
impl fmt::Debug for PreviewSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewSecret").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_value_in_debug() {
        let secret = PreviewSecret::new("s3cr3t-value");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn generated_secrets_are_hex_and_distinct() {
        let a = PreviewSecret::generate();
        let b = PreviewSecret::generate();
        assert_eq!(a.expose().len(), 32);
        assert!(a.expose().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn blank_detection() {
        assert!(PreviewSecret::new("").is_blank());
        assert!(PreviewSecret::new("  ").is_blank());
        assert!(!PreviewSecret::new("x").is_blank());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&PreviewSecret::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
