//! Language lookup.

/// Provides the site's language configuration.
pub trait LanguageManager: Send + Sync {
    /// The default language id, e.g. `en`.
    fn default_langcode(&self) -> String;
}
