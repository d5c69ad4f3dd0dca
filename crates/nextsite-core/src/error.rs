//! Error types for nextsite.
//!
//! A single error type with explicit variants for site misconfiguration,
//! collaborator lookup failures, invalid input and storage failures.
//!
//! A missing live link is not an error; it is reported as `Ok(None)`.

use thiserror::Error;

/// The unified error type for nextsite operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The site is missing settings required by the requested operation.
    #[error("site misconfigured: {0}")]
    Config(#[from] ConfigError),

    /// A host CMS lookup (resource type, route, revision) failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// Input validation errors (site id, URL, resource version, query).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Site storage errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Site settings missing for the requested link.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No preview secret, or an empty one.
    #[error("site '{site}' has no preview secret")]
    MissingPreviewSecret { site: String },

    /// No preview URL.
    #[error("site '{site}' has no preview URL")]
    MissingPreviewUrl { site: String },

    /// No base URL.
    #[error("site '{site}' has no base URL")]
    MissingBaseUrl { site: String },
}

/// Failures reported by the host CMS capabilities.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No resource type registered for the entity type and bundle.
    #[error("no resource type for '{entity_type_id}' bundle '{bundle}'")]
    ResourceTypeNotFound {
        entity_type_id: String,
        bundle: String,
    },

    /// The route could not be resolved to a URL.
    #[error("route '{route}' could not be resolved: {reason}")]
    RouteNotFound { route: String, reason: String },

    /// The entity type is revisionable but the record has no revision data.
    #[error("record '{uuid}' is revisionable but carries no revision")]
    MissingRevision { uuid: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid site machine name.
    #[error("invalid site id '{value}': {reason}")]
    SiteId { value: String, reason: String },

    /// A URL that could not be parsed or built.
    #[error("invalid URL '{value}': {reason}")]
    Url { value: String, reason: String },

    /// Invalid resource version string.
    #[error("invalid resource version '{value}': {reason}")]
    ResourceVersion { value: String, reason: String },

    /// A preview query that is missing parameters or has bad values.
    #[error("invalid preview query: {reason}")]
    Query { reason: String },
}

/// Site storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// No site stored under the id.
    #[error("site '{id}' not found")]
    NotFound { id: String },

    /// A site already exists under the id.
    #[error("site '{id}' already exists")]
    AlreadyExists { id: String },

    /// A site could not be encoded for writing.
    #[error("could not encode site '{id}': {message}")]
    Encode { id: String, message: String },

    /// A stored document could not be read back.
    #[error("corrupt site file '{path}': {message}")]
    Corrupt { path: String, message: String },
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(StorageError::from(err))
    }
}

impl Error {
    /// Returns true if this error means the site needs administrator attention.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
