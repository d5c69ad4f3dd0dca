//! Content record and preview context types.

use serde::{Deserialize, Serialize};

/// Revision state of a record in a revisionable entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// The revision id.
    pub id: u64,
    /// True if this is the most recent revision of the record.
    pub is_latest: bool,
    /// True if this is the default (usually published) revision.
    pub is_default: bool,
}

/// A content record from the host CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Entity type id, e.g. `node`.
    pub entity_type_id: String,

    /// Bundle (sub-type), e.g. `article`.
    pub bundle: String,

    /// Stable unique identifier.
    pub uuid: String,

    /// Canonical path, e.g. `/news/abc`.
    pub path: String,

    /// Language id, present when the record is translatable.
    #[serde(default)]
    pub langcode: Option<String>,

    /// Publish status, present only when the entity type supports publishing.
    #[serde(default)]
    pub published: Option<bool>,

    /// Revision state, present when the record belongs to a revisionable type.
    #[serde(default)]
    pub revision: Option<Revision>,
}

impl ContentRecord {
    /// Create a record that is not translatable, publishable or revisioned.
    pub fn new(
        entity_type_id: impl Into<String>,
        bundle: impl Into<String>,
        uuid: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            entity_type_id: entity_type_id.into(),
            bundle: bundle.into(),
            uuid: uuid.into(),
            path: path.into(),
            langcode: None,
            published: None,
            revision: None,
        }
    }

    pub fn with_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = Some(langcode.into());
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_revision(mut self, revision: Revision) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Returns false only for records whose type supports publishing and
    /// which are unpublished.
    pub fn is_publicly_visible(&self) -> bool {
        self.published.unwrap_or(true)
    }
}

/// Rendering context passed alongside a record.
///
/// A record is "in preview" while the editor is previewing unsaved changes;
/// such a record has no stable canonical path yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewContext {
    in_preview: bool,
}

impl PreviewContext {
    /// Context for a record being previewed before it is saved.
    pub fn in_preview() -> Self {
        Self { in_preview: true }
    }

    /// Context for a persisted record.
    pub fn persisted() -> Self {
        Self { in_preview: false }
    }

    pub fn is_preview(&self) -> bool {
        self.in_preview
    }
}

impl From<bool> for PreviewContext {
    fn from(in_preview: bool) -> Self {
        Self { in_preview }
    }
}
