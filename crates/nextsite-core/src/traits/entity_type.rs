//! Entity type inspection.

use crate::content::ContentRecord;

/// Answers questions about the entity type of a record.
pub trait EntityTypeInspector: Send + Sync {
    /// Returns true if the record's entity type keeps revisions.
    fn is_revisionable(&self, record: &ContentRecord) -> bool;
}
