//! Route resolution.

use super::ResourceType;
use crate::Result;

/// Builds CMS URLs for content API routes.
pub trait RouteResolver: Send + Sync {
    /// Absolute URL of the individual preview route of `resource_type`
    /// for the record with `uuid`.
    fn individual_preview_url(&self, resource_type: &ResourceType, uuid: &str) -> Result<String>;
}
