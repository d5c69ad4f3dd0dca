//! Core nextsite types.
//!
//! These types enforce their invariants at construction time,
//! so an invalid site id or resource version cannot be represented.

mod resource_version;
mod secret;
mod site_id;

pub use resource_version::ResourceVersion;
pub use secret::PreviewSecret;
pub use site_id::SiteId;
