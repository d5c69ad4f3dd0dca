//! nextsite-core - Site configuration and preview/live link resolution
//! for CMS content rendered by an external Next.js front-end.
//!
//! A [`NextSite`] describes how to reach one front-end. A [`LinkResolver`]
//! combines a site with a [`ContentRecord`] and the host CMS capabilities
//! (see [`traits`]) to produce signed preview links and public live links.
//!
//! # Example
//!
//! ```
//! use nextsite_core::{ContentRecord, NextSite, PreviewContext, SiteId};
//!
//! let mut site = NextSite::new(SiteId::new("blog").unwrap(), "Blog");
//! site.set_base_url("https://site.example");
//!
//! let record = ContentRecord::new("node", "article", "abc-123", "/news/abc").with_published(true);
//! let live = nextsite_core::link::live_url(&site, &record, PreviewContext::default()).unwrap();
//! assert_eq!(live.unwrap().as_str(), "https://site.example/news/abc");
//! ```

pub mod content;
pub mod error;
pub mod link;
pub mod site;
pub mod traits;
pub mod types;

pub use content::{ContentRecord, PreviewContext, Revision};
pub use error::Error;
pub use link::{LinkResolver, PreviewQuery};
pub use site::NextSite;
pub use traits::{
    EntityTypeInspector, LanguageManager, ResourceType, ResourceTypeRepository, RouteResolver,
};
pub use types::{PreviewSecret, ResourceVersion, SiteId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
