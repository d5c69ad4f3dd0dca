//! Content records as seen by the link resolver.
//!
//! Records are owned by the host CMS; this module only describes the
//! identity and state the resolver reads from them.

mod record;

pub use record::{ContentRecord, PreviewContext, Revision};
