//! Preview and live link resolution.
//!
//! Preview links point at the front-end's preview endpoint and carry a
//! [`PreviewQuery`] the front-end uses to fetch the exact resource and
//! revision. Live links are plain public URLs.

mod query;
mod resolver;

pub use query::PreviewQuery;
pub use resolver::{LinkResolver, live_url};
