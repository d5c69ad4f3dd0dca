//! Host CMS capabilities consumed by the link resolver.
//!
//! Each capability is a synchronous lookup that may fail. Implementations
//! are injected into [`LinkResolver`](crate::LinkResolver).

mod entity_type;
mod language;
mod resource_type;
mod route;

pub use entity_type::EntityTypeInspector;
pub use language::LanguageManager;
pub use resource_type::{ResourceType, ResourceTypeRepository};
pub use route::RouteResolver;
