//! nextsite-file - Filesystem-backed site storage and host registry.

mod registry;
mod storage;

pub use registry::{FileRegistry, RegistryResourceType};
pub use storage::{FileSiteStorage, StoredSite};
