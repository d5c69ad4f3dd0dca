//! Command implementations.

pub mod link;
pub mod site;
