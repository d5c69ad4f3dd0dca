//! Resource type lookup.

use serde::{Deserialize, Serialize};

use crate::Result;

/// An (entity type, bundle) pair as exposed by the CMS content API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceType {
    /// Entity type id, e.g. `node`.
    pub entity_type_id: String,
    /// Bundle, e.g. `article`.
    pub bundle: String,
    /// External type name, e.g. `node--article`.
    pub type_name: String,
}

impl ResourceType {
    /// Create a resource type with the conventional `<type>--<bundle>` name.
    pub fn new(entity_type_id: impl Into<String>, bundle: impl Into<String>) -> Self {
        let entity_type_id = entity_type_id.into();
        let bundle = bundle.into();
        let type_name = format!("{}--{}", entity_type_id, bundle);
        Self {
            entity_type_id,
            bundle,
            type_name,
        }
    }

    /// Name of the individual preview route for this resource type.
    pub fn preview_route_name(&self) -> String {
        format!("jsonapi.{}.individual.preview", self.type_name)
    }
}

/// Resolves the resource type of an entity type and bundle.
pub trait ResourceTypeRepository: Send + Sync {
    /// Look up a resource type.
    ///
    /// # Errors
    ///
    /// Fails with [`LookupError::ResourceTypeNotFound`](crate::error::LookupError)
    /// if the pair is not registered.
    fn get(&self, entity_type_id: &str, bundle: &str) -> Result<ResourceType>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_type_name() {
        let resource_type = ResourceType::new("node", "article");
        assert_eq!(resource_type.type_name, "node--article");
        assert_eq!(
            resource_type.preview_route_name(),
            "jsonapi.node--article.individual.preview"
        );
    }
}
