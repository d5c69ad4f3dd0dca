//! JSON-described host registry.
//!
//! Stands in for a running CMS: a single document lists the content API
//! resource types, the CMS base URL used to build preview routes, the
//! default language and the revisionable entity types.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use nextsite_core::error::{InvalidInputError, LookupError, StorageError};
use nextsite_core::{
    ContentRecord, EntityTypeInspector, LanguageManager, ResourceType, ResourceTypeRepository,
    Result, RouteResolver,
};

/// A resource type entry in the registry document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryResourceType {
    pub entity_type_id: String,
    pub bundle: String,
    /// Defaults to `<entity_type_id>--<bundle>`.
    #[serde(default)]
    pub type_name: Option<String>,
}

/// Host capabilities backed by a JSON document.
///
/// ```json
/// {
///   "cms_base_url": "https://cms.example",
///   "default_langcode": "en",
///   "revisionable_entity_types": ["node"],
///   "resource_types": [{ "entity_type_id": "node", "bundle": "article" }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRegistry {
    cms_base_url: String,
    #[serde(default = "default_langcode")]
    default_langcode: String,
    #[serde(default)]
    revisionable_entity_types: HashSet<String>,
    #[serde(default)]
    resource_types: Vec<RegistryResourceType>,
}

fn default_langcode() -> String {
    "en".to_string()
}

impl FileRegistry {
    /// Create an empty registry for a CMS.
    pub fn new(cms_base_url: impl Into<String>) -> Self {
        Self {
            cms_base_url: cms_base_url.into(),
            default_langcode: default_langcode(),
            revisionable_entity_types: HashSet::new(),
            resource_types: Vec::new(),
        }
    }

    /// Read a registry document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let registry: Self = serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(
            path = %path.display(),
            resource_types = registry.resource_types.len(),
            "Loaded registry"
        );

        Ok(registry)
    }

    pub fn with_default_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.default_langcode = langcode.into();
        self
    }

    pub fn with_revisionable(mut self, entity_type_id: impl Into<String>) -> Self {
        self.revisionable_entity_types.insert(entity_type_id.into());
        self
    }

    pub fn with_resource_type(mut self, resource_type: RegistryResourceType) -> Self {
        self.resource_types.push(resource_type);
        self
    }

    pub fn cms_base_url(&self) -> &str {
        &self.cms_base_url
    }
}

impl ResourceTypeRepository for FileRegistry {
    fn get(&self, entity_type_id: &str, bundle: &str) -> Result<ResourceType> {
        let entry = self
            .resource_types
            .iter()
            .find(|r| r.entity_type_id == entity_type_id && r.bundle == bundle)
            .ok_or_else(|| LookupError::ResourceTypeNotFound {
                entity_type_id: entity_type_id.to_string(),
                bundle: bundle.to_string(),
            })?;

        let mut resource_type = ResourceType::new(&entry.entity_type_id, &entry.bundle);
        if let Some(type_name) = &entry.type_name {
            resource_type.type_name = type_name.clone();
        }
        Ok(resource_type)
    }
}

impl RouteResolver for FileRegistry {
    fn individual_preview_url(&self, resource_type: &ResourceType, uuid: &str) -> Result<String> {
        let base = url::Url::parse(&self.cms_base_url).map_err(|e| LookupError::RouteNotFound {
            route: resource_type.preview_route_name(),
            reason: format!("invalid CMS base URL '{}': {}", self.cms_base_url, e),
        })?;

        if base.cannot_be_a_base() {
            return Err(InvalidInputError::Url {
                value: self.cms_base_url.clone(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        Ok(format!(
            "{}/jsonapi/{}/{}/{}",
            self.cms_base_url.trim_end_matches('/'),
            resource_type.entity_type_id,
            resource_type.bundle,
            uuid
        ))
    }
}

impl LanguageManager for FileRegistry {
    fn default_langcode(&self) -> String {
        self.default_langcode.clone()
    }
}

impl EntityTypeInspector for FileRegistry {
    fn is_revisionable(&self, record: &ContentRecord) -> bool {
        self.revisionable_entity_types.contains(&record.entity_type_id)
    }
}
