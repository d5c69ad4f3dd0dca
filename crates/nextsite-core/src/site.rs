//! Next.js site configuration record.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::Result;
use crate::error::InvalidInputError;
use crate::types::{PreviewSecret, SiteId};

/// Connection settings for one external Next.js front-end.
///
/// The base URL is used to build live links, the preview URL and secret to
/// build preview links. Neither URL is validated here; they are parsed only
/// when a link is built.
///
/// Serialized form is the exported configuration:
/// `id`, `uuid`, `label`, `base_url`, `preview_url`, `preview_secret`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextSite {
    id: SiteId,
    uuid: Uuid,
    label: String,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    preview_secret: Option<PreviewSecret>,
}

impl NextSite {
    /// Create a site with a fresh uuid and no connection settings.
    pub fn new(id: SiteId, label: impl Into<String>) -> Self {
        Self {
            id,
            uuid: Uuid::new_v4(),
            label: label.into(),
            base_url: None,
            preview_url: None,
            preview_secret: None,
        }
    }

    pub fn id(&self) -> &SiteId {
        &self.id
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    /// Returns the public front-end URL prefix.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Returns the front-end preview endpoint.
    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn set_preview_url(&mut self, preview_url: impl Into<String>) -> &mut Self {
        self.preview_url = Some(preview_url.into());
        self
    }

    pub fn preview_secret(&self) -> Option<&PreviewSecret> {
        self.preview_secret.as_ref()
    }

    pub fn set_preview_secret(&mut self, preview_secret: impl Into<String>) -> &mut Self {
        self.preview_secret = Some(PreviewSecret::new(preview_secret));
        self
    }

    /// Environment variables the Next.js front-end needs to talk to the CMS.
    ///
    /// Returned in display order. `DRUPAL_PREVIEW_SECRET` is only included
    /// when the site has a secret.
    ///
    /// # Errors
    ///
    /// Returns an error if `cms_base_url` is not an absolute URL with a host.
    pub fn environment_variables(&self, cms_base_url: &str) -> Result<Vec<(String, String)>> {
        let parsed = Url::parse(cms_base_url).map_err(|e| InvalidInputError::Url {
            value: cms_base_url.to_string(),
            reason: e.to_string(),
        })?;
        let host = parsed.host_str().ok_or_else(|| InvalidInputError::Url {
            value: cms_base_url.to_string(),
            reason: "must have a host".to_string(),
        })?;

        let mut vars = vec![
            (
                "NEXT_PUBLIC_DRUPAL_BASE_URL".to_string(),
                cms_base_url.trim_end_matches('/').to_string(),
            ),
            ("NEXT_IMAGE_DOMAIN".to_string(), host.to_string()),
            ("DRUPAL_SITE_ID".to_string(), self.id.to_string()),
        ];

        if let Some(secret) = &self.preview_secret {
            vars.push((
                "DRUPAL_PREVIEW_SECRET".to_string(),
                secret.expose().to_string(),
            ));
        }

        Ok(vars)
    }
}
