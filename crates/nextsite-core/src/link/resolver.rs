//! Link resolver.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};
use url::Url;

use super::PreviewQuery;
use crate::Result;
use crate::content::{ContentRecord, PreviewContext, Revision};
use crate::error::{ConfigError, InvalidInputError, LookupError};
use crate::site::NextSite;
use crate::traits::{EntityTypeInspector, LanguageManager, ResourceTypeRepository, RouteResolver};
use crate::types::ResourceVersion;

/// Builds preview and live links for content records.
///
/// The resolver holds the host CMS capabilities it consults; it keeps no
/// other state, so a single instance can serve concurrent callers.
#[derive(Clone)]
pub struct LinkResolver {
    resource_types: Arc<dyn ResourceTypeRepository>,
    routes: Arc<dyn RouteResolver>,
    languages: Arc<dyn LanguageManager>,
    entity_types: Arc<dyn EntityTypeInspector>,
}

impl LinkResolver {
    /// Create a resolver from individual capabilities.
    pub fn new(
        resource_types: Arc<dyn ResourceTypeRepository>,
        routes: Arc<dyn RouteResolver>,
        languages: Arc<dyn LanguageManager>,
        entity_types: Arc<dyn EntityTypeInspector>,
    ) -> Self {
        Self {
            resource_types,
            routes,
            languages,
            entity_types,
        }
    }

    /// Create a resolver from a single host that provides every capability.
    pub fn from_host<H>(host: Arc<H>) -> Self
    where
        H: ResourceTypeRepository
            + RouteResolver
            + LanguageManager
            + EntityTypeInspector
            + 'static,
    {
        Self {
            resource_types: host.clone(),
            routes: host.clone(),
            languages: host.clone(),
            entity_types: host,
        }
    }

    /// Computes the preview query for a record.
    ///
    /// # Errors
    ///
    /// Fails if the site has no preview secret or preview URL, or if a host
    /// lookup fails. Lookup failures are returned unchanged.
    #[instrument(skip_all, fields(site = %site.id(), uuid = %record.uuid))]
    pub fn preview_query(
        &self,
        site: &NextSite,
        record: &ContentRecord,
        context: PreviewContext,
    ) -> Result<PreviewQuery> {
        let secret = site
            .preview_secret()
            .filter(|secret| !secret.is_blank())
            .ok_or_else(|| ConfigError::MissingPreviewSecret {
                site: site.id().to_string(),
            })?;

        let is_preview = context.is_preview();

        let resource_type = self
            .resource_types
            .get(&record.entity_type_id, &record.bundle)?;
        let resource_preview_url = self
            .routes
            .individual_preview_url(&resource_type, &record.uuid)?;

        // An unsaved preview has no canonical path; the front-end must
        // resolve it by resource type and id instead.
        let slug = (!is_preview).then(|| record.path.clone());

        let (locale, default_locale) = match &record.langcode {
            Some(langcode) => (
                Some(langcode.clone()),
                Some(self.languages.default_langcode()),
            ),
            None => (None, None),
        };

        let resource_version = if self.entity_types.is_revisionable(record) {
            let revision = record
                .revision
                .as_ref()
                .ok_or_else(|| LookupError::MissingRevision {
                    uuid: record.uuid.clone(),
                })?;
            Some(resource_version(revision))
        } else {
            None
        };

        Ok(PreviewQuery {
            secret: secret.clone(),
            resource_in_preview: is_preview,
            resource_name: resource_type.type_name,
            resource_id: record.uuid.clone(),
            resource_preview_url,
            slug,
            locale,
            default_locale,
            resource_version,
        })
    }

    /// Builds the signed preview URL for a record.
    ///
    /// # Errors
    ///
    /// See [`preview_query`](Self::preview_query). Also fails if the site's
    /// preview URL cannot be parsed.
    pub fn preview_url(
        &self,
        site: &NextSite,
        record: &ContentRecord,
        context: PreviewContext,
    ) -> Result<Url> {
        let preview_url = site
            .preview_url()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingPreviewUrl {
                site: site.id().to_string(),
            })?;
        let mut url = parse_url(preview_url)?;

        let query = self.preview_query(site, record, context)?;
        query.apply_to(&mut url);

        debug!(
            site = %site.id(),
            resource = %query.resource_name,
            in_preview = query.resource_in_preview,
            "Resolved preview link"
        );

        Ok(url)
    }

    /// Builds the public URL for a record. See [`live_url`].
    pub fn live_url(
        &self,
        site: &NextSite,
        record: &ContentRecord,
        context: PreviewContext,
    ) -> Result<Option<Url>> {
        live_url(site, record, context)
    }
}

impl fmt::Debug for LinkResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkResolver").finish_non_exhaustive()
    }
}

/// Builds the public URL for a record: the site's base URL followed by the
/// record's canonical path.
///
/// Returns `Ok(None)` when there is no public URL: the record is unpublished,
/// or it is being previewed before it is saved.
///
/// # Errors
///
/// Fails if the site has no base URL or the result is not a valid URL.
///
/// The result is the parsed, normalized form of the concatenation: the
/// host is lowercased, a default port is dropped and an empty path
/// becomes `/`.
#[instrument(skip_all, fields(site = %site.id(), uuid = %record.uuid))]
pub fn live_url(
    site: &NextSite,
    record: &ContentRecord,
    context: PreviewContext,
) -> Result<Option<Url>> {
    if !record.is_publicly_visible() || context.is_preview() {
        debug!("No live link for unpublished or previewed record");
        return Ok(None);
    }

    let base_url = site
        .base_url()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingBaseUrl {
            site: site.id().to_string(),
        })?;

    parse_url(&format!("{}{}", base_url, record.path)).map(Some)
}

/// Default revision status wins over latest revision status.
fn resource_version(revision: &Revision) -> ResourceVersion {
    let mut rel = None;

    // The latest revision is the working copy: new work is applied to it.
    if revision.is_latest {
        rel = Some(ResourceVersion::WorkingCopy);
    }

    // The latest default revision is the latest version: the last revision
    // where work was considered finished.
    if revision.is_default {
        rel = Some(ResourceVersion::LatestVersion);
    }

    rel.unwrap_or(ResourceVersion::Id(revision.id))
}

fn parse_url(s: &str) -> Result<Url> {
    Url::parse(s).map_err(|e| {
        InvalidInputError::Url {
            value: s.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
