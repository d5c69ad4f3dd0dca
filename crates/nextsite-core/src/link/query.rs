//! Preview query parameters and their URL encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::Result;
use crate::error::InvalidInputError;
use crate::types::{PreviewSecret, ResourceVersion};

/// Everything except RFC 3986 unreserved characters and `/`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

const SECRET: &str = "secret";
const RESOURCE_IN_PREVIEW: &str = "resourceInPreview";
const RESOURCE_NAME: &str = "resourceName";
const RESOURCE_ID: &str = "resourceId";
const RESOURCE_PREVIEW_URL: &str = "resourcePreviewUrl";
const SLUG: &str = "slug";
const LOCALE: &str = "locale";
const DEFAULT_LOCALE: &str = "defaultLocale";
const RESOURCE_VERSION: &str = "resourceVersion";

/// Query parameters a front-end needs to resolve a previewed resource.
///
/// # Example
///
/// ```
/// use nextsite_core::{PreviewQuery, PreviewSecret};
/// use url::Url;
///
/// let query = PreviewQuery {
///     secret: PreviewSecret::new("s3cr3t"),
///     resource_in_preview: false,
///     resource_name: "node--article".into(),
///     resource_id: "abc-123".into(),
///     resource_preview_url: "https://cms.example/jsonapi/node/article/abc-123".into(),
///     slug: Some("/news/abc".into()),
///     locale: None,
///     default_locale: None,
///     resource_version: None,
/// };
///
/// let mut url = Url::parse("https://site.example/api/preview").unwrap();
/// query.apply_to(&mut url);
/// assert!(url.as_str().contains("slug=/news/abc"));
/// assert_eq!(PreviewQuery::from_url(&url).unwrap(), query);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewQuery {
    pub secret: PreviewSecret,
    pub resource_in_preview: bool,
    pub resource_name: String,
    pub resource_id: String,
    pub resource_preview_url: String,
    /// Canonical path; absent while previewing unsaved changes.
    pub slug: Option<String>,
    pub locale: Option<String>,
    pub default_locale: Option<String>,
    pub resource_version: Option<ResourceVersion>,
}

impl PreviewQuery {
    /// Returns the parameters as key/value pairs in emission order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (SECRET, self.secret.expose().to_string()),
            (RESOURCE_IN_PREVIEW, self.resource_in_preview.to_string()),
            (RESOURCE_NAME, self.resource_name.clone()),
            (RESOURCE_ID, self.resource_id.clone()),
            (RESOURCE_PREVIEW_URL, self.resource_preview_url.clone()),
        ];

        if let Some(slug) = &self.slug {
            pairs.push((SLUG, slug.clone()));
        }
        if let Some(locale) = &self.locale {
            pairs.push((LOCALE, locale.clone()));
        }
        if let Some(default_locale) = &self.default_locale {
            pairs.push((DEFAULT_LOCALE, default_locale.clone()));
        }
        if let Some(version) = &self.resource_version {
            pairs.push((RESOURCE_VERSION, version.to_string()));
        }

        pairs
    }

    /// Encodes the parameters as a query string (without the leading `?`).
    ///
    /// Values are percent-encoded except for unreserved characters and `/`,
    /// so paths stay readable.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Appends the parameters to `url`, after any query it already has.
    pub fn apply_to(&self, url: &mut Url) {
        let ours = self.to_query_string();
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{}&{}", existing, ours),
            _ => ours,
        };
        url.set_query(Some(&query));
    }

    /// Decodes the parameters from a preview URL.
    ///
    /// Unknown parameters are ignored; if a key repeats, the last value wins.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is missing or a value is
    /// malformed.
    pub fn from_url(url: &Url) -> Result<Self> {
        Self::from_pairs(url.query_pairs())
    }

    /// Decodes the parameters from already-decoded key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut secret = None;
        let mut resource_in_preview = None;
        let mut resource_name = None;
        let mut resource_id = None;
        let mut resource_preview_url = None;
        let mut slug = None;
        let mut locale = None;
        let mut default_locale = None;
        let mut resource_version = None;

        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                SECRET => secret = Some(PreviewSecret::new(value)),
                RESOURCE_IN_PREVIEW => resource_in_preview = Some(parse_bool(&value)?),
                RESOURCE_NAME => resource_name = Some(value),
                RESOURCE_ID => resource_id = Some(value),
                RESOURCE_PREVIEW_URL => resource_preview_url = Some(value),
                SLUG => slug = Some(value),
                LOCALE => locale = Some(value),
                DEFAULT_LOCALE => default_locale = Some(value),
                RESOURCE_VERSION => resource_version = Some(value.parse::<ResourceVersion>()?),
                _ => {}
            }
        }

        Ok(Self {
            secret: required(SECRET, secret)?,
            resource_in_preview: required(RESOURCE_IN_PREVIEW, resource_in_preview)?,
            resource_name: required(RESOURCE_NAME, resource_name)?,
            resource_id: required(RESOURCE_ID, resource_id)?,
            resource_preview_url: required(RESOURCE_PREVIEW_URL, resource_preview_url)?,
            slug,
            locale,
            default_locale,
            resource_version,
        })
    }
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_COMPONENT).to_string()
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(InvalidInputError::Query {
            reason: format!("'{}' is not a boolean: {}", RESOURCE_IN_PREVIEW, other),
        }
        .into()),
    }
}

fn required<T>(key: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        InvalidInputError::Query {
            reason: format!("missing '{}'", key),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> PreviewQuery {
        PreviewQuery {
            secret: PreviewSecret::new("s3cr3t"),
            resource_in_preview: false,
            resource_name: "node--article".to_string(),
            resource_id: "abc-123".to_string(),
            resource_preview_url: "https://cms.example/jsonapi/node/article/abc-123".to_string(),
            slug: Some("/news/abc".to_string()),
            locale: None,
            default_locale: None,
            resource_version: None,
        }
    }

    #[test]
    fn encodes_in_order_with_literal_slashes() {
        assert_eq!(
            query().to_query_string(),
            "secret=s3cr3t&resourceInPreview=false&resourceName=node--article\
             &resourceId=abc-123\
             &resourcePreviewUrl=https%3A//cms.example/jsonapi/node/article/abc-123\
             &slug=/news/abc"
        );
    }

    #[test]
    fn escapes_reserved_characters() {
        let mut q = query();
        q.secret = PreviewSecret::new("a&b=c d+e?");
        q.slug = Some("/café/a b".to_string());

        let encoded = q.to_query_string();
        assert!(encoded.starts_with("secret=a%26b%3Dc%20d%2Be%3F&"));
        assert!(encoded.ends_with("slug=/caf%C3%A9/a%20b"));

        let mut url = Url::parse("https://site.example/api/preview").unwrap();
        q.apply_to(&mut url);
        assert_eq!(PreviewQuery::from_url(&url).unwrap(), q);
    }

    #[test]
    fn roundtrip_with_all_optional_parameters() {
        let mut q = query();
        q.resource_in_preview = true;
        q.slug = None;
        q.locale = Some("fr".to_string());
        q.default_locale = Some("en".to_string());
        q.resource_version = Some(ResourceVersion::Id(42));

        let mut url = Url::parse("https://site.example/api/preview").unwrap();
        q.apply_to(&mut url);
        assert_eq!(PreviewQuery::from_url(&url).unwrap(), q);
    }

    #[test]
    fn keeps_existing_query() {
        let mut url = Url::parse("https://site.example/api/preview?site=blog").unwrap();
        query().apply_to(&mut url);

        assert!(url.query().unwrap().starts_with("site=blog&secret=s3cr3t&"));
        assert_eq!(PreviewQuery::from_url(&url).unwrap(), query());
    }

    #[test]
    fn missing_required_parameter() {
        let url = Url::parse("https://site.example/api/preview?secret=x&resourceInPreview=false")
            .unwrap();
        let err = PreviewQuery::from_url(&url).unwrap_err();
        assert!(err.to_string().contains("resourceName"));
    }

    #[test]
    fn rejects_bad_boolean() {
        let pairs = [
            ("secret", "x"),
            ("resourceInPreview", "maybe"),
            ("resourceName", "node--page"),
            ("resourceId", "1"),
            ("resourcePreviewUrl", "https://cms.example"),
        ];
        assert!(PreviewQuery::from_pairs(pairs).is_err());
    }

    #[test]
    fn accepts_numeric_booleans() {
        let pairs = [
            ("secret", "x"),
            ("resourceInPreview", "1"),
            ("resourceName", "node--page"),
            ("resourceId", "1"),
            ("resourcePreviewUrl", "https://cms.example"),
        ];
        assert!(PreviewQuery::from_pairs(pairs).unwrap().resource_in_preview);
    }
}
