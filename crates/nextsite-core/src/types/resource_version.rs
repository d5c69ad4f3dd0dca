//! Resource version hint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Tells the front-end which revision of a resource to fetch.
///
/// Textual forms are `rel:working-copy`, `rel:latest-version` and
/// `id:<revision id>`.
///
/// # Example
///
/// ```
/// use nextsite_core::ResourceVersion;
///
/// assert_eq!(ResourceVersion::LatestVersion.to_string(), "rel:latest-version");
/// assert_eq!("id:42".parse::<ResourceVersion>().unwrap(), ResourceVersion::Id(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResourceVersion {
    /// The latest revision, whether or not it is published.
    WorkingCopy,
    /// The latest default (usually published) revision.
    LatestVersion,
    /// A specific revision.
    Id(u64),
}

impl fmt::Display for ResourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceVersion::WorkingCopy => write!(f, "rel:working-copy"),
            ResourceVersion::LatestVersion => write!(f, "rel:latest-version"),
            ResourceVersion::Id(id) => write!(f, "id:{}", id),
        }
    }
}

impl FromStr for ResourceVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::ResourceVersion {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        match s.split_once(':') {
            Some(("rel", "working-copy")) => Ok(ResourceVersion::WorkingCopy),
            Some(("rel", "latest-version")) => Ok(ResourceVersion::LatestVersion),
            Some(("rel", _)) => Err(invalid("unknown relation")),
            Some(("id", id)) => id
                .parse()
                .map(ResourceVersion::Id)
                .map_err(|_| invalid("revision id must be a non-negative integer")),
            _ => Err(invalid("must start with 'rel:' or 'id:'")),
        }
    }
}

impl TryFrom<String> for ResourceVersion {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ResourceVersion> for String {
    fn from(version: ResourceVersion) -> Self {
        version.to_string()
    }
}
