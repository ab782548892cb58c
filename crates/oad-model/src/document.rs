//! Document root and the metadata objects hanging off it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::components::Components;
use crate::error::LoadResult;
use crate::path::{PathItem, PathKey};
use crate::security::SecurityRequirement;

/// An OpenAPI 3.x document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The OpenAPI specification version, e.g. `3.1.0`.
    pub openapi: String,
    pub info: Info,
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Paths in document order.
    #[serde(default)]
    pub paths: IndexMap<PathKey, PathItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    #[serde(default)]
    pub security: Vec<SecurityRequirement>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
}

impl Document {
    /// Parse a document from JSON text.
    pub fn from_json_str(text: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a document from YAML text.
    pub fn from_yaml_str(text: &str) -> LoadResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// The version of the described API (not of OpenAPI itself).
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information.
///
/// OpenAPI 3.1 allows either an SPDX `identifier` or a `url`, never both.
/// Use [`License::identifier_kind`] to see which one is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

impl License {
    /// The license identifier in whichever of its two shapes is present.
    ///
    /// An SPDX identifier wins if a malformed document carries both.
    pub fn identifier_kind(&self) -> Option<LicenseIdentifier> {
        match (&self.identifier, &self.url) {
            (Some(spdx), _) => Some(LicenseIdentifier::Spdx(spdx.clone())),
            (None, Some(url)) => Some(LicenseIdentifier::Url(url.clone())),
            (None, None) => None,
        }
    }
}

/// The two shapes a license identifier can take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LicenseIdentifier {
    Spdx(String),
    Url(Url),
}

/// A server the API is reachable at.
///
/// `url` is a URL template (`https://{region}.example.com`) and is kept as
/// text since templates are not valid URLs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: IndexMap<String, ServerVariable>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    #[serde(rename = "enum", default)]
    pub allowed: Vec<String>,
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: Url,
}
