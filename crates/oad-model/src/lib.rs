//! Typed OpenAPI document model for openapi-diff.
//!
//! The diff engine never sees raw YAML or JSON. This crate parses both into
//! strongly-typed trees of identical static shape, which `oad-diff` then
//! compares field by field.
//!
//! # Key Types
//!
//! - [`Document`] -- The root of an OpenAPI 3.x document
//! - [`PathItem`] / [`Operation`] / [`Parameter`] -- The endpoint surface
//! - [`Schema`] -- An opaque JSON Schema body, compared as text
//! - [`Referenceable`] -- Either a `$ref` or an inline value
//! - [`LoadError`] -- Failure to read or parse a document

pub mod components;
pub mod document;
pub mod error;
pub mod load;
pub mod path;
pub mod reference;
pub mod schema;
pub mod security;

pub use components::Components;
pub use document::{
    Contact, Document, ExternalDocs, Info, License, LicenseIdentifier, Server, ServerVariable, Tag,
};
pub use error::{LoadError, LoadResult};
pub use load::load_document;
pub use path::{
    ContentType, MediaType, Operation, Parameter, ParameterLocation, PathItem, PathKey,
    RequestBody, Response, StatusCode,
};
pub use reference::{Reference, Referenceable};
pub use schema::Schema;
pub use security::{
    ApiKeyLocation, OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme,
    SecuritySchemeKind,
};
