//! Comparators for the OpenAPI document model.
//!
//! Each entity declares the ordered list of fields it compares and the
//! label each field is reported under. A field missing from a list never
//! produces a difference; the doc comment on each comparator names the
//! fields that are deliberately skipped.

use oad_model::{
    Components, Contact, ContentType, Document, ExternalDocs, Info, License, LicenseIdentifier,
    MediaType, OAuthFlow, OAuthFlows, Operation, Parameter, ParameterLocation, PathItem, PathKey,
    RequestBody, Response, Schema, SecurityScheme, SecuritySchemeKind, Server, ServerVariable,
    StatusCode, Tag,
};
use tracing::debug;

use crate::compare::{compare_identified, compare_text, ApiComparable};
use crate::context::{ApiContext, Identifiable};
use crate::line_diff::diff_text;
use crate::node::DiffNode;

/// Context label under which schema bodies are reported.
pub const SCHEMA_LABEL: &str = "schema";

/// Compare two documents. The root node is labelled with the "before"
/// document's title.
pub fn diff_documents(before: &Document, after: &Document) -> DiffNode {
    debug!(
        before = %before.info.title,
        after = %after.info.title,
        "comparing documents"
    );
    before.compare(after, None)
}

// ---------------------------------------------------------------
// Document and metadata
// ---------------------------------------------------------------

impl ApiComparable for Document {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        let context = context
            .map(str::to_owned)
            .unwrap_or_else(|| self.api_context());
        DiffNode::build(
            Some(&context),
            [
                self.openapi.compare(&other.openapi, Some("OpenAPI Spec Version")),
                self.info.compare(&other.info, Some("info")),
                self.servers.compare(&other.servers, Some("servers")),
                self.paths.compare(&other.paths, Some("paths")),
                self.components.compare(&other.components, Some("components")),
                self.security.compare(&other.security, Some("security")),
                compare_identified(&self.tags, &other.tags, Some("tags")),
                self.external_docs.compare(&other.external_docs, Some("external docs")),
            ],
        )
    }
}

impl ApiContext for Document {
    fn api_context(&self) -> String {
        self.info.title.clone()
    }
}

impl ApiComparable for Info {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.title.compare(&other.title, Some("title")),
                self.description.compare(&other.description, Some("description")),
                self.terms_of_service
                    .compare(&other.terms_of_service, Some("terms of service")),
                self.contact.compare(&other.contact, Some("contact info")),
                self.license.compare(&other.license, Some("license")),
                self.version.compare(&other.version, Some("API version")),
            ],
        )
    }
}

impl ApiComparable for Contact {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.name.compare(&other.name, Some("name")),
                self.url.compare(&other.url, Some("URL")),
                self.email.compare(&other.email, Some("email")),
            ],
        )
    }
}

impl ApiComparable for License {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.name.compare(&other.name, Some("name")),
                self.identifier_kind()
                    .compare(&other.identifier_kind(), Some("identifier")),
            ],
        )
    }
}

impl ApiComparable for LicenseIdentifier {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        match (self, other) {
            (Self::Spdx(before), Self::Spdx(after)) => before.compare(after, context),
            (Self::Url(before), Self::Url(after)) => before.compare(after, context),
            (Self::Spdx(id), Self::Url(url)) => DiffNode::updated(
                context,
                format!("the identifier {id}"),
                format!("the url {url}"),
            ),
            (Self::Url(url), Self::Spdx(id)) => DiffNode::updated(
                context,
                format!("the url {url}"),
                format!("the identifier {id}"),
            ),
        }
    }
}

impl ApiComparable for ExternalDocs {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.description.compare(&other.description, Some("description")),
                self.url.compare(&other.url, Some("URL")),
            ],
        )
    }
}

impl ApiComparable for Server {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.url.compare(&other.url, Some("URL")),
                self.description.compare(&other.description, Some("description")),
                self.variables.compare(&other.variables, Some("variables")),
            ],
        )
    }
}

impl ApiContext for Server {
    fn api_context(&self) -> String {
        self.url.clone()
    }
}

impl ApiComparable for ServerVariable {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.allowed.compare(&other.allowed, Some("enum")),
                self.default.compare(&other.default, Some("default")),
                self.description.compare(&other.description, Some("description")),
            ],
        )
    }
}

impl ApiComparable for Tag {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.name.compare(&other.name, Some("name")),
                self.description.compare(&other.description, Some("description")),
                self.external_docs.compare(&other.external_docs, Some("external docs")),
            ],
        )
    }
}

impl ApiContext for Tag {
    fn api_context(&self) -> String {
        self.name.clone()
    }
}

impl Identifiable for Tag {
    fn identity(&self) -> String {
        self.name.clone()
    }
}

// ---------------------------------------------------------------
// Paths and operations
// ---------------------------------------------------------------

impl ApiContext for PathKey {
    fn api_context(&self) -> String {
        format!("**{}**", self.as_str())
    }
}

impl ApiComparable for PathItem {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.summary.compare(&other.summary, Some("summary")),
                self.description.compare(&other.description, Some("description")),
                self.servers.compare(&other.servers, Some("servers")),
                compare_identified(&self.parameters, &other.parameters, Some("parameters")),
                self.get.compare(&other.get, Some("GET endpoint")),
                self.put.compare(&other.put, Some("PUT endpoint")),
                self.post.compare(&other.post, Some("POST endpoint")),
                self.delete.compare(&other.delete, Some("DELETE endpoint")),
                self.options.compare(&other.options, Some("OPTIONS endpoint")),
                self.head.compare(&other.head, Some("HEAD endpoint")),
                self.patch.compare(&other.patch, Some("PATCH endpoint")),
                self.trace.compare(&other.trace, Some("TRACE endpoint")),
            ],
        )
    }
}

impl ApiComparable for Operation {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.tags.compare(&other.tags, Some("tags")),
                self.summary.compare(&other.summary, Some("summary")),
                self.description.compare(&other.description, Some("description")),
                self.external_docs.compare(&other.external_docs, Some("external docs")),
                self.operation_id.compare(&other.operation_id, Some("operation ID")),
                compare_identified(&self.parameters, &other.parameters, Some("parameters")),
                self.request_body.compare(&other.request_body, Some("request body")),
                self.responses.compare(&other.responses, Some("responses")),
                self.deprecated.compare(&other.deprecated, Some("deprecated")),
                self.security.compare(&other.security, Some("security")),
                self.servers.compare(&other.servers, Some("servers")),
            ],
        )
    }
}

/// Parameters are matched by name. `style` is not compared.
impl ApiComparable for Parameter {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.name.compare(&other.name, Some("name")),
                self.required.compare(&other.required, Some("required")),
                self.location.compare(&other.location, Some("parameter location")),
                self.description.compare(&other.description, Some("description")),
                self.deprecated.compare(&other.deprecated, Some("deprecated")),
                self.explode.compare(&other.explode, Some("explode")),
                self.allow_reserved
                    .compare(&other.allow_reserved, Some("allow reserved")),
                self.schema.compare(&other.schema, Some(SCHEMA_LABEL)),
                self.content.compare(&other.content, Some("content")),
            ],
        )
    }
}

impl ApiContext for Parameter {
    fn api_context(&self) -> String {
        if self.required {
            format!("_required_ `{}`", self.name)
        } else {
            format!("`{}`", self.name)
        }
    }
}

impl Identifiable for Parameter {
    fn identity(&self) -> String {
        self.name.clone()
    }
}

impl ApiComparable for ParameterLocation {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        compare_text(self.as_str(), other.as_str(), context)
    }
}

impl ApiComparable for RequestBody {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.description.compare(&other.description, Some("description")),
                self.content.compare(&other.content, Some("content")),
                self.required.compare(&other.required, Some("required")),
            ],
        )
    }
}

impl ApiContext for RequestBody {
    fn api_context(&self) -> String {
        self.description.clone().unwrap_or_default()
    }
}

/// Response headers and links are not compared.
impl ApiComparable for Response {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.description.compare(&other.description, Some("description")),
                self.content.compare(&other.content, Some("content")),
            ],
        )
    }
}

impl ApiContext for Response {
    fn api_context(&self) -> String {
        self.description.clone()
    }
}

impl ApiContext for StatusCode {
    fn api_context(&self) -> String {
        format!("status code {}", self.as_str())
    }
}

impl ApiContext for ContentType {
    fn api_context(&self) -> String {
        self.as_str().to_string()
    }
}

/// Only the schema is compared; examples and encodings are not retained.
impl ApiComparable for MediaType {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [self.schema.compare(&other.schema, Some(SCHEMA_LABEL))],
        )
    }
}

/// Schemas are diffed as canonical YAML text, line by line.
impl ApiComparable for Schema {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        if self == other {
            return DiffNode::same(context);
        }
        diff_text(&self.to_canonical_yaml(), &other.to_canonical_yaml(), context)
    }
}

impl ApiContext for Schema {
    fn api_context(&self) -> String {
        self.to_canonical_yaml()
    }
}

// ---------------------------------------------------------------
// Components and security
// ---------------------------------------------------------------

impl ApiComparable for Components {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.schemas.compare(&other.schemas, Some("schemas")),
                self.responses.compare(&other.responses, Some("responses")),
                self.parameters.compare(&other.parameters, Some("parameters")),
                self.request_bodies
                    .compare(&other.request_bodies, Some("request bodies")),
                self.security_schemes
                    .compare(&other.security_schemes, Some("security schemes")),
            ],
        )
    }
}

impl ApiComparable for SecurityScheme {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.kind.compare(&other.kind, Some("details")),
                self.description.compare(&other.description, Some("description")),
            ],
        )
    }
}

impl ApiContext for SecurityScheme {
    fn api_context(&self) -> String {
        self.kind.type_name().to_string()
    }
}

/// Schemes of different types are reported as a type change only.
impl ApiComparable for SecuritySchemeKind {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        use SecuritySchemeKind::*;

        match (self, other) {
            (
                ApiKey { name: n1, location: l1 },
                ApiKey { name: n2, location: l2 },
            ) => DiffNode::build(
                context,
                [
                    n1.compare(n2, Some("name")),
                    compare_text(l1.as_str(), l2.as_str(), Some("location")),
                ],
            ),
            (
                Http { scheme: s1, bearer_format: b1 },
                Http { scheme: s2, bearer_format: b2 },
            ) => DiffNode::build(
                context,
                [
                    s1.compare(s2, Some("scheme")),
                    b1.compare(b2, Some("bearer format")),
                ],
            ),
            (OAuth2 { flows: f1 }, OAuth2 { flows: f2 }) => {
                DiffNode::build(context, [f1.compare(f2, Some("oauth2 flows"))])
            }
            (
                OpenIdConnect { open_id_connect_url: u1 },
                OpenIdConnect { open_id_connect_url: u2 },
            ) => DiffNode::build(context, [u1.compare(u2, Some("OpenID Connect URL"))]),
            (MutualTls, MutualTls) => DiffNode::same(context),
            (before, after) => DiffNode::updated(context, before.type_name(), after.type_name()),
        }
    }
}

impl ApiComparable for OAuthFlows {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.implicit.compare(&other.implicit, Some("implicit")),
                self.password.compare(&other.password, Some("password")),
                self.client_credentials
                    .compare(&other.client_credentials, Some("client credentials")),
                self.authorization_code
                    .compare(&other.authorization_code, Some("authorization code")),
            ],
        )
    }
}

impl ApiComparable for OAuthFlow {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.authorization_url
                    .compare(&other.authorization_url, Some("authorization URL")),
                self.token_url.compare(&other.token_url, Some("token URL")),
                self.refresh_url.compare(&other.refresh_url, Some("refresh URL")),
                self.scopes.compare(&other.scopes, Some("scopes")),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::DiffKind;
    use oad_model::{Reference, Referenceable};
    use serde_json::json;

    const PETSTORE: &str = r#"
openapi: 3.1.0
info:
  title: Pet Store
  version: 1.0.0
  license:
    name: MIT
    identifier: MIT
servers:
  - url: https://api.example.com
tags:
  - name: pets
paths:
  /pets:
    get:
      operationId: listPets
      parameters:
        - name: limit
          in: query
          schema:
            type: integer
      responses:
        200:
          description: A list of pets
          content:
            application/json:
              schema:
                type: array
                items:
                  $ref: '#/components/schemas/Pet'
components:
  schemas:
    Pet:
      type: object
      properties:
        id: { type: integer }
        name: { type: string }
"#;

    fn petstore() -> Document {
        Document::from_yaml_str(PETSTORE).unwrap()
    }

    fn child<'a>(node: &'a DiffNode, context: &str) -> &'a DiffNode {
        node.children()
            .iter()
            .find(|c| c.context() == Some(context))
            .unwrap_or_else(|| panic!("no child {context:?} in {node:?}"))
    }

    fn differences(node: &DiffNode) -> Vec<&DiffNode> {
        node.children().iter().filter(|c| !c.is_same()).collect()
    }

    #[test]
    fn identical_documents_are_same() {
        let diff = diff_documents(&petstore(), &petstore());
        assert_eq!(diff, DiffNode::same(Some("Pet Store")));
    }

    #[test]
    fn explicit_context_overrides_title() {
        let diff = petstore().compare(&petstore(), Some("Document"));
        assert_eq!(diff.context(), Some("Document"));
    }

    #[test]
    fn version_bump() {
        let before = petstore();
        let mut after = petstore();
        after.info.version = "1.1.0".into();

        let diff = diff_documents(&before, &after);
        let info = child(&diff, "info");
        assert_eq!(
            differences(info),
            vec![&DiffNode::updated(Some("API version"), "1.0.0", "1.1.0")]
        );
    }

    #[test]
    fn added_operation() {
        let before = petstore();
        let mut after = petstore();
        after
            .paths
            .get_mut(&PathKey::from("/pets"))
            .unwrap()
            .post = Some(Operation::default());

        let diff = diff_documents(&before, &after);
        let path = child(child(&diff, "paths"), "**/pets**");
        assert_eq!(differences(path), vec![&DiffNode::added(Some("POST endpoint"))]);
    }

    #[test]
    fn removed_path() {
        let before = petstore();
        let mut after = petstore();
        after.paths.clear();

        let diff = diff_documents(&before, &after);
        assert_eq!(
            child(&diff, "paths").children(),
            &[DiffNode::removed(Some("**/pets**"))]
        );
    }

    #[test]
    fn parameter_inserted_at_head_does_not_cascade() {
        let before = petstore();
        let mut after = petstore();
        let op = after
            .paths
            .get_mut(&PathKey::from("/pets"))
            .unwrap()
            .get
            .as_mut()
            .unwrap();
        op.parameters.insert(
            0,
            Referenceable::Reference(Reference::new("#/components/parameters/Offset")),
        );

        let diff = diff_documents(&before, &after);
        let get = child(child(child(&diff, "paths"), "**/pets**"), "GET endpoint");
        let params = child(get, "parameters");
        assert_eq!(
            differences(params),
            vec![&DiffNode::added(Some("#/components/parameters/Offset"))]
        );
    }

    #[test]
    fn schema_change_is_a_line_diff() {
        let before = petstore();
        let mut after = petstore();
        let components = after.components.as_mut().unwrap();
        components.schemas.insert(
            "Pet".into(),
            Schema::new(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" },
                    "tag": { "type": "string" }
                }
            })),
        );

        let diff = diff_documents(&before, &after);
        let pet = child(child(child(&diff, "components"), "schemas"), "Pet");
        match &pet.kind {
            DiffKind::UpdatedLines(patch) => {
                assert!(patch.contains("+   tag:"), "patch was {patch}");
                assert!(!patch.lines().any(|l| l.starts_with("- ")));
            }
            other => panic!("expected UpdatedLines, got {other:?}"),
        }
    }

    #[test]
    fn license_shape_change() {
        let before = petstore();
        let mut after = petstore();
        let license = after.info.license.as_mut().unwrap();
        license.identifier = None;
        license.url = Some("https://opensource.org/licenses/MIT".parse().unwrap());

        let diff = diff_documents(&before, &after);
        let license = child(child(&diff, "info"), "license");
        assert_eq!(
            differences(license),
            vec![&DiffNode::updated(
                Some("identifier"),
                "the identifier MIT",
                "the url https://opensource.org/licenses/MIT"
            )]
        );
    }

    #[test]
    fn tags_are_matched_by_name() {
        let before = petstore();
        let mut after = petstore();
        after.tags.insert(
            0,
            Tag {
                name: "stores".into(),
                description: None,
                external_docs: None,
            },
        );
        after.tags[1].description = Some("Everything about pets".into());

        let diff = diff_documents(&before, &after);
        let tags = child(&diff, "tags");
        assert_eq!(
            differences(tags),
            vec![
                &DiffNode::added(Some("stores")),
                &DiffNode::build(
                    Some("pets"),
                    [
                        DiffNode::same(Some("name")),
                        DiffNode::added(Some("description")),
                        DiffNode::same(Some("external docs")),
                    ]
                ),
            ]
        );
    }

    #[test]
    fn security_scheme_type_change() {
        let api_key = SecuritySchemeKind::ApiKey {
            name: "key".into(),
            location: oad_model::ApiKeyLocation::Header,
        };
        let http = SecuritySchemeKind::Http {
            scheme: "bearer".into(),
            bearer_format: None,
        };
        assert_eq!(
            api_key.compare(&http, Some("details")),
            DiffNode::updated(Some("details"), "apiKey", "http")
        );
    }

    #[test]
    fn status_code_and_content_type_labels() {
        let before = petstore();
        let mut after = petstore();
        let op = after
            .paths
            .get_mut(&PathKey::from("/pets"))
            .unwrap()
            .get
            .as_mut()
            .unwrap();
        op.responses.insert(
            StatusCode::from("404"),
            Referenceable::Item(Response {
                description: "not found".into(),
                content: Default::default(),
            }),
        );
        if let Some(Referenceable::Item(ok)) = op.responses.get_mut(&StatusCode::from("200")) {
            ok.content.insert(ContentType::from("application/xml"), MediaType::default());
        }

        let diff = diff_documents(&before, &after);
        let get = child(child(child(&diff, "paths"), "**/pets**"), "GET endpoint");
        let responses = child(get, "responses");
        assert!(differences(responses).contains(&&DiffNode::added(Some("status code 404"))));
        let ok = child(responses, "status code 200");
        assert_eq!(
            differences(child(ok, "content")),
            vec![&DiffNode::added(Some("application/xml"))]
        );
    }
}
