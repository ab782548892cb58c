use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::path::{Parameter, RequestBody, Response};
use crate::reference::Referenceable;
use crate::schema::Schema;
use crate::security::SecurityScheme;

/// Reusable definitions referenced from elsewhere in the document.
///
/// Only the component kinds the differ inspects are retained.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
    #[serde(default)]
    pub responses: IndexMap<String, Referenceable<Response>>,
    #[serde(default)]
    pub parameters: IndexMap<String, Referenceable<Parameter>>,
    #[serde(default)]
    pub request_bodies: IndexMap<String, Referenceable<RequestBody>>,
    #[serde(default)]
    pub security_schemes: IndexMap<String, Referenceable<SecurityScheme>>,
}
