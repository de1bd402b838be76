use serde::{Deserialize, Serialize};

use crate::locale::Language;
use crate::schema::names::DocumentId;
use crate::schema::reference::Reference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub person: Reference,
    pub email: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expertises: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
}
