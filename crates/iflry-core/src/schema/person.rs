use serde::{Deserialize, Serialize};

use crate::i18n::InternationalizedString;
use crate::schema::image::Image;
use crate::schema::names::DocumentId;
use crate::schema::reference::Reference;

/// A person (or contact) who can author posts, hold roles and train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "InternationalizedString::is_empty")]
    pub biography: InternationalizedString,
    pub picture: Image,
    /// Member organization the person belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,
}
