use serde::{Deserialize, Serialize};

use crate::i18n::InternationalizedString;
use crate::schema::image::Image;
use crate::schema::names::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    #[serde(default, skip_serializing_if = "InternationalizedString::is_empty")]
    pub biography: InternationalizedString,
    #[serde(default, skip_serializing_if = "InternationalizedString::is_empty")]
    pub description: InternationalizedString,
    pub logo: Image,
}
