use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::portable_text::PortableText;
use crate::schema::image::Image;
use crate::schema::names::{DocumentId, Slug};
use crate::schema::reference::Reference;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PostType {
    #[default]
    Statement,
    PressRelease,
    BureauUpdate,
}

impl PostType {
    pub const fn as_str(self) -> &'static str {
        match self {
            PostType::Statement => "statement",
            PostType::PressRelease => "press-release",
            PostType::BureauUpdate => "bureau-update",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            PostType::Statement => "Statement",
            PostType::PressRelease => "Press Release",
            PostType::BureauUpdate => "Bureau Update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    /// Assigned by the studio; hidden from editors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
    #[serde(rename = "type", default)]
    pub post_type: PostType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: PortableText,
    pub image: Image,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,
}
