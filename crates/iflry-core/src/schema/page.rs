use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::portable_text::PortableText;
use crate::schema::names::{DocumentId, Slug};

/// What a page is for. Every type except `Other` is a singleton per locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Other,
    Members,
    Partners,
    Programmes,
    People,
    Donation,
    Vacancies,
    Trainers,
}

impl PageType {
    pub const ALL: [PageType; 8] = [
        PageType::Other,
        PageType::Members,
        PageType::Partners,
        PageType::Programmes,
        PageType::People,
        PageType::Donation,
        PageType::Vacancies,
        PageType::Trainers,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PageType::Other => "other",
            PageType::Members => "members",
            PageType::Partners => "partners",
            PageType::Programmes => "programmes",
            PageType::People => "people",
            PageType::Donation => "donation",
            PageType::Vacancies => "vacancies",
            PageType::Trainers => "trainers",
        }
    }

    /// Only `Other` pages are addressed by slug.
    pub const fn is_singleton(self) -> bool {
        !matches!(self, PageType::Other)
    }

    /// Site section that renders this page type, if it has a fixed one.
    pub const fn section_segment(self) -> Option<&'static str> {
        match self {
            PageType::Other => None,
            other => Some(other.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
    #[serde(rename = "type", default)]
    pub page_type: PageType,
    /// Required only for `PageType::Other`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: PortableText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
