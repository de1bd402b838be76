use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::portable_text::PortableText;
use crate::schema::image::Image;
use crate::schema::names::{DocumentId, MemberId, Slug};
use crate::schema::reference::Reference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// General Assembly.
    Ga,
    Seminar,
    Workshop,
}

impl EventType {
    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::Ga => "ga",
            EventType::Seminar => "seminar",
            EventType::Workshop => "workshop",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EventType::Ga => "General Assembly",
            EventType::Seminar => "Seminar",
            EventType::Workshop => "Workshop",
        }
    }
}

/// Contact for an event; `email` overrides the person's role email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ContactPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<ContactPerson>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    pub location: String,
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programme: Option<Reference>,
    /// Ids from the static membership datasets, not document references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partners: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: PortableText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trainers: Vec<Reference>,
}

impl Event {
    /// Moment after which the event counts as past.
    pub fn finishes_at(&self) -> DateTime<Utc> {
        self.end.unwrap_or(self.start)
    }
}
