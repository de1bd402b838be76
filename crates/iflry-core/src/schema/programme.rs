use serde::{Deserialize, Serialize};

use crate::i18n::InternationalizedString;
use crate::locale::Locale;
use crate::portable_text::PortableText;
use crate::schema::names::{DocumentId, Slug};
use crate::schema::reference::Reference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Programme {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    /// Must not be empty.
    #[serde(default)]
    pub managers: Vec<Reference>,
    pub email: String,
    #[serde(default, skip_serializing_if = "InternationalizedString::is_empty")]
    pub description: InternationalizedString,
}

impl Programme {
    /// Description in `locale`, falling back to English, then to any locale.
    pub fn description_for(&self, locale: Locale) -> Option<&str> {
        self.description.for_locale(locale)
    }
}

/// Locale-specific page bound to one programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProgrammePage {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
    pub programme: Reference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: PortableText,
}
