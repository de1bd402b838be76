use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// One per-locale value of an internationalized field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LocalizedValue {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A text field stored once per locale, keyed by locale code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct InternationalizedString(pub Vec<LocalizedValue>);

impl InternationalizedString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locale: Locale, value: impl Into<String>) -> Self {
        self.0.push(LocalizedValue {
            key: locale.as_str().to_string(),
            value: Some(value.into()),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|v| non_empty(v.value.as_deref()).is_none())
    }

    /// Value for exactly `key`, if present and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|v| v.key == key)
            .and_then(|v| non_empty(v.value.as_deref()))
    }

    /// Value for `locale`, else English, else the first non-empty value.
    pub fn for_locale(&self, locale: Locale) -> Option<&str> {
        self.get(locale.as_str())
            .or_else(|| self.get(Locale::En.as_str()))
            .or_else(|| {
                self.0
                    .iter()
                    .find_map(|v| non_empty(v.value.as_deref()))
            })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
