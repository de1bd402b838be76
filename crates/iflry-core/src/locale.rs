use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported site locales, in display order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Es,
}

/// All supported locales in the order the locale selector lists them.
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Es];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: '{0}'")]
pub struct ParseLocaleError(pub String);

impl Locale {
    /// Canonical two-letter code, also used as the URL path segment.
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Es => "es",
        }
    }

    /// Name of the locale in its own language.
    pub const fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Es => "Español",
        }
    }

    /// English title used in the studio language lists.
    pub const fn title(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "French",
            Locale::Es => "Spanish",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇬🇧",
            Locale::Fr => "🇫🇷",
            Locale::Es => "🇪🇸",
        }
    }

    /// Parse a locale code, ignoring case and any region suffix (`fr-BE`, `es_MX`).
    pub fn parse(value: &str) -> Result<Self, ParseLocaleError> {
        let trimmed = value.trim();
        let primary = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            "es" => Ok(Locale::Es),
            _ => Err(ParseLocaleError(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

/// Languages a trainer can deliver sessions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    Es,
    De,
    Nl,
    It,
    Pt,
    Ru,
    Ar,
    Zh,
    Ja,
}

pub const TRAINER_LANGUAGES: [Language; 11] = [
    Language::En,
    Language::Fr,
    Language::Es,
    Language::De,
    Language::Nl,
    Language::It,
    Language::Pt,
    Language::Ru,
    Language::Ar,
    Language::Zh,
    Language::Ja,
];

/// Shown for language codes outside the closed list.
pub const FALLBACK_FLAG: &str = "🌐";

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::De => "de",
            Language::Nl => "nl",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Ar => "ar",
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
            Language::Es => "Spanish",
            Language::De => "German",
            Language::Nl => "Dutch",
            Language::It => "Italian",
            Language::Pt => "Portuguese",
            Language::Ru => "Russian",
            Language::Ar => "Arabic",
            Language::Zh => "Chinese",
            Language::Ja => "Japanese",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Fr => "🇫🇷",
            Language::Es => "🇪🇸",
            Language::De => "🇩🇪",
            Language::Nl => "🇳🇱",
            Language::It => "🇮🇹",
            Language::Pt => "🇵🇹",
            Language::Ru => "🇷🇺",
            // Saudi Arabia
            Language::Ar => "🇸🇦",
            Language::Zh => "🇨🇳",
            Language::Ja => "🇯🇵",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        TRAINER_LANGUAGES
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Flag glyph for any language code, falling back to a globe.
pub fn language_flag(code: &str) -> &'static str {
    Language::from_code(code)
        .map(Language::flag)
        .unwrap_or(FALLBACK_FLAG)
}
