use serde::{Deserialize, Serialize};

pub type DocumentId = String;
pub type MemberId = String;

/// Prefix the content store puts in front of unpublished document ids.
pub const DRAFT_PREFIX: &str = "drafts.";

/// Id of the published counterpart of `id` (drafts share it after the prefix).
pub fn published_id(id: &str) -> &str {
    id.strip_prefix(DRAFT_PREFIX).unwrap_or(id)
}

/// Id of the draft counterpart of `id`.
pub fn draft_id(id: &str) -> String {
    format!("{DRAFT_PREFIX}{}", published_id(id))
}

pub fn is_draft(id: &str) -> bool {
    id.starts_with(DRAFT_PREFIX)
}

/// True when both ids name the same document (its draft or its published version).
pub fn same_document(a: &str, b: &str) -> bool {
    published_id(a) == published_id(b)
}

/// URL slug as stored by the studio: `{"current": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.trim().is_empty()
    }
}

/// Borrow the slug text when present and non-empty.
pub fn slug_str(slug: Option<&Slug>) -> Option<&str> {
    slug.filter(|s| !s.is_empty()).map(Slug::as_str)
}
