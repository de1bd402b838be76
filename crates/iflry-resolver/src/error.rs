use iflry_core::{DocumentKind, Locale};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid document type: {0}")]
    UnknownDocumentType(String),
    #[error("document type '{0}' requires a slug")]
    MissingSlug(String),
}

/// Save-time rule violations, reported to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("slug is already in use: {kind} '{slug}' ({locale}) in '{first}' and '{second}'")]
    DuplicateSlug {
        kind: DocumentKind,
        slug: String,
        locale: Locale,
        first: String,
        second: String,
    },
    #[error("type already exists: page type '{page_type}' ({locale}) in '{first}' and '{second}'")]
    DuplicatePageType {
        page_type: String,
        locale: Locale,
        first: String,
        second: String,
    },
    #[error("{kind} already exists for locale {locale}: '{first}' and '{second}'")]
    DuplicateSingleton {
        kind: DocumentKind,
        locale: Locale,
        first: String,
        second: String,
    },
    #[error("page '{0}' of type 'other' requires a slug")]
    MissingPageSlug(String),
    #[error("programme '{0}' requires at least one manager")]
    MissingManagers(String),
    #[error("event '{0}' ends before it starts")]
    EventEndsBeforeStart(String),
    #[error("member document '{document}' names unknown member id '{member_id}'")]
    UnknownMemberId { document: String, member_id: String },
    #[error("open graph image of '{0}' requires alt text")]
    MissingAltText(String),
    #[error("{kind} '{id}' has no language")]
    MissingLanguage { kind: DocumentKind, id: String },
}
