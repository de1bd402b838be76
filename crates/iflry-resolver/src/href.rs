use std::fmt;

use iflry_core::{Locale, PageType};

use crate::diagnostic;
use crate::error::ResolveError;

/// Site sections with a fixed, slug-free path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Members,
    Partners,
    Programmes,
    People,
    PeopleArchive,
    Trainers,
    Vacancies,
    Events,
    EventsArchive,
    Posts,
    Donation,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::Members,
        Section::Partners,
        Section::Programmes,
        Section::People,
        Section::PeopleArchive,
        Section::Trainers,
        Section::Vacancies,
        Section::Events,
        Section::EventsArchive,
        Section::Posts,
        Section::Donation,
    ];

    pub const fn segment(self) -> &'static str {
        match self {
            Section::Members => "members",
            Section::Partners => "partners",
            Section::Programmes => "programmes",
            Section::People => "people",
            Section::PeopleArchive => "people/archive",
            Section::Trainers => "trainers",
            Section::Vacancies => "vacancies",
            Section::Events => "events",
            Section::EventsArchive => "events/archive",
            Section::Posts => "posts",
            Section::Donation => "donation",
        }
    }

    /// Section that renders a singleton page type.
    pub const fn for_page_type(page_type: PageType) -> Option<Section> {
        match page_type {
            PageType::Other => None,
            PageType::Members => Some(Section::Members),
            PageType::Partners => Some(Section::Partners),
            PageType::Programmes => Some(Section::Programmes),
            PageType::People => Some(Section::People),
            PageType::Donation => Some(Section::Donation),
            PageType::Vacancies => Some(Section::Vacancies),
            PageType::Trainers => Some(Section::Trainers),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

fn locale_prefix(locale: Option<Locale>) -> String {
    locale.map(|l| format!("/{l}")).unwrap_or_default()
}

/// Landing path of a locale.
pub fn home_path(locale: Locale) -> String {
    format!("/{locale}")
}

/// Fixed path of a section, e.g. `/fr/people/archive`.
pub fn section_path(locale: Locale, section: Section) -> String {
    format!("/{locale}/{}", section.segment())
}

/// Resolve the canonical path of a slugged document.
///
/// Only `post`, `page`, `event` and `programme` have paths. The locale becomes
/// the first path segment when given; an empty slug counts as missing.
pub fn try_resolve_path(
    document_type: &str,
    locale: Option<Locale>,
    slug: Option<&str>,
) -> Result<String, ResolveError> {
    let segment = match document_type {
        "post" => "posts",
        "page" => "pages",
        "event" => "events",
        "programme" => "programmes",
        other => return Err(ResolveError::UnknownDocumentType(other.to_string())),
    };
    let slug = slug
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ResolveError::MissingSlug(document_type.to_string()))?;

    Ok(format!("{}/{segment}/{slug}", locale_prefix(locale)))
}

/// Like [`try_resolve_path`], but never fails: unknown types raise a diagnostic
/// and every failure yields `None`.
pub fn resolve_path(
    document_type: &str,
    locale: Option<Locale>,
    slug: Option<&str>,
) -> Option<String> {
    match try_resolve_path(document_type, locale, slug) {
        Ok(path) => Some(path),
        Err(err @ ResolveError::UnknownDocumentType(_)) => {
            diagnostic!("{err}");
            None
        }
        Err(ResolveError::MissingSlug(_)) => None,
    }
}
