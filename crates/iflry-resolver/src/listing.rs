use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use iflry_core::schema::names::is_draft;
use iflry_core::{Document, DocumentKind, Event, Locale, Post, Vacancy};
use iflry_naming::{DEFAULT_SLUG_MAX_LENGTH, slugify};
use serde::Serialize;

use crate::href::{Section, resolve_path, section_path};

// ============================================================================
// Listings
// ============================================================================

/// Vacancies still accepting applications on `today`.
pub fn open_vacancies(vacancies: &[Vacancy], today: NaiveDate) -> Vec<&Vacancy> {
    vacancies.iter().filter(|v| v.is_open(today)).collect()
}

/// Events not yet finished at `now`, soonest first.
pub fn upcoming_events(events: &[Event], now: DateTime<Utc>) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.finishes_at() >= now).collect();
    upcoming.sort_by_key(|e| e.start);
    upcoming
}

/// Finished events, most recent first.
pub fn past_events(events: &[Event], now: DateTime<Utc>) -> Vec<&Event> {
    let mut past: Vec<&Event> = events.iter().filter(|e| e.finishes_at() < now).collect();
    past.sort_by_key(|e| Reverse(e.start));
    past
}

/// Events run under a programme, in start order.
pub fn events_for_programme<'a>(events: &'a [Event], programme_id: &str) -> Vec<&'a Event> {
    let mut matching: Vec<&Event> = events
        .iter()
        .filter(|e| e.programme.as_ref().is_some_and(|p| p.points_to(programme_id)))
        .collect();
    matching.sort_by_key(|e| e.start);
    matching
}

/// Newest `limit` posts with a slug in `locale`. Undated posts sort last.
pub fn latest_posts(posts: &[Post], locale: Locale, limit: usize) -> Vec<&Post> {
    let mut matching: Vec<&Post> = posts
        .iter()
        .filter(|p| p.language == Some(locale))
        .filter(|p| iflry_core::schema::names::slug_str(p.slug.as_ref()).is_some())
        .collect();
    matching.sort_by_key(|p| Reverse(p.date));
    matching.truncate(limit);
    matching
}

/// Slug of a programme page, derived from its programme's title.
pub fn programme_page_slug(programme_title: Option<&str>) -> String {
    let slug = programme_title
        .map(|title| slugify(title, DEFAULT_SLUG_MAX_LENGTH))
        .unwrap_or_default();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// One-based current page.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl Pagination {
    /// `page_param` comes straight from the query string; anything that is
    /// not a positive number means page 1.
    pub fn new(page_param: Option<&str>, total_items: usize, per_page: usize) -> Self {
        let page = page_param
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        Self {
            page,
            per_page: per_page.max(1),
            total_items,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Index of the first item on the current page, saturating for page
    /// numbers far past the end.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Items of the current page; empty past the last page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }

    /// Page links to show: first, last and the neighbours of the current page,
    /// with an ellipsis two pages away from it.
    pub fn window(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        (1..=total)
            .filter_map(|p| {
                let distance = p.abs_diff(self.page);
                if p == 1 || p == total || distance <= 1 {
                    Some(PageItem::Page(p))
                } else if distance == 2 {
                    Some(PageItem::Ellipsis)
                } else {
                    None
                }
            })
            .collect()
    }
}

// ============================================================================
// Static paths
// ============================================================================

/// One page to generate ahead of time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPath {
    #[serde(serialize_with = "serialize_kind")]
    pub kind: DocumentKind,
    pub locale: Locale,
    pub slug: String,
    pub path: String,
}

fn serialize_kind<S: serde::Serializer>(kind: &DocumentKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.name())
}

fn detail_path(kind: DocumentKind, locale: Locale, slug: &str) -> Option<String> {
    match kind {
        DocumentKind::Post => resolve_path("post", Some(locale), Some(slug)),
        DocumentKind::Page => resolve_path("page", Some(locale), Some(slug)),
        DocumentKind::Event => resolve_path("event", Some(locale), Some(slug)),
        DocumentKind::ProgrammePage => resolve_path("programme", Some(locale), Some(slug)),
        DocumentKind::Vacancy => Some(format!("{}/{slug}", section_path(locale, Section::Vacancies))),
        _ => None,
    }
}

/// One path per published, slugged, localized document whose language is in
/// `locales`. Singleton pages are served from their section and skipped.
pub fn static_paths(documents: &[Document], locales: &[Locale]) -> Vec<StaticPath> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for doc in documents {
        if is_draft(doc.id()) {
            continue;
        }
        if let Document::Page(page) = doc
            && page.page_type.is_singleton()
        {
            continue;
        }
        let (Some(locale), Some(slug)) = (doc.language(), doc.slug()) else {
            continue;
        };
        if !locales.contains(&locale) {
            continue;
        }
        let kind = doc.kind();
        let Some(path) = detail_path(kind, locale, slug) else {
            continue;
        };
        if seen.insert(path.clone()) {
            paths.push(StaticPath {
                kind,
                locale,
                slug: slug.to_string(),
                path,
            });
        }
    }
    paths
}
