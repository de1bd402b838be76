use iflry_core::schema::names::{is_draft, slug_str};
use iflry_core::{Locale, NavigationItem, NavigationLink, Page, PageLink, Slug};
use serde::Serialize;

use crate::diagnostic;
use crate::href::{Section, home_path, resolve_path, section_path};

/// A navigation node after link resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavEntry {
    Link { title: String, href: String },
    /// Labelled group without a target of its own.
    Group {
        title: String,
        children: Vec<NavEntry>,
    },
}

impl NavEntry {
    pub fn title(&self) -> &str {
        match self {
            NavEntry::Link { title, .. } | NavEntry::Group { title, .. } => title,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            NavEntry::Link { href, .. } => Some(href),
            NavEntry::Group { .. } => None,
        }
    }
}

/// Resolve a navigation tree for `locale`.
///
/// Submenus become groups at any depth. A submenu with no resolvable children
/// is dropped.
pub fn resolve_navigation(items: &[NavigationItem], locale: Locale) -> Vec<NavEntry> {
    items
        .iter()
        .filter_map(|item| resolve_item(item, locale))
        .collect()
}

fn resolve_item(item: &NavigationItem, locale: Locale) -> Option<NavEntry> {
    match &item.link {
        NavigationLink::Submenu { children } => {
            let children = resolve_navigation(children, locale);
            if children.is_empty() {
                diagnostic!("empty submenu '{}' skipped", item.title);
                return None;
            }
            Some(NavEntry::Group {
                title: item.title.clone(),
                children,
            })
        }
        link => Some(NavEntry::Link {
            title: item.title.clone(),
            href: link_href(link, locale),
        }),
    }
}

/// Target of a non-submenu link. Anything unresolvable points at the locale home.
pub fn link_href(link: &NavigationLink, locale: Locale) -> String {
    match link {
        NavigationLink::Page { page } => page
            .as_ref()
            .map(|page| page_href(page, locale))
            .unwrap_or_else(|| home_path(locale)),
        NavigationLink::Events => section_path(locale, Section::Events),
        NavigationLink::Posts => section_path(locale, Section::Posts),
        NavigationLink::Trainers => section_path(locale, Section::Trainers),
        NavigationLink::Vacancies => section_path(locale, Section::Vacancies),
        NavigationLink::Custom { custom_url } => custom_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| home_path(locale)),
        NavigationLink::Submenu { .. } => home_path(locale),
        NavigationLink::Unknown => {
            diagnostic!("unknown navigation link type, linking to {}", home_path(locale));
            home_path(locale)
        }
    }
}

/// Singleton page types go to their section; other pages go to `/pages/{slug}`.
///
/// The page's own language wins over the viewing locale.
pub fn page_href(page: &PageLink, locale: Locale) -> String {
    let locale = page.language.unwrap_or(locale);
    if let Some(section) = page.page_type.and_then(Section::for_page_type) {
        return section_path(locale, section);
    }
    resolve_path("page", Some(locale), slug_str(page.slug.as_ref()))
        .unwrap_or_else(|| home_path(locale))
}

/// Fill page links from the page documents they reference.
///
/// Published pages win over drafts. Links to missing pages keep whatever they
/// already carried.
pub fn dereference_pages(items: &[NavigationItem], pages: &[Page]) -> Vec<NavigationItem> {
    items
        .iter()
        .map(|item| {
            let link = match &item.link {
                NavigationLink::Page { page: Some(link) } => NavigationLink::Page {
                    page: Some(dereference(link, pages)),
                },
                NavigationLink::Submenu { children } => NavigationLink::Submenu {
                    children: dereference_pages(children, pages),
                },
                other => other.clone(),
            };
            NavigationItem::new(item.title.clone(), link)
        })
        .collect()
}

fn dereference(link: &PageLink, pages: &[Page]) -> PageLink {
    let Some(reference) = link.reference.as_deref() else {
        return link.clone();
    };
    let target = iflry_core::Reference::to(reference);
    let mut candidates = pages.iter().filter(|page| target.points_to(&page.id));
    let first = candidates.next();
    let page = first
        .filter(|page| !is_draft(&page.id))
        .or_else(|| candidates.find(|page| !is_draft(&page.id)))
        .or(first);

    match page {
        Some(page) => PageLink {
            reference: link.reference.clone(),
            slug: page.slug.clone().or_else(|| link.slug.clone()),
            page_type: Some(page.page_type),
            language: page.language.or(link.language),
        },
        None => {
            diagnostic!("navigation links to missing page '{reference}'");
            link.clone()
        }
    }
}

/// Convenience for building dereferenced links in code.
pub fn page_link(page_type: iflry_core::PageType, slug: Option<&str>) -> PageLink {
    PageLink {
        reference: None,
        slug: slug.map(Slug::new),
        page_type: Some(page_type),
        language: None,
    }
}
