use std::collections::HashMap;

use anyhow::Result;
use iflry_config::SiteConfig;
use iflry_core::schema::names::is_draft;
use iflry_core::{
    Document, Event, Locale, MemberDocument, Page, PageType, Partner, Person, Post, Programme,
    ProgrammePage, RoleEntry, Settings, Trainer, Vacancy,
};
use iflry_resolver::{MemberOverrides, NavEntry, dereference_pages, diagnostic, resolve_navigation};

use crate::content::{load_documents, load_documents_strict};

/// In-memory view over the content documents.
///
/// Queries only ever see published documents; drafts stay available through
/// [`ContentStore::documents`] for validation.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    documents: Vec<Document>,
}

impl ContentStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Load content for rendering. Documents that do not decode are skipped.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        Ok(Self::new(load_documents(config)?))
    }

    /// Load content for validation, where a document that does not decode
    /// is an error.
    pub fn load_strict(config: &SiteConfig) -> Result<Self> {
        Ok(Self::new(load_documents_strict(config)?))
    }

    /// All documents, drafts included.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn published(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|doc| !is_draft(doc.id()))
    }

    fn select<'a, T, F>(&'a self, pick: F) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
        F: Fn(&'a Document) -> Option<&'a T>,
    {
        self.published().filter_map(pick)
    }

    pub fn persons(&self) -> Vec<Person> {
        self.select(|doc| match doc {
            Document::Person(person) => Some(person),
            _ => None,
        })
        .cloned()
        .collect()
    }

    pub fn person(&self, id: &str) -> Option<Person> {
        self.persons().into_iter().find(|p| p.id == id)
    }

    pub fn posts(&self, locale: Locale) -> Vec<Post> {
        self.select(|doc| match doc {
            Document::Post(post) if post.language == Some(locale) => Some(post),
            _ => None,
        })
        .cloned()
        .collect()
    }

    pub fn post_by_slug(&self, locale: Locale, slug: &str) -> Option<Post> {
        self.posts(locale)
            .into_iter()
            .find(|post| post.slug.as_ref().is_some_and(|s| s.current == slug))
    }

    /// Every published page, in any language.
    pub fn all_pages(&self) -> Vec<Page> {
        self.select(|doc| match doc {
            Document::Page(page) => Some(page),
            _ => None,
        })
        .cloned()
        .collect()
    }

    pub fn pages(&self, locale: Locale) -> Vec<Page> {
        self.all_pages()
            .into_iter()
            .filter(|page| page.language == Some(locale))
            .collect()
    }

    /// The page of a singleton type in `locale`, e.g. the members page.
    pub fn page_by_type(&self, locale: Locale, page_type: PageType) -> Option<Page> {
        self.pages(locale)
            .into_iter()
            .find(|page| page.page_type == page_type)
    }

    pub fn page_by_slug(&self, locale: Locale, slug: &str) -> Option<Page> {
        self.pages(locale).into_iter().find(|page| {
            page.page_type == PageType::Other
                && page.slug.as_ref().is_some_and(|s| s.current == slug)
        })
    }

    pub fn events(&self, locale: Locale) -> Vec<Event> {
        self.select(|doc| match doc {
            Document::Event(event) if event.language == Some(locale) => Some(event),
            _ => None,
        })
        .cloned()
        .collect()
    }

    pub fn event_by_slug(&self, locale: Locale, slug: &str) -> Option<Event> {
        self.events(locale)
            .into_iter()
            .find(|event| event.slug.as_ref().is_some_and(|s| s.current == slug))
    }

    pub fn vacancies(&self, locale: Locale) -> Vec<Vacancy> {
        self.select(|doc| match doc {
            Document::Vacancy(vacancy) if vacancy.language == Some(locale) => Some(vacancy),
            _ => None,
        })
        .cloned()
        .collect()
    }

    pub fn vacancy_by_slug(&self, locale: Locale, slug: &str) -> Option<Vacancy> {
        self.vacancies(locale)
            .into_iter()
            .find(|vacancy| vacancy.slug.as_ref().is_some_and(|s| s.current == slug))
    }

    pub fn programmes(&self) -> Vec<Programme> {
        self.select(|doc| match doc {
            Document::Programme(programme) => Some(programme),
            _ => None,
        })
        .cloned()
        .collect()
    }

    pub fn programme_pages(&self, locale: Locale) -> Vec<ProgrammePage> {
        self.select(|doc| match doc {
            Document::ProgrammePage(page) if page.language == Some(locale) => Some(page),
            _ => None,
        })
        .cloned()
        .collect()
    }

    pub fn partners(&self) -> Vec<Partner> {
        self.select(|doc| match doc {
            Document::Partner(partner) => Some(partner),
            _ => None,
        })
        .cloned()
        .collect()
    }

    pub fn trainers(&self) -> Vec<Trainer> {
        self.select(|doc| match doc {
            Document::Trainer(trainer) => Some(trainer),
            _ => None,
        })
        .cloned()
        .collect()
    }

    /// Site configuration for `locale`.
    pub fn settings(&self, locale: Locale) -> Option<Settings> {
        self.select(|doc| match doc {
            Document::Settings(settings) if settings.language == Some(locale) => Some(settings),
            _ => None,
        })
        .next()
        .cloned()
    }

    /// Roles flattened and joined with the people holding them.
    pub fn role_entries(&self) -> Vec<RoleEntry> {
        let people: HashMap<&str, &Person> = self
            .select(|doc| match doc {
                Document::Person(person) => Some(person),
                _ => None,
            })
            .map(|person| (person.id.as_str(), person))
            .collect();

        self.select(|doc| match doc {
            Document::Role(role) => Some(role),
            _ => None,
        })
        .map(|role| {
            let person = people.get(role.person.target.as_str()).copied();
            if person.is_none() {
                diagnostic!(
                    "role '{}' references missing person '{}'",
                    role.id,
                    role.person.target
                );
            }
            RoleEntry::from_role(role, person)
        })
        .collect()
    }

    pub fn member_overrides(&self) -> MemberOverrides {
        MemberOverrides::from_documents(self.select(|doc| match doc {
            Document::Member(member) => Some::<&MemberDocument>(member),
            _ => None,
        }))
    }

    /// Header navigation for `locale`, with page links resolved to paths.
    ///
    /// Page links are filled from every page document, drafts included, so a
    /// link to an unpublished page still gets a type and slug.
    pub fn navigation(&self, locale: Locale) -> Vec<NavEntry> {
        let Some(settings) = self.settings(locale) else {
            diagnostic!("no configuration document for locale '{locale}'");
            return Vec::new();
        };
        let pages: Vec<Page> = self
            .documents
            .iter()
            .filter_map(|doc| match doc {
                Document::Page(page) => Some(page.clone()),
                _ => None,
            })
            .collect();
        let items = dereference_pages(&settings.navigation, &pages);
        resolve_navigation(&items, locale)
    }
}

/// Member overrides from the content directory.
///
/// Content that cannot be read degrades to no overrides, so the members
/// listing still renders from the static datasets.
pub fn load_member_overrides(config: &SiteConfig) -> MemberOverrides {
    match ContentStore::load(config) {
        Ok(store) => store.member_overrides(),
        Err(err) => {
            diagnostic!("member overrides unavailable: {err:#}");
            MemberOverrides::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iflry_resolver::diagnostics;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn doc(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    fn store() -> ContentStore {
        ContentStore::new(vec![
            doc(json!({"_type": "person", "_id": "ada", "name": "Ada", "picture": {"asset": {"_ref": "image-ada"}}})),
            doc(json!({"_type": "post", "_id": "p1", "title": "Hello", "language": "en",
                "slug": {"current": "hello"}, "image": {}})),
            doc(json!({"_type": "post", "_id": "drafts.p2", "title": "Draft", "language": "en",
                "slug": {"current": "draft"}, "image": {}})),
            doc(json!({"_type": "post", "_id": "p3", "title": "Bonjour", "language": "fr",
                "slug": {"current": "bonjour"}, "image": {}})),
            doc(json!({"_type": "page", "_id": "members-en", "title": "Members", "language": "en", "type": "members"})),
            doc(json!({"_type": "page", "_id": "drafts.about-en", "title": "About", "language": "en",
                "slug": {"current": "about"}})),
            doc(json!({"_type": "role", "_id": "r1", "type": "bureau-member", "bureauRole": "president",
                "person": {"_ref": "ada"}, "email": "ada@example.org", "start": "2024-01-01"})),
            doc(json!({"_type": "role", "_id": "r2", "type": "office", "person": {"_ref": "ghost"},
                "email": "x@example.org", "start": "2024-01-01"})),
            doc(json!({"_type": "member", "_id": "m1", "memberId": "lyb", "fb": ""})),
            doc(json!({"_type": "configuration", "_id": "cfg-en", "language": "en", "navigation": [
                {"title": "Members", "linkType": "page", "page": {"_ref": "members-en"}},
                {"title": "About", "linkType": "page", "page": {"_ref": "about-en"}},
                {"title": "News", "linkType": "posts"}
            ]})),
        ])
    }

    #[test]
    fn queries_skip_drafts_and_other_locales() {
        let store = store();
        let titles: Vec<_> = store.posts(Locale::En).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Hello"]);
        assert!(store.post_by_slug(Locale::En, "draft").is_none());
        assert!(store.post_by_slug(Locale::Fr, "bonjour").is_some());
        assert_eq!(store.published().count(), store.len() - 2);
    }

    #[test]
    fn singleton_page_lookup() {
        let store = store();
        let page = store.page_by_type(Locale::En, PageType::Members).unwrap();
        assert_eq!(page.id, "members-en");
        assert!(store.page_by_type(Locale::Fr, PageType::Members).is_none());
        assert!(store.page_by_slug(Locale::En, "about").is_none());
    }

    #[test]
    fn role_entries_join_people() {
        diagnostics::set_quiet(true);
        let entries = store().role_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name.as_deref(), Some("Ada"));
        assert_eq!(entries[0].picture.as_deref(), Some("image-ada"));
        assert_eq!(entries[0].bureau_role.as_deref(), Some("president"));
        assert_eq!(entries[1].name, None);
    }

    #[test]
    fn member_overrides_from_documents() {
        let overrides = store().member_overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("lyb").unwrap().fb, Some(None));
    }

    #[test]
    fn navigation_resolves_draft_pages() {
        let nav = store().navigation(Locale::En);
        let hrefs: Vec<_> = nav.iter().filter_map(|e| e.href()).collect();
        assert_eq!(hrefs, vec!["/en/members", "/en/pages/about", "/en/posts"]);
    }

    #[test]
    fn navigation_without_settings_is_empty() {
        diagnostics::set_quiet(true);
        assert!(store().navigation(Locale::Es).is_empty());
    }

    #[test]
    fn broken_role_does_not_hide_navigation() {
        diagnostics::set_quiet(true);
        let tmp = tempdir().unwrap();
        let config = SiteConfig {
            content_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        fs::write(
            tmp.path().join("configuration.json"),
            r#"{"_type": "configuration", "_id": "cfg-en", "language": "en",
                "navigation": [{"title": "News", "linkType": "posts"}]}"#,
        )
        .unwrap();
        fs::write(
            tmp.path().join("role.json"),
            r#"{"_type": "role", "_id": "r1", "type": "office", "person": {"_ref": "ada"}, "start": "2024-01-01"}"#,
        )
        .unwrap();

        let store = ContentStore::load(&config).unwrap();
        let hrefs: Vec<_> = store
            .navigation(Locale::En)
            .iter()
            .filter_map(|e| e.href().map(str::to_string))
            .collect();
        assert_eq!(hrefs, vec!["/en/posts"]);
        assert!(store.role_entries().is_empty());

        let err = ContentStore::load_strict(&config).unwrap_err();
        assert!(format!("{err:#}").contains("role.json"));
    }

    #[test]
    fn overrides_degrade_when_content_is_broken() {
        diagnostics::set_quiet(true);
        let tmp = tempdir().unwrap();
        let config = SiteConfig {
            content_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        fs::write(tmp.path().join("broken.json"), "{").unwrap();

        assert!(load_member_overrides(&config).is_empty());
    }
}
