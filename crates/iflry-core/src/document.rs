use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::schema::{
    Event, MemberDocument, Page, Partner, Person, Post, Programme, ProgrammePage, Role, Settings,
    Trainer, Vacancy, names::slug_str,
};

/// Every document type the studio stores, tagged by `_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum Document {
    #[serde(alias = "contact")]
    Person(Person),
    Post(Post),
    Page(Page),
    Event(Event),
    Programme(Programme),
    ProgrammePage(ProgrammePage),
    Member(MemberDocument),
    Role(Role),
    Trainer(Trainer),
    Vacancy(Vacancy),
    Partner(Partner),
    #[serde(rename = "configuration", alias = "settings")]
    Settings(Settings),
}

/// Document type without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    Person,
    Post,
    Page,
    Event,
    Programme,
    ProgrammePage,
    Member,
    Role,
    Trainer,
    Vacancy,
    Partner,
    Configuration,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 12] = [
        DocumentKind::Person,
        DocumentKind::Post,
        DocumentKind::Page,
        DocumentKind::Event,
        DocumentKind::Programme,
        DocumentKind::ProgrammePage,
        DocumentKind::Member,
        DocumentKind::Role,
        DocumentKind::Trainer,
        DocumentKind::Vacancy,
        DocumentKind::Partner,
        DocumentKind::Configuration,
    ];

    /// The `_type` value stored with the document.
    pub const fn name(self) -> &'static str {
        match self {
            DocumentKind::Person => "person",
            DocumentKind::Post => "post",
            DocumentKind::Page => "page",
            DocumentKind::Event => "event",
            DocumentKind::Programme => "programme",
            DocumentKind::ProgrammePage => "programmePage",
            DocumentKind::Member => "member",
            DocumentKind::Role => "role",
            DocumentKind::Trainer => "trainer",
            DocumentKind::Vacancy => "vacancy",
            DocumentKind::Partner => "partner",
            DocumentKind::Configuration => "configuration",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            DocumentKind::Person => "Person",
            DocumentKind::Post => "Post",
            DocumentKind::Page => "Page",
            DocumentKind::Event => "Event",
            DocumentKind::Programme => "Programme",
            DocumentKind::ProgrammePage => "Programme Page",
            DocumentKind::Member => "Member",
            DocumentKind::Role => "Role",
            DocumentKind::Trainer => "Trainer",
            DocumentKind::Vacancy => "Vacancy",
            DocumentKind::Partner => "Partner",
            DocumentKind::Configuration => "Configuration",
        }
    }

    /// Localized types carry a `language` and exist once per locale.
    pub const fn is_localized(self) -> bool {
        matches!(
            self,
            DocumentKind::Post
                | DocumentKind::Page
                | DocumentKind::Event
                | DocumentKind::ProgrammePage
                | DocumentKind::Vacancy
                | DocumentKind::Configuration
        )
    }

    /// At most one document of this kind per locale.
    pub const fn is_singleton(self) -> bool {
        matches!(self, DocumentKind::Configuration)
    }

    /// Kinds whose slug is unique within a locale.
    pub const fn has_slug(self) -> bool {
        matches!(
            self,
            DocumentKind::Post
                | DocumentKind::Page
                | DocumentKind::Event
                | DocumentKind::ProgrammePage
                | DocumentKind::Vacancy
        )
    }

    /// Look a kind up by its `_type`, accepting the legacy aliases.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "contact" => Some(DocumentKind::Person),
            "settings" => Some(DocumentKind::Configuration),
            other => Self::ALL.into_iter().find(|kind| kind.name() == other),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Person(_) => DocumentKind::Person,
            Document::Post(_) => DocumentKind::Post,
            Document::Page(_) => DocumentKind::Page,
            Document::Event(_) => DocumentKind::Event,
            Document::Programme(_) => DocumentKind::Programme,
            Document::ProgrammePage(_) => DocumentKind::ProgrammePage,
            Document::Member(_) => DocumentKind::Member,
            Document::Role(_) => DocumentKind::Role,
            Document::Trainer(_) => DocumentKind::Trainer,
            Document::Vacancy(_) => DocumentKind::Vacancy,
            Document::Partner(_) => DocumentKind::Partner,
            Document::Settings(_) => DocumentKind::Configuration,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Document::Person(d) => &d.id,
            Document::Post(d) => &d.id,
            Document::Page(d) => &d.id,
            Document::Event(d) => &d.id,
            Document::Programme(d) => &d.id,
            Document::ProgrammePage(d) => &d.id,
            Document::Member(d) => &d.id,
            Document::Role(d) => &d.id,
            Document::Trainer(d) => &d.id,
            Document::Vacancy(d) => &d.id,
            Document::Partner(d) => &d.id,
            Document::Settings(d) => &d.id,
        }
    }

    pub fn language(&self) -> Option<Locale> {
        match self {
            Document::Post(d) => d.language,
            Document::Page(d) => d.language,
            Document::Event(d) => d.language,
            Document::ProgrammePage(d) => d.language,
            Document::Vacancy(d) => d.language,
            Document::Settings(d) => d.language,
            _ => None,
        }
    }

    /// Non-empty slug of a slugged document.
    pub fn slug(&self) -> Option<&str> {
        let slug = match self {
            Document::Post(d) => d.slug.as_ref(),
            Document::Page(d) => d.slug.as_ref(),
            Document::Event(d) => d.slug.as_ref(),
            Document::ProgrammePage(d) => d.slug.as_ref(),
            Document::Vacancy(d) => d.slug.as_ref(),
            _ => None,
        };
        slug_str(slug)
    }

    /// Human label used in listings and error messages.
    pub fn label(&self) -> &str {
        match self {
            Document::Person(d) => &d.name,
            Document::Post(d) => &d.title,
            Document::Page(d) => &d.title,
            Document::Event(d) => &d.title,
            Document::Programme(d) => &d.title,
            Document::Vacancy(d) => &d.title,
            Document::Partner(d) => &d.title,
            Document::Member(d) => d.member_id.as_deref().unwrap_or(&d.id),
            _ => self.id(),
        }
    }
}
