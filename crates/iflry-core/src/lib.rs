//! Content model of the iflry site: document types, locales and rich text.

pub mod document;
pub mod i18n;
pub mod locale;
pub mod portable_text;
pub mod schema;

pub use document::{Document, DocumentKind};
pub use i18n::{InternationalizedString, LocalizedValue};
pub use locale::{Language, Locale, ParseLocaleError, SUPPORTED_LOCALES};
pub use portable_text::{Block, PortableText, excerpt, to_plain_text};
pub use schema::{
    AnnouncementBanner, BureauRole, ContactPerson, DocumentId, Event, EventType, Footer, Image,
    Member, MemberDocument, MemberId, MemberType, NavigationItem, NavigationLink, OfficeRole,
    OgImage, Page, PageLink, PageType, Partner, Person, Post, PostType, Programme, ProgrammePage,
    Reference, Role, RoleEntry, RoleFunction, RoleType, Settings, Slug, StaticMember, Trainer,
    Vacancy,
};
