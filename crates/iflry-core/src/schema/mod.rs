pub mod event;
pub mod image;
pub mod member;
pub mod names;
pub mod navigation;
pub mod page;
pub mod partner;
pub mod person;
pub mod post;
pub mod programme;
pub mod reference;
pub mod role;
pub mod settings;
pub mod trainer;
pub mod vacancy;

pub use event::{ContactPerson, Event, EventType};
pub use image::{Image, OgImage};
pub use member::{Member, MemberDocument, MemberType, StaticMember};
pub use names::{DocumentId, MemberId, Slug};
pub use navigation::{NavigationItem, NavigationLink, PageLink};
pub use page::{Page, PageType};
pub use partner::Partner;
pub use person::Person;
pub use post::{Post, PostType};
pub use programme::{Programme, ProgrammePage};
pub use reference::Reference;
pub use role::{BureauRole, OfficeRole, Role, RoleEntry, RoleFunction, RoleType};
pub use settings::{
    AnnouncementBanner, Footer, FooterColumn, FooterLink, Settings, SocialLink, SocialPlatform,
};
pub use trainer::Trainer;
pub use vacancy::Vacancy;
