pub mod diagnostics;
pub mod error;
pub mod href;
pub mod labels;
pub mod listing;
pub mod members;
pub mod navigation;
pub mod people;
pub mod validate;

pub use error::{ResolveError, ValidationError};
pub use href::{Section, home_path, resolve_path, section_path, try_resolve_path};
pub use listing::{
    PageItem, Pagination, StaticPath, events_for_programme, latest_posts, open_vacancies,
    past_events, programme_page_slug, static_paths, upcoming_events,
};
pub use members::{
    ImageProbe, MemberBuckets, MemberOverride, MemberOverrides, NoImages, bucket_members,
    merge_members,
};
pub use navigation::{NavEntry, dereference_pages, resolve_navigation};
pub use people::{
    RoleSection, current_roles, group_roles, is_current, past_roles, role_display_name,
};
pub use validate::{find_violations, validate_documents, validate_member_ids};
