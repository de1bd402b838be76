pub mod config;
pub mod file_format;

pub use config::{DEFAULT_FEATURED_POSTS, DEFAULT_ITEMS_PER_PAGE, SiteConfig};
pub use file_format::FileFormat;
