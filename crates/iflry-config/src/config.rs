use std::path::{Path, PathBuf};

use iflry_core::{Locale, SUPPORTED_LOCALES};
use serde::{Deserialize, Serialize};

use crate::file_format::FileFormat;

/// Listing page size used by the events and posts sections.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Number of posts featured on the home page.
pub const DEFAULT_FEATURED_POSTS: usize = 3;

/// Top-level iflry configuration (`iflry.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Content documents, one per file.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
    /// Static membership datasets.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Public assets; member images live under `members/`.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    #[serde(default = "default_members_file")]
    pub members_file: String,
    #[serde(default = "default_regional_members_file")]
    pub regional_members_file: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<Locale>,
    #[serde(default)]
    pub default_locale: Locale,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default = "default_featured_posts")]
    pub featured_posts: usize,
    #[serde(default)]
    pub content_format: FileFormat,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_members_file() -> String {
    "members.json".to_string()
}

fn default_regional_members_file() -> String {
    "regional-members.json".to_string()
}

fn default_locales() -> Vec<Locale> {
    SUPPORTED_LOCALES.to_vec()
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_featured_posts() -> usize {
    DEFAULT_FEATURED_POSTS
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            data_dir: default_data_dir(),
            public_dir: default_public_dir(),
            export_dir: default_export_dir(),
            members_file: default_members_file(),
            regional_members_file: default_regional_members_file(),
            locales: default_locales(),
            default_locale: Locale::default(),
            items_per_page: default_items_per_page(),
            featured_posts: default_featured_posts(),
            content_format: FileFormat::default(),
        }
    }
}

impl SiteConfig {
    /// Directory holding content documents.
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Directory holding the membership datasets.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory served as-is by the site.
    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Where `export` writes locale bundles.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// General membership dataset.
    pub fn members_path(&self) -> PathBuf {
        self.data_dir.join(&self.members_file)
    }

    /// Regional membership dataset.
    pub fn regional_members_path(&self) -> PathBuf {
        self.data_dir.join(&self.regional_members_file)
    }

    /// Directory probed for `{memberId}.{ext}` images.
    pub fn member_images_dir(&self) -> PathBuf {
        self.public_dir.join("members")
    }

    /// Configured locales, falling back to every supported locale when empty.
    pub fn locales(&self) -> Vec<Locale> {
        if self.locales.is_empty() {
            SUPPORTED_LOCALES.to_vec()
        } else {
            self.locales.clone()
        }
    }

    pub fn supports(&self, locale: Locale) -> bool {
        self.locales().contains(&locale)
    }

    /// Default locale, or the first configured one if the default is not enabled.
    pub fn default_locale(&self) -> Locale {
        if self.supports(self.default_locale) {
            self.default_locale
        } else {
            self.locales()
                .first()
                .copied()
                .unwrap_or(self.default_locale)
        }
    }

    /// Page size for paginated listings; never zero.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page.max(1)
    }

    pub fn featured_posts(&self) -> usize {
        self.featured_posts
    }

    /// Preferred format for new content files.
    pub fn content_format(&self) -> FileFormat {
        self.content_format
    }
}
