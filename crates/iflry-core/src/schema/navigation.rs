use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::schema::names::{DocumentId, Slug};
use crate::schema::page::PageType;

/// A page targeted by a navigation item.
///
/// Stored as a reference (`_ref`); `slug`, `type` and `language` are filled in
/// once the reference is dereferenced against the page documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PageLink {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<DocumentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub page_type: Option<PageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
}

/// Link target of a navigation item, discriminated by `linkType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "linkType", rename_all = "camelCase")]
pub enum NavigationLink {
    Page {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        page: Option<PageLink>,
    },
    Events,
    Posts,
    Trainers,
    Vacancies,
    Custom {
        #[serde(rename = "customUrl", default, skip_serializing_if = "Option::is_none")]
        custom_url: Option<String>,
    },
    Submenu {
        #[serde(default)]
        children: Vec<NavigationItem>,
    },
    #[serde(other)]
    Unknown,
}

impl NavigationLink {
    /// Section segment for the link types that point at a fixed listing.
    pub const fn listing_segment(&self) -> Option<&'static str> {
        match self {
            NavigationLink::Events => Some("events"),
            NavigationLink::Posts => Some("posts"),
            NavigationLink::Trainers => Some("trainers"),
            NavigationLink::Vacancies => Some("vacancies"),
            _ => None,
        }
    }
}

/// One entry of the site navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct NavigationItem {
    pub title: String,
    #[serde(flatten)]
    pub link: NavigationLink,
}

impl NavigationItem {
    pub fn new(title: impl Into<String>, link: NavigationLink) -> Self {
        Self {
            title: title.into(),
            link,
        }
    }

    /// Depth of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match &self.link {
            NavigationLink::Submenu { children } => {
                1 + children.iter().map(NavigationItem::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}
