use serde::{Deserialize, Serialize};

use crate::schema::reference::Reference;

/// Image field: an asset reference plus optional alternative text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Image {
    /// An image without an asset reference renders as nothing.
    pub fn has_asset(&self) -> bool {
        self.asset
            .as_ref()
            .is_some_and(|asset| !asset.target.is_empty())
    }
}

/// Social-card image of the site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct OgImage {
    #[serde(flatten)]
    pub image: Image,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_base: Option<String>,
}
