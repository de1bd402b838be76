use serde::{Deserialize, Serialize};

use crate::schema::names::{DocumentId, published_id};

/// Pointer from one document to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub target: DocumentId,
}

impl Reference {
    pub fn to(target: impl Into<DocumentId>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// True when this reference points at `id` or its draft.
    pub fn points_to(&self, id: &str) -> bool {
        published_id(&self.target) == published_id(id)
    }
}
