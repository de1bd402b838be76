use serde::{Deserialize, Serialize};

/// A text run inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Span {
    #[serde(rename = "_type", default = "span_type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<String>,
}

fn span_type() -> String {
    "span".to_string()
}

/// A link annotation attached to spans through `marks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// One rich-text block. Non-`block` entries (images, embeds) keep only their type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Span>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mark_defs: Vec<MarkDef>,
}

impl Block {
    /// Plain paragraph holding one span.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: "block".to_string(),
            style: Some("normal".to_string()),
            children: vec![Span {
                kind: span_type(),
                text: text.into(),
                marks: Vec::new(),
            }],
            mark_defs: Vec::new(),
        }
    }

    fn plain_text(&self) -> String {
        if self.kind != "block" {
            return String::new();
        }
        self.children
            .iter()
            .filter(|span| span.kind == "span")
            .map(|span| span.text.as_str())
            .collect()
    }
}

pub type PortableText = Vec<Block>;

/// Flatten rich text to a single line: spans joined per block, blocks joined by a space.
pub fn to_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Plain-text teaser of at most `max_len` characters.
pub fn excerpt(blocks: &[Block], max_len: usize) -> String {
    iflry_naming::truncate_text(&to_plain_text(blocks), max_len)
}
