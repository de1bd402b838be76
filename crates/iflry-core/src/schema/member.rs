use serde::{Deserialize, Serialize};

use crate::schema::names::{DocumentId, MemberId};

/// Membership category. Values outside the known four land in `Uncategorized`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    #[serde(alias = "full-member")]
    Full,
    #[serde(alias = "associate-member")]
    Associate,
    #[serde(alias = "observer-member")]
    Observer,
    #[serde(alias = "regional-member")]
    Regional,
    #[default]
    #[serde(other)]
    Uncategorized,
}

impl MemberType {
    pub const fn as_str(self) -> &'static str {
        match self {
            MemberType::Full => "full",
            MemberType::Associate => "associate",
            MemberType::Observer => "observer",
            MemberType::Regional => "regional",
            MemberType::Uncategorized => "uncategorized",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            MemberType::Full => "Full Members",
            MemberType::Associate => "Associate Members",
            MemberType::Observer => "Observer Members",
            MemberType::Regional => "Regional Members",
            MemberType::Uncategorized => "Other Members",
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, MemberType::Uncategorized)
    }
}

/// One record of the general or regional membership dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct StaticMember {
    pub id: MemberId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "type", default)]
    pub member_type: MemberType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ig: Option<String>,
}

/// CMS document overriding fields of a dataset member.
///
/// `logo` holds the asset URL as the content query projects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MemberDocument {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ig: Option<String>,
}

/// A dataset member merged with its CMS override and resolved image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub member_type: MemberType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ig: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::full("\"full\"", MemberType::Full)]
    #[case::studio_alias("\"full-member\"", MemberType::Full)]
    #[case::regional("\"regional\"", MemberType::Regional)]
    #[case::unknown("\"honorary\"", MemberType::Uncategorized)]
    fn member_type_parses(#[case] json: &str, #[case] expected: MemberType) {
        let parsed: MemberType = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn static_member_without_type_is_uncategorized() {
        let member: StaticMember =
            serde_json::from_str(r#"{"id":"lyw","name":"Liberal Youth Wales"}"#).unwrap();
        assert_eq!(member.member_type, MemberType::Uncategorized);
        assert!(!member.member_type.is_known());
    }
}
