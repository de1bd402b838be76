use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::names::DocumentId;
use crate::schema::person::Person;
use crate::schema::reference::Reference;

/// Organizational function a role assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum RoleType {
    BureauMember,
    Ombudsperson,
    AdvisoryCouncil,
    RegionalRepresentative,
    Office,
    IndividualMember,
    HonoraryMember,
}

impl RoleType {
    pub const ALL: [RoleType; 7] = [
        RoleType::BureauMember,
        RoleType::Ombudsperson,
        RoleType::AdvisoryCouncil,
        RoleType::RegionalRepresentative,
        RoleType::Office,
        RoleType::IndividualMember,
        RoleType::HonoraryMember,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RoleType::BureauMember => "bureau-member",
            RoleType::Ombudsperson => "ombudsperson",
            RoleType::AdvisoryCouncil => "advisory-council",
            RoleType::RegionalRepresentative => "regional-representative",
            RoleType::Office => "office",
            RoleType::IndividualMember => "individual-member",
            RoleType::HonoraryMember => "honorary-member",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == value)
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum BureauRole {
    President,
    SecretaryGeneral,
    Treasurer,
    VicePresident,
}

impl BureauRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            BureauRole::President => "president",
            BureauRole::SecretaryGeneral => "secretary-general",
            BureauRole::Treasurer => "treasurer",
            BureauRole::VicePresident => "vice-president",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum OfficeRole {
    ExecutiveDirector,
    ProjectManager,
    Intern,
}

impl OfficeRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            OfficeRole::ExecutiveDirector => "executive-director",
            OfficeRole::ProjectManager => "project-manager",
            OfficeRole::Intern => "intern",
        }
    }
}

/// The function of a role together with the fields that only exist for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoleFunction {
    BureauMember {
        #[serde(rename = "bureauRole", default, skip_serializing_if = "Option::is_none")]
        bureau_role: Option<BureauRole>,
    },
    Ombudsperson,
    AdvisoryCouncil,
    RegionalRepresentative {
        /// Regional member organization.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        organization: Option<Reference>,
    },
    Office {
        #[serde(rename = "officeRole", default, skip_serializing_if = "Option::is_none")]
        office_role: Option<OfficeRole>,
    },
    IndividualMember,
    HonoraryMember,
}

impl RoleFunction {
    pub const fn role_type(&self) -> RoleType {
        match self {
            RoleFunction::BureauMember { .. } => RoleType::BureauMember,
            RoleFunction::Ombudsperson => RoleType::Ombudsperson,
            RoleFunction::AdvisoryCouncil => RoleType::AdvisoryCouncil,
            RoleFunction::RegionalRepresentative { .. } => RoleType::RegionalRepresentative,
            RoleFunction::Office { .. } => RoleType::Office,
            RoleFunction::IndividualMember => RoleType::IndividualMember,
            RoleFunction::HonoraryMember => RoleType::HonoraryMember,
        }
    }
}

/// A time-bounded assignment of a person to a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(flatten)]
    pub function: RoleFunction,
    pub person: Reference,
    /// Free-form title shown instead of the function label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub email: String,
    pub start: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

/// Flat role record as returned by the people queries.
///
/// Every field is optional because query results are untrusted; entries
/// without a `type` are dropped when grouped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RoleEntry {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bureau_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<DocumentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl RoleEntry {
    /// Project a typed role (and the person it references) into the flat shape.
    pub fn from_role(role: &Role, person: Option<&Person>) -> Self {
        let (bureau_role, office_role, organization) = match &role.function {
            RoleFunction::BureauMember { bureau_role } => {
                (bureau_role.map(|r| r.as_str().to_string()), None, None)
            }
            RoleFunction::Office { office_role } => {
                (None, office_role.map(|r| r.as_str().to_string()), None)
            }
            RoleFunction::RegionalRepresentative { organization } => {
                (None, None, organization.as_ref().map(|r| r.target.clone()))
            }
            _ => (None, None, None),
        };

        Self {
            id: role.id.clone(),
            role_type: Some(role.function.role_type().as_str().to_string()),
            bureau_role,
            office_role,
            title: role.title.clone().filter(|t| !t.trim().is_empty()),
            email: Some(role.email.clone()),
            organization,
            name: person.map(|p| p.name.clone()),
            picture: person
                .and_then(|p| p.picture.asset.as_ref())
                .map(|asset| asset.target.clone()),
            start: Some(role.start),
            end: role.end,
        }
    }

    pub fn parsed_type(&self) -> Option<RoleType> {
        self.role_type.as_deref().and_then(RoleType::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_reads_tagged_function() {
        let role: Role = serde_json::from_value(json!({
            "_id": "r1",
            "type": "bureau-member",
            "bureauRole": "treasurer",
            "person": {"_ref": "p1"},
            "email": "treasurer@example.org",
            "start": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(
            role.function,
            RoleFunction::BureauMember {
                bureau_role: Some(BureauRole::Treasurer)
            }
        );
        assert_eq!(role.end, None);
    }

    #[test]
    fn role_ignores_fields_of_other_functions() {
        let role: Role = serde_json::from_value(json!({
            "_id": "r2",
            "type": "ombudsperson",
            "bureauRole": "president",
            "person": {"_ref": "p2"},
            "email": "ombuds@example.org",
            "start": "2023-05-01",
            "end": "2025-05-01"
        }))
        .unwrap();

        assert_eq!(role.function, RoleFunction::Ombudsperson);
    }

    #[test]
    fn entry_from_role_flattens_function() {
        let role: Role = serde_json::from_value(json!({
            "_id": "r3",
            "type": "office",
            "officeRole": "executive-director",
            "person": {"_ref": "p3"},
            "title": " ",
            "email": "ed@example.org",
            "start": "2022-09-01"
        }))
        .unwrap();
        let person: Person = serde_json::from_value(json!({
            "_id": "p3",
            "name": "Ada",
            "picture": {"asset": {"_ref": "image-abc-200x200-png"}}
        }))
        .unwrap();

        let entry = RoleEntry::from_role(&role, Some(&person));
        assert_eq!(entry.role_type.as_deref(), Some("office"));
        assert_eq!(entry.office_role.as_deref(), Some("executive-director"));
        assert_eq!(entry.bureau_role, None);
        assert_eq!(entry.title, None);
        assert_eq!(entry.name.as_deref(), Some("Ada"));
        assert_eq!(entry.parsed_type(), Some(RoleType::Office));
    }

    #[test]
    fn role_type_parse_rejects_unknown() {
        assert_eq!(RoleType::parse("mascot"), None);
        assert_eq!(RoleType::parse("honorary-member"), Some(RoleType::HonoraryMember));
    }
}
