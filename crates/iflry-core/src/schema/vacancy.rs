use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::portable_text::PortableText;
use crate::schema::image::Image;
use crate::schema::names::{DocumentId, Slug};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: PortableText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl Vacancy {
    /// Open until the end of the deadline day; no deadline means always open.
    pub fn is_open(&self, today: NaiveDate) -> bool {
        self.deadline.is_none_or(|deadline| deadline >= today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy(deadline: Option<NaiveDate>) -> Vacancy {
        Vacancy {
            id: "v1".into(),
            title: "Intern".into(),
            language: Some(Locale::En),
            slug: None,
            description: Vec::new(),
            image: None,
            location: None,
            application_url: None,
            deadline,
        }
    }

    #[test]
    fn open_on_deadline_day() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(vacancy(Some(today)).is_open(today));
        assert!(!vacancy(today.pred_opt()).is_open(today));
        assert!(vacancy(None).is_open(today));
    }
}
