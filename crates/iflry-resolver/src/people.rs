use chrono::{DateTime, NaiveDate, Utc};
use iflry_core::{Locale, RoleEntry, RoleType};
use serde::Serialize;

use crate::labels;

/// Rank given to anything missing from a fixed order table.
pub const UNRANKED: u32 = 999;

/// Display rank of a role type: Bureau first, Individual Members last.
pub const fn role_rank(role_type: RoleType) -> u32 {
    match role_type {
        RoleType::BureauMember => 1,
        RoleType::RegionalRepresentative => 2,
        RoleType::Office => 3,
        RoleType::HonoraryMember => 4,
        RoleType::Ombudsperson => 5,
        RoleType::AdvisoryCouncil => 6,
        RoleType::IndividualMember => 7,
    }
}

pub fn bureau_rank(bureau_role: Option<&str>) -> u32 {
    match bureau_role {
        Some("president") => 1,
        Some("secretary-general") => 2,
        Some("treasurer") => 3,
        Some("vice-president") => 4,
        _ => UNRANKED,
    }
}

pub fn office_rank(office_role: Option<&str>) -> u32 {
    match office_role {
        Some("executive-director") => 1,
        Some("project-manager") => 2,
        Some("intern") => 3,
        _ => UNRANKED,
    }
}

/// One heading on the people page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSection {
    /// Raw `type` value shared by every entry.
    pub role_type: String,
    pub title: String,
    pub rank: u32,
    pub entries: Vec<RoleEntry>,
}

/// Group role entries into ordered sections.
///
/// Entries keep input order inside a section, except bureau and office which
/// are ordered by function. Sections follow the fixed rank table; unknown
/// types come last in first-seen order. Entries without a type are dropped.
pub fn group_roles(entries: &[RoleEntry]) -> Vec<RoleSection> {
    let mut sections: Vec<RoleSection> = Vec::new();

    for entry in entries {
        let Some(role_type) = entry.role_type.as_deref().filter(|t| !t.is_empty()) else {
            continue;
        };
        match sections.iter_mut().find(|s| s.role_type == role_type) {
            Some(section) => section.entries.push(entry.clone()),
            None => sections.push(new_section(role_type, entry.clone())),
        }
    }

    for section in &mut sections {
        match RoleType::parse(&section.role_type) {
            Some(RoleType::BureauMember) => section
                .entries
                .sort_by_key(|e| bureau_rank(e.bureau_role.as_deref())),
            Some(RoleType::Office) => section
                .entries
                .sort_by_key(|e| office_rank(e.office_role.as_deref())),
            _ => {}
        }
    }

    // stable: unranked sections keep first-seen order
    sections.sort_by_key(|s| s.rank);
    sections
}

fn new_section(role_type: &str, first: RoleEntry) -> RoleSection {
    let rank = RoleType::parse(role_type).map_or(UNRANKED, role_rank);
    let title = labels::section_title(role_type)
        .map(str::to_string)
        .unwrap_or_else(|| iflry_naming::humanize(role_type));
    RoleSection {
        role_type: role_type.to_string(),
        title,
        rank,
        entries: vec![first],
    }
}

/// Label shown under a person's name.
///
/// An explicit title wins; otherwise bureau members, office staff and the
/// ombudsperson get a localized function label. Everyone else gets nothing.
pub fn role_display_name(entry: &RoleEntry, locale: Locale) -> String {
    if let Some(title) = entry.title.as_deref().filter(|t| !t.trim().is_empty()) {
        return title.to_string();
    }
    let key = match entry.parsed_type() {
        Some(RoleType::BureauMember) => entry.bureau_role.as_deref(),
        Some(RoleType::Office) => entry.office_role.as_deref(),
        Some(RoleType::Ombudsperson) => Some("ombudsperson"),
        _ => None,
    };
    key.and_then(|k| labels::role_label(locale, k))
        .unwrap_or_default()
        .to_string()
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Started on or before `at` and not yet ended. Dates count from midnight UTC.
pub fn is_current(entry: &RoleEntry, at: DateTime<Utc>) -> bool {
    let Some(start) = entry.start else {
        return false;
    };
    midnight(start) <= at && entry.end.is_none_or(|end| at < midnight(end))
}

/// Ended on or before `at`.
pub fn is_past(entry: &RoleEntry, at: DateTime<Utc>) -> bool {
    entry.end.is_some_and(|end| midnight(end) <= at)
}

/// Roles active at `at`, in input order.
pub fn current_roles(entries: &[RoleEntry], at: DateTime<Utc>) -> Vec<RoleEntry> {
    entries.iter().filter(|e| is_current(e, at)).cloned().collect()
}

/// Roles that ended by `at`, most recently ended first.
pub fn past_roles(entries: &[RoleEntry], at: DateTime<Utc>) -> Vec<RoleEntry> {
    let mut past: Vec<RoleEntry> = entries.iter().filter(|e| is_past(e, at)).cloned().collect();
    past.sort_by(|a, b| b.end.cmp(&a.end));
    past
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn entry(id: &str, role_type: Option<&str>) -> RoleEntry {
        RoleEntry {
            id: id.into(),
            role_type: role_type.map(str::to_string),
            ..Default::default()
        }
    }

    fn bureau(id: &str, role: &str) -> RoleEntry {
        RoleEntry {
            bureau_role: Some(role.into()),
            ..entry(id, Some("bureau-member"))
        }
    }

    fn office(id: &str, role: Option<&str>) -> RoleEntry {
        RoleEntry {
            office_role: role.map(str::to_string),
            ..entry(id, Some("office"))
        }
    }

    fn ids(section: &RoleSection) -> Vec<&str> {
        section.entries.iter().map(|e| e.id.as_str()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn president_before_treasurer_regardless_of_input() {
        let sections = group_roles(&[
            bureau("vp", "vice-president"),
            bureau("t", "treasurer"),
            bureau("p", "president"),
            bureau("sg", "secretary-general"),
        ]);
        assert_eq!(sections.len(), 1);
        assert_eq!(ids(&sections[0]), vec!["p", "sg", "t", "vp"]);
        assert_eq!(sections[0].title, "Bureau");
    }

    #[test]
    fn office_order_puts_unknown_roles_last() {
        let sections = group_roles(&[
            office("x", None),
            office("i", Some("intern")),
            office("ed", Some("executive-director")),
            office("pm", Some("project-manager")),
        ]);
        assert_eq!(ids(&sections[0]), vec!["ed", "pm", "i", "x"]);
    }

    #[test]
    fn sections_follow_rank_table_then_first_seen() {
        let sections = group_roles(&[
            entry("a", Some("individual-member")),
            entry("b", Some("mascot")),
            entry("c", Some("ombudsperson")),
            entry("d", Some("regional-representative")),
            entry("e", Some("auditor")),
            entry("f", Some("bureau-member")),
            entry("g", None),
            entry("h", Some("")),
            entry("i", Some("honorary-member")),
            entry("j", Some("advisory-council")),
            entry("k", Some("office")),
            entry("l", Some("mascot")),
        ]);

        let order: Vec<(&str, u32)> = sections
            .iter()
            .map(|s| (s.role_type.as_str(), s.rank))
            .collect();
        assert_eq!(
            order,
            vec![
                ("bureau-member", 1),
                ("regional-representative", 2),
                ("office", 3),
                ("honorary-member", 4),
                ("ombudsperson", 5),
                ("advisory-council", 6),
                ("individual-member", 7),
                ("mascot", UNRANKED),
                ("auditor", UNRANKED),
            ]
        );
        assert_eq!(sections[7].title, "Mascot");
        assert_eq!(ids(&sections[7]), vec!["b", "l"]);
        let total: usize = sections.iter().map(|s| s.entries.len()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn grouping_is_idempotent() {
        let input = vec![
            bureau("t", "treasurer"),
            entry("o", Some("ombudsperson")),
            bureau("p", "president"),
            entry("z", Some("zzz")),
            office("i", Some("intern")),
        ];
        let once = group_roles(&input);
        let flattened: Vec<RoleEntry> = once.iter().flat_map(|s| s.entries.clone()).collect();
        assert_eq!(group_roles(&flattened), once);
        assert_eq!(group_roles(&input), once);
    }

    #[rstest]
    #[case::title_wins(RoleEntry { title: Some("Chair".into()), ..bureau("1", "president") }, Locale::En, "Chair")]
    #[case::bureau_en(bureau("1", "secretary-general"), Locale::En, "Secretary General")]
    #[case::bureau_fr(bureau("1", "president"), Locale::Fr, "Président·e")]
    #[case::office_es(office("1", Some("executive-director")), Locale::Es, "Dirección Ejecutiva")]
    #[case::ombudsperson(entry("1", Some("ombudsperson")), Locale::En, "Ombudsperson")]
    #[case::office_without_role(office("1", None), Locale::En, "")]
    #[case::bureau_role_on_other_type(RoleEntry { bureau_role: Some("president".into()), ..entry("1", Some("advisory-council")) }, Locale::En, "")]
    #[case::blank_title(RoleEntry { title: Some(" ".into()), ..entry("1", Some("ombudsperson")) }, Locale::En, "Ombudsperson")]
    fn display_names(#[case] entry: RoleEntry, #[case] locale: Locale, #[case] expected: &str) {
        assert_eq!(role_display_name(&entry, locale), expected);
    }

    #[test]
    fn open_ended_role_is_current_from_start() {
        let role = RoleEntry {
            start: Some(date(1990, 1, 1)),
            ..entry("r", Some("honorary-member"))
        };
        for year in [1990, 2000, 2030] {
            let at = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
            assert!(is_current(&role, at));
        }
        let before = Utc.with_ymd_and_hms(1989, 12, 31, 23, 59, 59).unwrap();
        assert!(!is_current(&role, before));
    }

    #[test]
    fn role_ends_at_midnight_of_end_date() {
        let role = RoleEntry {
            start: Some(date(2023, 1, 1)),
            end: Some(date(2024, 6, 1)),
            ..entry("r", Some("office"))
        };
        let last_moment = Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert!(is_current(&role, last_moment));
        assert!(!is_current(&role, end));
        assert!(is_past(&role, end));
    }

    #[test]
    fn role_without_start_is_never_current() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(!is_current(&entry("r", Some("office")), at));
    }

    #[test]
    fn past_roles_newest_end_first() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let roles = vec![
            RoleEntry { end: Some(date(2020, 1, 1)), ..entry("old", Some("office")) },
            RoleEntry { end: None, ..entry("open", Some("office")) },
            RoleEntry { end: Some(date(2024, 1, 1)), ..entry("recent", Some("office")) },
            RoleEntry { end: Some(date(2026, 1, 1)), ..entry("future", Some("office")) },
        ];
        let past: Vec<_> = past_roles(&roles, at).into_iter().map(|e| e.id).collect();
        assert_eq!(past, vec!["recent", "old"]);
    }
}
