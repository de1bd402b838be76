use anyhow::{Result, bail};
use colored::Colorize;
use iflry_loader::{ContentStore, Datasets, load_datasets};
use iflry_resolver::validate::violation_kind;
use iflry_resolver::{ValidationError, find_violations, validate_member_ids};

use crate::utils::load_config;

pub fn cmd_validate() -> Result<()> {
    let config = load_config()?;
    let store = ContentStore::load_strict(&config)?;
    let datasets = load_datasets(&config)?;

    let violations = collect_violations(&store, &datasets);
    if violations.is_empty() {
        println!(
            "{} {} documents",
            "ok:".bright_green().bold(),
            store.len().to_string().bright_yellow()
        );
        return Ok(());
    }

    for err in &violations {
        let kind = violation_kind(err).map(|k| k.name()).unwrap_or("document");
        eprintln!("{} [{}] {}", "error:".bright_red().bold(), kind.bright_white(), err);
    }
    bail!("{} validation error(s)", violations.len());
}

/// Content rule violations, plus the member id check when datasets are present.
pub fn collect_violations(store: &ContentStore, datasets: &Datasets) -> Vec<ValidationError> {
    let mut violations = find_violations(store.documents());
    if !datasets.is_empty()
        && let Err(err) = validate_member_ids(store.documents(), &datasets.ids())
    {
        violations.push(err);
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use iflry_core::{MemberType, StaticMember};
    use serde_json::json;
    use serial_test::serial;
    use tempfile::tempdir;

    use crate::utils::test_support::{CwdGuard, plain_output, write_project};

    fn store(values: Vec<serde_json::Value>) -> ContentStore {
        ContentStore::new(
            values
                .into_iter()
                .map(|v| serde_json::from_value(v).unwrap())
                .collect(),
        )
    }

    fn member(id: &str) -> StaticMember {
        StaticMember {
            id: id.to_string(),
            name: id.to_uppercase(),
            country: None,
            member_type: MemberType::Full,
            website: None,
            wiki: None,
            fb: None,
            twitter: None,
            ig: None,
        }
    }

    #[test]
    fn member_ids_checked_only_with_datasets() {
        let store = store(vec![json!({"_type": "member", "_id": "m1", "memberId": "ghost"})]);
        assert!(collect_violations(&store, &Datasets::default()).is_empty());

        let datasets = Datasets {
            general: vec![member("lyb")],
            regional: Vec::new(),
        };
        let violations = collect_violations(&store, &datasets);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().contains("ghost"));
    }

    #[test]
    fn reports_every_violation() {
        let store = store(vec![
            json!({"_type": "page", "_id": "a", "title": "A", "language": "en", "slug": {"current": "x"}}),
            json!({"_type": "page", "_id": "b", "title": "B", "language": "en", "slug": {"current": "x"}}),
            json!({"_type": "programme", "_id": "prog", "title": "P", "email": "p@example.org"}),
        ]);
        let violations = collect_violations(&store, &Datasets::default());
        assert_eq!(violations.len(), 2);
    }

    #[test]
    #[serial]
    fn cmd_validate_fails_on_violations() {
        plain_output();
        let tmp = tempdir().unwrap();
        write_project(
            tmp.path(),
            &[(
                "content/event.json",
                r#"{"_type": "event", "_id": "e1", "title": "GA", "type": "ga", "location": "Brussels",
                    "language": "en", "start": "2024-05-02T10:00:00Z", "end": "2024-05-01T10:00:00Z"}"#,
            )],
        );
        let _guard = CwdGuard::new(tmp.path());

        let err = cmd_validate().unwrap_err();
        assert!(err.to_string().contains("1 validation error"));
    }

    #[test]
    #[serial]
    fn cmd_validate_reports_undecodable_documents() {
        plain_output();
        let tmp = tempdir().unwrap();
        write_project(
            tmp.path(),
            &[(
                "content/role.json",
                r#"{"_type": "role", "_id": "r1", "type": "office", "person": {"_ref": "ada"}, "start": "2024-01-01"}"#,
            )],
        );
        let _guard = CwdGuard::new(tmp.path());

        let err = format!("{:#}", cmd_validate().unwrap_err());
        assert!(err.contains("role.json"), "{err}");
        assert!(err.contains("email"), "{err}");
    }

    #[test]
    #[serial]
    fn cmd_validate_passes_on_clean_content() {
        plain_output();
        let tmp = tempdir().unwrap();
        write_project(
            tmp.path(),
            &[(
                "content/page.json",
                r#"{"_type": "page", "_id": "about", "title": "About", "language": "en", "slug": {"current": "about"}}"#,
            )],
        );
        let _guard = CwdGuard::new(tmp.path());

        cmd_validate().unwrap();
    }
}
