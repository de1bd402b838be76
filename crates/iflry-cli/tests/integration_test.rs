use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::tempdir;

fn iflry() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("iflry"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write(root: &Path, path: &str, text: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn project() -> tempfile::TempDir {
    let tmp = tempdir().unwrap();
    iflry().current_dir(tmp.path()).arg("init").assert().success();
    write(
        tmp.path(),
        "content/configuration/configuration-fr.json",
        r#"{"_type": "configuration", "_id": "configuration-fr", "language": "fr", "navigation": [
            {"title": "Membres", "linkType": "page", "page": {"_ref": "members-fr"}},
            {"title": "Plus", "linkType": "submenu", "children": [
                {"title": "Contact", "linkType": "custom", "customUrl": "mailto:office@example.org"}
            ]}
        ]}"#,
    );
    write(
        tmp.path(),
        "content/pages/members.json",
        r#"{"_type": "page", "_id": "members-fr", "title": "Membres", "language": "fr", "type": "members"}"#,
    );
    write(
        tmp.path(),
        "data/members.json",
        r#"[{"id": "lyb", "name": "Liberal Youth", "type": "full"}]"#,
    );
    tmp
}

#[test]
fn no_args_shows_help() {
    iflry()
        .assert()
        .success()
        .stdout(predicate::str::contains("iflry"));
}

#[test]
fn help_flag_lists_commands() {
    iflry()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export").and(predicate::str::contains("validate")));
}

#[test]
fn status_outside_project_suggests_init() {
    let tmp = tempdir().unwrap();
    iflry()
        .current_dir(tmp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("iflry init"));
}

#[test]
fn init_seeds_configuration_per_locale() {
    let tmp = tempdir().unwrap();
    iflry()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration-es.json"))
        .stdout(predicate::str::contains("regional-members.json"));
    iflry()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success();
}

#[test]
fn init_twice_fails() {
    let tmp = project();
    iflry()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn href_prints_path() {
    iflry()
        .args(["href", "post", "--locale", "fr", "--slug", "bonjour"])
        .assert()
        .success()
        .stdout("/fr/posts/bonjour\n");
}

#[test]
fn href_warns_on_unknown_type() {
    iflry()
        .args(["href", "gallery", "--slug", "x"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("invalid document type: gallery"));
}

#[test]
fn quiet_silences_warnings() {
    iflry()
        .args(["--quiet", "href", "gallery", "--slug", "x"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn href_rejects_unknown_locale() {
    iflry()
        .args(["href", "post", "--locale", "de", "--slug", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported locale"));
}

#[test]
fn nav_resolves_pages_and_submenus() {
    let tmp = project();
    iflry()
        .current_dir(tmp.path())
        .args(["nav", "--locale", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Membres /fr/members"))
        .stdout(predicate::str::contains("+ Plus"))
        .stdout(predicate::str::contains("  - Contact mailto:office@example.org"));
}

#[test]
fn validate_passes_clean_project() {
    let tmp = project();
    iflry()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
}

#[test]
fn validate_rejects_unknown_member_override() {
    let tmp = project();
    write(
        tmp.path(),
        "content/member.json",
        r#"{"_type": "member", "_id": "m1", "memberId": "ghost"}"#,
    );
    iflry()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown member id 'ghost'"));
}

#[test]
fn members_grouped() {
    let tmp = project();
    iflry()
        .current_dir(tmp.path())
        .args(["members", "--grouped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full Members 1"));
}

#[test]
fn export_writes_bundles() {
    let tmp = project();
    iflry()
        .current_dir(tmp.path())
        .args(["--quiet", "export", "--out", "site"])
        .assert()
        .success();
    for locale in ["en", "fr", "es"] {
        assert!(tmp.path().join("site").join(format!("{locale}.json")).exists());
    }
}

#[test]
fn href_warns_on_non_canonical_slug() {
    iflry()
        .args(["href", "page", "--slug", "About Us"])
        .assert()
        .success()
        .stdout("/pages/About Us\n")
        .stderr(predicate::str::contains("not a canonical slug"));
}
