use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use iflry_config::SiteConfig;
use iflry_core::{Document, Locale, Settings};
use iflry_loader::{CONFIG_FILE, write_dataset, write_document};

pub fn cmd_init() -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE);
    if path.exists() {
        bail!("{CONFIG_FILE} already exists");
    }

    let config = SiteConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).context("write iflry.json")?;

    for dir in [config.content_dir(), config.data_dir()] {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    println!("{} {}", "created".bright_green(), path.display());

    for locale in config.locales() {
        let written = write_document(&config, &empty_settings(locale))?;
        println!("{} {}", "created".bright_green(), written.display());
    }
    for dataset in [config.members_path(), config.regional_members_path()] {
        if !dataset.exists() {
            write_dataset(&dataset, &[])?;
            println!("{} {}", "created".bright_green(), dataset.display());
        }
    }
    Ok(())
}

/// Configuration document a new project starts with for `locale`.
fn empty_settings(locale: Locale) -> Document {
    Document::Settings(Settings {
        id: format!("configuration-{locale}"),
        language: Some(locale),
        description: Vec::new(),
        navigation: Vec::new(),
        og_image: None,
        announcement_banner: None,
        footer: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iflry_loader::{ContentStore, load_datasets};
    use serial_test::serial;
    use tempfile::tempdir;

    use crate::utils::test_support::{CwdGuard, plain_output};

    #[test]
    #[serial]
    fn cmd_init_creates_config() {
        plain_output();
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());

        cmd_init().unwrap();
        assert!(PathBuf::from(CONFIG_FILE).exists());
        assert!(PathBuf::from("content").is_dir());

        let config = iflry_loader::load_config().unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    #[serial]
    fn cmd_init_seeds_settings_and_datasets() {
        plain_output();
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());

        cmd_init().unwrap();
        assert!(PathBuf::from("content/configuration/configuration-fr.json").exists());

        let config = iflry_loader::load_config().unwrap();
        let store = ContentStore::load_strict(&config).unwrap();
        for locale in config.locales() {
            let settings = store.settings(locale).unwrap();
            assert!(settings.navigation.is_empty());
        }
        assert!(load_datasets(&config).unwrap().is_empty());
        assert!(PathBuf::from("data/regional-members.json").exists());
    }

    #[test]
    #[serial]
    fn cmd_init_fails_when_exists() {
        plain_output();
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());

        cmd_init().unwrap();
        let err = cmd_init().unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
