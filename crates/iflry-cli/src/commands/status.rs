use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;
use iflry_config::SiteConfig;
use iflry_core::schema::names::is_draft;
use iflry_core::{DocumentKind, Locale};
use iflry_loader::{ContentStore, Datasets, load_datasets};

use crate::utils::load_project;

pub fn cmd_status() -> Result<()> {
    let (config, store) = load_project()?;
    let datasets = load_datasets(&config)?;
    print!("{}", render_status(&config, &store, &datasets));
    Ok(())
}

/// Published document counts per kind, split by language for localized kinds.
pub fn document_counts(store: &ContentStore) -> BTreeMap<DocumentKind, BTreeMap<Option<Locale>, usize>> {
    let mut counts: BTreeMap<DocumentKind, BTreeMap<Option<Locale>, usize>> = BTreeMap::new();
    for doc in store.published() {
        *counts
            .entry(doc.kind())
            .or_default()
            .entry(doc.language())
            .or_default() += 1;
    }
    counts
}

pub fn render_status(config: &SiteConfig, store: &ContentStore, datasets: &Datasets) -> String {
    let mut out = String::new();
    let line = |out: &mut String, label: &str, value: String| {
        out.push_str(&format!("  {} {}\n", label.cyan(), value.bright_white()));
    };

    out.push_str(&format!("{}\n", "Configuration:".bright_cyan().bold()));
    line(&mut out, "Content directory:", config.content_dir().display().to_string());
    line(&mut out, "Data directory:", config.data_dir().display().to_string());
    line(&mut out, "Public directory:", config.public_dir().display().to_string());
    line(&mut out, "Export directory:", config.export_dir().display().to_string());
    let locales: Vec<&str> = config.locales().iter().map(|l| l.as_str()).collect();
    line(&mut out, "Locales:", locales.join(", "));
    line(&mut out, "Default locale:", config.default_locale().to_string());
    line(&mut out, "Content format:", format!("{:?}", config.content_format()));
    out.push('\n');

    let drafts = store.documents().iter().filter(|d| is_draft(d.id())).count();
    out.push_str(&format!(
        "{} {} ({} {})\n",
        "Documents:".bright_cyan().bold(),
        (store.len() - drafts).to_string().bright_yellow(),
        drafts.to_string().bright_yellow(),
        "drafts".bright_white()
    ));
    for (kind, per_locale) in document_counts(store) {
        let total: usize = per_locale.values().sum();
        out.push_str(&format!(
            "  {} {} {}",
            "-".bright_white(),
            kind.name().bright_green(),
            total.to_string().bright_blue()
        ));
        if kind.is_localized() {
            let split: Vec<String> = per_locale
                .iter()
                .map(|(locale, n)| match locale {
                    Some(locale) => format!("{locale}: {n}"),
                    None => format!("no language: {n}"),
                })
                .collect();
            out.push_str(&format!(" ({})", split.join(", ")));
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str(&format!("{}\n", "Membership datasets:".bright_cyan().bold()));
    line(&mut out, "General members:", datasets.general.len().to_string());
    line(&mut out, "Regional members:", datasets.regional.len().to_string());
    out
}
