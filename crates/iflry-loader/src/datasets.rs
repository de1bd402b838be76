use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use iflry_config::SiteConfig;
use iflry_core::{Member, StaticMember};
use iflry_resolver::members::dataset_ids;
use iflry_resolver::{ImageProbe, MemberOverrides, diagnostic, merge_members};

use crate::content::parse_value;

/// The two static membership datasets shipped with the site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Datasets {
    pub general: Vec<StaticMember>,
    pub regional: Vec<StaticMember>,
}

impl Datasets {
    /// Every member id known to either dataset.
    pub fn ids(&self) -> HashSet<&str> {
        dataset_ids(&self.general, &self.regional)
    }

    pub fn len(&self) -> usize {
        self.general.len() + self.regional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply CMS overrides and image lookups to both datasets.
    pub fn merge(&self, overrides: &MemberOverrides, probe: &dyn ImageProbe) -> Vec<Member> {
        merge_members(&self.general, &self.regional, overrides, probe)
    }
}

/// Load both datasets named by the configuration.
pub fn load_datasets(config: &SiteConfig) -> Result<Datasets> {
    Ok(Datasets {
        general: load_dataset(&config.members_path())?,
        regional: load_dataset(&config.regional_members_path())?,
    })
}

/// Load one membership dataset. A missing file is an empty dataset.
pub fn load_dataset(path: &Path) -> Result<Vec<StaticMember>> {
    if !path.exists() {
        diagnostic!("membership dataset not found: {}", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("read membership dataset: {}", path.display()))?;
    parse_dataset(path, &content)
}

/// Members listed in one dataset file's text.
pub fn parse_dataset(path: &Path, content: &str) -> Result<Vec<StaticMember>> {
    let value = parse_value(path, content)?;
    let members: Vec<StaticMember> = serde_json::from_value(value)
        .with_context(|| format!("parse membership dataset: {}", path.display()))?;

    let mut seen = HashSet::new();
    for member in &members {
        if !seen.insert(member.id.as_str()) {
            diagnostic!("duplicate member id '{}' in {}", member.id, path.display());
        }
    }
    Ok(members)
}

/// Write a dataset as pretty JSON, creating parent directories.
pub fn write_dataset(path: &Path, members: &[StaticMember]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(members).context("serialize membership dataset")?;
    fs::write(path, text).with_context(|| format!("write dataset: {}", path.display()))?;
    Ok(())
}
