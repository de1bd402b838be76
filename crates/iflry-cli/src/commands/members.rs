use anyhow::Result;
use colored::Colorize;
use iflry_core::Member;
use iflry_loader::{PublicDirProbe, load_datasets, load_member_overrides};
use iflry_resolver::bucket_members;

use crate::utils::load_config;

pub fn cmd_members(grouped: bool) -> Result<()> {
    let config = load_config()?;
    let datasets = load_datasets(&config)?;
    let overrides = load_member_overrides(&config);
    let probe = PublicDirProbe::new(config.member_images_dir());

    let members = datasets.merge(&overrides, &probe);
    let out = if grouped {
        render_grouped(&members)
    } else {
        render_members(&members)
    };
    print!("{out}");
    Ok(())
}

fn member_line(member: &Member) -> String {
    let mut line = format!("  - {} {}", member.id.bright_white(), member.name.bright_green());
    if let Some(country) = &member.country {
        line.push_str(&format!(" ({country})"));
    }
    if let Some(image) = &member.image_url {
        line.push_str(&format!(" {}", image.bright_black()));
    }
    line.push('\n');
    line
}

pub fn render_members(members: &[Member]) -> String {
    let mut out = format!(
        "{} {}\n",
        "Members:".bright_cyan().bold(),
        members.len().to_string().bright_yellow()
    );
    for member in members {
        out.push_str(&member_line(member));
    }
    out
}

/// Members under one heading per type; empty buckets are left out.
pub fn render_grouped(members: &[Member]) -> String {
    let buckets = bucket_members(members);
    let mut out = String::new();
    for (member_type, bucket) in buckets.sections() {
        if bucket.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "{} {}\n",
            member_type.title().bright_cyan().bold(),
            bucket.len().to_string().bright_yellow()
        ));
        for member in bucket {
            out.push_str(&member_line(member));
        }
    }
    out
}
