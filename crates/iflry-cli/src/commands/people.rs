use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use iflry_core::Locale;
use iflry_resolver::{RoleSection, current_roles, group_roles, past_roles, role_display_name};

use crate::utils::{load_project, now_or, pick_locale};

pub fn cmd_people(locale: Option<Locale>, date: Option<DateTime<Utc>>, archive: bool) -> Result<()> {
    let (config, store) = load_project()?;
    let locale = pick_locale(&config, locale);
    let sections = people_sections(&store.role_entries(), now_or(date), archive);
    print!("{}", render_people(&sections, locale));
    Ok(())
}

/// Current (or, for the archive, past) roles grouped for the people page.
pub fn people_sections(
    entries: &[iflry_core::RoleEntry],
    at: DateTime<Utc>,
    archive: bool,
) -> Vec<RoleSection> {
    let selected = if archive {
        past_roles(entries, at)
    } else {
        current_roles(entries, at)
    };
    group_roles(&selected)
}

pub fn render_people(sections: &[RoleSection], locale: Locale) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!(
            "{} {}\n",
            section.title.bright_cyan().bold(),
            section.entries.len().to_string().bright_yellow()
        ));
        for entry in &section.entries {
            let name = entry.name.as_deref().unwrap_or("(unknown)");
            out.push_str(&format!("  - {}", name.bright_green()));
            let label = role_display_name(entry, locale);
            if !label.is_empty() {
                out.push_str(&format!(", {label}"));
            }
            if let Some(email) = &entry.email {
                out.push_str(&format!(" <{}>", email.bright_white()));
            }
            out.push('\n');
        }
    }
    out
}
