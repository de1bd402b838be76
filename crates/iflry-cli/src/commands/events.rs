use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use iflry_core::schema::names::slug_str;
use iflry_core::{Event, Locale};
use iflry_resolver::{PageItem, Pagination, past_events, resolve_path, upcoming_events};

use crate::utils::{load_project, now_or, pick_locale};

pub fn cmd_events(
    locale: Option<Locale>,
    page: Option<String>,
    archive: bool,
    date: Option<DateTime<Utc>>,
) -> Result<()> {
    let (config, store) = load_project()?;
    let locale = pick_locale(&config, locale);
    let events = store.events(locale);
    let now = now_or(date);
    let listed = if archive {
        past_events(&events, now)
    } else {
        upcoming_events(&events, now)
    };

    let pagination = Pagination::new(page.as_deref(), listed.len(), config.items_per_page());
    print!("{}", render_events(pagination.slice(&listed), &pagination, locale));
    Ok(())
}

/// Page links as text: `1 … 4 [5] 6 … 9`.
pub fn render_window(pagination: &Pagination) -> String {
    pagination
        .window()
        .into_iter()
        .map(|item| match item {
            PageItem::Page(p) if p == pagination.page => format!("[{p}]"),
            PageItem::Page(p) => p.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_events(events: &[&Event], pagination: &Pagination, locale: Locale) -> String {
    let mut out = format!(
        "{} {} ({} {} / {})\n",
        "Events:".bright_cyan().bold(),
        pagination.total_items.to_string().bright_yellow(),
        "page".bright_white(),
        pagination.page,
        pagination.total_pages()
    );
    for event in events {
        out.push_str(&format!(
            "  - {} {} [{}] {}",
            event.start.format("%Y-%m-%d"),
            event.title.bright_green(),
            event.event_type.label(),
            event.location
        ));
        if let Some(path) = resolve_path("event", Some(locale), slug_str(event.slug.as_ref())) {
            out.push_str(&format!(" {}", path.bright_white()));
        }
        out.push('\n');
    }
    if pagination.total_pages() > 1 {
        out.push_str(&format!("  {}\n", render_window(pagination)));
    }
    out
}
