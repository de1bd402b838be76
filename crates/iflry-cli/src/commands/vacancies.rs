use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use iflry_core::schema::names::slug_str;
use iflry_core::{Locale, Vacancy};
use iflry_resolver::href::{Section, section_path};
use iflry_resolver::open_vacancies;

use crate::utils::{load_project, pick_locale, today_or};

pub fn cmd_vacancies(locale: Option<Locale>, date: Option<NaiveDate>) -> Result<()> {
    let (config, store) = load_project()?;
    let locale = pick_locale(&config, locale);
    let vacancies = store.vacancies(locale);
    let open = open_vacancies(&vacancies, today_or(date));
    print!("{}", render_vacancies(&open, locale));
    Ok(())
}

pub fn render_vacancies(vacancies: &[&Vacancy], locale: Locale) -> String {
    let mut out = format!(
        "{} {}\n",
        "Open vacancies:".bright_cyan().bold(),
        vacancies.len().to_string().bright_yellow()
    );
    for vacancy in vacancies {
        out.push_str(&format!("  - {}", vacancy.title.bright_green()));
        if let Some(location) = &vacancy.location {
            out.push_str(&format!(", {location}"));
        }
        match vacancy.deadline {
            Some(deadline) => out.push_str(&format!(" (until {deadline})")),
            None => out.push_str(" (open)"),
        }
        if let Some(slug) = slug_str(vacancy.slug.as_ref()) {
            let path = format!("{}/{slug}", section_path(locale, Section::Vacancies));
            out.push_str(&format!(" {}", path.bright_white()));
        }
        out.push('\n');
    }
    out
}
