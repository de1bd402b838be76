use anyhow::Result;
use colored::Colorize;
use iflry_resolver::{StaticPath, static_paths};

use crate::utils::load_project;

pub fn cmd_paths() -> Result<()> {
    let (config, store) = load_project()?;
    let paths = static_paths(store.documents(), &config.locales());
    print!("{}", render_paths(&paths));
    Ok(())
}

pub fn render_paths(paths: &[StaticPath]) -> String {
    paths
        .iter()
        .map(|p| format!("{} {}\n", p.kind.name().bright_black(), p.path.bright_white()))
        .collect()
}
