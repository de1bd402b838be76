use anyhow::Result;
use colored::Colorize;
use iflry_core::Locale;
use iflry_resolver::NavEntry;

use crate::utils::{load_project, pick_locale};

pub fn cmd_nav(locale: Option<Locale>) -> Result<()> {
    let (config, store) = load_project()?;
    let locale = pick_locale(&config, locale);
    print!("{}", render_navigation(&store.navigation(locale)));
    Ok(())
}

/// One line per entry, children indented under their group.
pub fn render_navigation(entries: &[NavEntry]) -> String {
    let mut out = String::new();
    render_level(entries, 0, &mut out);
    out
}

fn render_level(entries: &[NavEntry], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for entry in entries {
        match entry {
            NavEntry::Link { title, href } => {
                out.push_str(&format!(
                    "{indent}- {} {}\n",
                    title.bright_green(),
                    href.bright_white()
                ));
            }
            NavEntry::Group { title, children } => {
                out.push_str(&format!("{indent}+ {}\n", title.bright_cyan().bold()));
                render_level(children, depth + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    use crate::utils::test_support::plain_output;

    fn link(title: &str, href: &str) -> NavEntry {
        NavEntry::Link {
            title: title.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn renders_nested_groups() {
        plain_output();
        let entries = vec![
            link("News", "/fr/posts"),
            NavEntry::Group {
                title: "About".to_string(),
                children: vec![
                    link("Members", "/fr/members"),
                    NavEntry::Group {
                        title: "Team".to_string(),
                        children: vec![link("People", "/fr/people")],
                    },
                ],
            },
        ];
        assert_snapshot!(render_navigation(&entries).trim_end(), @r"
        - News /fr/posts
        + About
          - Members /fr/members
          + Team
            - People /fr/people
        ");
    }

    #[test]
    fn empty_navigation_renders_nothing() {
        assert_eq!(render_navigation(&[]), "");
    }
}
