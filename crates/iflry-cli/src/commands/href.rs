use anyhow::Result;
use iflry_core::Locale;
use iflry_naming::is_slug;
use iflry_resolver::{diagnostic, diagnostics, try_resolve_path};

/// Print the canonical path of a document, or warn when it has none.
pub fn cmd_href(document_type: String, locale: Option<Locale>, slug: Option<String>) -> Result<()> {
    if let Some(slug) = slug.as_deref()
        && !slug.trim().is_empty()
        && !is_slug(slug)
    {
        diagnostic!("'{slug}' is not a canonical slug");
    }

    match try_resolve_path(&document_type, locale, slug.as_deref()) {
        Ok(path) => println!("{path}"),
        Err(err) => diagnostics::warn(&err.to_string()),
    }
    Ok(())
}
