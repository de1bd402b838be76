//! Text and naming helpers shared by the iflry crates.
//!
//! This crate has no dependencies. It derives URL slugs from titles, turns
//! kebab-case identifiers into human labels and shortens text for teasers.

/// Maximum slug length accepted by the studio.
pub const DEFAULT_SLUG_MAX_LENGTH: usize = 96;

/// Default teaser length used by [`truncate_text`] callers.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 150;

// ============================================================================
// Slugs
// ============================================================================

/// Derive a URL-safe slug from a title.
///
/// Letters and digits are lowercased and kept, every other run of characters
/// collapses into a single `-`. The result never starts or ends with `-` and
/// holds at most `max_len` characters.
///
/// # Examples
/// ```
/// use iflry_naming::slugify;
///
/// assert_eq!(slugify("Youth Academy 2025", 96), "youth-academy-2025");
/// assert_eq!(slugify("  Liberal -- Values!  ", 96), "liberal-values");
/// assert_eq!(slugify("Democracy Lab", 9), "democracy");
/// ```
pub fn slugify(source: &str, max_len: usize) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    let mut len = 0;

    for c in source.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                if len + 1 >= max_len {
                    break;
                }
                slug.push('-');
                len += 1;
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                if len >= max_len {
                    break;
                }
                slug.push(lower);
                len += 1;
            }
            if len >= max_len {
                break;
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Returns true when `value` is already a well-formed slug.
///
/// # Examples
/// ```
/// use iflry_naming::is_slug;
///
/// assert!(is_slug("general-assembly-2024"));
/// assert!(!is_slug("General Assembly"));
/// assert!(!is_slug("-leading"));
/// assert!(!is_slug(""));
/// ```
pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c == '-' || (c.is_alphanumeric() && !c.is_uppercase()))
}

// ============================================================================
// Labels
// ============================================================================

/// Turn a kebab-case identifier into a title-cased label.
///
/// # Examples
/// ```
/// use iflry_naming::humanize;
///
/// assert_eq!(humanize("bureau-member"), "Bureau Member");
/// assert_eq!(humanize("ga"), "Ga");
/// assert_eq!(humanize(""), "");
/// ```
pub fn humanize(identifier: &str) -> String {
    identifier
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Text
// ============================================================================

/// Shorten `text` to at most `max_len` characters, appending `...` when cut.
///
/// Text that already fits is returned unchanged.
///
/// # Examples
/// ```
/// use iflry_naming::truncate_text;
///
/// assert_eq!(truncate_text("short", 150), "short");
/// assert_eq!(truncate_text("hello world", 6), "hello...");
/// ```
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}...", cut.trim())
}
