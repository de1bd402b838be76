//! Soft-failure diagnostics.
//!
//! Resolution never fails hard on bad content; it reports here and carries on.
//! Messages go to stderr unless quiet mode is on.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use colored::Colorize;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Total diagnostics raised in this process, including silenced ones.
static RAISED: AtomicUsize = AtomicUsize::new(0);

/// Silence diagnostics globally (set by `--quiet`).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::SeqCst)
}

pub fn raised_count() -> usize {
    RAISED.load(Ordering::SeqCst)
}

/// Report a recoverable content problem.
pub fn warn(message: &str) {
    RAISED.fetch_add(1, Ordering::SeqCst);
    if !is_quiet() {
        eprintln!("{} {}", "warning:".bright_yellow().bold(), message);
    }
}

/// Format and report a diagnostic.
///
/// ```ignore
/// diagnostic!("unknown member type for '{}'", id);
/// ```
#[macro_export]
macro_rules! diagnostic {
    ($($arg:tt)*) => {{
        $crate::diagnostics::warn(&format!($($arg)*))
    }};
}
