use std::path::{Path, PathBuf};

/// Switches the working directory for the lifetime of the guard.
pub struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    pub fn new(dir: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}
