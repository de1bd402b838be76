use std::path::{Path, PathBuf};

use iflry_resolver::ImageProbe;
use iflry_resolver::members::IMAGE_EXTENSIONS;

/// Finds member images as `{dir}/{memberId}.{ext}` on disk.
#[derive(Debug, Clone)]
pub struct PublicDirProbe {
    dir: PathBuf,
    url_prefix: String,
}

impl PublicDirProbe {
    /// Probe `dir`, reporting hits under the `/members` URL prefix.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, "/members")
    }

    pub fn with_prefix(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageProbe for PublicDirProbe {
    fn find_image(&self, member_id: &str) -> Option<String> {
        if member_id.is_empty() || member_id.contains(['/', '\\']) {
            return None;
        }
        IMAGE_EXTENSIONS.iter().find_map(|ext| {
            let file = format!("{member_id}.{ext}");
            // I/O errors count as a miss
            let exists = self.dir.join(&file).try_exists().unwrap_or(false);
            exists.then(|| format!("{}/{file}", self.url_prefix))
        })
    }
}
