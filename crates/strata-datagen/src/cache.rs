//! The digest map persisted between generation runs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::digest::ContentDigest;
use crate::error::{DatagenError, DatagenResult};

/// Digests of the previous run's outputs, keyed by path relative to the
/// provider root.
///
/// The on-disk form is one `<hex digest> <relative path>` line per entry,
/// sorted by path so the cache file itself diffs cleanly.
#[derive(Debug, Default)]
pub struct DigestCache {
    entries: HashMap<PathBuf, ContentDigest>,
}

impl DigestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a cache file. A missing file is an empty cache: the first run
    /// starts from nothing and writes everything.
    pub fn load(path: &Path) -> DatagenResult<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = fs::read_to_string(path)?;
        let mut entries = HashMap::new();
        for (index, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let malformed = || DatagenError::InvalidCacheLine {
                number: index + 1,
                line: line.to_string(),
            };
            let (digest, relative) = line.split_once(' ').ok_or_else(malformed)?;
            let digest = ContentDigest::from_hex(digest).map_err(|_| malformed())?;
            entries.insert(PathBuf::from(relative), digest);
        }
        Ok(DigestCache { entries })
    }

    /// Persist the cache for the next run.
    pub fn save(&self, path: &Path) -> DatagenResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|(relative, _)| *relative);
        let mut text = String::new();
        for (relative, digest) in entries {
            text.push_str(&format!("{} {}\n", digest.to_hex(), relative.display()));
        }
        fs::write(path, text)?;
        Ok(())
    }

    /// Whether the recorded digest for a path equals `digest`.
    pub fn matches(&self, relative: &Path, digest: &ContentDigest) -> bool {
        self.entries.get(relative) == Some(digest)
    }

    pub fn record(&mut self, relative: PathBuf, digest: ContentDigest) {
        self.entries.insert(relative, digest);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
