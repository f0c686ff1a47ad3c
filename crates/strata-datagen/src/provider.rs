//! The per-category output front.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error};

use strata_codec::Loadable;
use strata_types::ResourceName;

use crate::cache::DigestCache;
use crate::digest::ContentDigest;
use crate::error::DatagenResult;

/// What happened to one output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file was (re)written.
    Written,
    /// The rendered content matches the previous run; nothing touched.
    UpToDate,
    /// An I/O failure, logged and contained to this output.
    Failed,
}

/// Writes one category of generated files under a root directory.
///
/// Output layout is `root/<namespace>/<category>/<path>.json`. Rendering
/// is canonical — pretty-printed, key order preserved, trailing newline —
/// so the content digest is stable and a byte-identical output can be
/// skipped without reading the file back.
pub struct DataProvider {
    root: PathBuf,
    category: String,
    cache_path: PathBuf,
    cache: DigestCache,
}

impl DataProvider {
    /// Open a provider for one category, loading the previous run's
    /// digest cache if it exists.
    pub fn open(root: impl Into<PathBuf>, category: impl Into<String>) -> DatagenResult<Self> {
        let root = root.into();
        let category = category.into();
        let cache_path = root.join(".cache").join(category.replace('/', "_"));
        let cache = DigestCache::load(&cache_path)?;
        Ok(DataProvider {
            root,
            category,
            cache_path,
            cache,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    fn relative_path(&self, name: &ResourceName) -> PathBuf {
        PathBuf::from(name.namespace())
            .join(&self.category)
            .join(format!("{}.json", name.path()))
    }

    /// Where an output for `name` lands on disk.
    pub fn output_path(&self, name: &ResourceName) -> PathBuf {
        self.root.join(self.relative_path(name))
    }

    /// Serialize a value through its codec and save it.
    pub fn save_value<L: Loadable>(
        &mut self,
        codec: &L,
        name: &ResourceName,
        value: &L::Value,
    ) -> SaveOutcome {
        self.save_document(name, &codec.serialize(value))
    }

    /// Save an already-built document.
    ///
    /// The write is skipped when the rendered content digest matches the
    /// previous run's and the file still exists. A write failure is
    /// logged and isolated: the provider stays usable for the rest of
    /// the batch.
    pub fn save_document(&mut self, name: &ResourceName, document: &Value) -> SaveOutcome {
        let rendered = match serde_json::to_string_pretty(document) {
            Ok(mut text) => {
                text.push('\n');
                text
            }
            Err(e) => {
                error!(name = %name, error = %e, "failed to render output document");
                return SaveOutcome::Failed;
            }
        };
        let digest = ContentDigest::of(rendered.as_bytes());
        let relative = self.relative_path(name);
        let absolute = self.root.join(&relative);

        if self.cache.matches(&relative, &digest) && absolute.exists() {
            debug!(name = %name, path = %relative.display(), "output unchanged, skipping write");
            return SaveOutcome::UpToDate;
        }

        if let Some(parent) = absolute.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!(name = %name, path = %relative.display(), error = %e, "failed to create output directory");
                return SaveOutcome::Failed;
            }
        }
        if let Err(e) = fs::write(&absolute, rendered) {
            error!(name = %name, path = %relative.display(), error = %e, "failed to write output");
            return SaveOutcome::Failed;
        }

        self.cache.record(relative, digest);
        debug!(name = %name, digest = %digest, "output written");
        SaveOutcome::Written
    }

    /// Persist the digest cache for the next run.
    ///
    /// Unlike per-output writes, a cache write failure is the provider's
    /// own error and is propagated.
    pub fn finish(self) -> DatagenResult<()> {
        self.cache.save(&self.cache_path)
    }
}
