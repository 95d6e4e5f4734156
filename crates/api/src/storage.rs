//! On-disk store for filtered image artifacts.
//!
//! Artifacts live directly under the store root, named
//! `{filter_name}-{original_filename}`. Requests that target the same name
//! are serialized by a per-name async mutex. Both the persisted upload and the
//! filtered output that replaces it land through an atomic rename, so a reader
//! only ever sees a complete file. Identical names still overwrite each other: the last
//! writer wins.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use showcase_core::error::CoreError;
use showcase_core::filters::Filter;
use showcase_core::imaging;
use tokio::sync::OwnedMutexGuard;

/// Filesystem-backed artifact store with per-name write locks.
pub struct ArtifactStore {
    root: PathBuf,
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl ArtifactStore {
    /// Open (creating if needed) the artifact directory at `root`.
    pub fn open(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            locks: Mutex::new(HashMap::new()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the artifact called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Persist `upload` as `name`, then replace it with the thumbnailed,
    /// filtered rendition.
    ///
    /// The upload is decoded first; bytes that are not an image are rejected
    /// with [`CoreError::Decode`] before anything touches disk. If rendering
    /// fails after the upload was persisted, the original stays on disk.
    pub async fn store_filtered(
        &self,
        name: &str,
        upload: Vec<u8>,
        filter: &'static Filter,
    ) -> Result<PathBuf, CoreError> {
        let _guard = self.lock(name).await;

        let root = self.root.clone();
        let path = self.path_for(name);
        let task_path = path.clone();

        tokio::task::spawn_blocking(move || write_filtered(&root, &task_path, &upload, filter))
            .await
            .map_err(|e| CoreError::Internal(format!("image task failed: {e}")))??;

        tracing::debug!(path = %path.display(), filter = filter.name, "Artifact written");
        Ok(path)
    }

    /// Number of names with a live lock entry.
    #[cfg(test)]
    fn active_locks(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    async fn lock(&self, name: &str) -> OwnedMutexGuard<()> {
        let entry = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Drop entries nobody else holds.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(name.to_string()).or_default())
        };
        entry.lock_owned().await
    }
}

fn write_filtered(
    root: &Path,
    path: &Path,
    upload: &[u8],
    filter: &Filter,
) -> Result<(), CoreError> {
    persist_then_replace(root, path, upload, |decoded| imaging::render(decoded, filter))
}

/// Decode `upload`, persist it at `path`, then replace it with `render`'s
/// output. A render failure leaves the persisted upload in place.
fn persist_then_replace<F>(
    root: &Path,
    path: &Path,
    upload: &[u8],
    render: F,
) -> Result<(), CoreError>
where
    F: FnOnce(&imaging::DecodedImage) -> Result<Vec<u8>, CoreError>,
{
    let decoded = imaging::decode(upload)?;

    write_atomic(root, path, upload)?;

    let rendered = render(&decoded)?;
    write_atomic(root, path, &rendered)
}

/// Write `data` to a temporary file in `dir` and rename it over `path`.
fn write_atomic(dir: &Path, path: &Path, data: &[u8]) -> Result<(), CoreError> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| io_error("create temp file", dir, e))?;
    tmp.write_all(data)
        .map_err(|e| io_error("write temp file", tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| io_error("replace artifact", path, e.error))?;
    Ok(())
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> CoreError {
    CoreError::Internal(format!("failed to {action} at {}: {err}", path.display()))
}
