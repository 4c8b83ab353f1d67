use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{fs, sync::RwLock};
use tracing::{debug, error, info};

use super::document::Document;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document store {} is unreadable: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("document store {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("document store {} is unwritable: {source}", .path.display())]
    Unwritable { path: PathBuf, source: io::Error },
    #[error("document could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed store for the single [`Document`].
///
/// One reader/writer lock guards the artifact for the lifetime of the
/// process. `read` holds the shared side; `read_modify_write` holds the
/// exclusive side across load, mutation and persist, so a logical write is
/// one critical section.
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    lock: RwLock<()>,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("path", &self.inner.path)
            .finish()
    }
}

impl DocumentStore {
    /// Opens the store at `path`, creating an empty document if none exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            inner: Arc::new(StoreInner {
                path: path.into(),
                lock: RwLock::new(()),
            }),
        };
        store.ensure_exists().await?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        let _guard = self.inner.lock.write().await;
        let path = &self.inner.path;

        let exists = fs::try_exists(path)
            .await
            .map_err(|source| StoreError::Unreadable {
                path: path.clone(),
                source,
            })?;
        if exists {
            return Ok(());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Unwritable {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        self.persist(&Document::default()).await?;
        info!(path = %path.display(), "initialized empty document store");
        Ok(())
    }

    /// Returns a copy of the current document.
    pub async fn read(&self) -> Result<Document, StoreError> {
        let _guard = self.inner.lock.read().await;
        self.load().await
    }

    /// Loads the document, applies `mutator` and persists the result, all
    /// under the exclusive lock. When the mutator fails nothing is written.
    pub async fn read_modify_write<T, E, F>(&self, mutator: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.inner.lock.write().await;
        let mut document = self.load().await?;
        let output = mutator(&mut document)?;
        self.persist(&document).await?;
        debug!(
            chirps = document.chirps.len(),
            users = document.users.len(),
            revoked = document.revoked_tokens.len(),
            "document persisted"
        );
        Ok(output)
    }

    async fn load(&self) -> Result<Document, StoreError> {
        let path = &self.inner.path;
        let bytes = fs::read(path)
            .await
            .map_err(|source| StoreError::Unreadable {
                path: path.clone(),
                source,
            })?;
        let mut document: Document =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;
        document.restore_counters();
        Ok(document)
    }

    // Writes a sibling temp file and renames it over the artifact so readers
    // never observe a half-written document.
    async fn persist(&self, document: &Document) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(document)?;
        let path = &self.inner.path;
        let staging = staging_path(path);

        if let Err(source) = fs::write(&staging, &bytes).await {
            error!(path = %staging.display(), error = %source, "failed to write document");
            return Err(StoreError::Unwritable {
                path: staging,
                source,
            });
        }

        if let Err(source) = fs::rename(&staging, path).await {
            error!(path = %path.display(), error = %source, "failed to replace document");
            let _ = fs::remove_file(&staging).await;
            return Err(StoreError::Unwritable {
                path: path.clone(),
                source,
            });
        }

        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from("document"));
    name.push(".tmp");
    path.with_file_name(name)
}
