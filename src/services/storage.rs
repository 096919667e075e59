use crate::error::{FlagImportError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Path-addressed blob store. Paths are `/`-separated and relative to the
/// store's root.
#[allow(async_fn_in_trait)]
pub trait Storage {
    async fn has(&self, path: &str) -> Result<bool>;

    /// Creates `path`; fails if it already exists.
    async fn write(&self, path: &str, contents: &[u8]) -> Result<()>;

    /// Creates or overwrites `path`.
    async fn put(&self, path: &str, contents: &[u8]) -> Result<()>;

    async fn read(&self, path: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |full, segment| full.join(segment))
    }

    async fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
                debug!("Created directory: {}", parent.display());
            }
        }
        Ok(())
    }
}

impl Storage for LocalStorage {
    async fn has(&self, path: &str) -> Result<bool> {
        Ok(fs::try_exists(self.resolve(path)).await?)
    }

    async fn write(&self, path: &str, contents: &[u8]) -> Result<()> {
        let full = self.resolve(path);
        Self::ensure_parent(&full).await?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => FlagImportError::PlaceholderExists {
                    path: path.to_string(),
                },
                _ => FlagImportError::Io(e),
            })?;
        file.write_all(contents).await?;
        file.flush().await?;

        Ok(())
    }

    async fn put(&self, path: &str, contents: &[u8]) -> Result<()> {
        let full = self.resolve(path);
        Self::ensure_parent(&full).await?;
        fs::write(&full, contents).await?;
        Ok(())
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.resolve(path)).await?)
    }
}
