use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use gymbook_domain as domain;
use log::debug;
use tokio::io::AsyncWriteExt;

use crate::KeyValueStore;

/// Stores every key as `<key>.json` in one directory.
///
/// Values are written and synced to a temporary file first and then renamed over the previous
/// value, so a crash during a write leaves either the old or the new value, never a truncated
/// one. A failed write removes the temporary file.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, domain::StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(domain::StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, domain::StorageError> {
        let path = self.path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), domain::StorageError> {
        let path = self.path(key)?;
        if !tokio::fs::try_exists(&self.dir).await? {
            debug!("creating data directory {}", self.dir.display());
            tokio::fs::create_dir_all(&self.dir).await?;
        }
        let temp_path = path.with_extension("json.tmp");
        if let Err(err) = replace(&temp_path, &path, value.as_bytes()).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(err.into());
        }
        Ok(())
    }
}

async fn replace(temp_path: &Path, path: &Path, value: &[u8]) -> io::Result<()> {
    let mut file = tokio::fs::File::create(temp_path).await?;
    file.write_all(value).await?;
    file.sync_all().await?;
    drop(file);
    tokio::fs::rename(temp_path, path).await
}
