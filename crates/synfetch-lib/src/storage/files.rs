use crate::error::SynsetError;
use std::path::{Path, PathBuf};

const PARTIAL_SUFFIX: &str = ".part";

pub async fn ensure_dir(path: &Path) -> Result<(), SynsetError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| SynsetError::DirectoryCreation {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

pub async fn exists(path: &Path) -> Result<bool, SynsetError> {
    tokio::fs::try_exists(path).await.map_err(Into::into)
}

/// Writes `contents` next to `path` and renames it into place, so `path` only
/// ever appears complete.
pub async fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), SynsetError> {
    let partial = partial_path(path);
    if let Err(e) = tokio::fs::write(&partial, contents).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}
