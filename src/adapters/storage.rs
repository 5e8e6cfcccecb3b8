use crate::domain::ports::{PartialWrite, Storage};
use crate::utils::error::{FetchError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

const PARTIAL_SUFFIX: &str = ".part";

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

/// `<destination>.part`, in the same directory as the destination.
pub fn partial_path(destination: &Path) -> PathBuf {
    let mut name = OsString::from(destination.as_os_str());
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}

impl Storage for LocalStorage {
    type Partial = PartialFile;

    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .await
            .map_err(|source| FetchError::DirectoryCreation {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn begin(&self, destination: &Path) -> Result<PartialFile> {
        let path = partial_path(destination);
        let file = fs::File::create(&path)
            .await
            .map_err(|source| FetchError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Writing partial download to {}", path.display());

        Ok(PartialFile {
            file,
            path,
            destination: destination.to_path_buf(),
            written: 0,
        })
    }
}

#[derive(Debug)]
pub struct PartialFile {
    file: fs::File,
    path: PathBuf,
    destination: PathBuf,
    written: u64,
}

impl PartialFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> FetchError {
        FetchError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl PartialWrite for PartialFile {
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        if let Err(e) = self.file.write_all(chunk).await {
            return Err(self.write_error(e));
        }
        self.written += chunk.len() as u64;
        Ok(())
    }

    async fn commit(mut self) -> Result<u64> {
        if let Err(e) = self.file.flush().await {
            let err = self.write_error(e);
            self.discard().await;
            return Err(err);
        }
        if let Err(e) = self.file.sync_all().await {
            let err = self.write_error(e);
            self.discard().await;
            return Err(err);
        }

        let PartialFile {
            file,
            path,
            destination,
            written,
        } = self;
        drop(file);

        if let Err(source) = fs::rename(&path, &destination).await {
            let _ = fs::remove_file(&path).await;
            return Err(FetchError::Write {
                path: destination,
                source,
            });
        }

        Ok(written)
    }

    async fn discard(self) {
        let PartialFile { file, path, .. } = self;
        drop(file);
        if let Err(e) = fs::remove_file(&path).await {
            tracing::debug!("Could not remove partial file {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("inputs/bray_sample.pdf")),
            PathBuf::from("inputs/bray_sample.pdf.part")
        );
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_parents_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("inputs");
        let storage = LocalStorage::new();

        storage.ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        storage.ensure_dir(&nested).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_dir_fails_when_file_in_the_way() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("inputs");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = LocalStorage::new().ensure_dir(&blocker).await.unwrap_err();
        assert!(matches!(err, FetchError::DirectoryCreation { .. }));
    }

    #[tokio::test]
    async fn test_commit_replaces_destination() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("sample.pdf");
        std::fs::write(&destination, b"old").unwrap();

        let mut partial = LocalStorage::new().begin(&destination).await.unwrap();
        partial.write_chunk(b"%PDF-").await.unwrap();
        partial.write_chunk(b"1.4").await.unwrap();
        let partial_path = partial.path().to_path_buf();
        assert_eq!(partial.commit().await.unwrap(), 8);

        assert_eq!(std::fs::read(&destination).unwrap(), b"%PDF-1.4");
        assert!(!partial_path.exists());
    }

    #[tokio::test]
    async fn test_discard_keeps_destination() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("sample.pdf");
        std::fs::write(&destination, b"old").unwrap();

        let mut partial = LocalStorage::new().begin(&destination).await.unwrap();
        partial.write_chunk(b"half a file").await.unwrap();
        let partial_path = partial.path().to_path_buf();
        partial.discard().await;

        assert_eq!(std::fs::read(&destination).unwrap(), b"old");
        assert!(!partial_path.exists());
    }
}
