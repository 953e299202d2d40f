use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::{
    api::error,
    modules::file_upload::{
        classifier,
        model::{FetchedFile, NewFile, StoredFile},
        repository::FileStorage,
    },
};

/// Flat directory of stored files, one file per identifier.
#[derive(Clone)]
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

    /// Create the storage root if it doesn't exist
    pub async fn ensure_root(&self) -> Result<(), error::SystemError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Joins an identifier onto the root without touching the filesystem.
    ///
    /// Identifiers must be a single plain path segment; temp files (dot-prefixed) are never
    /// addressable.
    fn resolve(&self, identifier: &str) -> Result<PathBuf, error::SystemError> {
        let invalid = identifier.is_empty()
            || identifier.starts_with('.')
            || identifier.contains("..")
            || identifier.contains(&['/', '\\', '\0'][..])
            || Path::new(identifier).is_absolute();

        if invalid {
            log::warn!("Rejected unsafe identifier {:?}", identifier);
            return Err(error::SystemError::not_found("File not found"));
        }

        Ok(self.root.join(identifier))
    }

    async fn write_atomically(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
        let temp_path = self.root.join(format!(".{}.{}.part", file_name, Uuid::new_v4().simple()));

        let result: std::io::Result<()> = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(bytes).await?;
            file.sync_all().await?;
            fs::rename(&temp_path, path).await
        }
        .await;

        if result.is_err() {
            fs::remove_file(&temp_path).await.ok();
        }
        result
    }
}

fn not_found_or_io(err: std::io::Error) -> error::SystemError {
    if err.kind() == ErrorKind::NotFound {
        error::SystemError::not_found("File not found")
    } else {
        error::SystemError::Io(err)
    }
}

#[async_trait::async_trait]
impl FileStorage for LocalStorage {
    async fn store(&self, file: NewFile) -> Result<StoredFile, error::SystemError> {
        let path = self.resolve(&file.identifier)?;
        self.ensure_root().await?;

        self.write_atomically(&path, &file.bytes).await?;

        log::info!(
            "Stored {} ({} bytes, {}) as {}",
            file.original_name,
            file.bytes.len(),
            file.mime_type,
            path.display()
        );

        Ok(StoredFile {
            identifier: file.identifier,
            path,
            original_name: file.original_name,
            mime_type: file.mime_type,
            size: file.bytes.len(),
        })
    }

    async fn fetch(&self, identifier: &str) -> Result<FetchedFile, error::SystemError> {
        let path = self.resolve(identifier)?;

        let root = fs::canonicalize(&self.root).await.map_err(not_found_or_io)?;
        let canonical = fs::canonicalize(&path).await.map_err(not_found_or_io)?;
        if !canonical.starts_with(&root) {
            log::warn!("Identifier {:?} resolves outside the storage root", identifier);
            return Err(error::SystemError::not_found("File not found"));
        }

        let bytes = fs::read(&canonical).await.map_err(not_found_or_io)?;

        Ok(FetchedFile { bytes, mime_type: classifier::mime_type_for_name(identifier) })
    }
}
