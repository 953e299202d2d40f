use futures_util::future::try_join_all;
use std::sync::Arc;

use crate::api::error;
use crate::modules::file_upload::{
    classifier,
    model::{FetchedFile, NewFile, UploadConfig, UploadPart},
    repository::FileStorage,
    schema::UploadResult,
    validation::{self, Rejection},
};
use crate::utils::generate_file_name;

#[derive(Clone)]
pub struct FileUploadService<R>
where
    R: FileStorage + Send + Sync,
{
    storage: Arc<R>,
    config: UploadConfig,
}

impl<R> FileUploadService<R>
where
    R: FileStorage + Send + Sync,
{
    pub fn new(storage: Arc<R>, config: UploadConfig) -> Self {
        log::info!(
            "FileUploadService initialized (limit {}MB, verify content: {})",
            config.max_file_size_mb(),
            config.verify_content
        );
        Self { storage, config }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Validate file type and size
    fn validate_part(&self, part: &UploadPart) -> Result<(), error::SystemError> {
        validation::validate(&part.mime_type, part.size(), self.config.max_file_size)
            .and_then(|_| {
                if self.config.verify_content {
                    validation::verify_content(&part.mime_type, &part.bytes)
                } else {
                    Ok(())
                }
            })
            .map_err(|rejection| {
                log::warn!("Rejected {} ({}): {:?}", part.original_name, part.mime_type, rejection);
                error::SystemError::bad_request(self.rejection_message(part, rejection))
            })
    }

    fn rejection_message(&self, part: &UploadPart, rejection: Rejection) -> String {
        match rejection {
            Rejection::SizeExceeded => format!(
                "File {} exceeds maximum size limit of {}MB",
                part.original_name,
                self.config.max_file_size_mb()
            ),
            Rejection::TypeUnsupported => format!("File type {} is not supported", part.mime_type),
            Rejection::ContentMismatch => format!(
                "File {} content does not match declared type {}",
                part.original_name, part.mime_type
            ),
        }
    }

    /// Validates the whole batch, then stores every part concurrently.
    ///
    /// A single rejected part rejects the batch before anything is written. A storage failure
    /// does not roll back parts that were already written.
    pub async fn upload_files(
        &self,
        parts: Vec<UploadPart>,
    ) -> Result<Vec<UploadResult>, error::SystemError> {
        if parts.is_empty() {
            return Err(error::SystemError::bad_request("No files received"));
        }

        for part in &parts {
            self.validate_part(part)?;
        }

        let results = try_join_all(parts.into_iter().map(|part| self.store_part(part))).await?;
        log::info!("Uploaded {} file(s)", results.len());
        Ok(results)
    }

    async fn store_part(&self, part: UploadPart) -> Result<UploadResult, error::SystemError> {
        let extension = classifier::extension_for(&part.mime_type).ok_or_else(|| {
            error::SystemError::bad_request(format!(
                "File type {} is not supported",
                part.mime_type
            ))
        })?;

        let new_file = NewFile {
            identifier: generate_file_name(extension),
            original_name: part.original_name,
            mime_type: part.mime_type,
            bytes: part.bytes,
        };

        let stored = self.storage.store(new_file).await?;
        log::debug!("{} written to {}", stored.original_name, stored.path.display());

        Ok(UploadResult {
            file_url: self.config.file_url(&stored.identifier),
            original_name: stored.original_name,
            file_name: stored.identifier,
            file_type: stored.mime_type,
            file_size: stored.size,
        })
    }

    /// Get stored file by generated name
    pub async fn get_file(&self, identifier: &str) -> Result<FetchedFile, error::SystemError> {
        self.storage.fetch(identifier).await
    }
}
