use std::path::PathBuf;

use crate::constants::MEBIBYTE;

/// One `file` part of a multipart submission, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadPart {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadPart {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Validated file about to be written under a generated identifier
#[derive(Debug, Clone)]
pub struct NewFile {
    pub identifier: String,
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// File persisted in the storage root
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub identifier: String,
    pub path: PathBuf,
    pub original_name: String,
    pub mime_type: String,
    pub size: usize,
}

/// Stored bytes resolved from an identifier
#[derive(Debug, Clone)]
pub struct FetchedFile {
    pub bytes: Vec<u8>,
    pub mime_type: mime_guess::Mime,
}

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub upload_dir: PathBuf,
    pub public_path: String,
    pub verify_content: bool,
}

impl UploadConfig {
    pub fn max_file_size_mb(&self) -> usize {
        self.max_file_size / MEBIBYTE
    }

    pub fn file_url(&self, identifier: &str) -> String {
        format!("{}/{}", self.public_path.trim_end_matches('/'), identifier)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 100 * MEBIBYTE, // 100MB
            upload_dir: PathBuf::from("/tmp/uploads"),
            public_path: "/upload".to_string(),
            verify_content: false,
        }
    }
}
