use serde::{Deserialize, Serialize};

/// Per-file metadata returned to the uploader
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub original_name: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub files: Vec<UploadResult>,
}
