use std::collections::HashMap;
use std::path::Path;

use mime_guess::{mime, Mime};

/// Declared MIME types accepted on upload, with the extension the stored file receives.
pub const ALLOWED_FILE_TYPES: [(&str, &str); 9] = [
    // Images
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    // Documents
    ("application/pdf", "pdf"),
    // Archives
    ("application/zip", "zip"),
    ("application/x-zip-compressed", "zip"),
    // Videos
    ("video/mp4", "mp4"),
    ("video/quicktime", "mov"),
];

/// Content types served back, keyed by lowercase extension.
const SERVED_CONTENT_TYPES: [(&str, &str); 9] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
];

lazy_static::lazy_static! {
    static ref EXTENSIONS_BY_MIME: HashMap<&'static str, &'static str> =
        ALLOWED_FILE_TYPES.into_iter().collect();
    static ref MIMES_BY_EXTENSION: HashMap<&'static str, Mime> = SERVED_CONTENT_TYPES
        .into_iter()
        .filter_map(|(ext, mime_type)| mime_type.parse().ok().map(|m| (ext, m)))
        .collect();
}

/// Extension (without the dot) for an allow-listed MIME type.
pub fn extension_for(mime_type: &str) -> Option<&'static str> {
    EXTENSIONS_BY_MIME.get(mime_type).copied()
}

pub fn is_allowed(mime_type: &str) -> bool {
    EXTENSIONS_BY_MIME.contains_key(mime_type)
}

/// Content type to serve for an extension; unknown extensions are served as octet-stream.
pub fn mime_type_for(extension: &str) -> Mime {
    MIMES_BY_EXTENSION
        .get(extension.to_ascii_lowercase().as_str())
        .cloned()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

pub fn mime_type_for_name(file_name: &str) -> Mime {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(mime_type_for)
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
}
