use crate::modules::file_upload::classifier;

/// Why a part was refused before anything was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    SizeExceeded,
    TypeUnsupported,
    ContentMismatch,
}

/// Checks the declared size and type of a part. Size is checked first.
pub fn validate(mime_type: &str, size: usize, max_file_size: usize) -> Result<(), Rejection> {
    if size > max_file_size {
        return Err(Rejection::SizeExceeded);
    }

    if !classifier::is_allowed(mime_type) {
        return Err(Rejection::TypeUnsupported);
    }

    Ok(())
}

/// Compares the declared type against the type sniffed from the leading bytes.
///
/// Both sides are reduced to their stored extension, so the two zip variants are
/// interchangeable. Content `infer` cannot identify never matches.
pub fn verify_content(mime_type: &str, bytes: &[u8]) -> Result<(), Rejection> {
    let declared = classifier::extension_for(mime_type);
    let sniffed = infer::get(bytes).and_then(|kind| classifier::extension_for(kind.mime_type()));

    match (declared, sniffed) {
        (Some(declared), Some(sniffed)) if declared == sniffed => Ok(()),
        _ => Err(Rejection::ContentMismatch),
    }
}
