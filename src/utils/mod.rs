use uuid::Uuid;

/// Random on-disk name for a stored file. Uniqueness is probabilistic (UUID v4), never checked.
pub fn generate_file_name(extension: &str) -> String {
    format!("{}.{}", Uuid::new_v4(), extension)
}
