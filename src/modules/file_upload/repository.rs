use crate::{
    api::error,
    modules::file_upload::model::{FetchedFile, NewFile, StoredFile},
};

#[async_trait::async_trait]
pub trait FileStorage {
    /// Persists `file.bytes` under `file.identifier`. Readers never observe a partial file.
    async fn store(&self, file: NewFile) -> Result<StoredFile, error::SystemError>;

    /// Resolves an untrusted identifier to stored bytes, or `NotFound`.
    async fn fetch(&self, identifier: &str) -> Result<FetchedFile, error::SystemError>;
}
