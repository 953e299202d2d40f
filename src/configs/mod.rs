use crate::{
    api::error,
    constants::Env,
    modules::file_upload::{LocalStorage, UploadConfig},
};

pub fn upload_config(env: &Env) -> UploadConfig {
    UploadConfig {
        max_file_size: env.max_file_size(),
        upload_dir: env.upload_dir.clone().into(),
        public_path: env.public_path.clone(),
        verify_content: env.verify_content,
    }
}

pub async fn connect_storage(config: &UploadConfig) -> Result<LocalStorage, error::SystemError> {
    let storage = LocalStorage::new(&config.upload_dir);
    storage.ensure_root().await?;
    log::info!("Storing uploads in {}", storage.root().display());
    Ok(storage)
}
