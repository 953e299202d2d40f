use actix_multipart::Multipart;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;

use crate::api::success::Success;
use crate::api::{error, success};
use crate::modules::file_upload::model::UploadPart;
use crate::modules::file_upload::repository::FileStorage;
use crate::modules::file_upload::schema::UploadResponse;
use crate::modules::file_upload::service::FileUploadService;

const UPLOAD_FIELD: &str = "file";
const UPLOAD_FAILED: &str = "Error uploading files";

/// Upload files handler
pub async fn upload_file<R>(
    payload: Multipart,
    service: web::Data<FileUploadService<R>>,
) -> Result<success::Success<UploadResponse>, error::Error>
where
    R: FileStorage + Send + Sync + 'static,
{
    let parts = read_parts(payload, &service)
        .await
        .map_err(|e| e.into_response_error(UPLOAD_FAILED))?;

    let files =
        service.upload_files(parts).await.map_err(|e| e.into_response_error(UPLOAD_FAILED))?;

    Ok(Success::ok(Some(UploadResponse { files })).message("Files uploaded successfully"))
}

/// Buffers every `file` part in submission order.
///
/// Reading stops at the first part that passes the size limit; that part is kept truncated so
/// the service reports it. A stream that fails before yielding any field is an empty form.
async fn read_parts<R>(
    mut payload: Multipart,
    service: &FileUploadService<R>,
) -> Result<Vec<UploadPart>, error::SystemError>
where
    R: FileStorage + Send + Sync,
{
    let max_file_size = service.config().max_file_size;
    let mut parts = Vec::new();
    let mut seen_field = false;

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) if !seen_field => {
                log::debug!("Multipart payload carried no fields: {:?}", err);
                break;
            }
            Err(err) => return Err(err.into()),
        };
        seen_field = true;

        if field.name() != Some(UPLOAD_FIELD) {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();

        // Detect MIME type
        let mime_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        // Read file bytes, stopping once the limit is passed
        let mut bytes = Vec::new();
        let mut oversized = false;
        while let Some(chunk) = field.try_next().await? {
            bytes.extend_from_slice(&chunk);
            if bytes.len() > max_file_size {
                oversized = true;
                break;
            }
        }

        parts.push(UploadPart { original_name, mime_type, bytes });
        if oversized {
            break;
        }
    }

    Ok(parts)
}

/// Serve stored file handler
pub async fn get_file<R>(
    identifier: web::Path<String>,
    service: web::Data<FileUploadService<R>>,
) -> Result<HttpResponse, error::Error>
where
    R: FileStorage + Send + Sync + 'static,
{
    let identifier = identifier.into_inner();

    let file = service.get_file(&identifier).await.map_err(|e| {
        if !matches!(e, error::SystemError::NotFound(_)) {
            log::error!("Error accessing file {}: {:?}", identifier, e);
        }
        error::Error::not_found("File not found")
    })?;

    Ok(HttpResponse::Ok()
        .content_type(file.mime_type.to_string())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(identifier)],
        })
        .body(file.bytes))
}

/// Upload API health handler
pub async fn health() -> success::Success<()> {
    Success::ok(None).message("Upload API is working")
}
