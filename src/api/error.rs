use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Internal Server Error: {0}")]
    InternalServer(Cow<'static, str>),
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    pub error: Cow<'static, str>,
}

impl Error {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal_server_error(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InternalServer(msg.into())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match *self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InternalServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let msg = match self {
            Error::BadRequest(msg) | Error::NotFound(msg) | Error::InternalServer(msg) => {
                msg.clone()
            }
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error: msg })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Multipart Error: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),
}

impl SystemError {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Converts into the HTTP error, replacing unexpected failures with `fallback`.
    pub fn into_response_error(self, fallback: &'static str) -> Error {
        match self {
            SystemError::BadRequest(msg) => Error::BadRequest(msg),
            SystemError::NotFound(msg) => Error::NotFound(msg),
            SystemError::Multipart(err) => {
                log::warn!("Rejected malformed multipart payload: {:?}", err);
                Error::bad_request("Invalid multipart payload")
            }
            other => {
                log::error!("Internal Server Error: {:?}", other);
                Error::internal_server_error(fallback)
            }
        }
    }
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        value.into_response_error("Internal Server Error")
    }
}
