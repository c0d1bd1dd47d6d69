//! Error types for path resolution, file serving and configuration.

use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use std::path::PathBuf;
use thiserror::Error;

/// Content type of every error body.
pub const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// Why a request path was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("malformed percent-encoding in {0:?}")]
    Malformed(String),

    #[error("request path does not decode to UTF-8")]
    InvalidUtf8,

    #[error("request path contains a NUL byte")]
    NulByte,

    #[error("request path {0:?} escapes the site root")]
    Escapes(String),

    #[error("request path {path:?} could not be resolved: {reason}")]
    Unresolvable { path: String, reason: String },
}

/// Failure to produce file contents for an already resolved path.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Problems with the server configuration, reported at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port: port must be between 1 and 65535")]
    InvalidPort,

    #[error("site root {} is not accessible: {source}", path.display())]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("site root {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("site root {} cannot be used as a path boundary: {source}", path.display())]
    Boundary {
        path: PathBuf,
        #[source]
        source: strict_path::StrictPathError,
    },
}

/// Everything the request handler can fail with. Each variant maps to one
/// status code and a fixed plain-text body; internal detail stays in the log.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    BadPath(#[from] ResolveError),

    #[error(transparent)]
    Serve(#[from] ServeError),
}

impl ServerError {
    fn public_message(&self) -> &'static str {
        match self {
            ServerError::BadPath(ResolveError::Unresolvable { .. }) => "Not found",
            ServerError::BadPath(_) => "Bad request",
            ServerError::Serve(ServeError::NotFound(_)) => "Not found",
            ServerError::Serve(ServeError::Read { .. }) => "Server error",
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadPath(ResolveError::Unresolvable { .. }) => StatusCode::NOT_FOUND,
            ServerError::BadPath(_) => StatusCode::BAD_REQUEST,
            ServerError::Serve(ServeError::NotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Serve(ServeError::Read { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, PLAIN_TEXT))
            .body(self.public_message())
    }
}
