//! Maps the core error taxonomy onto HTTP responses.

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use rf_core::error::{AppError, ValidationKind};
use serde_json::json;
use thiserror::Error;

const SERVER_FAILURE: &str = "an unexpected failure occurred on our server";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] AppError),

    #[error("missing authentication")]
    Unauthenticated,

    #[error("unreadable request body: {0}")]
    MalformedBody(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Core(err) => match err {
                // A result entity rejecting a stored row is our fault, not the client's.
                AppError::Validation { entity, .. } if entity.starts_with("CREATED_") => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                AppError::Validation { .. } => StatusCode::BAD_REQUEST,
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                AppError::Authorization(_) => StatusCode::FORBIDDEN,
                AppError::NotImplemented(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed: {self}");
            return HttpResponse::build(status).json(json!({
                "status": "error",
                "message": SERVER_FAILURE,
            }));
        }

        HttpResponse::build(status).json(json!({
            "status": "fail",
            "message": self.message(),
        }))
    }
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "missing or invalid access token".to_string(),
            ApiError::MalformedBody(_) => "request body must be a JSON object".to_string(),
            ApiError::Core(AppError::Validation { entity, kind }) => translate(entity, *kind),
            ApiError::Core(AppError::NotFound(msg)) | ApiError::Core(AppError::Authorization(msg)) => msg.clone(),
            ApiError::Core(other) => other.to_string(),
        }
    }
}

/// Body extractor settings for the forum routes: a payload actix cannot
/// parse gets the same `fail` envelope as any other client error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("rejected request body: {err}");
        ApiError::MalformedBody(err.to_string()).into()
    })
}

/// Turns an entity rejection code into a sentence a client can act on.
pub fn translate(entity: &str, kind: ValidationKind) -> String {
    let action = match entity {
        "CREATE_THREAD" => "create a new thread",
        "CREATE_COMMENT" => "create a new comment",
        "CREATE_REPLY" => "create a new reply",
        "DELETE_COMMENT" => "delete the comment",
        "DELETE_REPLY" => "delete the reply",
        _ => "process the request",
    };
    let reason = match kind {
        ValidationKind::MissingProperty => "a required property is missing",
        ValidationKind::InvalidDataType => "a property has the wrong data type",
    };
    format!("cannot {action} because {reason}")
}
