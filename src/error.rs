//! Error taxonomy for the two auth operations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Request payload violated the input contract. Carries the message for
    /// the first violated constraint.
    #[error("{0}")]
    Validation(String),

    #[error("Email ya registrado")]
    DuplicateEmail,

    #[error("Usuario no encontrado")]
    UserNotFound,

    #[error("Constraseña invalida")]
    InvalidPassword,

    /// Storage or crypto failure; surfaces the underlying message.
    #[error("{0}")]
    Persistence(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AuthError::DuplicateEmail,
            StoreError::Backend(msg) => AuthError::Persistence(msg),
        }
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Persistence(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Every failure is surfaced to the caller as a client error with an
        // `error` field; unexpected storage errors included.
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
