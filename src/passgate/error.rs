//! Request-scoped failures of the gate and the login flow.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use super::session::TokenError;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("malformed session cookie: {0}")]
    MalformedCookie(String),

    #[error("malformed login submission: {0}")]
    MalformedSubmission(String),

    #[error(transparent)]
    TokenSource(#[from] TokenError),
}

impl GateError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedCookie(_) | Self::MalformedSubmission(_) => StatusCode::BAD_REQUEST,
            Self::TokenSource(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::TokenSource(err) => {
                error!("{err}");
                // Do not leak random source details to clients
                (status, "Internal server error".to_string()).into_response()
            }
            _ => {
                warn!("{self}");
                (status, self.to_string()).into_response()
            }
        }
    }
}
