use axum::{
    extract::{rejection::FormRejection, Extension},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use crate::passgate::{
    error::GateError,
    session::{resolve::short, resolve_session},
    state::GateState,
};

#[derive(ToSchema, Deserialize)]
pub struct LoginForm {
    password: String,
}

#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses (
        (status = 200, description = "Login successful, session is now authenticated", body = String),
        (status = 400, description = "Malformed session cookie or form submission", body = String),
        (status = 401, description = "Invalid password, session unchanged", body = String),
    ),
    tag = "login"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    Extension(state): Extension<Arc<GateState>>,
    headers: HeaderMap,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let resolved = match resolve_session(&headers, state.store(), state.tokens()).await {
        Ok(resolved) => resolved,
        Err(err) => return err.into_response(),
    };

    let mut response = match form {
        Err(rejection) => GateError::MalformedSubmission(rejection.body_text()).into_response(),

        Ok(Form(form)) => {
            if state.verifier().verify(&form.password) {
                let mut session = resolved.session.clone();
                session.authenticated = true;
                state.store().put(session.token.clone(), session).await;

                info!(token = short(&resolved.session.token), "Login successful");

                (StatusCode::OK, "Login successful").into_response()
            } else {
                warn!(token = short(&resolved.session.token), "Invalid password");

                (StatusCode::UNAUTHORIZED, "Invalid password").into_response()
            }
        }
    };

    resolved.attach_cookie(&mut response, state.cookie_secure());
    response
}
