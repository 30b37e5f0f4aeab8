//! Session gate in front of protected routes.
//!
//! `AuthGate` wraps another service. Every request is first mapped to a
//! session (issuing one when needed) and the session cookie is set on the
//! response. Authenticated sessions are forwarded to the wrapped service
//! untouched; everyone else receives the login page and the wrapped service is
//! never called.

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use std::{
    convert::Infallible,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};
use tower::{Layer, Service};
use tracing::debug;

use super::{
    session::{resolve::short, resolve_session},
    state::GateState,
};

#[derive(Clone, Debug)]
pub struct AuthGateLayer {
    state: Arc<GateState>,
}

impl AuthGateLayer {
    #[must_use]
    pub fn new(state: Arc<GateState>) -> Self {
        Self { state }
    }
}

impl<S> Layer<S> for AuthGateLayer {
    type Service = AuthGate<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthGate {
            inner,
            state: Arc::clone(&self.state),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthGate<S> {
    inner: S,
    state: Arc<GateState>,
}

impl<S> Service<Request> for AuthGate<S>
where
    S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        // The clone is not ready; keep the driven one for this call.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let state = Arc::clone(&self.state);

        Box::pin(async move {
            let resolved =
                match resolve_session(request.headers(), state.store(), state.tokens()).await {
                    Ok(resolved) => resolved,
                    Err(err) => return Ok(err.into_response()),
                };

            let mut response = if resolved.session.authenticated {
                debug!(
                    token = short(&resolved.session.token),
                    path = request.uri().path(),
                    "admitted"
                );
                inner.call(request).await?
            } else {
                debug!(
                    token = short(&resolved.session.token),
                    issued = resolved.issued,
                    path = request.uri().path(),
                    "challenged"
                );
                state.login_page().render()
            };

            resolved.attach_cookie(&mut response, state.cookie_secure());
            Ok(response)
        })
    }
}
