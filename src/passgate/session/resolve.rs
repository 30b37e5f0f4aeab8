//! Mapping a request to its session, issuing one on first contact.

use axum::{
    http::{header::SET_COOKIE, HeaderMap},
    response::Response,
};
use tracing::{debug, error};

use super::{Session, SessionStore, TokenGenerator};
use crate::passgate::{
    cookie::{extract_session_token, session_cookie, CookieToken},
    error::GateError,
};

/// The session a request belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSession {
    pub session: Session,
    /// True when the session was created for this request.
    pub issued: bool,
}

impl ResolvedSession {
    /// Append the session cookie to `response`.
    pub fn attach_cookie(&self, response: &mut Response, secure: bool) {
        match session_cookie(&self.session.token, secure) {
            Ok(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            Err(err) => error!("Failed to build session cookie: {err}"),
        }
    }
}

/// Resolve the request's session.
///
/// A missing cookie or an unknown token gets a fresh, unauthenticated session
/// that is stored before this returns.
///
/// # Errors
/// Returns an error if the session cookie is malformed or a new token cannot
/// be generated. The store is left untouched in both cases.
pub async fn resolve_session(
    headers: &HeaderMap,
    store: &SessionStore,
    tokens: &TokenGenerator,
) -> Result<ResolvedSession, GateError> {
    let token = match extract_session_token(headers) {
        CookieToken::Token(token) => Some(token),
        CookieToken::Absent => None,
        CookieToken::Malformed(detail) => return Err(GateError::MalformedCookie(detail)),
    };

    if let Some(token) = token {
        if let Some(session) = store.get(&token).await {
            debug!(token = short(&token), "resolved existing session");
            return Ok(ResolvedSession {
                session,
                issued: false,
            });
        }
        debug!(token = short(&token), "unknown session token");
    }

    let token = tokens.new_token()?;
    let session = Session::new(token.clone());
    store.put(token, session.clone()).await;
    debug!(token = short(&session.token), "issued new session");

    Ok(ResolvedSession {
        session,
        issued: true,
    })
}

/// Leading characters of a token, enough to correlate log lines.
pub(crate) fn short(token: &str) -> &str {
    token.get(..6).unwrap_or(token)
}
