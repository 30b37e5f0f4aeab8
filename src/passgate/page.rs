//! Challenge content served to unauthenticated sessions.

use anyhow::{Context, Result};
use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::Path;

const DEFAULT_LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Login</title>
</head>
<body>
<form method="post" action="/login">
<label for="password">Password</label>
<input type="password" id="password" name="password" autofocus>
<button type="submit">Login</button>
</form>
</body>
</html>
"#;

/// Opaque login page payload.
#[derive(Clone, Debug)]
pub struct LoginPage {
    body: Bytes,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self {
            body: Bytes::from_static(DEFAULT_LOGIN_PAGE.as_bytes()),
        }
    }
}

impl LoginPage {
    #[must_use]
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }

    /// Load the page from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let body = std::fs::read(path)
            .with_context(|| format!("Failed to read login page: {}", path.display()))?;
        Ok(Self::new(body))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Render the challenge response.
    #[must_use]
    pub fn render(&self) -> Response {
        (
            StatusCode::OK,
            [(
                CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            )],
            Body::from(self.body.clone()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn default_page_posts_password_to_login() {
        let page = LoginPage::default();
        let html = String::from_utf8_lossy(page.as_bytes());
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"name="password""#));
    }

    #[test]
    fn from_file_missing_is_error() {
        let result = LoginPage::from_file(Path::new("/nonexistent/passgate/login.html"));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn render_serves_payload_as_html() -> anyhow::Result<()> {
        let page = LoginPage::new("<p>locked</p>");
        let response = page.render();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/html; charset=utf-8"))
        );
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&body[..], b"<p>locked</p>");
        Ok(())
    }
}
