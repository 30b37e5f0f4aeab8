//! Reading and writing the session cookie.

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};

pub const SESSION_COOKIE_NAME: &str = "session";

/// What the request says about its session.
#[derive(Debug, PartialEq, Eq)]
pub enum CookieToken {
    Token(String),
    Absent,
    Malformed(String),
}

/// Find the session token in the request `Cookie` headers.
///
/// The first `session` pair wins. Other cookies are skipped unread, whatever
/// bytes they carry. A session value that is empty or not made of
/// cookie-octets is malformed.
#[must_use]
pub fn extract_session_token(headers: &HeaderMap) -> CookieToken {
    for header in headers.get_all(COOKIE) {
        for pair in header.as_bytes().split(|&byte| byte == b';') {
            let (key, value) = match pair.iter().position(|&byte| byte == b'=') {
                Some(eq) => (&pair[..eq], Some(&pair[eq + 1..])),
                None => (pair, None),
            };
            if key.trim_ascii() != SESSION_COOKIE_NAME.as_bytes() {
                continue;
            }
            let Some(value) = value else {
                return CookieToken::Malformed(format!("{SESSION_COOKIE_NAME} cookie has no value"));
            };
            let value = value.trim_ascii();
            let value = value
                .strip_prefix(b"\"")
                .and_then(|inner| inner.strip_suffix(b"\""))
                .unwrap_or(value);
            if value.is_empty() {
                return CookieToken::Malformed(format!("{SESSION_COOKIE_NAME} cookie is empty"));
            }
            if !value.iter().copied().all(is_cookie_octet) {
                return CookieToken::Malformed(format!(
                    "{SESSION_COOKIE_NAME} cookie contains invalid characters"
                ));
            }
            // cookie-octets are ASCII
            return CookieToken::Token(value.iter().copied().map(char::from).collect());
        }
    }
    CookieToken::Absent
}

/// RFC 6265 cookie-octet.
const fn is_cookie_octet(byte: u8) -> bool {
    matches!(byte, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

/// Build the `Set-Cookie` value carrying the session token.
///
/// # Errors
/// Returns an error if the token cannot be used in a header value.
pub fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookies: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            headers.append(COOKIE, HeaderValue::from_static(cookie));
        }
        headers
    }

    #[test]
    fn missing_cookie_header_is_absent() {
        assert_eq!(extract_session_token(&HeaderMap::new()), CookieToken::Absent);
    }

    #[test]
    fn other_cookies_only_is_absent() {
        let headers = headers(&["theme=dark; lang=en"]);
        assert_eq!(extract_session_token(&headers), CookieToken::Absent);
    }

    #[test]
    fn session_cookie_among_others() {
        let headers = headers(&["theme=dark; session=abc-DEF_123; lang=en"]);
        assert_eq!(
            extract_session_token(&headers),
            CookieToken::Token("abc-DEF_123".to_string())
        );
    }

    #[test]
    fn session_cookie_in_second_header() {
        let headers = headers(&["theme=dark", "session=tok"]);
        assert_eq!(
            extract_session_token(&headers),
            CookieToken::Token("tok".to_string())
        );
    }

    #[test]
    fn quoted_value_is_unwrapped() {
        let headers = headers(&["session=\"tok\""]);
        assert_eq!(
            extract_session_token(&headers),
            CookieToken::Token("tok".to_string())
        );
    }

    #[test]
    fn empty_value_is_malformed() {
        let headers = headers(&["session="]);
        assert!(matches!(
            extract_session_token(&headers),
            CookieToken::Malformed(_)
        ));
    }

    #[test]
    fn missing_equals_is_malformed() {
        let headers = headers(&["session"]);
        assert!(matches!(
            extract_session_token(&headers),
            CookieToken::Malformed(_)
        ));
    }

    #[test]
    fn invalid_octets_are_malformed() {
        let headers = headers(&["session=a\\b"]);
        assert!(matches!(
            extract_session_token(&headers),
            CookieToken::Malformed(_)
        ));
    }

    #[test]
    fn non_ascii_session_value_is_malformed() -> anyhow::Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_bytes(b"theme=dark; session=caf\xc3\xa9")?,
        );
        assert!(matches!(
            extract_session_token(&headers),
            CookieToken::Malformed(_)
        ));
        Ok(())
    }

    #[test]
    fn non_ascii_neighbour_cookie_is_ignored() -> anyhow::Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_bytes(b"theme=caf\xc3\xa9; session=tok; n\xc3\xa4me=x")?,
        );
        assert_eq!(
            extract_session_token(&headers),
            CookieToken::Token("tok".to_string())
        );
        Ok(())
    }

    #[test]
    fn non_ascii_cookie_without_session_is_absent() -> anyhow::Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_bytes(b"theme=caf\xc3\xa9")?);
        assert_eq!(extract_session_token(&headers), CookieToken::Absent);
        Ok(())
    }

    #[test]
    fn cookie_attributes() {
        let cookie = session_cookie("tok", false).ok();
        assert_eq!(
            cookie.as_ref().and_then(|c| c.to_str().ok()),
            Some("session=tok; Path=/; HttpOnly; SameSite=Lax")
        );

        let cookie = session_cookie("tok", true).ok();
        assert!(cookie
            .as_ref()
            .and_then(|c| c.to_str().ok())
            .is_some_and(|c| c.ends_with("; Secure")));
    }
}
