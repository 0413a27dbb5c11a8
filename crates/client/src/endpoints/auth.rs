//! Credential login.
//!
//! The HRM web login is a CSRF-protected form post. The login page issues an
//! initial session cookie and embeds a token; posting the form with both
//! upgrades the session (possibly rotating the cookie) and redirects away
//! from the login page.

use secrecy::SecretString;
use tracing::debug;

use hrm_config::constants::{LOGIN_PAGE_PATH, LOGIN_VALIDATE_PATH, SESSION_COOKIE_NAME};

use crate::auth::SessionCookie;
use crate::error::{ClientError, Result};
use crate::request::{HttpMethod, RequestBuilder, Transport};

/// Pull the CSRF token out of the login page markup.
///
/// Recognizes the Vue prop form `:token="&quot;abc&quot;"` and the hidden
/// input form `name="_token" value="abc"`.
pub fn extract_csrf_token(page: &str) -> Option<String> {
    let from_prop = page.split_once(":token=\"").and_then(|(_, rest)| {
        let raw = rest.split('"').next()?;
        Some(raw.replace("&quot;", "").trim().to_string())
    });

    let from_input = || {
        let (_, rest) = page.split_once("name=\"_token\"")?;
        let tag = rest.split('>').next()?;
        let (_, value) = tag.split_once("value=\"")?;
        Some(value.split('"').next()?.trim().to_string())
    };

    from_prop
        .filter(|token| !token.is_empty())
        .or_else(|| from_input().filter(|token| !token.is_empty()))
}

/// Log in with username and password and return the authenticated session.
///
/// # Errors
///
/// - [`ClientError::LoginFailed`] when the login page issues no cookie or no
///   token, or when the form post does not redirect away from the login page.
/// - [`ClientError::Transport`] on network failures.
pub async fn login<T: Transport>(
    transport: &T,
    username: &str,
    password: &str,
) -> Result<SessionCookie> {
    debug!("Logging in to HRM as {}", username);

    let page = transport
        .request(LOGIN_PAGE_PATH)
        .dispatch(HttpMethod::Get)
        .await?;
    if !page.is_success() {
        return Err(ClientError::LoginFailed(format!(
            "login page answered {}",
            page.status_line()
        )));
    }

    let initial = page.set_cookie(SESSION_COOKIE_NAME).ok_or_else(|| {
        ClientError::LoginFailed(format!(
            "login page did not set the '{}' cookie",
            SESSION_COOKIE_NAME
        ))
    })?;
    let token = extract_csrf_token(page.body()).ok_or_else(|| {
        ClientError::LoginFailed("CSRF token not found on the login page".to_string())
    })?;

    let response = transport
        .request(LOGIN_VALIDATE_PATH)
        .cookie(&SessionCookie::new(SecretString::new(initial.clone().into())))
        .form_body(&[
            ("_token", token.as_str()),
            ("username", username),
            ("password", password),
        ])
        .dispatch(HttpMethod::Post)
        .await?;

    if !(300..400).contains(&response.status_code()) {
        return Err(ClientError::LoginFailed(format!(
            "expected a redirect after login, got {}",
            response.status_line()
        )));
    }

    let location = response.header("location").unwrap_or_default();
    if location.contains(LOGIN_PAGE_PATH) || location.ends_with("/auth/login") {
        return Err(ClientError::LoginFailed(
            "credentials were rejected".to_string(),
        ));
    }

    let cookie = response.set_cookie(SESSION_COOKIE_NAME).unwrap_or(initial);
    debug!(redirect = location, "Login succeeded");
    Ok(SessionCookie::new(SecretString::new(cookie.into())))
}
