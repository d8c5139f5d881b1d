use anyhow::{Context, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use cf_models::User;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    client_id: Option<String>,
}

/// Identify the session user from the claims of a (possibly `bearer`-prefixed) JWT.
///
/// Client-credentials tokens carry no `user_name`; the client id names them instead.
pub fn user_from_access_token(access_token: &str) -> Result<User> {
    let token = access_token.trim();
    let jwt = match token.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => &token[7..],
        _ => token,
    };

    let payload = jwt
        .split('.')
        .nth(1)
        .context("Access token is not a valid JWT")?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .context("Failed to decode access token payload")?;
    let claims: TokenClaims =
        serde_json::from_slice(&bytes).context("Failed to parse access token claims")?;

    let name = claims
        .user_name
        .or(claims.client_id)
        .context("Access token has neither user_name nor client_id")?;

    Ok(User { name })
}
