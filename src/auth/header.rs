use axum::http::{HeaderMap, header};
use subtle::ConstantTimeEq;

use super::{AuthError, AuthScheme};

/// Pulls the credential out of `Authorization: <scheme> <credential>`.
///
/// Only the scheme is checked here; what the credential means is up to the
/// caller.
pub fn extract_credential(headers: &HeaderMap, scheme: AuthScheme) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?
        .trim();

    if value.is_empty() {
        return Err(AuthError::MissingHeader);
    }

    let (prefix, credential) = value.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    let credential = credential.trim();
    if prefix != scheme.as_str() || credential.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(credential)
}

/// Checks an `ApiKey` credential against the configured shared secret.
/// Any missing, mis-schemed or mismatched key is `InvalidApiKey`.
pub fn check_api_key(headers: &HeaderMap, expected: &str) -> Result<(), AuthError> {
    let key = extract_credential(headers, AuthScheme::ApiKey)
        .map_err(|_| AuthError::InvalidApiKey)?;
    if !bool::from(key.as_bytes().ct_eq(expected.as_bytes())) {
        return Err(AuthError::InvalidApiKey);
    }
    Ok(())
}
