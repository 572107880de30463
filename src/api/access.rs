//! Access gate - per-request role checks.
//!
//! Handlers declare the minimum role they need by taking one of these extractors.
//! Credentials are decoded from the `Authorization: Basic` header and verified against
//! the configured secrets on every request; no role is cached server-side or accepted
//! from the client.

use super::AppState;
use crate::{
    core::auth::{Role, authenticate_basic},
    errors::{Error, Result},
};
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

fn role_from_parts(parts: &Parts, state: &AppState) -> Result<Role> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        debug!(path = %parts.uri.path(), "Request without credentials");
        return Err(Error::Unauthenticated);
    };
    let value = header.to_str().map_err(|_| Error::Unauthenticated)?;
    authenticate_basic(&state.credentials, value)
}

/// Verifies the request's credentials and that they grant at least `required`.
///
/// # Errors
/// [`Error::Unauthenticated`] for missing or wrong credentials,
/// [`Error::Forbidden`] when the role is too low.
pub fn require_role(parts: &Parts, state: &AppState, required: Role) -> Result<Role> {
    let role = role_from_parts(parts, state)?;
    if !role.satisfies(required) {
        debug!(%role, %required, path = %parts.uri.path(), "Insufficient role");
        return Err(Error::Forbidden { required });
    }
    Ok(role)
}

/// Grants access to holders of the user or admin credentials.
#[derive(Clone, Copy, Debug)]
pub struct UserAccess(pub Role);

/// Grants access to holders of the admin credentials only.
#[derive(Clone, Copy, Debug)]
pub struct AdminAccess;

impl FromRequestParts<AppState> for UserAccess {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        require_role(parts, state, Role::User).map(Self)
    }
}

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        require_role(parts, state, Role::Admin).map(|_| Self)
    }
}
