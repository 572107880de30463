//! Login, session and health endpoints.

use super::{AppState, access::UserAccess, extract::ApiJson};
use crate::{
    core::auth::{self, Role, Session},
    errors::Result,
};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// `user` or `admin`
    pub username: String,
    /// Password of that account
    pub password: String,
}

/// Response of `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    /// Role granted by the presented credentials
    pub role: Role,
}

/// `POST /auth/login` (public)
///
/// Checks the credentials once and hands back the token to replay on later requests.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<Session>> {
    let session = auth::authenticate(&state.credentials, &request.username, &request.password)?;
    Ok(Json(session))
}

/// `GET /auth/session`
pub async fn session(UserAccess(role): UserAccess) -> Json<SessionInfo> {
    Json(SessionInfo { role })
}

/// `GET /health` (public)
pub async fn health() -> &'static str {
    "OK"
}
