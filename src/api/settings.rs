//! Site settings endpoints.

use super::{
    AppState,
    access::{AdminAccess, UserAccess},
    extract::ApiJson,
};
use crate::{core::settings, errors::Result};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

/// Body of `GET` and `PUT /settings/header`.
#[derive(Debug, Deserialize, Serialize)]
pub struct HeaderLabel {
    /// The header label
    pub value: String,
}

/// `GET /settings/header`
pub async fn get_header(
    _access: UserAccess,
    State(state): State<AppState>,
) -> Result<Json<HeaderLabel>> {
    let value = settings::get_header(&state.database, &state.default_header).await?;
    Ok(Json(HeaderLabel { value }))
}

/// `PUT /settings/header` (admin)
pub async fn update_header(
    _access: AdminAccess,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<HeaderLabel>,
) -> Result<Json<HeaderLabel>> {
    settings::update_header(&state.database, &body.value).await?;
    Ok(Json(body))
}
