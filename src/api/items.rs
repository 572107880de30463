//! Item endpoints. All require at least the user role.

use super::{
    AppState,
    access::UserAccess,
    extract::{ApiJson, ApiPath},
};
use crate::{
    core::item::{self, ItemChanges, NewItem},
    entities::WishlistItemModel,
    errors::Result,
};
use axum::{Json, extract::State, http::StatusCode};

/// `POST /wishlists/{slug}/items`
pub async fn add_item(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
    ApiJson(new_item): ApiJson<NewItem>,
) -> Result<(StatusCode, Json<WishlistItemModel>)> {
    let created = item::add_item(&state.database, &slug, new_item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /items/{id}`
pub async fn update_item(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<i64>,
    ApiJson(changes): ApiJson<ItemChanges>,
) -> Result<Json<WishlistItemModel>> {
    Ok(Json(
        item::update_item(&state.database, item_id, changes).await?,
    ))
}

/// `DELETE /items/{id}`
pub async fn delete_item(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<i64>,
) -> Result<StatusCode> {
    item::delete_item(&state.database, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
