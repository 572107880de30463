//! Admin-only endpoints under `/admin`.
//!
//! These act on any record regardless of who created it.

use super::{
    AppState,
    access::AdminAccess,
    extract::{ApiJson, ApiPath},
    users::{RegisterUserRequest, create_from_request},
};
use crate::{
    core::{item, user, wishlist::{self, WishlistWithItems}},
    entities::UserModel,
    errors::Result,
};
use axum::{Json, extract::State, http::StatusCode};

pub use super::users::{delete_user, update_user};

/// `GET /admin/users`
pub async fn list_users(
    _access: AdminAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserModel>>> {
    Ok(Json(user::get_all_users(&state.database).await?))
}

/// `POST /admin/users`
pub async fn create_user(
    _access: AdminAccess,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserModel>)> {
    create_from_request(&state, request).await
}

/// `GET /admin/wishlists`
pub async fn list_wishlists(
    _access: AdminAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<WishlistWithItems>>> {
    Ok(Json(wishlist::get_all_wishlists(&state.database).await?))
}

/// `DELETE /admin/wishlists/{slug}`
pub async fn delete_wishlist(
    _access: AdminAccess,
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<StatusCode> {
    wishlist::delete_wishlist(&state.database, &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /admin/items/{id}`
pub async fn delete_item(
    _access: AdminAccess,
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<i64>,
) -> Result<StatusCode> {
    item::delete_item(&state.database, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
