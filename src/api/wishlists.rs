//! Wishlist endpoints. All require at least the user role.

use super::{
    AppState,
    access::UserAccess,
    extract::{ApiJson, ApiPath},
    users::required_category,
};
use crate::{
    core::{
        item::NewItem,
        wishlist::{self, NewWishlist, WishlistChanges, WishlistWithItems},
    },
    entities::Category,
    errors::Result,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Body of `POST /wishlists`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateWishlistRequest {
    /// Owner's full name
    pub owner_name: String,
    /// Owner's category
    pub category: Option<String>,
    /// Optional note
    pub note: Option<String>,
    /// Optional heading
    pub title: Option<String>,
    /// Optional longer description
    pub description: Option<String>,
    /// Initial items
    pub items: Vec<NewItem>,
}

/// Body of `PUT /wishlists/{slug}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWishlistRequest {
    /// New note
    pub note: Option<String>,
    /// New heading
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
}

/// Query string of `GET /wishlists/search`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Substring of the owner's name
    pub name: String,
}

/// `GET /wishlists`
pub async fn list_wishlists(
    _access: UserAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<WishlistWithItems>>> {
    Ok(Json(wishlist::get_all_wishlists(&state.database).await?))
}

/// `GET /wishlists/category/{category}`
pub async fn list_wishlists_by_category(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiPath(category): ApiPath<String>,
) -> Result<Json<Vec<WishlistWithItems>>> {
    let category: Category = category.parse()?;
    Ok(Json(
        wishlist::get_wishlists_by_category(&state.database, category).await?,
    ))
}

/// `GET /wishlists/search?name=`
pub async fn search_wishlists(
    _access: UserAccess,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<WishlistWithItems>>> {
    Ok(Json(
        wishlist::search_wishlists(&state.database, &params.name).await?,
    ))
}

/// `GET /wishlists/{slug}`
pub async fn get_wishlist(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<Json<WishlistWithItems>> {
    Ok(Json(
        wishlist::get_wishlist_by_slug(&state.database, &slug).await?,
    ))
}

/// `POST /wishlists`
pub async fn create_wishlist(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateWishlistRequest>,
) -> Result<(StatusCode, Json<WishlistWithItems>)> {
    let category = required_category(request.category.as_deref())?;
    let created = wishlist::create_wishlist(
        &state.database,
        NewWishlist {
            owner_name: request.owner_name,
            category,
            note: request.note,
            title: request.title,
            description: request.description,
            items: request.items,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /wishlists/{slug}`
pub async fn update_wishlist(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateWishlistRequest>,
) -> Result<Json<WishlistWithItems>> {
    let changes = WishlistChanges {
        note: request.note,
        title: request.title,
        description: request.description,
    };
    Ok(Json(
        wishlist::update_wishlist(&state.database, &slug, changes).await?,
    ))
}

/// `DELETE /wishlists/{slug}`
pub async fn delete_wishlist(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<StatusCode> {
    wishlist::delete_wishlist(&state.database, &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
