//! User endpoints.
//!
//! Registration is public so new household members can sign themselves up; editing
//! and removing users is reserved for the admin.

use super::{
    AppState,
    access::{AdminAccess, UserAccess},
    extract::{ApiJson, ApiPath},
};
use crate::{
    core::user::{self, UserChanges},
    entities::{Category, UserModel},
    errors::{Error, Result},
};
use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

/// Body of `POST /users/register`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserRequest {
    /// Full name of the new member
    pub full_name: String,
    /// `ADULT`, `KID` or `PET`
    pub category: Option<String>,
}

/// Body of `PUT /users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    /// New full name
    pub full_name: Option<String>,
    /// New category
    pub category: Option<String>,
}

/// Parses a required category field from a request body.
pub(crate) fn required_category(category: Option<&str>) -> Result<Category> {
    category
        .ok_or_else(|| Error::validation("Category is required"))?
        .parse()
}

impl TryFrom<UpdateUserRequest> for UserChanges {
    type Error = Error;

    fn try_from(request: UpdateUserRequest) -> Result<Self> {
        Ok(Self {
            full_name: request.full_name,
            category: request
                .category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()?,
        })
    }
}

/// Registers a user from a request body. Shared by the public and admin routes.
pub(crate) async fn create_from_request(
    state: &AppState,
    request: RegisterUserRequest,
) -> Result<(StatusCode, Json<UserModel>)> {
    let category = required_category(request.category.as_deref())?;
    let created = user::register_user(&state.database, &request.full_name, category).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /users`
pub async fn list_users(
    _access: UserAccess,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserModel>>> {
    Ok(Json(user::get_all_users(&state.database).await?))
}

/// `GET /users/category/{category}`
pub async fn list_users_by_category(
    _access: UserAccess,
    State(state): State<AppState>,
    ApiPath(category): ApiPath<String>,
) -> Result<Json<Vec<UserModel>>> {
    let category: Category = category.parse()?;
    Ok(Json(
        user::get_users_by_category(&state.database, category).await?,
    ))
}

/// `POST /users/register` (public)
pub async fn register_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserModel>)> {
    create_from_request(&state, request).await
}

/// `PUT /users/{id}`
pub async fn update_user(
    _access: AdminAccess,
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserModel>> {
    let changes = UserChanges::try_from(request)?;
    Ok(Json(
        user::update_user(&state.database, user_id, changes).await?,
    ))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    _access: AdminAccess,
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<StatusCode> {
    user::delete_user(&state.database, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
