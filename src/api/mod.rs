//! HTTP layer - REST endpoints, access control and error mapping
//!
//! This module exposes the core operations as JSON endpoints under `/api`.
//! Every protected handler takes a [`access::UserAccess`] or [`access::AdminAccess`]
//! extractor, which re-checks the request's credentials before anything else runs.

/// Access gate extractors
pub mod access;
/// Admin-only endpoints
pub mod admin;
/// Login, session and health endpoints
pub mod auth;
/// Error-to-response mapping
pub mod error;
/// Request extractors with domain rejections
pub mod extract;
/// Item endpoints
pub mod items;
/// Site settings endpoints
pub mod settings;
/// User endpoints
pub mod users;
/// Wishlist endpoints
pub mod wishlists;


use crate::{
    config::app::AppConfig,
    core::auth::Credentials,
    errors::{Error, Result},
};
use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Shared data available to all handlers.
/// Cloned per request; the database handle is a pool and the rest is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: Arc<DatabaseConnection>,
    /// Role secrets checked on every protected request
    pub credentials: Arc<Credentials>,
    /// Header label served until one is stored
    pub default_header: Arc<str>,
}

impl AppState {
    /// Creates the shared state from an open database and the loaded configuration.
    #[must_use]
    pub fn new(database: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            database: Arc::new(database),
            credentials: Arc::new(config.credentials.clone()),
            default_header: Arc::from(config.default_header.as_str()),
        }
    }
}

fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer> {
    let origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin).map_err(|e| {
            Error::Config {
                message: format!("Invalid allowed_origin '{origin}': {e}"),
            }
        })?),
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_origin(origin)
        .max_age(Duration::from_secs(60 * 60)))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route(
            "/users/{id}",
            put(admin::update_user).delete(admin::delete_user),
        )
        .route("/wishlists", get(admin::list_wishlists))
        .route("/wishlists/{slug}", delete(admin::delete_wishlist))
        .route("/items/{id}", delete(admin::delete_item))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(auth::health))
        .route("/auth/login", post(auth::login))
        .route("/auth/session", get(auth::session))
        .route("/users", get(users::list_users))
        .route("/users/register", post(users::register_user))
        .route(
            "/users/category/{category}",
            get(users::list_users_by_category),
        )
        .route(
            "/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route(
            "/wishlists",
            get(wishlists::list_wishlists).post(wishlists::create_wishlist),
        )
        .route("/wishlists/search", get(wishlists::search_wishlists))
        .route(
            "/wishlists/category/{category}",
            get(wishlists::list_wishlists_by_category),
        )
        .route(
            "/wishlists/{slug}",
            get(wishlists::get_wishlist)
                .put(wishlists::update_wishlist)
                .delete(wishlists::delete_wishlist),
        )
        .route("/wishlists/{slug}/items", post(items::add_item))
        .route(
            "/items/{id}",
            put(items::update_item).delete(items::delete_item),
        )
        .route(
            "/settings/header",
            get(settings::get_header).put(settings::update_header),
        )
        .nest("/admin", admin_routes())
}

/// Builds the complete application: all routes under `/api`, CORS and request tracing.
///
/// # Errors
/// Returns [`Error::Config`] if the configured CORS origin is not a valid header value.
pub fn build_router(state: AppState, config: &AppConfig) -> Result<Router> {
    Ok(Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.allowed_origin.as_deref())?)
        .with_state(state))
}
