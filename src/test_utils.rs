//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    api::AppState,
    config::app::{AppConfig, DEFAULT_HEADER},
    core::{
        auth::{Credentials, encode_basic_token},
        item::NewItem,
        user,
        wishlist::{self, NewWishlist, WishlistWithItems},
    },
    entities::{self, Category},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Password of the `user` account in tests.
pub const TEST_USER_PASSWORD: &str = "user-pass";
/// Password of the `admin` account in tests.
pub const TEST_ADMIN_PASSWORD: &str = "admin-pass";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Configuration with fixed test passwords and the default header.
#[must_use]
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_address: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        default_header: DEFAULT_HEADER.to_string(),
        allowed_origin: None,
        credentials: Credentials::new(
            TEST_USER_PASSWORD.to_string(),
            TEST_ADMIN_PASSWORD.to_string(),
        ),
    }
}

/// Application state over a fresh in-memory database.
pub async fn setup_test_state() -> Result<AppState> {
    let db = setup_test_db().await?;
    Ok(AppState::new(db, &test_config()))
}

/// `Authorization` header value for the `user` account.
#[must_use]
pub fn user_auth_header() -> String {
    format!("Basic {}", encode_basic_token("user", TEST_USER_PASSWORD))
}

/// `Authorization` header value for the `admin` account.
#[must_use]
pub fn admin_auth_header() -> String {
    format!("Basic {}", encode_basic_token("admin", TEST_ADMIN_PASSWORD))
}

/// Registers an adult user with the given name.
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::user::Model> {
    user::register_user(db, name, Category::Adult).await
}

/// An item with only a name.
#[must_use]
pub fn new_item(name: &str) -> NewItem {
    NewItem {
        item_name: name.to_string(),
        ..Default::default()
    }
}

/// A create request for an adult's wishlist with the given item names.
///
/// # Defaults
/// * `category`: ADULT
/// * `note`, `title`, `description`: None
#[must_use]
pub fn new_wishlist_request(owner_name: &str, item_names: &[&str]) -> NewWishlist {
    NewWishlist {
        owner_name: owner_name.to_string(),
        category: Category::Adult,
        note: None,
        title: None,
        description: None,
        items: item_names.iter().map(|name| new_item(name)).collect(),
    }
}

/// Creates a wishlist with defaults from [`new_wishlist_request`].
pub async fn create_test_wishlist(
    db: &DatabaseConnection,
    owner_name: &str,
    item_names: &[&str],
) -> Result<WishlistWithItems> {
    wishlist::create_wishlist(db, new_wishlist_request(owner_name, item_names)).await
}

/// Sets up a test database holding one wishlist with a single "Book" item.
/// Returns (db, wishlist) for item-related tests.
pub async fn setup_with_wishlist() -> Result<(DatabaseConnection, WishlistWithItems)> {
    let db = setup_test_db().await?;
    let wishlist = create_test_wishlist(&db, "Test Owner", &["Book"]).await?;
    Ok((db, wishlist))
}
