//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs, including the UNIQUE constraints on
//! `users.full_name`, `wishlists.slug` and `site_settings.key`.

use crate::entities::{SiteSetting, User, Wishlist, WishlistItem};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::debug;

/// Database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://wishlist.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the `SQLite` database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!(database_url, "Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Creates all tables that do not exist yet.
///
/// Wishlists are created before their items so the item table's foreign key
/// has something to point at.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, User).await?;
    create_table(db, &schema, Wishlist).await?;
    create_table(db, &schema, WishlistItem).await?;
    create_table(db, &schema, SiteSetting).await?;

    Ok(())
}
