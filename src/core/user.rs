//! User directory - Registration and administration of household members.
//!
//! Full names are unique and compared exactly (after trimming surrounding whitespace).
//! Deleting or renaming a user never touches wishlists, which keep the name and
//! category they were created with.

use crate::{
    entities::{Category, User, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, SqlErr, prelude::*};
use tracing::info;

/// Fields an admin may change on an existing user. `None` leaves the field as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// New full name
    pub full_name: Option<String>,
    /// New category
    pub category: Option<Category>,
}

fn normalized_name(full_name: &str) -> Result<String> {
    let name = full_name.trim();
    if name.is_empty() {
        return Err(Error::validation("Full name cannot be empty"));
    }
    Ok(name.to_string())
}

fn duplicate_name(name: &str) -> Error {
    Error::conflict(format!("User '{name}' is already registered"))
}

// A concurrent registration can slip past the existence check; the UNIQUE
// constraint still catches it.
fn map_insert_error(err: DbErr, name: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_name(name),
        _ => err.into(),
    }
}

/// Retrieves every registered user, ordered alphabetically by full name.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::FullName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the users of a single category, ordered alphabetically by full name.
pub async fn get_users_by_category(
    db: &DatabaseConnection,
    category: Category,
) -> Result<Vec<user::Model>> {
    User::find()
        .filter(user::Column::Category.eq(category))
        .order_by_asc(user::Column::FullName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a user by exact full name.
pub async fn get_user_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::FullName.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a user by id.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Registers a new household member.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only ([`Error::Validation`])
/// - A user with the same name already exists ([`Error::Conflict`])
/// - The database insert fails
pub async fn register_user(
    db: &DatabaseConnection,
    full_name: &str,
    category: Category,
) -> Result<user::Model> {
    let name = normalized_name(full_name)?;

    if get_user_by_name(db, &name).await?.is_some() {
        return Err(duplicate_name(&name));
    }

    let user = user::ActiveModel {
        full_name: Set(name.clone()),
        category: Set(category),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    let created = user
        .insert(db)
        .await
        .map_err(|e| map_insert_error(e, &name))?;

    info!(user_id = created.id, category = %created.category, "Registered user");
    Ok(created)
}

/// Overwrites the provided fields of an existing user.
///
/// # Errors
/// Returns an error if:
/// - The user does not exist ([`Error::UserNotFound`])
/// - A provided name is empty ([`Error::Validation`]) or belongs to another user ([`Error::Conflict`])
/// - The database update fails
pub async fn update_user(
    db: &DatabaseConnection,
    user_id: i64,
    changes: UserChanges,
) -> Result<user::Model> {
    let existing = get_user_by_id(db, user_id)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })?;

    let mut user: user::ActiveModel = existing.clone().into();

    if let Some(full_name) = changes.full_name {
        let name = normalized_name(&full_name)?;
        let taken = get_user_by_name(db, &name).await?;
        if taken.is_some_and(|other| other.id != user_id) {
            return Err(duplicate_name(&name));
        }
        user.full_name = Set(name);
    }

    if let Some(category) = changes.category {
        user.category = Set(category);
    }

    if !user.is_changed() {
        return Ok(existing);
    }

    let name = user.full_name.as_ref().clone();
    let updated = user
        .update(db)
        .await
        .map_err(|e| map_insert_error(e, &name))?;

    info!(user_id, "Updated user");
    Ok(updated)
}

/// Removes a user. Their wishlists are left in place.
///
/// # Errors
/// Returns [`Error::UserNotFound`] if no such user exists, or a database error.
pub async fn delete_user(db: &DatabaseConnection, user_id: i64) -> Result<()> {
    let result = User::delete_by_id(user_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::UserNotFound { id: user_id });
    }

    info!(user_id, "Deleted user");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_register_user_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = register_user(&db, "", Category::Adult).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = register_user(&db, "   ", Category::Kid).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_user_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let user = register_user(&db, "  Alice  ", Category::Adult).await?;

        assert_eq!(user.full_name, "Alice");
        assert_eq!(user.category, Category::Adult);
        assert!(user.id > 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_register_duplicate_name_conflicts() -> Result<()> {
        let db = setup_test_db().await?;

        register_user(&db, "Alice", Category::Adult).await?;
        let result = register_user(&db, "Alice", Category::Pet).await;
        assert!(matches!(result, Err(Error::Conflict { .. })));

        // Exact match only: a different casing is a different name.
        let other = register_user(&db, "alice", Category::Kid).await?;
        assert_eq!(other.full_name, "alice");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_users_sorted_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        let zed = create_test_user(&db, "Zed").await?;
        let anna = create_test_user(&db, "Anna").await?;

        let users = get_all_users(&db).await?;
        assert_eq!(users, vec![anna, zed]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_users_by_category() -> Result<()> {
        let db = setup_test_db().await?;

        register_user(&db, "Alice", Category::Adult).await?;
        let rex = register_user(&db, "Rex", Category::Pet).await?;

        let pets = get_users_by_category(&db, Category::Pet).await?;
        assert_eq!(pets, vec![rex]);
        assert!(get_users_by_category(&db, Category::Kid).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_user_partial() -> Result<()> {
        let db = setup_test_db().await?;
        let user = register_user(&db, "Alice", Category::Kid).await?;

        let updated = update_user(
            &db,
            user.id,
            UserChanges {
                full_name: None,
                category: Some(Category::Adult),
            },
        )
        .await?;
        assert_eq!(updated.full_name, "Alice");
        assert_eq!(updated.category, Category::Adult);

        let renamed = update_user(
            &db,
            user.id,
            UserChanges {
                full_name: Some("Alicia".to_string()),
                category: None,
            },
        )
        .await?;
        assert_eq!(renamed.full_name, "Alicia");
        assert_eq!(renamed.category, Category::Adult);

        // No changes at all returns the stored user untouched
        let unchanged = update_user(&db, user.id, UserChanges::default()).await?;
        assert_eq!(unchanged, renamed);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_user_errors() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = create_test_user(&db, "Alice").await?;
        create_test_user(&db, "Bob").await?;

        let result = update_user(&db, 999, UserChanges::default()).await;
        assert!(matches!(result, Err(Error::UserNotFound { id: 999 })));

        let result = update_user(
            &db,
            alice.id,
            UserChanges {
                full_name: Some("Bob".to_string()),
                category: None,
            },
        )
        .await;
        assert!(matches!(result, Err(Error::Conflict { .. })));

        let result = update_user(
            &db,
            alice.id,
            UserChanges {
                full_name: Some(" ".to_string()),
                category: None,
            },
        )
        .await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        // Failed updates leave the record as it was
        let stored = get_user_by_id(&db, alice.id).await?.unwrap();
        assert_eq!(stored, alice);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_user() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "Alice").await?;

        delete_user(&db, user.id).await?;
        assert!(get_user_by_id(&db, user.id).await?.is_none());

        let result = delete_user(&db, user.id).await;
        assert!(matches!(result, Err(Error::UserNotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_user_keeps_wishlists() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "Alice").await?;
        let wishlist = create_test_wishlist(&db, "Alice", &["Book"]).await?;

        delete_user(&db, user.id).await?;

        let still_there =
            crate::core::wishlist::get_wishlist_by_slug(&db, &wishlist.wishlist.slug).await?;
        assert_eq!(still_there.wishlist.owner_name, "Alice");
        assert_eq!(still_there.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_unique_violation_maps_to_conflict() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "Alice").await?;

        // Bypass the existence check, as a concurrent registration would
        let err = user::ActiveModel {
            full_name: Set("Alice".to_string()),
            category: Set(Category::Kid),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap_err();

        let mapped = map_insert_error(err, "Alice");
        assert!(matches!(mapped, Error::Conflict { .. }));
        assert!(mapped.to_string().contains("Alice"));

        let other = map_insert_error(DbErr::Custom("disk full".to_string()), "Bob");
        assert!(matches!(other, Error::Database(_)));

        Ok(())
    }
}
