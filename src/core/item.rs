//! Item collection - Adding, editing and removing gift ideas on a wishlist.
//!
//! Items are always reached through their parent wishlist's slug (when adding) or through
//! their own id (when editing or removing). Optional text fields are stored as `NULL`
//! when blank.

use crate::{
    core::{non_blank, wishlist::find_wishlist_by_slug},
    entities::{WishlistItem, wishlist_item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::info;

/// A gift idea to add to a wishlist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewItem {
    /// What is wished for; required
    pub item_name: String,
    /// Optional details
    pub description: Option<String>,
    /// Optional shop URL
    pub shop_link: Option<String>,
}

/// Fields that may change on an existing item. `None` leaves the field as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemChanges {
    /// New name; must not be blank
    pub item_name: Option<String>,
    /// New details; blank clears them
    pub description: Option<String>,
    /// New shop URL; blank clears it
    pub shop_link: Option<String>,
}

fn required_name(item_name: &str) -> Result<String> {
    let name = item_name.trim();
    if name.is_empty() {
        return Err(Error::validation("Item name cannot be empty"));
    }
    Ok(name.to_string())
}

/// Inserts an already validated item under `wishlist_id`.
pub(crate) async fn insert_item<C>(
    db: &C,
    wishlist_id: i64,
    item: NewItem,
) -> Result<wishlist_item::Model>
where
    C: ConnectionTrait,
{
    wishlist_item::ActiveModel {
        wishlist_id: Set(wishlist_id),
        item_name: Set(item.item_name.trim().to_string()),
        description: Set(non_blank(item.description)),
        shop_link: Set(non_blank(item.shop_link)),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Finds an item by id.
pub async fn get_item_by_id(
    db: &DatabaseConnection,
    item_id: i64,
) -> Result<Option<wishlist_item::Model>> {
    WishlistItem::find_by_id(item_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the items of a wishlist in insertion order.
pub async fn get_items_for_wishlist(
    db: &DatabaseConnection,
    wishlist_id: i64,
) -> Result<Vec<wishlist_item::Model>> {
    WishlistItem::find()
        .filter(wishlist_item::Column::WishlistId.eq(wishlist_id))
        .order_by_asc(wishlist_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Appends an item to the wishlist identified by `slug`.
///
/// # Errors
/// Returns an error if:
/// - The item name is empty or whitespace-only ([`Error::Validation`])
/// - No wishlist has this slug ([`Error::WishlistNotFound`])
/// - The database insert fails
pub async fn add_item(
    db: &DatabaseConnection,
    slug: &str,
    item: NewItem,
) -> Result<wishlist_item::Model> {
    required_name(&item.item_name)?;

    let wishlist = find_wishlist_by_slug(db, slug)
        .await?
        .ok_or_else(|| Error::WishlistNotFound {
            slug: slug.to_string(),
        })?;

    let created = insert_item(db, wishlist.id, item).await?;
    info!(slug, item_id = created.id, "Added item");
    Ok(created)
}

/// Overwrites the provided fields of an item.
///
/// # Errors
/// Returns an error if:
/// - The item does not exist ([`Error::ItemNotFound`])
/// - A provided name is blank ([`Error::Validation`])
/// - The database update fails
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    changes: ItemChanges,
) -> Result<wishlist_item::Model> {
    let new_name = changes.item_name.as_deref().map(required_name).transpose()?;

    let existing = get_item_by_id(db, item_id)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    let mut item: wishlist_item::ActiveModel = existing.clone().into();
    if let Some(name) = new_name {
        item.item_name = Set(name);
    }
    if let Some(description) = changes.description {
        item.description = Set(non_blank(Some(description)));
    }
    if let Some(shop_link) = changes.shop_link {
        item.shop_link = Set(non_blank(Some(shop_link)));
    }

    if !item.is_changed() {
        return Ok(existing);
    }

    let updated = item.update(db).await?;
    info!(item_id, "Updated item");
    Ok(updated)
}

/// Removes an item from its wishlist.
///
/// # Errors
/// Returns [`Error::ItemNotFound`] if no such item exists, or a database error.
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let result = WishlistItem::delete_by_id(item_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ItemNotFound { id: item_id });
    }

    info!(item_id, "Deleted item");
    Ok(())
}
