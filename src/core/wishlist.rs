//! Wishlist store - Creating, browsing, editing and deleting wishlists.
//!
//! A wishlist is addressed by its slug everywhere outside the database. Slugs are
//! generated once at creation from the owner's name plus a random token and never change.
//! Creation and deletion each run in a single database transaction together with the
//! wishlist's items, so readers never observe a wishlist without its initial items or
//! items whose wishlist is gone.

use crate::{
    core::{
        item::{self, NewItem},
        non_blank,
    },
    entities::{Category, Wishlist, WishlistItem, wishlist, wishlist_item},
    errors::{Error, Result},
};
use sea_orm::{LoaderTrait, PaginatorTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Number of random hex characters appended to every slug.
const SLUG_TOKEN_LEN: usize = 8;

/// A wishlist together with its items in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WishlistWithItems {
    /// The wishlist record
    #[serde(flatten)]
    pub wishlist: wishlist::Model,
    /// Items on the wishlist, oldest first
    pub items: Vec<wishlist_item::Model>,
}

/// Input for [`create_wishlist`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWishlist {
    /// Owner's full name, copied onto the wishlist
    pub owner_name: String,
    /// Owner's category, copied onto the wishlist
    pub category: Category,
    /// Optional note
    pub note: Option<String>,
    /// Optional heading
    pub title: Option<String>,
    /// Optional longer description
    pub description: Option<String>,
    /// Initial items; entries with a blank name are ignored
    pub items: Vec<NewItem>,
}

/// Fields that may change after creation. `None` leaves the field as it is;
/// a blank string clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WishlistChanges {
    /// New note
    pub note: Option<String>,
    /// New heading
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
}

/// Lowercased owner name reduced to `[a-z0-9-]`, whitespace runs joined by `-`.
fn slug_base(owner_name: &str) -> String {
    let cleaned: String = owner_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

fn slug_candidate(base: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    let token = &token[..SLUG_TOKEN_LEN];
    if base.is_empty() {
        token.to_string()
    } else {
        format!("{base}-{token}")
    }
}

async fn slug_exists<C>(db: &C, slug: &str) -> Result<bool>
where
    C: ConnectionTrait,
{
    let count = Wishlist::find()
        .filter(wishlist::Column::Slug.eq(slug))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Generates a slug for `owner_name` that no stored wishlist uses yet.
pub async fn generate_unique_slug<C>(db: &C, owner_name: &str) -> Result<String>
where
    C: ConnectionTrait,
{
    let base = slug_base(owner_name);
    loop {
        let candidate = slug_candidate(&base);
        if !slug_exists(db, &candidate).await? {
            return Ok(candidate);
        }
        debug!(slug = %candidate, "Slug collision, retrying");
    }
}

async fn with_items(
    db: &DatabaseConnection,
    wishlists: Vec<wishlist::Model>,
) -> Result<Vec<WishlistWithItems>> {
    let items = wishlists.load_many(WishlistItem, db).await?;
    Ok(wishlists
        .into_iter()
        .zip(items)
        .map(|(wishlist, mut items)| {
            items.sort_by_key(|item| item.id);
            WishlistWithItems { wishlist, items }
        })
        .collect())
}

/// Finds a wishlist record (without items) by slug.
pub async fn find_wishlist_by_slug<C>(db: &C, slug: &str) -> Result<Option<wishlist::Model>>
where
    C: ConnectionTrait,
{
    Wishlist::find()
        .filter(wishlist::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every wishlist with its items, oldest wishlist first.
pub async fn get_all_wishlists(db: &DatabaseConnection) -> Result<Vec<WishlistWithItems>> {
    let wishlists = Wishlist::find()
        .order_by_asc(wishlist::Column::Id)
        .all(db)
        .await?;
    with_items(db, wishlists).await
}

/// Retrieves the wishlists of one category with their items, oldest first.
pub async fn get_wishlists_by_category(
    db: &DatabaseConnection,
    category: Category,
) -> Result<Vec<WishlistWithItems>> {
    let wishlists = Wishlist::find()
        .filter(wishlist::Column::Category.eq(category))
        .order_by_asc(wishlist::Column::Id)
        .all(db)
        .await?;
    with_items(db, wishlists).await
}

/// Case-insensitive substring search on the owner name.
///
/// A blank query returns every wishlist. Matching happens in Rust rather than SQL
/// because `SQLite`'s `LIKE` only folds ASCII case.
pub async fn search_wishlists(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Vec<WishlistWithItems>> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return get_all_wishlists(db).await;
    }

    let matching: Vec<wishlist::Model> = Wishlist::find()
        .order_by_asc(wishlist::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .filter(|w| w.owner_name.to_lowercase().contains(&needle))
        .collect();
    debug!(query = %needle, matches = matching.len(), "Searched wishlists");
    with_items(db, matching).await
}

/// Retrieves a wishlist with its items.
///
/// # Errors
/// Returns [`Error::WishlistNotFound`] if no wishlist has this slug.
pub async fn get_wishlist_by_slug(db: &DatabaseConnection, slug: &str) -> Result<WishlistWithItems> {
    let wishlist = find_wishlist_by_slug(db, slug)
        .await?
        .ok_or_else(|| Error::WishlistNotFound {
            slug: slug.to_string(),
        })?;
    let items = item::get_items_for_wishlist(db, wishlist.id).await?;
    Ok(WishlistWithItems { wishlist, items })
}

/// Creates a wishlist and its initial items in one transaction.
///
/// # Errors
/// Returns an error if:
/// - The owner name is empty ([`Error::Validation`])
/// - No submitted item has a non-blank name ([`Error::Validation`])
/// - Any database operation fails; nothing is stored in that case
pub async fn create_wishlist(
    db: &DatabaseConnection,
    request: NewWishlist,
) -> Result<WishlistWithItems> {
    let owner_name = request.owner_name.trim().to_string();
    if owner_name.is_empty() {
        return Err(Error::validation("Owner name cannot be empty"));
    }

    let new_items: Vec<NewItem> = request
        .items
        .into_iter()
        .filter(|item| !item.item_name.trim().is_empty())
        .collect();
    if new_items.is_empty() {
        return Err(Error::validation(
            "A wishlist needs at least one item with a name",
        ));
    }

    let now = chrono::Utc::now().naive_utc();
    let txn = db.begin().await?;

    let slug = generate_unique_slug(&txn, &owner_name).await?;
    let wishlist = wishlist::ActiveModel {
        owner_name: Set(owner_name),
        category: Set(request.category),
        slug: Set(slug),
        note: Set(non_blank(request.note)),
        title: Set(non_blank(request.title)),
        description: Set(non_blank(request.description)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut items = Vec::with_capacity(new_items.len());
    for new_item in new_items {
        items.push(item::insert_item(&txn, wishlist.id, new_item).await?);
    }

    txn.commit().await?;

    info!(
        slug = %wishlist.slug,
        category = %wishlist.category,
        items = items.len(),
        "Created wishlist"
    );
    Ok(WishlistWithItems { wishlist, items })
}

/// Applies the provided note/title/description changes.
///
/// # Errors
/// Returns [`Error::WishlistNotFound`] if no wishlist has this slug, or a database error.
pub async fn update_wishlist(
    db: &DatabaseConnection,
    slug: &str,
    changes: WishlistChanges,
) -> Result<WishlistWithItems> {
    let existing = find_wishlist_by_slug(db, slug)
        .await?
        .ok_or_else(|| Error::WishlistNotFound {
            slug: slug.to_string(),
        })?;

    let mut wishlist: wishlist::ActiveModel = existing.into();
    if let Some(note) = changes.note {
        wishlist.note = Set(non_blank(Some(note)));
    }
    if let Some(title) = changes.title {
        wishlist.title = Set(non_blank(Some(title)));
    }
    if let Some(description) = changes.description {
        wishlist.description = Set(non_blank(Some(description)));
    }
    wishlist.updated_at = Set(chrono::Utc::now().naive_utc());
    wishlist.update(db).await?;

    info!(slug, "Updated wishlist");
    get_wishlist_by_slug(db, slug).await
}

/// Deletes a wishlist and all of its items.
///
/// # Errors
/// Returns [`Error::WishlistNotFound`] if no wishlist has this slug, or a database error.
pub async fn delete_wishlist(db: &DatabaseConnection, slug: &str) -> Result<()> {
    let txn = db.begin().await?;

    let wishlist = find_wishlist_by_slug(&txn, slug)
        .await?
        .ok_or_else(|| Error::WishlistNotFound {
            slug: slug.to_string(),
        })?;

    let removed_items = WishlistItem::delete_many()
        .filter(wishlist_item::Column::WishlistId.eq(wishlist.id))
        .exec(&txn)
        .await?
        .rows_affected;
    Wishlist::delete_by_id(wishlist.id).exec(&txn).await?;

    txn.commit().await?;

    info!(slug, removed_items, "Deleted wishlist");
    Ok(())
}
