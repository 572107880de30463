//! Wishlist entity - One member's list of gift ideas.
//!
//! `owner_name` and `category` are snapshots taken when the wishlist is created.
//! Renaming the owner later does not rewrite them.

use super::category::Category;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wishlist database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlists")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the wishlist
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owner's full name at creation time
    pub owner_name: String,
    /// Owner's category at creation time
    pub category: Category,
    /// Public, URL-safe identifier; never reassigned
    #[sea_orm(unique)]
    pub slug: String,
    /// Free-form note shown above the items
    pub note: Option<String>,
    /// Optional heading
    pub title: Option<String>,
    /// Optional longer description
    pub description: Option<String>,
    /// When the wishlist was created
    pub created_at: DateTime,
    /// When note, title or description last changed
    pub updated_at: DateTime,
}

/// Defines relationships between Wishlist and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One wishlist has many items
    #[sea_orm(has_many = "super::wishlist_item::Entity")]
    Items,
}

impl Related<super::wishlist_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
