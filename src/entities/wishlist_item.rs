//! Wishlist item entity - A single gift idea on a wishlist.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wishlist item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlist_items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Wishlist this item belongs to
    pub wishlist_id: i64,
    /// What is wished for
    pub item_name: String,
    /// Optional details (size, colour, ...)
    pub description: Option<String>,
    /// Optional link to a shop page
    pub shop_link: Option<String>,
    /// When the item was added
    pub created_at: DateTime,
}

/// Defines relationships between items and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one wishlist
    #[sea_orm(
        belongs_to = "super::wishlist::Entity",
        from = "Column::WishlistId",
        to = "super::wishlist::Column::Id",
        on_delete = "Cascade"
    )]
    Wishlist,
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
