//! User entity - A registered household member.
//!
//! Users are referenced by wishlists only through a copied name and category,
//! so removing or renaming a user leaves existing wishlists untouched.

use super::category::Category;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full display name, unique across all users
    #[sea_orm(unique)]
    pub full_name: String,
    /// Adult, kid or pet
    pub category: Category,
    /// When the user registered
    pub created_at: DateTime,
}

/// Users have no foreign-key relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
