//! Site setting entity - Key-value pairs for site-wide configuration
//! such as the header label shown on every page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Site setting database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Setting key (e.g., `"header_title"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Setting value stored as string
    pub value: String,
    /// When this setting was last written
    pub updated_at: DateTime,
}

/// `SiteSetting` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
