//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod site_setting;
pub mod user;
pub mod wishlist;
pub mod wishlist_item;

pub use category::Category;
pub use site_setting::{
    Column as SiteSettingColumn, Entity as SiteSetting, Model as SiteSettingModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use wishlist::{Column as WishlistColumn, Entity as Wishlist, Model as WishlistModel};
pub use wishlist_item::{
    Column as WishlistItemColumn, Entity as WishlistItem, Model as WishlistItemModel,
};
