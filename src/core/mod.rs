//! Core business logic - framework-agnostic operations on users, wishlists, items
//! and site settings, plus the credential check.

/// Role credentials and their verification
pub mod auth;
/// Gift ideas on a wishlist
pub mod item;
/// Site-wide key-value settings
pub mod settings;
/// Household member registry
pub mod user;
/// Wishlists and slug generation
pub mod wishlist;

/// Trims an optional text field, mapping blank input to `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
