//! Unified error type for the wishlist service.
//!
//! Business logic in [`crate::core`] returns these variants directly; the HTTP layer
//! maps each one onto a status code in [`crate::api::error`].

use crate::core::auth::Role;
use thiserror::Error;

/// Every failure the service can report.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or malformed.
    #[error("{message}")]
    Validation {
        /// Human-readable description of the problem
        message: String,
    },

    /// A uniqueness rule was violated.
    #[error("{message}")]
    Conflict {
        /// Human-readable description of the clash
        message: String,
    },

    /// No user with the given id exists.
    #[error("User not found: {id}")]
    UserNotFound {
        /// Id that was looked up
        id: i64,
    },

    /// No wishlist with the given slug exists.
    #[error("Wishlist not found: {slug}")]
    WishlistNotFound {
        /// Slug that was looked up
        slug: String,
    },

    /// No item with the given id exists.
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// Id that was looked up
        id: i64,
    },

    /// Credentials were missing or did not match.
    #[error("Invalid credentials")]
    Unauthenticated,

    /// Credentials were valid but carry too little privilege.
    #[error("{required} access required")]
    Forbidden {
        /// Minimum role the operation needs
        required: Role,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Storage layer failure.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (binding the listener, reading files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::Conflict`] with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
