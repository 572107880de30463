//! Credential check - Verifies a role name and password against the configured secrets.
//!
//! There are exactly two accounts, `user` and `admin`, each guarded by a shared password.
//! A successful check yields a [`Session`] whose token is the value clients replay in an
//! `Authorization: Basic` header; the HTTP layer re-runs [`authenticate_basic`] on every
//! request, so the role is never taken from anything the client asserts about itself.

use crate::errors::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use tracing::warn;
use zeroize::Zeroizing;

/// Authorization level derived from the credential pair that was presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May browse and edit wishlists and items
    User,
    /// Everything a user may do, plus user management and site settings
    Admin,
}

impl Role {
    /// Returns true when a holder of `self` may perform an operation requiring `required`.
    #[must_use]
    pub const fn satisfies(self, required: Self) -> bool {
        matches!((self, required), (Self::Admin, _) | (Self::User, Self::User))
    }

    /// Login name of the account carrying this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    fn from_username(username: &str) -> Option<Self> {
        match username {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two role secrets. Wiped from memory on drop.
#[derive(Clone)]
pub struct Credentials {
    user_password: Zeroizing<String>,
    admin_password: Zeroizing<String>,
}

impl Credentials {
    /// Wraps the configured user and admin passwords.
    #[must_use]
    pub fn new(user_password: String, admin_password: String) -> Self {
        Self {
            user_password: Zeroizing::new(user_password),
            admin_password: Zeroizing::new(admin_password),
        }
    }

    fn secret_for(&self, role: Role) -> &str {
        match role {
            Role::User => self.user_password.as_str(),
            Role::Admin => self.admin_password.as_str(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_password", &"<redacted>")
            .field("admin_password", &"<redacted>")
            .finish()
    }
}

/// Result of a successful credential check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Role the credentials grant
    pub role: Role,
    /// Opaque value to send back as `Authorization: Basic <token>`
    pub token: String,
}

// Hash both sides so comparison time does not depend on how long a matching prefix is.
fn secrets_match(expected: &str, provided: &str) -> bool {
    Sha256::digest(expected.as_bytes()) == Sha256::digest(provided.as_bytes())
}

/// Checks `password` against the secret of the account named `username`.
///
/// # Errors
/// Returns [`Error::Unauthenticated`] for an unknown account name or a wrong password.
/// The two cases are indistinguishable to the caller.
pub fn authenticate(credentials: &Credentials, username: &str, password: &str) -> Result<Session> {
    let role = Role::from_username(username);
    let matched = role.filter(|role| secrets_match(credentials.secret_for(*role), password));

    matched.map_or_else(
        || {
            warn!("Rejected credentials");
            Err(Error::Unauthenticated)
        },
        |role| {
            Ok(Session {
                role,
                token: encode_basic_token(role.as_str(), password),
            })
        },
    )
}

/// Encodes `username:password` the way HTTP Basic authentication expects.
#[must_use]
pub fn encode_basic_token(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}

/// Verifies the value of an `Authorization` header carrying Basic credentials.
///
/// # Errors
/// Returns [`Error::Unauthenticated`] if the header is not `Basic <base64>`, the payload
/// is not `username:password`, or the credentials do not match.
pub fn authenticate_basic(credentials: &Credentials, header_value: &str) -> Result<Role> {
    let (scheme, token) = header_value
        .trim()
        .split_once(' ')
        .ok_or(Error::Unauthenticated)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(Error::Unauthenticated);
    }

    let decoded = Zeroizing::new(
        STANDARD
            .decode(token.trim())
            .map_err(|_| Error::Unauthenticated)?,
    );
    let pair = std::str::from_utf8(&decoded).map_err(|_| Error::Unauthenticated)?;
    let (username, password) = pair.split_once(':').ok_or(Error::Unauthenticated)?;

    authenticate(credentials, username, password).map(|session| session.role)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("family".to_string(), "s3cret:admin".to_string())
    }

    #[test]
    fn test_admin_satisfies_user() {
        assert!(Role::Admin.satisfies(Role::User));
        assert!(Role::Admin.satisfies(Role::Admin));
        assert!(Role::User.satisfies(Role::User));
        assert!(!Role::User.satisfies(Role::Admin));
    }

    #[test]
    fn test_authenticate_each_role() {
        let session = authenticate(&credentials(), "user", "family").unwrap();
        assert_eq!(session.role, Role::User);

        let session = authenticate(&credentials(), "admin", "s3cret:admin").unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.token, encode_basic_token("admin", "s3cret:admin"));
    }

    #[test]
    fn test_authenticate_rejects_wrong_password_and_unknown_account() {
        assert!(matches!(
            authenticate(&credentials(), "user", "nope"),
            Err(Error::Unauthenticated)
        ));
        // The admin password does not unlock the user account, and vice versa.
        assert!(matches!(
            authenticate(&credentials(), "user", "s3cret:admin"),
            Err(Error::Unauthenticated)
        ));
        assert!(matches!(
            authenticate(&credentials(), "root", "family"),
            Err(Error::Unauthenticated)
        ));
    }

    #[test]
    fn test_account_name_must_match_exactly() {
        for name in [" admin", "admin\t", "Admin", "user "] {
            assert!(
                matches!(
                    authenticate(&credentials(), name, "s3cret:admin"),
                    Err(Error::Unauthenticated)
                ),
                "account name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_authenticate_basic_round_trips_login_token() {
        let session = authenticate(&credentials(), "admin", "s3cret:admin").unwrap();
        let header = format!("Basic {}", session.token);
        assert_eq!(
            authenticate_basic(&credentials(), &header).unwrap(),
            Role::Admin
        );
    }

    #[test]
    fn test_authenticate_basic_rejects_malformed_headers() {
        let creds = credentials();
        for header in [
            "",
            "Basic",
            "Bearer dXNlcjpmYW1pbHk=",
            "Basic not-base64!!",
            // "userfamily" without a separator
            "Basic dXNlcmZhbWlseQ==",
        ] {
            assert!(
                matches!(authenticate_basic(&creds, header), Err(Error::Unauthenticated)),
                "header {header:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let rendered = format!("{:?}", credentials());
        assert!(!rendered.contains("family"));
        assert!(rendered.contains("<redacted>"));
    }
}
