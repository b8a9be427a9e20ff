//! # Session data model
//!
//! Defines the typed representation of the client's authentication state:
//!
//! - [`User`] — the profile record the backend returns on sign-in, persisted
//!   alongside the bearer token. Fields use the backend's camelCase wire names
//!   and tolerate unknown extras, so documents written by older panel builds
//!   keep parsing.
//! - [`Session`] — a token/user pairing that can only be constructed through
//!   [`Session::parse`]. Validation happens once at the storage boundary;
//!   downstream code never re-checks shape.
//! - [`Role`] — the case-insensitive classification used by the panels'
//!   redirect rules. [`SessionManager::has_user_role`] deliberately does *not*
//!   go through it; see that method for the policy split.
//!
//! [`SessionManager::has_user_role`]: crate::SessionManager::has_user_role

use serde::{Deserialize, Serialize};

/// Profile record stored alongside the bearer token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend document id (`_id` on the wire); absent for locally built users.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_id: Option<String>,
}

impl User {
    /// Build a minimal user; optional profile fields start empty.
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    /// Get display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(&self.email)
    }

    /// Classify the raw role string for redirect decisions.
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    /// A user is usable only with a non-empty email and role.
    pub fn is_valid(&self) -> bool {
        !self.email.is_empty() && !self.role.is_empty()
    }
}

/// A validated bearer-token/user pairing.
///
/// The only way to obtain one is [`Session::parse`], so holding a `Session`
/// means the token is non-empty and the user carries an email and a role.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Parse-and-validate at the storage boundary.
    ///
    /// Returns `None` for an empty token, a user document that does not parse,
    /// or a user missing its email or role. A torn store (token without user,
    /// or vice versa) therefore always reads as "no session".
    pub fn parse(token: &str, user_json: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        let user: User = serde_json::from_str(user_json).ok()?;
        if !user.is_valid() {
            return None;
        }
        Some(Self {
            token: token.to_string(),
            user,
        })
    }
}

/// Panel destination classification of a role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Hr,
    Candidate,
    /// Anything the panels do not special-case; preserved verbatim.
    Other(String),
}

impl Role {
    /// Case-insensitive classification (upper-cases before comparison), the
    /// policy the panels' redirect call sites share.
    pub fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "HR" => Role::Hr,
            "CANDIDATE" => Role::Candidate,
            _ => Role::Other(raw.to_string()),
        }
    }
}
