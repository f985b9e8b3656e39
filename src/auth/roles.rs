use std::fmt;

use serde::{Deserialize, Serialize};

/// Role carried by every authenticated user. Closed set; the backend never
/// sends anything outside it for a valid session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Moderator,
    Admin,
}

/// Privileged actions the UI can offer. Every "should this control render"
/// decision goes through [`Role::allows`] instead of comparing role strings
/// at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Delete discussions, comments, and snippets authored by others.
    ModerateContent,
    ManageCategories,
    ManageLanguages,
    ManageNews,
    ManageRoles,
    ManageUsers,
}

impl Role {
    /// Parse the wire form ("user" / "moderator" / "admin").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "moderator" => Some(Role::Moderator),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        match self {
            Role::Admin => true,
            Role::Moderator => matches!(capability, Capability::ModerateContent),
            Role::User => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
