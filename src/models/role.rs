use serde::{Deserialize, Serialize};

/// A role row as managed through the admin role endpoints.
///
/// Distinct from [`crate::auth::Role`]: this is the backend's editable
/// record, not the closed enumeration sessions carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewRole {
    pub name: String,
}

/// Partial role update; absent fields are left unchanged by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
