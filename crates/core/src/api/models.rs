//! Typed models of the dashboard contract, shared by server and clients.

use serde::{Deserialize, Serialize};

/// `hello` input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloInput {
    pub name: String,
}

/// `hello` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloOutput {
    pub message: String,
}

/// Data attached to `INVALID_NAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidNameData {
    pub provided_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

/// A system user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// ISO-8601 UTC timestamp
    pub created_at: String,
    pub is_active: bool,
}

/// `bye` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarewellResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub timestamp: String,
    /// Session length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<u32>,
}

/// `health` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
