//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

// ============================================
// SERVER DTOs
// ============================================

/// Query parameters for server selection
#[derive(Debug, Default, Deserialize)]
pub struct ServerSelectParams {
    /// Filter servers by the specified category name
    pub category: Option<String>,
    /// Limit the number of servers returned to this quantity
    pub qty: Option<usize>,
    /// Retrieve a specific server by its ID
    pub by_server_id: Option<i64>,
    /// If true, include the number of members in each server
    #[serde(default)]
    pub with_num_members: bool,
    /// Filter to servers the given user ID is a member of
    pub for_user: Option<i64>,
}

/// A server in API responses, with its channels embedded
#[derive(Debug, Serialize)]
pub struct ServerResponse {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    /// Category name
    pub category: String,
    pub description: Option<String>,
    pub channels: Vec<ChannelResponse>,
    /// Member count, present only when requested via `with_num_members`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_members: Option<usize>,
}

/// Server list response
#[derive(Debug, Serialize)]
pub struct ServerListResponse {
    pub total: usize,
    pub servers: Vec<ServerResponse>,
}

// ============================================
// CHANNEL DTOs
// ============================================

/// A channel in API responses
#[derive(Debug, Serialize)]
pub struct ChannelResponse {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub topic: String,
    pub server_id: i64,
}

// ============================================
// CATEGORY DTOs
// ============================================

/// A category in API responses
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Category list response
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub total: usize,
    pub categories: Vec<CategoryResponse>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Database status: "ok" or "error"
    pub database: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
