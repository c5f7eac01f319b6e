//! Store Types
//!
//! Domain records for the chat community model: users, categories,
//! servers, and channels. Field limits mirror the column constraints
//! enforced at insert time.

use serde::{Deserialize, Serialize};

/// Maximum length for user, category, server, and channel names
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length for server descriptions
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Maximum length for channel topics
pub const TOPIC_MAX_LEN: usize = 500;

/// A registered user
///
/// Stands in for the external auth system the original deployment
/// delegates account management to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// A category that servers can belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// A chat server: a community of members with channels, owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub category_id: i64,
    pub description: Option<String>,
}

/// A communication channel within a server
///
/// Channel names are stored lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub topic: String,
    pub server_id: i64,
}

/// Parameters for creating a server
#[derive(Debug, Clone)]
pub struct NewServer {
    pub name: String,
    pub owner_id: i64,
    pub category_id: i64,
    pub description: Option<String>,
}

impl NewServer {
    /// Create server parameters with the required fields
    pub fn new(name: &str, owner_id: i64, category_id: i64) -> Self {
        Self {
            name: name.to_string(),
            owner_id,
            category_id,
            description: None,
        }
    }

    /// Attach a description
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Parameters for creating a channel
#[derive(Debug, Clone)]
pub struct NewChannel {
    pub name: String,
    pub owner_id: i64,
    pub topic: String,
    pub server_id: i64,
}

impl NewChannel {
    /// Create channel parameters with the required fields
    pub fn new(name: &str, owner_id: i64, topic: &str, server_id: i64) -> Self {
        Self {
            name: name.to_string(),
            owner_id,
            topic: topic.to_string(),
            server_id,
        }
    }
}

/// Filter for listing servers
///
/// All fields are optional; an empty filter lists everything.
#[derive(Debug, Clone, Default)]
pub struct ServerFilter {
    /// Only servers in the category with this name
    pub category: Option<String>,
    /// Cap the number of results
    pub limit: Option<usize>,
    /// Only the server with this id
    pub server_id: Option<i64>,
    /// Only servers the given user is a member of
    pub member_id: Option<i64>,
}

impl ServerFilter {
    /// Filter by category name
    pub fn category(mut self, name: &str) -> Self {
        self.category = Some(name.to_string());
        self
    }

    /// Limit the number of results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Select a single server by id
    pub fn server_id(mut self, id: i64) -> Self {
        self.server_id = Some(id);
        self
    }

    /// Only servers the given user belongs to
    pub fn member(mut self, user_id: i64) -> Self {
        self.member_id = Some(user_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_server_builder() {
        let s = NewServer::new("rustaceans", 1, 2).description("all things rust");
        assert_eq!(s.name, "rustaceans");
        assert_eq!(s.owner_id, 1);
        assert_eq!(s.category_id, 2);
        assert_eq!(s.description.as_deref(), Some("all things rust"));
    }

    #[test]
    fn test_server_filter_builder() {
        let f = ServerFilter::default().category("gaming").limit(5).member(7);
        assert_eq!(f.category.as_deref(), Some("gaming"));
        assert_eq!(f.limit, Some(5));
        assert_eq!(f.member_id, Some(7));
        assert_eq!(f.server_id, None);
    }
}
