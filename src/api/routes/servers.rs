//! Server Routes
//!
//! Listing endpoint for chat servers.
//!
//! - GET /api/v1/servers/select - List servers, with optional filters:
//!   `category` (category name), `qty` (result limit), `by_server_id`
//!   (single-server lookup), `with_num_members` (member count annotation),
//!   `for_user` (membership filter by user id)

use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dto::{ChannelResponse, ServerListResponse, ServerResponse, ServerSelectParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::store::{Channel, Server, ServerFilter};

/// GET /api/v1/servers/select
///
/// List servers matching the query parameters. Each server embeds its
/// channels; member counts are included only when `with_num_members` is set.
pub async fn select_servers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ServerSelectParams>,
) -> ApiResult<Json<ServerListResponse>> {
    let filter = filter_from_params(&params)?;

    let servers = state.store.list_servers(&filter)?;

    // A by-id lookup for a server that does not exist is an error,
    // unlike an ordinary filter that merely matches nothing.
    if servers.is_empty() {
        if let Some(id) = params.by_server_id {
            return Err(ApiError::NotFound(format!("Server with id {} not found", id)));
        }
    }

    let category_names: HashMap<i64, String> = state
        .store
        .list_categories()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let mut responses = Vec::with_capacity(servers.len());
    for server in &servers {
        let channels = state.store.channels_for_server(server.id)?;
        let num_members = if params.with_num_members {
            Some(state.store.member_count(server.id)?)
        } else {
            None
        };
        responses.push(server_to_response(server, channels, &category_names, num_members));
    }

    Ok(Json(ServerListResponse {
        total: responses.len(),
        servers: responses,
    }))
}

/// Translate query parameters into a store filter
fn filter_from_params(params: &ServerSelectParams) -> ApiResult<ServerFilter> {
    if let Some(qty) = params.qty {
        if qty == 0 {
            return Err(ApiError::Validation("qty must be at least 1".to_string()));
        }
    }

    let mut filter = ServerFilter::default();
    if let Some(category) = &params.category {
        filter = filter.category(category);
    }
    if let Some(qty) = params.qty {
        filter = filter.limit(qty);
    }
    if let Some(id) = params.by_server_id {
        filter = filter.server_id(id);
    }
    if let Some(user_id) = params.for_user {
        filter = filter.member(user_id);
    }
    Ok(filter)
}

/// Convert a Server plus its channels to a ServerResponse
fn server_to_response(
    server: &Server,
    channels: Vec<Channel>,
    category_names: &HashMap<i64, String>,
    num_members: Option<usize>,
) -> ServerResponse {
    ServerResponse {
        id: server.id,
        name: server.name.clone(),
        owner_id: server.owner_id,
        category: category_names
            .get(&server.category_id)
            .cloned()
            .unwrap_or_default(),
        description: server.description.clone(),
        channels: channels.into_iter().map(channel_to_response).collect(),
        num_members,
    }
}

/// Convert a Channel to a ChannelResponse
fn channel_to_response(channel: Channel) -> ChannelResponse {
    ChannelResponse {
        id: channel.id,
        name: channel.name,
        owner_id: channel.owner_id,
        topic: channel.topic,
        server_id: channel.server_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_params_empty() {
        let filter = filter_from_params(&ServerSelectParams::default()).unwrap();
        assert!(filter.category.is_none());
        assert!(filter.limit.is_none());
        assert!(filter.server_id.is_none());
        assert!(filter.member_id.is_none());
    }

    #[test]
    fn test_filter_from_params_full() {
        let params = ServerSelectParams {
            category: Some("gaming".to_string()),
            qty: Some(10),
            by_server_id: Some(3),
            with_num_members: true,
            for_user: Some(7),
        };
        let filter = filter_from_params(&params).unwrap();
        assert_eq!(filter.category.as_deref(), Some("gaming"));
        assert_eq!(filter.limit, Some(10));
        assert_eq!(filter.server_id, Some(3));
        assert_eq!(filter.member_id, Some(7));
    }

    #[test]
    fn test_filter_from_params_zero_qty() {
        let params = ServerSelectParams {
            qty: Some(0),
            ..Default::default()
        };
        assert!(filter_from_params(&params).is_err());
    }

    #[test]
    fn test_server_to_response_unknown_category() {
        let server = Server {
            id: 1,
            name: "alpha".to_string(),
            owner_id: 1,
            category_id: 99,
            description: None,
        };
        let response = server_to_response(&server, Vec::new(), &HashMap::new(), None);
        assert_eq!(response.category, "");
        assert!(response.num_members.is_none());
    }
}
