use super::{service, Auth};
use crate::types::Context;
use async_graphql::Data;
use axum::http::HeaderMap;
use std::sync::Arc;

pub const TOKEN_HEADER: &str = "x-jwt";

fn get_token_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(TOKEN_HEADER)
        .and_then(|header| header.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn get_token_from_connection_params(params: &serde_json::Value) -> Option<&str> {
    params
        .get(TOKEN_HEADER)
        .and_then(|token| token.as_str())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

async fn authenticate(ctx: Arc<Context>, token: Option<&str>) -> Option<Auth> {
    let token = token?;
    match service::auth::authenticate(ctx, token).await {
        Ok(auth) => Some(auth),
        Err(err) => {
            tracing::debug!("Ignoring unusable token: {:?}", err);
            None
        }
    }
}

/// An unusable token leaves the request anonymous; the resolver guards decide
/// whether that is acceptable.
pub async fn auth_from_headers(ctx: Arc<Context>, headers: &HeaderMap) -> Option<Auth> {
    authenticate(ctx, get_token_from_headers(headers)).await
}

pub async fn on_connection_init(
    ctx: Arc<Context>,
    params: serde_json::Value,
) -> async_graphql::Result<Data> {
    let mut data = Data::default();
    if let Some(auth) = authenticate(ctx, get_token_from_connection_params(&params)).await {
        data.insert(auth);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    #[test]
    fn reads_the_token_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(get_token_from_headers(&headers), None);

        headers.insert(TOKEN_HEADER, HeaderValue::from_static(" abc.def.ghi "));
        assert_eq!(get_token_from_headers(&headers), Some("abc.def.ghi"));

        headers.insert(TOKEN_HEADER, HeaderValue::from_static(""));
        assert_eq!(get_token_from_headers(&headers), None);
    }

    #[test]
    fn reads_the_token_from_connection_params() {
        assert_eq!(
            get_token_from_connection_params(&json!({ "x-jwt": "abc" })),
            Some("abc")
        );
        assert_eq!(get_token_from_connection_params(&json!({ "x-jwt": 1 })), None);
        assert_eq!(get_token_from_connection_params(&json!(null)), None);
    }

    #[tokio::test]
    async fn invalid_tokens_stay_anonymous() {
        let ctx = crate::types::testing::context();
        let data = on_connection_init(ctx, json!({ "x-jwt": "garbage" })).await;
        assert!(data.is_ok());
    }
}
