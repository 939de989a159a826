use crate::{
    modules::{self, auth::middleware, AppSchema},
    types::Context,
};
use async_graphql::http::{GraphiQLSource, ALL_WEBSOCKET_PROTOCOLS};
use async_graphql_axum::{GraphQLProtocol, GraphQLRequest, GraphQLResponse, GraphQLWebSocket};
use axum::{
    extract::WebSocketUpgrade,
    http::{header, HeaderMap, HeaderName, Method},
    response::{Html, IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint("/graphql")
            .subscription_endpoint("/graphql/ws")
            .finish(),
    )
}

async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    Extension(ctx): Extension<Arc<Context>>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut req = req.into_inner();
    if let Some(auth) = middleware::auth_from_headers(ctx, &headers).await {
        req = req.data(auth);
    }

    schema.execute(req).await.into()
}

async fn graphql_ws_handler(
    Extension(schema): Extension<AppSchema>,
    Extension(ctx): Extension<Arc<Context>>,
    protocol: GraphQLProtocol,
    websocket: WebSocketUpgrade,
) -> Response {
    websocket
        .protocols(ALL_WEBSOCKET_PROTOCOLS)
        .on_upgrade(move |stream| {
            GraphQLWebSocket::new(stream, schema, protocol)
                .on_connection_init(move |params| middleware::on_connection_init(ctx, params))
                .serve()
        })
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let schema = modules::build_schema(ctx.clone());

        let router = Router::new()
            .route("/graphql", get(graphiql).post(graphql_handler))
            .route("/graphql/ws", get(graphql_ws_handler))
            .layer(Extension(schema))
            .layer(Extension(ctx.clone()))
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([Method::OPTIONS, Method::GET, Method::POST])
                    .allow_headers([
                        header::CONTENT_TYPE,
                        HeaderName::from_static(middleware::TOKEN_HEADER),
                    ])
                    .allow_origin(cors::Any),
            );

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = match TcpListener::bind(&address).await {
            Ok(listener) => listener,
            Err(err) => {
                tracing::error!("Failed to bind to {}: {}", address, err);
                return;
            }
        };

        tracing::info!("App is running on {}", self.ctx.app.url);

        if let Err(err) = axum::serve(listener, self.router).await {
            tracing::error!("Server stopped: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::testing;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn serves_graphiql() {
        let app = App::new(testing::context());

        let response = app
            .router
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn executes_queries_over_http() {
        let app = App::new(testing::context());

        let response = app
            .router
            .oneshot(
                Request::post("/graphql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(middleware::TOKEN_HEADER, "not-a-jwt")
                    .body(Body::from(r#"{"query":"{ me { id } }"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["message"], "Forbidden resource");
    }
}
