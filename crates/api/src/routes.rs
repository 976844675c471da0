use std::time::Instant;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};
use axum::http::{HeaderValue, Method, header};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Router, extract::State};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::observability;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = match state.config.cors_allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
        Err(_) => {
            warn!(
                origin = %state.config.cors_allowed_origin,
                "invalid cors origin, falling back to permissive"
            );
            CorsLayer::permissive()
        }
    };

    Router::new()
        .route("/graphql", post(graphql_handler).get(graphiql))
        .route_service("/graphql/ws", GraphQLSubscription::new(state.schema.clone()))
        .route("/metrics", get(render_metrics))
        .layer(cors)
        .with_state(state)
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    let operation = request
        .operation_name
        .clone()
        .unwrap_or_else(|| "anonymous".to_string());

    let started = Instant::now();
    let response = state.schema.execute(request).await;
    observability::register_graphql_request(
        &operation,
        response.errors.is_empty(),
        started.elapsed(),
    );

    response.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint("/graphql")
            .subscription_endpoint("/graphql/ws")
            .finish(),
    )
}

async fn render_metrics() -> String {
    observability::render_metrics().unwrap_or_default()
}
