//! Router assembly

use crate::handlers;
use axum::routing::get;
use axum::Router;
use rms_core::domain::{Author, IpAsset, Publication, Resource, User};
use rms_sdk::RmsClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for handlers
#[derive(Clone)]
pub struct GatewayState {
    pub client: RmsClient,
}

/// Build the gateway router with every resource route
pub fn router(client: RmsClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/status", get(handlers::status))
        .merge(resource_routes::<Author>())
        .merge(resource_routes::<IpAsset>())
        .merge(resource_routes::<Publication>())
        .merge(resource_routes::<User>())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(GatewayState { client })
}

fn resource_routes<R: Resource>() -> Router<GatewayState> {
    let segment = R::descriptor().wire.route;

    Router::new()
        .route(
            &format!("/{}", segment),
            get(handlers::list::<R>).post(handlers::create::<R>),
        )
        .route(
            &format!("/{}/:id", segment),
            get(handlers::get::<R>)
                .put(handlers::update::<R>)
                .delete(handlers::delete::<R>),
        )
}
