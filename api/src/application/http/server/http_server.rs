use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use foodlytic_core::{application::create_service, domain::common::FoodlyticConfig};
use tower_http::cors::CorsLayer;
use tracing::info_span;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    application::http::{
        analysis::router::analysis_routes,
        health::health_routes,
        server::{app_state::AppState, openapi},
    },
    args::Args,
};

pub fn state(args: Arc<Args>) -> AppState {
    let config: FoodlyticConfig = FoodlyticConfig::from(args.as_ref().clone());
    let service = create_service(config);
    AppState::new(args, service)
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let mut openapi = openapi::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let router = Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(api_docs_url, openapi))
        .merge(analysis_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        // Image uploads are capped at 10MB in the handler; leave headroom
        // for the multipart framing around the payload.
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
        .with_state(state);

    Ok(router)
}
