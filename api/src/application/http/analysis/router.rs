use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    analyze_text::{__path_analyze_text, analyze_text},
    get_languages::{__path_get_languages, get_languages},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_text, analyze_image, get_languages))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/text", state.args.server.root_path),
            post(analyze_text),
        )
        .route(
            &format!("{}/analysis/image", state.args.server.root_path),
            post(analyze_image),
        )
        .route(
            &format!("{}/analysis/languages", state.args.server.root_path),
            get(get_languages),
        )
}
