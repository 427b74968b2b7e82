use utoipa::OpenApi;

use crate::application::http::analysis::router::AnalysisApiDoc;

#[derive(OpenApi)]
#[openapi(info(
    title = "Foodlytic API",
    description = "AI-powered food label analysis service"
))]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(AnalysisApiDoc::openapi());
    doc
}
