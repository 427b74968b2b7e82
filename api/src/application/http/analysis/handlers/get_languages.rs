use foodlytic_core::domain::analysis::value_objects::Language;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetLanguagesResponse {
    pub data: Vec<LanguageEntry>,
}

#[utoipa::path(
    get,
    path = "/analysis/languages",
    tag = "analysis",
    summary = "List supported report languages",
    responses(
        (status = 200, body = GetLanguagesResponse)
    )
)]
pub async fn get_languages() -> Response<GetLanguagesResponse> {
    let data = Language::ALL
        .iter()
        .map(|language| LanguageEntry {
            code: language.code().to_string(),
            name: language.name().to_string(),
        })
        .collect();

    Response::OK(GetLanguagesResponse { data })
}
