use super::handlers::get_model::{__path_get_model, get_model};
use super::handlers::search_models::{__path_search_models, search_models};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_models, get_model))]
pub struct ModelApiDoc;

pub fn model_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/models", state.args.server.root_path),
            get(search_models),
        )
        .route(
            &format!("{}/models/{{model_id}}", state.args.server.root_path),
            get(get_model),
        )
}
