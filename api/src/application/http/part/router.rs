use super::handlers::get_compatible_models::{
    __path_get_compatible_models, get_compatible_models,
};
use super::handlers::get_part::{__path_get_part, get_part};
use super::handlers::search_parts::{__path_search_parts, search_parts};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_parts, get_part, get_compatible_models))]
pub struct PartApiDoc;

pub fn part_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/parts", state.args.server.root_path),
            get(search_parts),
        )
        .route(
            &format!("{}/parts/{{part_id}}", state.args.server.root_path),
            get(get_part),
        )
        .route(
            &format!("{}/parts/{{part_id}}/models", state.args.server.root_path),
            get(get_compatible_models),
        )
}
