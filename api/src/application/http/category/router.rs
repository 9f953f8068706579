use super::handlers::get_category::{__path_get_category, get_category};
use super::handlers::search_categories::{__path_search_categories, search_categories};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_categories, get_category))]
pub struct CategoryApiDoc;

pub fn category_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/categories", state.args.server.root_path),
            get(search_categories),
        )
        .route(
            &format!("{}/categories/{{category_id}}", state.args.server.root_path),
            get(get_category),
        )
}
