use super::handlers::advanced_search::{__path_advanced_search, advanced_search};
use super::handlers::get_filter_options::{__path_get_filter_options, get_filter_options};
use super::handlers::get_suggestions::{__path_get_suggestions, get_suggestions};
use super::handlers::global_search::{__path_global_search, global_search};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(global_search, get_suggestions, get_filter_options, advanced_search))]
pub struct SearchApiDoc;

pub fn search_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/search", state.args.server.root_path),
            get(global_search),
        )
        .route(
            &format!("{}/search/suggestions", state.args.server.root_path),
            get(get_suggestions),
        )
        .route(
            &format!("{}/search/filters", state.args.server.root_path),
            get(get_filter_options),
        )
        .route(
            &format!("{}/search/advanced", state.args.server.root_path),
            post(advanced_search),
        )
}
