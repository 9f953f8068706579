use super::handlers::get_brand::{__path_get_brand, get_brand};
use super::handlers::search_brands::{__path_search_brands, search_brands};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_brands, get_brand))]
pub struct BrandApiDoc;

pub fn brand_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/brands", state.args.server.root_path),
            get(search_brands),
        )
        .route(
            &format!("{}/brands/{{brand_id}}", state.args.server.root_path),
            get(get_brand),
        )
}
