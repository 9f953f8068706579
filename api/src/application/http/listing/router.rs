use super::handlers::get_listing::{__path_get_listing, get_listing};
use super::handlers::search_listings::{__path_search_listings, search_listings};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_listings, get_listing))]
pub struct ListingApiDoc;

pub fn listing_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/listings", state.args.server.root_path),
            get(search_listings),
        )
        .route(
            &format!("{}/listings/{{listing_id}}", state.args.server.root_path),
            get(get_listing),
        )
}
