use crate::application::http::{
    brand::router::BrandApiDoc, category::router::CategoryApiDoc, health::router::HealthApiDoc,
    listing::router::ListingApiDoc, model::router::ModelApiDoc, part::router::PartApiDoc,
    search::router::SearchApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CarParts Marketplace API"
    ),
    nest(
        (path = "/listings", api = ListingApiDoc),
        (path = "/parts", api = PartApiDoc),
        (path = "/brands", api = BrandApiDoc),
        (path = "/models", api = ModelApiDoc),
        (path = "/categories", api = CategoryApiDoc),
        (path = "/search", api = SearchApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_search_routes() {
        let openapi = ApiDoc::openapi();
        let paths = openapi.paths.paths;

        for path in [
            "/listings",
            "/listings/{listing_id}",
            "/parts",
            "/parts/{part_id}",
            "/parts/{part_id}/models",
            "/brands",
            "/brands/{brand_id}",
            "/models",
            "/models/{model_id}",
            "/categories",
            "/categories/{category_id}",
            "/search",
            "/search/suggestions",
            "/search/filters",
            "/search/advanced",
            "/health/ready",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
