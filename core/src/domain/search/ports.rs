use uuid::Uuid;

use crate::domain::{
    catalog::{Brand, Category, Listing, Model, Part},
    common::entities::app_errors::CoreError,
    search::{
        entities::SearchQuery,
        value_objects::{
            CompatibleModels, ConditionCount, FilterOptions, GlobalSearchInput,
            GlobalSearchResults, Page, SearchInput, SearchScope, Suggestion,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SearchService: Send + Sync {
    fn search_listings(
        &self,
        input: SearchInput,
    ) -> impl Future<Output = Result<Page<Listing>, CoreError>> + Send;

    fn search_parts(
        &self,
        input: SearchInput,
    ) -> impl Future<Output = Result<Page<Part>, CoreError>> + Send;

    fn search_brands(
        &self,
        input: SearchInput,
    ) -> impl Future<Output = Result<Page<Brand>, CoreError>> + Send;

    fn search_models(
        &self,
        input: SearchInput,
    ) -> impl Future<Output = Result<Page<Model>, CoreError>> + Send;

    fn search_categories(
        &self,
        input: SearchInput,
    ) -> impl Future<Output = Result<Page<Category>, CoreError>> + Send;

    fn global_search(
        &self,
        input: GlobalSearchInput,
    ) -> impl Future<Output = Result<GlobalSearchResults, CoreError>> + Send;

    fn suggestions(
        &self,
        term: String,
        scope: SearchScope,
    ) -> impl Future<Output = Result<Vec<Suggestion>, CoreError>> + Send;

    fn filter_options(&self) -> impl Future<Output = Result<FilterOptions, CoreError>> + Send;

    fn get_listing(
        &self,
        listing_id: Uuid,
    ) -> impl Future<Output = Result<Listing, CoreError>> + Send;

    fn get_part(&self, part_id: Uuid) -> impl Future<Output = Result<Part, CoreError>> + Send;

    fn get_brand(&self, brand_id: Uuid) -> impl Future<Output = Result<Brand, CoreError>> + Send;

    fn get_model(&self, model_id: Uuid) -> impl Future<Output = Result<Model, CoreError>> + Send;

    fn get_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    /// The part together with the car models it fits.
    fn get_compatible_models(
        &self,
        part_id: Uuid,
    ) -> impl Future<Output = Result<CompatibleModels, CoreError>> + Send;
}

/// Executes queries produced by the search query builder.
#[cfg_attr(test, mockall::automock)]
pub trait SearchRepository: Send + Sync {
    fn fetch_listings(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Listing>, CoreError>> + Send;

    fn fetch_parts(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Part>, CoreError>> + Send;

    fn fetch_brands(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Brand>, CoreError>> + Send;

    fn fetch_models(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Model>, CoreError>> + Send;

    fn fetch_categories(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    /// Runs the count statement of `query`.
    fn count(&self, query: SearchQuery) -> impl Future<Output = Result<i64, CoreError>> + Send;

    /// Active listings grouped by condition.
    fn count_active_listings_by_condition(
        &self,
    ) -> impl Future<Output = Result<Vec<ConditionCount>, CoreError>> + Send;

    fn get_listing_by_id(
        &self,
        listing_id: Uuid,
    ) -> impl Future<Output = Result<Option<Listing>, CoreError>> + Send;

    fn get_part_by_id(
        &self,
        part_id: Uuid,
    ) -> impl Future<Output = Result<Option<Part>, CoreError>> + Send;

    fn get_brand_by_id(
        &self,
        brand_id: Uuid,
    ) -> impl Future<Output = Result<Option<Brand>, CoreError>> + Send;

    fn get_model_by_id(
        &self,
        model_id: Uuid,
    ) -> impl Future<Output = Result<Option<Model>, CoreError>> + Send;

    fn get_category_by_id(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    /// Models linked to `part_id` through `parts_compatibility`, ordered by
    /// brand then model name.
    fn get_compatible_models(
        &self,
        part_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Model>, CoreError>> + Send;
}
