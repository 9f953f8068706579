use std::future::Future;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::{
    catalog::{Brand, Category, Listing, Model, Part},
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    search::{
        entities::{EntityType, FieldFilters, FilterRequest, SearchError, SearchQuery, SortOrder},
        ports::{SearchRepository, SearchService},
        value_objects::{
            CompatibleModels, FilterOptions, GlobalSearchInput, GlobalSearchPagination,
            GlobalSearchResults, Page, Pagination, SearchInput, SearchScope, Suggestion,
        },
    },
};

/// Brands, models and categories shown next to paged listings and parts.
const GLOBAL_TOP_MATCHES: i64 = 5;
const SUGGESTION_LIMIT: usize = 10;
const SUGGESTION_MIN_LEN: usize = 2;
const FILTER_OPTIONS_LIMIT: i64 = 100;

impl<SR, HC> Service<SR, HC>
where
    SR: SearchRepository,
    HC: HealthCheckRepository,
{
    fn build_query(&self, request: FilterRequest) -> Result<SearchQuery, CoreError> {
        let query = self.query_builder.build(&request).map_err(|e| {
            debug!(entity_type = %request.entity_type, error = %e, "rejected search request");
            e
        })?;
        Ok(query)
    }

    /// Keeps the filters `entity_type` understands.
    fn filters_for(
        &self,
        entity_type: EntityType,
        filters: &FieldFilters,
    ) -> Result<FieldFilters, CoreError> {
        let descriptor = self.query_builder.descriptor(entity_type)?;
        Ok(filters
            .iter()
            .filter(|(key, _)| descriptor.filter(key).is_some())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn reject_unroutable_filters(
        &self,
        scope: SearchScope,
        filters: &FieldFilters,
    ) -> Result<(), CoreError> {
        let descriptors = EntityType::ALL
            .into_iter()
            .filter(|entity_type| scope.includes(*entity_type))
            .map(|entity_type| self.query_builder.descriptor(entity_type))
            .collect::<Result<Vec<_>, SearchError>>()?;

        match filters
            .keys()
            .find(|key| descriptors.iter().all(|d| d.filter(key).is_none()))
        {
            Some(key) => Err(SearchError::invalid_filter(
                key.as_str(),
                "not a filter of any searched entity",
            )
            .into()),
            None => Ok(()),
        }
    }
}

async fn when<T, F>(enabled: bool, future: F) -> Result<Option<T>, CoreError>
where
    F: Future<Output = Result<T, CoreError>>,
{
    if enabled {
        future.await.map(Some)
    } else {
        Ok(None)
    }
}

fn normalize_term(term: Option<String>) -> Option<String> {
    term.map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
}

impl<SR, HC> SearchService for Service<SR, HC>
where
    SR: SearchRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn search_listings(&self, input: SearchInput) -> Result<Page<Listing>, CoreError> {
        let query = self.build_query(input.into_request(EntityType::Listing))?;
        let (items, total) = futures::try_join!(
            self.search_repository.fetch_listings(query.clone()),
            self.search_repository.count(query.clone()),
        )?;

        Ok(Page::new(items, query.page, query.limit, total))
    }

    #[instrument(skip(self))]
    async fn search_parts(&self, input: SearchInput) -> Result<Page<Part>, CoreError> {
        let query = self.build_query(input.into_request(EntityType::Part))?;
        let (items, total) = futures::try_join!(
            self.search_repository.fetch_parts(query.clone()),
            self.search_repository.count(query.clone()),
        )?;

        Ok(Page::new(items, query.page, query.limit, total))
    }

    #[instrument(skip(self))]
    async fn search_brands(&self, input: SearchInput) -> Result<Page<Brand>, CoreError> {
        let query = self.build_query(input.into_request(EntityType::Brand))?;
        let (items, total) = futures::try_join!(
            self.search_repository.fetch_brands(query.clone()),
            self.search_repository.count(query.clone()),
        )?;

        Ok(Page::new(items, query.page, query.limit, total))
    }

    #[instrument(skip(self))]
    async fn search_models(&self, input: SearchInput) -> Result<Page<Model>, CoreError> {
        let query = self.build_query(input.into_request(EntityType::Model))?;
        let (items, total) = futures::try_join!(
            self.search_repository.fetch_models(query.clone()),
            self.search_repository.count(query.clone()),
        )?;

        Ok(Page::new(items, query.page, query.limit, total))
    }

    #[instrument(skip(self))]
    async fn search_categories(&self, input: SearchInput) -> Result<Page<Category>, CoreError> {
        let query = self.build_query(input.into_request(EntityType::Category))?;
        let (items, total) = futures::try_join!(
            self.search_repository.fetch_categories(query.clone()),
            self.search_repository.count(query.clone()),
        )?;

        Ok(Page::new(items, query.page, query.limit, total))
    }

    #[instrument(skip(self), fields(scope = ?input.scope))]
    async fn global_search(
        &self,
        input: GlobalSearchInput,
    ) -> Result<GlobalSearchResults, CoreError> {
        let term = normalize_term(input.search_term).ok_or(CoreError::SearchTermRequired)?;
        let scope = input.scope;
        self.reject_unroutable_filters(scope, &input.field_filters)?;

        let pagination = Pagination::new(input.page, input.limit);

        let input_for = |entity_type: EntityType| -> Result<SearchInput, CoreError> {
            let field_filters = if scope.includes(entity_type) {
                self.filters_for(entity_type, &input.field_filters)?
            } else {
                FieldFilters::new()
            };
            let top_matches_only = scope == SearchScope::All
                && !matches!(entity_type, EntityType::Listing | EntityType::Part);

            Ok(SearchInput {
                search_term: Some(term.clone()),
                field_filters,
                sort_by: top_matches_only.then(|| "name".to_string()),
                sort_order: top_matches_only.then_some(SortOrder::Asc),
                page: Some(if top_matches_only { 1 } else { pagination.page }),
                limit: Some(if top_matches_only {
                    GLOBAL_TOP_MATCHES
                } else {
                    pagination.limit
                }),
            })
        };

        let (listings, parts, brands, models, categories) = futures::try_join!(
            when(
                scope.includes(EntityType::Listing),
                self.search_listings(input_for(EntityType::Listing)?)
            ),
            when(
                scope.includes(EntityType::Part),
                self.search_parts(input_for(EntityType::Part)?)
            ),
            when(
                scope.includes(EntityType::Brand),
                self.search_brands(input_for(EntityType::Brand)?)
            ),
            when(
                scope.includes(EntityType::Model),
                self.search_models(input_for(EntityType::Model)?)
            ),
            when(
                scope.includes(EntityType::Category),
                self.search_categories(input_for(EntityType::Category)?)
            ),
        )?;

        let (total, pages) = match scope {
            SearchScope::All => {
                let (listing_total, listing_pages) =
                    listings.as_ref().map_or((0, 0), |p| (p.total, p.pages));
                let (part_total, part_pages) =
                    parts.as_ref().map_or((0, 0), |p| (p.total, p.pages));
                (listing_total + part_total, listing_pages.max(part_pages))
            }
            SearchScope::Listings => listings.as_ref().map_or((0, 0), |p| (p.total, p.pages)),
            SearchScope::Parts => parts.as_ref().map_or((0, 0), |p| (p.total, p.pages)),
            SearchScope::Brands => brands.as_ref().map_or((0, 0), |p| (p.total, p.pages)),
            SearchScope::Models => models.as_ref().map_or((0, 0), |p| (p.total, p.pages)),
            SearchScope::Categories => {
                categories.as_ref().map_or((0, 0), |p| (p.total, p.pages))
            }
        };

        Ok(GlobalSearchResults {
            search_term: term,
            listings: listings.map(|p| p.items),
            parts: parts.map(|p| p.items),
            brands: brands.map(|p| p.items),
            models: models.map(|p| p.items),
            categories: categories.map(|p| p.items),
            pagination: GlobalSearchPagination {
                page: pagination.page,
                limit: pagination.limit,
                total,
                pages,
            },
        })
    }

    #[instrument(skip(self))]
    async fn suggestions(
        &self,
        term: String,
        scope: SearchScope,
    ) -> Result<Vec<Suggestion>, CoreError> {
        let term = term.trim();
        if term.chars().count() < SUGGESTION_MIN_LEN {
            return Ok(Vec::new());
        }

        let per_kind = if scope == SearchScope::All { 5 } else { 10 };
        let query_for = |entity_type: EntityType| {
            self.build_query(
                FilterRequest::new(entity_type)
                    .with_search_term(term)
                    .with_sort("name", SortOrder::Asc)
                    .with_page(1, per_kind),
            )
        };

        let (brands, models, categories) = futures::try_join!(
            when(
                scope.includes(EntityType::Brand),
                self.search_repository
                    .fetch_brands(query_for(EntityType::Brand)?)
            ),
            when(
                scope.includes(EntityType::Model),
                self.search_repository
                    .fetch_models(query_for(EntityType::Model)?)
            ),
            when(
                scope.includes(EntityType::Category),
                self.search_repository
                    .fetch_categories(query_for(EntityType::Category)?)
            ),
        )?;

        let mut suggestions = Vec::new();
        suggestions.extend(brands.unwrap_or_default().into_iter().map(Suggestion::from));
        suggestions.extend(models.unwrap_or_default().into_iter().map(Suggestion::from));
        suggestions.extend(
            categories
                .unwrap_or_default()
                .into_iter()
                .map(Suggestion::from),
        );
        suggestions.truncate(SUGGESTION_LIMIT);

        Ok(suggestions)
    }

    #[instrument(skip(self))]
    async fn filter_options(&self) -> Result<FilterOptions, CoreError> {
        let by_name = |entity_type: EntityType| {
            self.build_query(
                FilterRequest::new(entity_type)
                    .with_sort("name", SortOrder::Asc)
                    .with_page(1, FILTER_OPTIONS_LIMIT),
            )
        };

        let (brands, categories, conditions) = futures::try_join!(
            self.search_repository
                .fetch_brands(by_name(EntityType::Brand)?),
            self.search_repository
                .fetch_categories(by_name(EntityType::Category)?),
            self.search_repository.count_active_listings_by_condition(),
        )?;

        Ok(FilterOptions {
            brands,
            categories,
            conditions,
        })
    }

    #[instrument(skip(self))]
    async fn get_listing(&self, listing_id: Uuid) -> Result<Listing, CoreError> {
        self.search_repository
            .get_listing_by_id(listing_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_part(&self, part_id: Uuid) -> Result<Part, CoreError> {
        self.search_repository
            .get_part_by_id(part_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_brand(&self, brand_id: Uuid) -> Result<Brand, CoreError> {
        self.search_repository
            .get_brand_by_id(brand_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_model(&self, model_id: Uuid) -> Result<Model, CoreError> {
        self.search_repository
            .get_model_by_id(model_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_category(&self, category_id: Uuid) -> Result<Category, CoreError> {
        self.search_repository
            .get_category_by_id(category_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_compatible_models(&self, part_id: Uuid) -> Result<CompatibleModels, CoreError> {
        let part = self.get_part(part_id).await?;
        let models = self.search_repository.get_compatible_models(part_id).await?;

        Ok(CompatibleModels { part, models })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;
    use mockall::predicate::eq;

    use crate::domain::{
        catalog::{Condition, ListingStatus},
        health::entities::DatabaseHealthStatus,
        search::{
            entities::FilterValue, ports::MockSearchRepository, value_objects::ConditionCount,
        },
    };

    #[derive(Default)]
    struct InMemorySearchRepository {
        listings: Vec<Listing>,
        parts: Vec<Part>,
        brands: Vec<Brand>,
        models: Vec<Model>,
        categories: Vec<Category>,
        total: i64,
        executed: Mutex<Vec<SearchQuery>>,
    }

    impl InMemorySearchRepository {
        fn record(&self, query: SearchQuery) {
            self.executed.lock().unwrap().push(query);
        }

        fn executed(&self) -> Vec<SearchQuery> {
            self.executed.lock().unwrap().clone()
        }
    }

    impl SearchRepository for InMemorySearchRepository {
        async fn fetch_listings(&self, query: SearchQuery) -> Result<Vec<Listing>, CoreError> {
            self.record(query);
            Ok(self.listings.clone())
        }

        async fn fetch_parts(&self, query: SearchQuery) -> Result<Vec<Part>, CoreError> {
            self.record(query);
            Ok(self.parts.clone())
        }

        async fn fetch_brands(&self, query: SearchQuery) -> Result<Vec<Brand>, CoreError> {
            self.record(query);
            Ok(self.brands.clone())
        }

        async fn fetch_models(&self, query: SearchQuery) -> Result<Vec<Model>, CoreError> {
            self.record(query);
            Ok(self.models.clone())
        }

        async fn fetch_categories(&self, query: SearchQuery) -> Result<Vec<Category>, CoreError> {
            self.record(query);
            Ok(self.categories.clone())
        }

        async fn count(&self, _query: SearchQuery) -> Result<i64, CoreError> {
            Ok(self.total)
        }

        async fn count_active_listings_by_condition(
            &self,
        ) -> Result<Vec<ConditionCount>, CoreError> {
            Ok(vec![ConditionCount {
                value: Condition::Good,
                count: 3,
            }])
        }

        async fn get_listing_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, CoreError> {
            Ok(self.listings.iter().find(|l| l.id == listing_id).cloned())
        }

        async fn get_part_by_id(&self, part_id: Uuid) -> Result<Option<Part>, CoreError> {
            Ok(self.parts.iter().find(|p| p.id == part_id).cloned())
        }

        async fn get_brand_by_id(&self, brand_id: Uuid) -> Result<Option<Brand>, CoreError> {
            Ok(self.brands.iter().find(|b| b.id == brand_id).cloned())
        }

        async fn get_model_by_id(&self, model_id: Uuid) -> Result<Option<Model>, CoreError> {
            Ok(self.models.iter().find(|m| m.id == model_id).cloned())
        }

        async fn get_category_by_id(
            &self,
            category_id: Uuid,
        ) -> Result<Option<Category>, CoreError> {
            Ok(self.categories.iter().find(|c| c.id == category_id).cloned())
        }

        async fn get_compatible_models(&self, _part_id: Uuid) -> Result<Vec<Model>, CoreError> {
            Ok(self.models.clone())
        }
    }

    struct StaticHealthCheck;

    impl HealthCheckRepository for StaticHealthCheck {
        async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
            Ok(DatabaseHealthStatus::up(1))
        }

        async fn health(&self) -> Result<u64, CoreError> {
            Ok(1)
        }
    }

    fn service(
        repository: InMemorySearchRepository,
    ) -> Service<InMemorySearchRepository, StaticHealthCheck> {
        Service::new(repository, StaticHealthCheck)
    }

    fn mocked(
        repository: MockSearchRepository,
    ) -> Service<MockSearchRepository, StaticHealthCheck> {
        Service::new(repository, StaticHealthCheck)
    }

    fn part(name: &str) -> Part {
        Part {
            id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            brand_id: None,
            model_id: None,
            name: name.to_string(),
            serial_number: None,
            description: None,
            price: 120.0,
            condition: Condition::New,
            created_at: Utc::now(),
            category_name: Some("Brakes".to_string()),
            brand_name: None,
            model_name: None,
        }
    }

    fn model(brand: &str, name: &str) -> Model {
        Model {
            id: Uuid::new_v4(),
            brand_id: Uuid::new_v4(),
            name: name.to_string(),
            years_start: Some(2012),
            years_end: Some(2018),
            year_range: "2012-2018".to_string(),
            created_at: Utc::now(),
            brand_name: Some(brand.to_string()),
        }
    }

    fn listing(name: &str) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            seller_id: Uuid::new_v4(),
            part_id: None,
            name: name.to_string(),
            description: None,
            price_usd: 42.0,
            condition: Condition::Good,
            location: Some("Austin".to_string()),
            status: ListingStatus::Active,
            created_at: Utc::now(),
            seller_username: Some("seller".to_string()),
            part_name: None,
            category_name: None,
            brand_name: None,
            model_name: None,
        }
    }

    fn brand(name: &str) -> Brand {
        Brand {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_search_listings_returns_page_envelope() {
        let repository = InMemorySearchRepository {
            listings: vec![listing("Brake pads"), listing("Brake disc")],
            total: 45,
            ..Default::default()
        };
        let service = service(repository);

        let page = service
            .search_listings(SearchInput {
                search_term: Some("brake".to_string()),
                page: Some(2),
                limit: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 45);
        assert_eq!(page.pages, 5);
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_repository() {
        let service = service(InMemorySearchRepository::default());

        let err = service
            .search_parts(SearchInput {
                sort_by: Some("price; DROP TABLE car_parts".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Search(SearchError::InvalidSort { .. })
        ));
        assert!(service.search_repository.executed().is_empty());
    }

    #[tokio::test]
    async fn test_global_search_requires_term() {
        let service = service(InMemorySearchRepository::default());

        let err = service
            .global_search(GlobalSearchInput {
                search_term: Some("   ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::SearchTermRequired));
    }

    #[tokio::test]
    async fn test_global_search_all_scopes() {
        let repository = InMemorySearchRepository {
            listings: vec![listing("Alternator")],
            brands: vec![brand("Alfa Romeo")],
            total: 30,
            ..Default::default()
        };
        let service = service(repository);

        let results = service
            .global_search(GlobalSearchInput {
                search_term: Some("al".to_string()),
                limit: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(results.search_term, "al");
        assert_eq!(results.listings.as_ref().map(Vec::len), Some(1));
        assert!(results.parts.is_some());
        assert!(results.categories.is_some());
        assert_eq!(results.pagination.total, 60);
        assert_eq!(results.pagination.pages, 3);

        let executed = service.search_repository.executed();
        assert_eq!(executed.len(), 5);
        let top_matches = executed.iter().filter(|q| q.limit == GLOBAL_TOP_MATCHES).count();
        assert_eq!(top_matches, 3);
    }

    #[tokio::test]
    async fn test_global_search_routes_filters() {
        let service = service(InMemorySearchRepository::default());

        let results = service
            .global_search(GlobalSearchInput {
                search_term: Some("mirror".to_string()),
                scope: SearchScope::Listings,
                field_filters: FieldFilters::from([(
                    "location".to_string(),
                    FilterValue::from("Denver"),
                )]),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(results.listings.is_some());
        assert!(results.parts.is_none());
        assert!(results.brands.is_none());

        let executed = service.search_repository.executed();
        assert_eq!(executed.len(), 1);
        assert!(executed[0].sql.contains("pl.location ILIKE"));
    }

    #[tokio::test]
    async fn test_global_search_rejects_unroutable_filter() {
        let service = service(InMemorySearchRepository::default());

        let err = service
            .global_search(GlobalSearchInput {
                search_term: Some("mirror".to_string()),
                scope: SearchScope::Brands,
                field_filters: FieldFilters::from([(
                    "condition".to_string(),
                    FilterValue::from("new"),
                )]),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Search(SearchError::InvalidFilter { .. })
        ));
        assert!(service.search_repository.executed().is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_short_term_is_empty() {
        let service = service(InMemorySearchRepository {
            brands: vec![brand("BMW")],
            ..Default::default()
        });

        let suggestions = service
            .suggestions("b".to_string(), SearchScope::All)
            .await
            .unwrap();

        assert!(suggestions.is_empty());
        assert!(service.search_repository.executed().is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_are_capped() {
        let service = service(InMemorySearchRepository {
            brands: (0..6).map(|i| brand(&format!("Brand {i}"))).collect(),
            categories: (0..6).map(|i| category(&format!("Brakes {i}"))).collect(),
            ..Default::default()
        });

        let suggestions = service
            .suggestions("br".to_string(), SearchScope::All)
            .await
            .unwrap();

        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
        assert_eq!(suggestions[0].display, "Brand 0");
        assert!(
            service
                .search_repository
                .executed()
                .iter()
                .all(|q| q.limit == 5)
        );
    }

    #[tokio::test]
    async fn test_filter_options() {
        let service = service(InMemorySearchRepository {
            brands: vec![brand("Audi"), brand("BMW")],
            categories: vec![category("Brakes")],
            ..Default::default()
        });

        let options = service.filter_options().await.unwrap();
        assert_eq!(options.brands.len(), 2);
        assert_eq!(options.categories.len(), 1);
        assert_eq!(options.conditions[0].count, 3);
    }

    #[tokio::test]
    async fn test_get_listing_not_found() {
        let existing = listing("Headlight");
        let existing_id = existing.id;
        let service = service(InMemorySearchRepository {
            listings: vec![existing],
            ..Default::default()
        });

        assert_eq!(
            service.get_listing(existing_id).await.unwrap().name,
            "Headlight"
        );
        assert!(matches!(
            service.get_listing(Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        ));
        assert!(matches!(
            service.get_part(Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_count_failure_fails_the_search() {
        let mut repository = MockSearchRepository::new();
        repository
            .expect_fetch_listings()
            .returning(|_| Box::pin(async { Ok(vec![listing("Brake pads")]) }));
        repository
            .expect_count()
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        let service = mocked(repository);

        let err = service
            .search_listings(SearchInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_detail_lookups_not_found() {
        let missing = Uuid::new_v4();
        let mut repository = MockSearchRepository::new();
        repository
            .expect_get_brand_by_id()
            .with(eq(missing))
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        repository
            .expect_get_model_by_id()
            .with(eq(missing))
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        repository
            .expect_get_category_by_id()
            .with(eq(missing))
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = mocked(repository);

        assert!(matches!(
            service.get_brand(missing).await,
            Err(CoreError::NotFound)
        ));
        assert!(matches!(
            service.get_model(missing).await,
            Err(CoreError::NotFound)
        ));
        assert!(matches!(
            service.get_category(missing).await,
            Err(CoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_detail_lookups_found() {
        let audi = brand("Audi");
        let brakes = category("Brakes");
        let a4 = model("Audi", "A4");
        let service = service(InMemorySearchRepository {
            brands: vec![audi.clone()],
            categories: vec![brakes.clone()],
            models: vec![a4.clone()],
            ..Default::default()
        });

        assert_eq!(service.get_brand(audi.id).await.unwrap(), audi);
        assert_eq!(service.get_category(brakes.id).await.unwrap(), brakes);
        assert_eq!(service.get_model(a4.id).await.unwrap().year_range, "2012-2018");
    }

    #[tokio::test]
    async fn test_compatible_models_of_part() {
        let rotor = part("Brake rotor");
        let rotor_id = rotor.id;
        let mut repository = MockSearchRepository::new();
        repository
            .expect_get_part_by_id()
            .with(eq(rotor_id))
            .returning(move |_| {
                let rotor = rotor.clone();
                Box::pin(async move { Ok(Some(rotor)) })
            });
        repository
            .expect_get_compatible_models()
            .with(eq(rotor_id))
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(vec![model("Audi", "A4"), model("BMW", "320i")]) })
            });
        let service = mocked(repository);

        let compatible = service.get_compatible_models(rotor_id).await.unwrap();

        assert_eq!(compatible.part.name, "Brake rotor");
        assert_eq!(compatible.models.len(), 2);
        assert_eq!(compatible.models[1].brand_name.as_deref(), Some("BMW"));
    }

    #[tokio::test]
    async fn test_compatible_models_of_missing_part() {
        let mut repository = MockSearchRepository::new();
        repository
            .expect_get_part_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        repository.expect_get_compatible_models().never();
        let service = mocked(repository);

        assert!(matches!(
            service.get_compatible_models(Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        ));
    }
}
