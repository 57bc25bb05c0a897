use super::RecipeQueryService;
use crate::{
    application::{dto::RecipeListResponse, error::ApplicationResult},
    domain::{
        pagination::{Page, PageMeta, PageRequest},
        recipe::{RecipeFilter, RecipeListQuery, RecipeSort},
    },
};

/// Raw listing parameters as they arrive on the query string.
#[derive(Debug, Default, Clone)]
pub struct ListRecipesQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListRecipesQuery {
    /// Never fails: unusable values fall back to their defaults.
    pub fn normalize(&self) -> RecipeListQuery {
        RecipeListQuery {
            filter: RecipeFilter::from_params(
                self.search.as_deref(),
                self.category.as_deref(),
                self.tags.as_deref(),
            ),
            sort: RecipeSort::parse(self.sort.as_deref()),
            page: PageRequest::parse(self.page.as_deref(), self.limit.as_deref()),
        }
    }
}

impl RecipeQueryService {
    pub async fn list_recipes(
        &self,
        query: ListRecipesQuery,
    ) -> ApplicationResult<RecipeListResponse> {
        let query = query.normalize();
        let (items, total) = self.read_repo.list_page(&query).await?;
        let meta = PageMeta::new(query.page, total);
        Ok(Page::new(items, meta).into())
    }
}
