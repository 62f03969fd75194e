use super::BlogQueryService;
use crate::{
    application::{dto::BlogDto, error::ApplicationResult},
    domain::blog::{
        BlogCriteria, BlogOrdering, SearchField,
        criteria::Search,
    },
};
use tracing::debug;

/// Fields matched by the `search` parameter of the public API.
pub const API_SEARCH_FIELDS: &[SearchField] =
    &[SearchField::Title, SearchField::Author, SearchField::Tags];

/// Blank strings in the equality filters are ignored.
#[derive(Debug, Clone, Default)]
pub struct ListBlogsQuery {
    pub search: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub slug: Option<String>,
    pub tags: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ListBlogsQuery {
    fn into_criteria(self) -> BlogCriteria {
        BlogCriteria {
            search: self
                .search
                .as_deref()
                .and_then(|input| Search::parse(input, API_SEARCH_FIELDS)),
            title: non_blank(self.title),
            author: non_blank(self.author),
            slug: non_blank(self.slug),
            tags: non_blank(self.tags),
            ..BlogCriteria::ordered_by(BlogOrdering::IdAsc)
        }
    }
}

impl BlogQueryService {
    pub async fn list_blogs(&self, query: ListBlogsQuery) -> ApplicationResult<Vec<BlogDto>> {
        let criteria = query.into_criteria();
        debug!(?criteria, "listing blogs");

        let blogs = self.read_repo.list(&criteria).await?;
        Ok(blogs.into_iter().map(Into::into).collect())
    }
}
