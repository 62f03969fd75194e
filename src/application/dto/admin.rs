use crate::domain::blog::Blog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminColumnDto {
    pub field: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminFilterChoiceDto {
    /// Query-string value selecting this choice; `None` clears the filter.
    pub value: Option<String>,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminFilterDto {
    /// Query parameter carrying the selection.
    pub parameter: String,
    pub title: String,
    pub choices: Vec<AdminFilterChoiceDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminRowDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<Blog> for AdminRowDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.into(),
            title: blog.title.into_inner(),
            author: blog.author.into_inner(),
            created_at: blog.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminListingDto {
    pub columns: Vec<AdminColumnDto>,
    pub search_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub filters: Vec<AdminFilterDto>,
    pub ordering: String,
    pub rows: Vec<AdminRowDto>,
    pub total: usize,
}
