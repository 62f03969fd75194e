use crate::domain::blog::Blog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub slug: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.into(),
            title: blog.title.into_inner(),
            content: blog.content.into_inner(),
            author: blog.author.into_inner(),
            slug: blog.slug.into_inner(),
            tags: blog.tags.into_inner(),
            created_at: blog.created_at,
        }
    }
}
