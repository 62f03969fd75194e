use super::BlogQueryService;
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::BlogId,
};

pub struct GetBlogQuery {
    pub id: i64,
}

impl BlogQueryService {
    pub async fn get_blog(&self, query: GetBlogQuery) -> ApplicationResult<BlogDto> {
        let id = BlogId::new(query.id).map_err(|_| ApplicationError::blog_not_found())?;
        let blog = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::blog_not_found)?;
        Ok(blog.into())
    }
}
