// src/application/commands/blogs/delete.rs
use super::BlogCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{blog::BlogId, errors::DomainError},
};
use tracing::info;

pub struct DeleteBlogCommand {
    pub id: i64,
}

impl BlogCommandService {
    pub async fn delete_blog(&self, command: DeleteBlogCommand) -> ApplicationResult<()> {
        let id = BlogId::new(command.id).map_err(|_| ApplicationError::blog_not_found())?;

        match self.write_repo.delete(id).await {
            Ok(()) => {
                info!(blog_id = %id, "blog deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(ApplicationError::blog_not_found()),
            Err(err) => Err(err.into()),
        }
    }
}
