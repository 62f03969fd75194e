// src/application/commands/blogs/create.rs
use super::{
    BlogCommandService,
    validation::{explicit_slug, required},
};
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::{
        blog::{BlogAuthor, BlogContent, BlogTags, BlogTitle, NewBlog},
        errors::DomainError,
    },
};
use tracing::{info, warn};

/// Inserts attempted with a generated slug before a conflict is reported.
pub const SLUG_INSERT_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Default)]
pub struct CreateBlogCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<String>,
    /// Generated from the title when absent or blank.
    pub slug: Option<String>,
}

impl BlogCommandService {
    pub async fn create_blog(&self, command: CreateBlogCommand) -> ApplicationResult<BlogDto> {
        let mut errors = FieldErrors::new();
        let title = required(&mut errors, "title", command.title, BlogTitle::new);
        let content = required(&mut errors, "content", command.content, BlogContent::new);
        let author = required(&mut errors, "author", command.author, BlogAuthor::new);
        let tags = required(&mut errors, "tags", command.tags, BlogTags::new);
        let explicit = explicit_slug(&mut errors, command.slug);
        errors.into_result()?;

        let (Some(title), Some(content), Some(author), Some(tags)) = (title, content, author, tags)
        else {
            return Err(ApplicationError::validation("incomplete blog fields"));
        };

        let created_at = self.clock.now();
        let mut attempt = 1;

        loop {
            let (slug, generated) = match &explicit {
                Some(slug) => (slug.clone(), false),
                None => (self.slug_service.generate_unique_slug(&title).await?, true),
            };

            let new_blog = NewBlog {
                title: title.clone(),
                content: content.clone(),
                author: author.clone(),
                slug,
                tags: tags.clone(),
                created_at,
            };

            match self.write_repo.insert(new_blog).await {
                Ok(blog) => {
                    info!(blog_id = %blog.id, slug = %blog.slug, "blog created");
                    return Ok(blog.into());
                }
                Err(DomainError::Conflict(reason))
                    if generated && attempt < SLUG_INSERT_ATTEMPTS =>
                {
                    warn!(attempt, %reason, "generated slug was taken concurrently, retrying");
                    attempt += 1;
                }
                Err(DomainError::Conflict(reason)) => {
                    return Err(ApplicationError::conflict(reason));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
