// src/application/commands/blogs/update.rs
use super::{
    BlogCommandService,
    validation::{explicit_slug, optional, required},
};
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::{
        blog::{BlogAuthor, BlogContent, BlogId, BlogTags, BlogTitle, BlogUpdate},
        errors::DomainError,
    },
};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// PUT: title, content, author and tags must all be supplied.
    Replace,
    /// PATCH: only supplied fields change.
    Partial,
}

/// The slug is never regenerated from a new title; it only changes when a
/// non-blank `slug` is supplied.
#[derive(Debug, Clone)]
pub struct UpdateBlogCommand {
    pub id: i64,
    pub mode: UpdateMode,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<String>,
    pub slug: Option<String>,
}

impl UpdateBlogCommand {
    pub const fn new(id: i64, mode: UpdateMode) -> Self {
        Self {
            id,
            mode,
            title: None,
            content: None,
            author: None,
            tags: None,
            slug: None,
        }
    }
}

impl BlogCommandService {
    pub async fn update_blog(&self, command: UpdateBlogCommand) -> ApplicationResult<BlogDto> {
        let id = BlogId::new(command.id).map_err(|_| ApplicationError::blog_not_found())?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::blog_not_found)?;

        let update = Self::build_update(id, command)?;
        if update.is_empty() {
            return Ok(existing.into());
        }

        match self.write_repo.update(update).await {
            Ok(updated) => {
                info!(blog_id = %updated.id, "blog updated");
                Ok(updated.into())
            }
            Err(DomainError::NotFound(_)) => Err(ApplicationError::blog_not_found()),
            Err(DomainError::Conflict(reason)) => Err(ApplicationError::conflict(reason)),
            Err(err) => Err(err.into()),
        }
    }

    fn build_update(id: BlogId, command: UpdateBlogCommand) -> ApplicationResult<BlogUpdate> {
        let mut errors = FieldErrors::new();
        let (title, content, author, tags) = match command.mode {
            UpdateMode::Replace => (
                required(&mut errors, "title", command.title, BlogTitle::new),
                required(&mut errors, "content", command.content, BlogContent::new),
                required(&mut errors, "author", command.author, BlogAuthor::new),
                required(&mut errors, "tags", command.tags, BlogTags::new),
            ),
            UpdateMode::Partial => (
                optional(&mut errors, "title", command.title, BlogTitle::new),
                optional(&mut errors, "content", command.content, BlogContent::new),
                optional(&mut errors, "author", command.author, BlogAuthor::new),
                optional(&mut errors, "tags", command.tags, BlogTags::new),
            ),
        };
        let slug = explicit_slug(&mut errors, command.slug);
        errors.into_result()?;

        let mut update = BlogUpdate::new(id);
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }
        if let Some(author) = author {
            update = update.with_author(author);
        }
        if let Some(tags) = tags {
            update = update.with_tags(tags);
        }
        if let Some(slug) = slug {
            update = update.with_slug(slug);
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_requires_every_field() {
        let id = BlogId::new(1).unwrap();
        let mut command = UpdateBlogCommand::new(1, UpdateMode::Replace);
        command.title = Some("New".into());

        match BlogCommandService::build_update(id, command).unwrap_err() {
            ApplicationError::InvalidFields(fields) => {
                assert!(fields.get("title").is_none());
                assert!(fields.get("content").is_some());
                assert!(fields.get("author").is_some());
                assert!(fields.get("tags").is_some());
                assert!(fields.get("slug").is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn partial_update_carries_only_supplied_fields() {
        let id = BlogId::new(1).unwrap();
        let mut command = UpdateBlogCommand::new(1, UpdateMode::Partial);
        command.tags = Some("rust".into());
        command.slug = Some(String::new());

        let update = BlogCommandService::build_update(id, command).unwrap();
        assert!(update.title.is_none());
        assert!(update.slug.is_none(), "blank slug keeps the current one");
        assert_eq!(update.tags.unwrap().as_str(), "rust");
    }

    #[test]
    fn empty_partial_update_is_a_no_op() {
        let id = BlogId::new(1).unwrap();
        let update =
            BlogCommandService::build_update(id, UpdateBlogCommand::new(1, UpdateMode::Partial))
                .unwrap();
        assert!(update.is_empty());
    }
}
