// src/domain/blog/entity.rs
use crate::domain::blog::value_objects::{
    BlogAuthor, BlogContent, BlogId, BlogSlug, BlogTags, BlogTitle,
};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub title: BlogTitle,
    pub content: BlogContent,
    pub author: BlogAuthor,
    pub slug: BlogSlug,
    pub tags: BlogTags,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Applies the changed fields of `update`. `id` and `created_at` never change.
    pub fn apply(&mut self, update: BlogUpdate) {
        let BlogUpdate {
            id: _,
            title,
            content,
            author,
            tags,
            slug,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
    }
}

impl fmt::Display for Blog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: BlogTitle,
    pub content: BlogContent,
    pub author: BlogAuthor,
    pub slug: BlogSlug,
    pub tags: BlogTags,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BlogUpdate {
    pub id: BlogId,
    pub title: Option<BlogTitle>,
    pub content: Option<BlogContent>,
    pub author: Option<BlogAuthor>,
    pub tags: Option<BlogTags>,
    pub slug: Option<BlogSlug>,
}

impl BlogUpdate {
    pub const fn new(id: BlogId) -> Self {
        Self {
            id,
            title: None,
            content: None,
            author: None,
            tags: None,
            slug: None,
        }
    }

    pub fn with_title(mut self, title: BlogTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: BlogContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_author(mut self, author: BlogAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_tags(mut self, tags: BlogTags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_slug(mut self, slug: BlogSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.tags.is_none()
            && self.slug.is_none()
    }
}
