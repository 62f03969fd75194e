// src/infrastructure/repositories/memory_blog.rs
use crate::domain::blog::{
    Blog, BlogCriteria, BlogId, BlogReadRepository, BlogSlug, BlogUpdate, BlogWriteRepository,
    NewBlog,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;

#[derive(Default)]
struct State {
    next_id: i64,
    blogs: BTreeMap<BlogId, Blog>,
}

impl State {
    fn slug_taken(&self, slug: &BlogSlug, except: Option<BlogId>) -> bool {
        self.blogs
            .values()
            .any(|blog| &blog.slug == slug && Some(blog.id) != except)
    }
}

/// Process-local store used by `STORAGE_BACKEND=memory` and the test suite.
/// Enforces slug uniqueness the same way the `blogs_slug_key` constraint does.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    state: RwLock<State>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogWriteRepository for InMemoryBlogRepository {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let mut state = self.state.write().await;
        if state.slug_taken(&blog.slug, None) {
            return Err(DomainError::slug_taken());
        }

        state.next_id += 1;
        let id = BlogId::new(state.next_id)?;
        let NewBlog {
            title,
            content,
            author,
            slug,
            tags,
            created_at,
        } = blog;
        let stored = Blog {
            id,
            title,
            content,
            author,
            slug,
            tags,
            created_at,
        };
        state.blogs.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: BlogUpdate) -> DomainResult<Blog> {
        let mut state = self.state.write().await;
        if let Some(slug) = &update.slug {
            if state.slug_taken(slug, Some(update.id)) {
                return Err(DomainError::slug_taken());
            }
        }

        let blog = state
            .blogs
            .get_mut(&update.id)
            .ok_or_else(DomainError::blog_not_found)?;
        blog.apply(update);
        Ok(blog.clone())
    }

    async fn delete(&self, id: BlogId) -> DomainResult<()> {
        self.state
            .write()
            .await
            .blogs
            .remove(&id)
            .map(|_| ())
            .ok_or_else(DomainError::blog_not_found)
    }

    async fn delete_many(&self, ids: &[BlogId]) -> DomainResult<u64> {
        let mut state = self.state.write().await;
        let mut removed = 0;
        for id in ids {
            if state.blogs.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl BlogReadRepository for InMemoryBlogRepository {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        Ok(self.state.read().await.blogs.get(&id).cloned())
    }

    async fn slug_exists(&self, slug: &BlogSlug) -> DomainResult<bool> {
        Ok(self.state.read().await.slug_taken(slug, None))
    }

    async fn list(&self, criteria: &BlogCriteria) -> DomainResult<Vec<Blog>> {
        let mut blogs: Vec<Blog> = self
            .state
            .read()
            .await
            .blogs
            .values()
            .filter(|blog| criteria.matches(blog))
            .cloned()
            .collect();
        criteria.sort(&mut blogs);
        Ok(blogs)
    }

    async fn distinct_authors(&self) -> DomainResult<Vec<String>> {
        let authors: BTreeSet<String> = self
            .state
            .read()
            .await
            .blogs
            .values()
            .map(|blog| blog.author.as_str().to_string())
            .collect();
        Ok(authors.into_iter().collect())
    }
}
