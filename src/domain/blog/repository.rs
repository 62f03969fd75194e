use crate::domain::blog::criteria::BlogCriteria;
use crate::domain::blog::entity::{Blog, BlogUpdate, NewBlog};
use crate::domain::blog::value_objects::{BlogId, BlogSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Implementations must reject a second record with an existing slug with
/// `DomainError::Conflict`.
#[async_trait]
pub trait BlogWriteRepository: Send + Sync {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog>;
    async fn update(&self, update: BlogUpdate) -> DomainResult<Blog>;
    async fn delete(&self, id: BlogId) -> DomainResult<()>;
    /// Deletes every listed record that exists and returns how many were removed.
    async fn delete_many(&self, ids: &[BlogId]) -> DomainResult<u64>;
}

#[async_trait]
pub trait BlogReadRepository: Send + Sync {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>>;
    async fn slug_exists(&self, slug: &BlogSlug) -> DomainResult<bool>;
    async fn list(&self, criteria: &BlogCriteria) -> DomainResult<Vec<Blog>>;
    /// Distinct author names in ascending order.
    async fn distinct_authors(&self) -> DomainResult<Vec<String>>;
}
