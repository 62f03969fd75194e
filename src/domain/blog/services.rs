// src/domain/blog/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::blog::repository::BlogReadRepository;
use crate::domain::blog::value_objects::{BlogSlug, BlogTitle, MAX_SLUG_LEN};
use crate::domain::errors::DomainResult;

/// Base used when a title normalises to nothing (e.g. `"!!!"`).
const FALLBACK_BASE: &str = "blog";

/// Domain service responsible for producing unique slugs for blogs.
///
/// The existence check and the later insert are not atomic; callers rely on
/// the store's unique constraint and retry on conflict.
pub struct BlogSlugService {
    read_repo: Arc<dyn BlogReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl BlogSlugService {
    pub fn new(read_repo: Arc<dyn BlogReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Normalised base slug for `title`, truncated to fit the column.
    pub fn base_slug(&self, title: &BlogTitle) -> String {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            FALLBACK_BASE.to_string()
        } else {
            truncate_slug(&base, MAX_SLUG_LEN)
        }
    }

    /// Returns the base slug if unused, otherwise the first free `base-N` for N = 1, 2, ...
    pub async fn generate_unique_slug(&self, title: &BlogTitle) -> DomainResult<BlogSlug> {
        let base = self.base_slug(title);

        let slug = BlogSlug::new(base.clone())?;
        if !self.read_repo.slug_exists(&slug).await? {
            return Ok(slug);
        }

        let mut counter = 1u64;
        loop {
            let suffix = format!("-{counter}");
            let stem = truncate_slug(&base, MAX_SLUG_LEN - suffix.len());
            let slug = BlogSlug::new(format!("{stem}{suffix}"))?;
            if !self.read_repo.slug_exists(&slug).await? {
                return Ok(slug);
            }
            counter += 1;
        }
    }
}

fn truncate_slug(slug: &str, max_chars: usize) -> String {
    if slug.chars().count() <= max_chars {
        return slug.to_string();
    }
    let truncated: String = slug.chars().take(max_chars).collect();
    let trimmed = truncated.trim_end_matches('-');
    if trimmed.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}
