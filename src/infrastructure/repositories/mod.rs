// src/infrastructure/repositories/mod.rs
mod error;
mod memory_blog;
mod postgres_blog;

pub use error::map_sqlx;
pub use memory_blog::InMemoryBlogRepository;
pub use postgres_blog::{PostgresBlogReadRepository, PostgresBlogWriteRepository};
