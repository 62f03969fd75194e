// src/application/commands/blogs/mod.rs
mod create;
mod delete;
mod service;
mod update;
mod validation;

pub use create::{CreateBlogCommand, SLUG_INSERT_ATTEMPTS};
pub use delete::DeleteBlogCommand;
pub use service::BlogCommandService;
pub use update::{UpdateBlogCommand, UpdateMode};
