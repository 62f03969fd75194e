//! Operator-facing listing over blogs: fixed columns, search, sidebar
//! filters and bulk actions, driven by [`BLOG_ADMIN`].
mod actions;
pub mod config;
mod listing;
mod service;

pub use actions::DeleteSelectedCommand;
pub use config::{AdminColumn, AdminConfig, BLOG_ADMIN, DateRange};
pub use listing::AdminListQuery;
pub use service::AdminBlogService;
