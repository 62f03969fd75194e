mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetBlogQuery;
pub use list::{API_SEARCH_FIELDS, ListBlogsQuery};
pub use service::BlogQueryService;
