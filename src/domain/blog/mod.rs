pub mod criteria;
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use criteria::{BlogCriteria, BlogOrdering, SearchField};
pub use entity::{Blog, BlogUpdate, NewBlog};
pub use repository::{BlogReadRepository, BlogWriteRepository};
pub use value_objects::{BlogAuthor, BlogContent, BlogId, BlogSlug, BlogTags, BlogTitle};
