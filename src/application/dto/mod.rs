pub mod admin;
pub mod blogs;

pub use admin::{AdminColumnDto, AdminFilterChoiceDto, AdminFilterDto, AdminListingDto, AdminRowDto};
pub use blogs::BlogDto;
