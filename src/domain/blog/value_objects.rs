use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_AUTHOR_LEN: usize = 250;
pub const MAX_TAGS_LEN: usize = 200;
pub const MAX_SLUG_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlogId(pub i64);

impl BlogId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("blog id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<BlogId> for i64 {
    fn from(value: BlogId) -> Self {
        value.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trims `value` and checks it is non-blank and at most `max` characters long.
/// Lengths count characters, matching the `VARCHAR(n)` columns.
fn bounded_text(field: &str, value: String, max: Option<usize>) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be blank")));
    }
    if let Some(max) = max {
        if trimmed.chars().count() > max {
            return Err(DomainError::Validation(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

macro_rules! text_value_object {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTitle(String);

impl BlogTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text("title", value.into(), Some(MAX_TITLE_LEN)).map(Self)
    }
}

text_value_object!(BlogTitle);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogContent(String);

impl BlogContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text("content", value.into(), None).map(Self)
    }
}

text_value_object!(BlogContent);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogAuthor(String);

impl BlogAuthor {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text("author", value.into(), Some(MAX_AUTHOR_LEN)).map(Self)
    }
}

text_value_object!(BlogAuthor);

/// Freeform tag string, e.g. `"rust, web"`. Not split or normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTags(String);

impl BlogTags {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text("tags", value.into(), Some(MAX_TAGS_LEN)).map(Self)
    }
}

text_value_object!(BlogTags);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlogSlug(String);

impl BlogSlug {
    /// Accepts ASCII letters, digits, hyphens and underscores only.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = bounded_text("slug", value.into(), Some(MAX_SLUG_LEN))?;
        let valid = value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DomainError::Validation(
                "slug may only contain letters, numbers, hyphens and underscores".into(),
            ));
        }
        Ok(Self(value))
    }
}

text_value_object!(BlogSlug);
