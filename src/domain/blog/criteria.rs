// src/domain/blog/criteria.rs
use crate::domain::blog::entity::Blog;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Tags,
    Content,
}

impl SearchField {
    pub const fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Tags => "tags",
            Self::Content => "content",
        }
    }

    fn value(self, blog: &Blog) -> &str {
        match self {
            Self::Title => blog.title.as_str(),
            Self::Author => blog.author.as_str(),
            Self::Tags => blog.tags.as_str(),
            Self::Content => blog.content.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogOrdering {
    /// Insertion order.
    #[default]
    IdAsc,
    /// Newest first, ties broken by id.
    CreatedAtDesc,
}

/// Keyword search: every term must appear (case-insensitively) in at least
/// one of the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    terms: Vec<String>,
    fields: &'static [SearchField],
}

impl Search {
    /// Splits `input` on whitespace and commas. Returns `None` when no terms remain.
    pub fn parse(input: &str, fields: &'static [SearchField]) -> Option<Self> {
        let terms: Vec<String> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect();

        if terms.is_empty() || fields.is_empty() {
            None
        } else {
            Some(Self { terms, fields })
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub const fn fields(&self) -> &'static [SearchField] {
        self.fields
    }

    pub fn matches(&self, blog: &Blog) -> bool {
        self.terms.iter().all(|term| {
            let needle = term.to_lowercase();
            self.fields
                .iter()
                .any(|field| field.value(blog).to_lowercase().contains(&needle))
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlogCriteria {
    pub search: Option<Search>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub slug: Option<String>,
    pub tags: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `created_at`.
    pub created_before: Option<DateTime<Utc>>,
    pub ordering: BlogOrdering,
}

impl BlogCriteria {
    pub fn ordered_by(ordering: BlogOrdering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    /// Exact-match filters as `(column, value)` pairs.
    pub fn equality_filters(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", self.title.as_deref()),
            ("author", self.author.as_deref()),
            ("slug", self.slug.as_deref()),
            ("tags", self.tags.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect()
    }

    pub fn matches(&self, blog: &Blog) -> bool {
        let equal = |expected: &Option<String>, actual: &str| {
            expected.as_deref().is_none_or(|value| value == actual)
        };

        equal(&self.title, blog.title.as_str())
            && equal(&self.author, blog.author.as_str())
            && equal(&self.slug, blog.slug.as_str())
            && equal(&self.tags, blog.tags.as_str())
            && self.created_from.is_none_or(|from| blog.created_at >= from)
            && self.created_before.is_none_or(|before| blog.created_at < before)
            && self.search.as_ref().is_none_or(|search| search.matches(blog))
    }

    /// Sorts `blogs` in place according to `self.ordering`.
    pub fn sort(&self, blogs: &mut [Blog]) {
        match self.ordering {
            BlogOrdering::IdAsc => blogs.sort_by_key(|blog| blog.id),
            BlogOrdering::CreatedAtDesc => {
                blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            }
        }
    }
}
