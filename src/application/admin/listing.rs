use super::{AdminBlogService, BLOG_ADMIN, DateRange};
use crate::{
    application::{
        dto::{AdminColumnDto, AdminFilterChoiceDto, AdminFilterDto, AdminListingDto},
        error::ApplicationResult,
    },
    domain::blog::{BlogCriteria, criteria::Search},
};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct AdminListQuery {
    /// Free text over title, author and content.
    pub q: Option<String>,
    /// Exact author name.
    pub author: Option<String>,
    /// One of the [`DateRange`] values.
    pub created: Option<String>,
}

impl AdminBlogService {
    pub async fn list(&self, query: AdminListQuery) -> ApplicationResult<AdminListingDto> {
        let range = DateRange::parse(query.created.as_deref())?;
        let author = query.author.filter(|a| !a.trim().is_empty());
        let search_input = query
            .q
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());

        let bounds = range.bounds(self.clock.now());
        let criteria = BlogCriteria {
            search: search_input
                .as_deref()
                .and_then(|q| Search::parse(q, BLOG_ADMIN.search_fields)),
            author: author.clone(),
            created_from: bounds.map(|(from, _)| from),
            created_before: bounds.map(|(_, before)| before),
            ..BlogCriteria::ordered_by(BLOG_ADMIN.ordering)
        };
        debug!(?criteria, "admin listing");

        let blogs = self.read_repo.list(&criteria).await?;
        let authors = self.read_repo.distinct_authors().await?;

        let rows: Vec<_> = blogs.into_iter().map(Into::into).collect();
        Ok(AdminListingDto {
            columns: BLOG_ADMIN
                .list_display
                .iter()
                .map(|column| AdminColumnDto {
                    field: column.field.to_string(),
                    label: column.label.to_string(),
                })
                .collect(),
            search_fields: BLOG_ADMIN
                .search_fields
                .iter()
                .map(|field| field.column().to_string())
                .collect(),
            search: search_input,
            filters: vec![
                created_filter(range),
                author_filter(author.as_deref(), authors),
            ],
            ordering: BLOG_ADMIN.ordering_label().to_string(),
            total: rows.len(),
            rows,
        })
    }
}

fn created_filter(selected: DateRange) -> AdminFilterDto {
    AdminFilterDto {
        parameter: "created".into(),
        title: "By created at".into(),
        choices: DateRange::ALL
            .into_iter()
            .map(|range| AdminFilterChoiceDto {
                value: range.value().map(str::to_string),
                label: range.label().to_string(),
                selected: range == selected,
            })
            .collect(),
    }
}

fn author_filter(selected: Option<&str>, authors: Vec<String>) -> AdminFilterDto {
    let mut choices = vec![AdminFilterChoiceDto {
        value: None,
        label: "All".into(),
        selected: selected.is_none(),
    }];
    choices.extend(authors.into_iter().map(|author| AdminFilterChoiceDto {
        selected: selected == Some(author.as_str()),
        label: author.clone(),
        value: Some(author),
    }));

    AdminFilterDto {
        parameter: "author".into(),
        title: "By author".into(),
        choices,
    }
}
