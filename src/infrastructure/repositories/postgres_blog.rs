// src/infrastructure/repositories/postgres_blog.rs
use super::map_sqlx;
use crate::domain::blog::{
    Blog, BlogAuthor, BlogContent, BlogCriteria, BlogId, BlogOrdering, BlogReadRepository,
    BlogSlug, BlogTags, BlogTitle, BlogUpdate, BlogWriteRepository, NewBlog,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const BLOG_COLUMNS: &str = "id, title, content, author, slug, tags, created_at";

#[derive(Clone)]
pub struct PostgresBlogWriteRepository {
    pool: PgPool,
}

impl PostgresBlogWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBlogReadRepository {
    pool: PgPool,
}

impl PostgresBlogReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    content: String,
    author: String,
    slug: String,
    tags: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for Blog {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BlogId::new(row.id)?,
            title: BlogTitle::new(row.title)?,
            content: BlogContent::new(row.content)?,
            author: BlogAuthor::new(row.author)?,
            slug: BlogSlug::new(row.slug)?,
            tags: BlogTags::new(row.tags)?,
            created_at: row.created_at,
        })
    }
}

fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

/// Escapes `LIKE` metacharacters so user input matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl BlogWriteRepository for PostgresBlogWriteRepository {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let NewBlog {
            title,
            content,
            author,
            slug,
            tags,
            created_at,
        } = blog;

        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "INSERT INTO blogs (title, content, author, slug, tags, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(author.as_str())
        .bind(slug.as_str())
        .bind(tags.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Blog::try_from(row)
    }

    async fn update(&self, update: BlogUpdate) -> DomainResult<Blog> {
        let BlogUpdate {
            id,
            title,
            content,
            author,
            tags,
            slug,
        } = update;

        let assignments: Vec<(&str, String)> = [
            ("title", title.map(String::from)),
            ("content", content.map(String::from)),
            ("author", author.map(String::from)),
            ("tags", tags.map(String::from)),
            ("slug", slug.map(String::from)),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect();

        if assignments.is_empty() {
            return Err(DomainError::Validation("update has no changes".into()));
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE blogs SET ");
        for (index, (column, value)) in assignments.into_iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            builder.push(column);
            builder.push(" = ");
            builder.push_bind(value);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(BLOG_COLUMNS);

        let row = builder
            .build_query_as::<BlogRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(DomainError::blog_not_found)?;

        Blog::try_from(row)
    }

    async fn delete(&self, id: BlogId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::blog_not_found());
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[BlogId]) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let raw: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let result = sqlx::query("DELETE FROM blogs WHERE id = ANY($1)")
            .bind(raw)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}

impl PostgresBlogReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, criteria: &BlogCriteria) {
        let mut has_where = false;

        for (column, value) in criteria.equality_filters() {
            push_clause(builder, &mut has_where);
            builder.push(column);
            builder.push(" = ");
            builder.push_bind(value.to_string());
        }

        if let Some(from) = criteria.created_from {
            push_clause(builder, &mut has_where);
            builder.push("created_at >= ");
            builder.push_bind(from);
        }

        if let Some(before) = criteria.created_before {
            push_clause(builder, &mut has_where);
            builder.push("created_at < ");
            builder.push_bind(before);
        }

        if let Some(search) = &criteria.search {
            for term in search.terms() {
                push_clause(builder, &mut has_where);
                builder.push("(");
                for (index, field) in search.fields().iter().enumerate() {
                    if index > 0 {
                        builder.push(" OR ");
                    }
                    builder.push(field.column());
                    builder.push(" ILIKE ");
                    builder.push_bind(like_pattern(term));
                }
                builder.push(")");
            }
        }
    }

    const fn ordering_clause(ordering: BlogOrdering) -> &'static str {
        match ordering {
            BlogOrdering::IdAsc => " ORDER BY id ASC",
            BlogOrdering::CreatedAtDesc => " ORDER BY created_at DESC, id DESC",
        }
    }
}

#[async_trait]
impl BlogReadRepository for PostgresBlogReadRepository {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Blog::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &BlogSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM blogs WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(&self, criteria: &BlogCriteria) -> DomainResult<Vec<Blog>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(BLOG_COLUMNS);
        builder.push(" FROM blogs");
        Self::apply_conditions(&mut builder, criteria);
        builder.push(Self::ordering_clause(criteria.ordering));

        let rows = builder
            .build_query_as::<BlogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn distinct_authors(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT author FROM blogs ORDER BY author")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blog::{SearchField, criteria::Search};

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn conditions_are_and_combined_with_or_across_search_fields() {
        let criteria = BlogCriteria {
            author: Some("ada".into()),
            search: Search::parse("rust web", &[SearchField::Title, SearchField::Tags]),
            ..BlogCriteria::ordered_by(BlogOrdering::CreatedAtDesc)
        };

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT id FROM blogs");
        PostgresBlogReadRepository::apply_conditions(&mut builder, &criteria);
        builder.push(PostgresBlogReadRepository::ordering_clause(criteria.ordering));

        assert_eq!(
            builder.sql(),
            "SELECT id FROM blogs WHERE author = $1 \
             AND (title ILIKE $2 OR tags ILIKE $3) \
             AND (title ILIKE $4 OR tags ILIKE $5) \
             ORDER BY created_at DESC, id DESC"
        );
    }
}
