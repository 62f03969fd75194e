use blogdesk::application::{
    commands::blogs::{CreateBlogCommand, DeleteBlogCommand},
    error::ApplicationError,
    ports::{time::Clock, util::SlugGenerator},
    queries::blogs::{GetBlogQuery, ListBlogsQuery},
    services::ApplicationServices,
};
use blogdesk::domain::blog::{
    BlogAuthor, BlogContent, BlogReadRepository, BlogSlug, BlogTags, BlogTitle,
    BlogWriteRepository, NewBlog,
};
use blogdesk::domain::errors::DomainError;
use blogdesk::infrastructure::{
    database,
    repositories::{PostgresBlogReadRepository, PostgresBlogWriteRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

// Run only when explicitly enabled to avoid requiring Postgres in all environments
async fn pool() -> Option<PgPool> {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return None;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(&database_url).await.expect("init pool");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    Some(pool)
}

/// Per-test prefix so runs against a shared database do not collide.
fn marker(name: &str) -> String {
    format!("pgit-{name}-{}", Utc::now().timestamp_micros())
}

fn services(pool: &PgPool) -> ApplicationServices {
    let write_repo: Arc<dyn BlogWriteRepository> =
        Arc::new(PostgresBlogWriteRepository::new(pool.clone()));
    let read_repo: Arc<dyn BlogReadRepository> =
        Arc::new(PostgresBlogReadRepository::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(write_repo, read_repo, clock, slugger)
}

fn command(title: &str, author: &str, tags: &str) -> CreateBlogCommand {
    CreateBlogCommand {
        title: Some(title.to_string()),
        content: Some(format!("{title} body")),
        author: Some(author.to_string()),
        tags: Some(tags.to_string()),
        slug: None,
    }
}

async fn cleanup(pool: &PgPool, author: &str) {
    sqlx::query("DELETE FROM blogs WHERE lower(author) = lower($1)")
        .bind(author)
        .execute(pool)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn integration_duplicate_slug_is_a_conflict() {
    let Some(pool) = pool().await else { return };
    let author = marker("dup");
    let repo = PostgresBlogWriteRepository::new(pool.clone());

    let new_blog = || NewBlog {
        title: BlogTitle::new("Duplicate").unwrap(),
        content: BlogContent::new("Body").unwrap(),
        author: BlogAuthor::new(author.clone()).unwrap(),
        slug: BlogSlug::new(author.clone()).unwrap(),
        tags: BlogTags::new("x").unwrap(),
        created_at: Utc::now(),
    };

    repo.insert(new_blog()).await.expect("first insert");
    let err = repo.insert(new_blog()).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)), "{err:?}");

    cleanup(&pool, &author).await;
}

#[tokio::test]
async fn integration_same_title_gets_numbered_slugs() {
    let Some(pool) = pool().await else { return };
    let author = marker("seq");
    let services = services(&pool);

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let created = services
            .blog_commands
            .create_blog(command(&author, &author, "x"))
            .await
            .expect("create");
        slugs.push(created.slug);
    }

    assert_eq!(
        slugs,
        [author.clone(), format!("{author}-1"), format!("{author}-2")]
    );

    cleanup(&pool, &author).await;
}

#[tokio::test]
async fn integration_search_is_case_insensitive_and_literal() {
    let Some(pool) = pool().await else { return };
    let author = marker("search");
    let services = services(&pool);

    services
        .blog_commands
        .create_blog(command("Hundred percent", &author, "100%"))
        .await
        .expect("create");
    services
        .blog_commands
        .create_blog(command("Plain", &author, "100x"))
        .await
        .expect("create");

    let by_author = services
        .blog_queries
        .list_blogs(ListBlogsQuery {
            search: Some(author.to_uppercase()),
            ..ListBlogsQuery::default()
        })
        .await
        .expect("list");
    assert_eq!(by_author.len(), 2);

    let literal = services
        .blog_queries
        .list_blogs(ListBlogsQuery {
            search: Some(format!("{author} 100%")),
            ..ListBlogsQuery::default()
        })
        .await
        .expect("list");
    let titles: Vec<_> = literal.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Hundred percent"]);

    let underscore = services
        .blog_queries
        .list_blogs(ListBlogsQuery {
            search: Some(format!("{author} 100_")),
            ..ListBlogsQuery::default()
        })
        .await
        .expect("list");
    assert!(underscore.is_empty());

    cleanup(&pool, &author).await;
}

#[tokio::test]
async fn integration_deleted_blog_is_not_found() {
    let Some(pool) = pool().await else { return };
    let author = marker("delete");
    let services = services(&pool);

    let created = services
        .blog_commands
        .create_blog(command("Doomed", &author, "x"))
        .await
        .expect("create");

    services
        .blog_commands
        .delete_blog(DeleteBlogCommand { id: created.id })
        .await
        .expect("delete");

    let err = services
        .blog_queries
        .get_blog(GetBlogQuery { id: created.id })
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_))
        ),
        "{err:?}"
    );

    let err = services
        .blog_commands
        .delete_blog(DeleteBlogCommand { id: created.id })
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_))
        ),
        "{err:?}"
    );

    cleanup(&pool, &author).await;
}
