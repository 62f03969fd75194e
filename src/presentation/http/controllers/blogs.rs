// src/presentation/http/controllers/blogs.rs
use crate::application::{
    commands::blogs::{CreateBlogCommand, DeleteBlogCommand, UpdateBlogCommand, UpdateMode},
    dto::BlogDto,
    queries::blogs::{GetBlogQuery, ListBlogsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BlogListParams {
    /// Whitespace or comma separated terms; each must match title, author or tags.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

/// Body of create, replace and partial update. Fields are optional at the
/// wire level so missing ones are reported per field.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BlogWriteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<String>,
    /// Generated from the title on create when omitted or blank.
    pub slug: Option<String>,
}

impl BlogWriteRequest {
    fn into_update(self, id: i64, mode: UpdateMode) -> UpdateBlogCommand {
        UpdateBlogCommand {
            title: self.title,
            content: self.content,
            author: self.author,
            tags: self.tags,
            slug: self.slug,
            ..UpdateBlogCommand::new(id, mode)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/blog/",
    params(BlogListParams),
    responses(
        (status = 200, description = "Blogs ordered by id.", body = [BlogDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn list_blogs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BlogListParams>,
) -> HttpResult<Json<Vec<BlogDto>>> {
    let query = ListBlogsQuery {
        search: params.search,
        title: params.title,
        author: params.author,
        slug: params.slug,
        tags: params.tags,
    };

    state
        .services
        .blog_queries
        .list_blogs(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/blog/",
    request_body = BlogWriteRequest,
    responses(
        (status = 201, description = "Blog created.", body = BlogDto),
        (status = 400, description = "Invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn create_blog(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<BlogWriteRequest>,
) -> HttpResult<(StatusCode, Json<BlogDto>)> {
    let command = CreateBlogCommand {
        title: payload.title,
        content: payload.content,
        author: payload.author,
        tags: payload.tags,
        slug: payload.slug,
    };

    let created = state
        .services
        .blog_commands
        .create_blog(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/blog/{id}/",
    params(("id" = i64, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "The blog.", body = BlogDto),
        (status = 404, description = "Blog not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn get_blog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<BlogDto>> {
    state
        .services
        .blog_queries
        .get_blog(GetBlogQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/blog/{id}/",
    params(("id" = i64, Path, description = "Blog identifier")),
    request_body = BlogWriteRequest,
    responses(
        (status = 200, description = "Blog replaced.", body = BlogDto),
        (status = 400, description = "Invalid or missing fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Blog not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn replace_blog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<BlogWriteRequest>,
) -> HttpResult<Json<BlogDto>> {
    state
        .services
        .blog_commands
        .update_blog(payload.into_update(id, UpdateMode::Replace))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/blog/{id}/",
    params(("id" = i64, Path, description = "Blog identifier")),
    request_body = BlogWriteRequest,
    responses(
        (status = 200, description = "Blog updated.", body = BlogDto),
        (status = 400, description = "Invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Blog not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn patch_blog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<BlogWriteRequest>,
) -> HttpResult<Json<BlogDto>> {
    state
        .services
        .blog_commands
        .update_blog(payload.into_update(id, UpdateMode::Partial))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/blog/{id}/",
    params(("id" = i64, Path, description = "Blog identifier")),
    responses(
        (status = 204, description = "Blog deleted."),
        (status = 404, description = "Blog not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn delete_blog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .blog_commands
        .delete_blog(DeleteBlogCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
