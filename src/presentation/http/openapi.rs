// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::blogs::list_blogs,
        crate::presentation::http::controllers::blogs::create_blog,
        crate::presentation::http::controllers::blogs::get_blog,
        crate::presentation::http::controllers::blogs::replace_blog,
        crate::presentation::http::controllers::blogs::patch_blog,
        crate::presentation::http::controllers::blogs::delete_blog,
        crate::presentation::http::controllers::admin::admin_list_blogs,
        crate::presentation::http::controllers::admin::admin_delete_selected,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::blogs::BlogListParams,
            crate::presentation::http::controllers::blogs::BlogWriteRequest,
            crate::presentation::http::controllers::admin::AdminListParams,
            crate::presentation::http::controllers::admin::DeleteSelectedRequest,
            crate::presentation::http::controllers::admin::DeleteSelectedResponse,
            crate::application::dto::BlogDto,
            crate::application::dto::AdminListingDto,
            crate::application::dto::AdminColumnDto,
            crate::application::dto::AdminFilterDto,
            crate::application::dto::AdminFilterChoiceDto,
            crate::application::dto::AdminRowDto
        )
    ),
    tags(
        (name = "Blogs", description = "Blog CRUD and search"),
        (name = "Admin", description = "Operator change list and bulk actions"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blogdesk API",
        description = "Blog posts with generated slugs and an admin listing",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

/// `PUBLIC_API_URLS` is a comma separated list; the local default is always appended.
fn server_urls(raw: Option<String>) -> Vec<String> {
    let mut urls: Vec<String> = raw
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches('/').to_string())
                .collect()
        })
        .unwrap_or_default();
    urls.push(DEFAULT_SERVER_URL.to_string());

    let mut seen = HashSet::new();
    urls.retain(|url| seen.insert(url.clone()));
    urls
}

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        servers.extend(
            server_urls(env::var("PUBLIC_API_URLS").ok())
                .into_iter()
                .map(Server::new),
        );
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
