// src/presentation/http/controllers/admin.rs
use crate::application::{
    admin::{AdminListQuery, DeleteSelectedCommand},
    dto::AdminListingDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AdminListParams {
    /// Free text over title, author and content.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// `any`, `today`, `past_7_days`, `this_month` or `this_year`.
    #[serde(default)]
    pub created: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteSelectedRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteSelectedResponse {
    pub deleted: u64,
}

#[utoipa::path(
    get,
    path = "/admin/blogs",
    params(AdminListParams),
    responses(
        (status = 200, description = "Admin change list, newest first.", body = AdminListingDto),
        (status = 400, description = "Unknown filter value.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn admin_list_blogs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<AdminListingDto>> {
    let query = AdminListQuery {
        q: params.q,
        author: params.author,
        created: params.created,
    };

    state
        .services
        .admin
        .list(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/blogs/delete",
    request_body = DeleteSelectedRequest,
    responses(
        (status = 200, description = "Selected blogs deleted.", body = DeleteSelectedResponse),
        (status = 400, description = "Nothing selected.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn admin_delete_selected(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<DeleteSelectedRequest>,
) -> HttpResult<Json<DeleteSelectedResponse>> {
    let deleted = state
        .services
        .admin
        .delete_selected(DeleteSelectedCommand { ids: payload.ids })
        .await
        .into_http()?;

    Ok(Json(DeleteSelectedResponse { deleted }))
}
