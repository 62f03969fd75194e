// src/presentation/http/extractors.rs
use crate::application::error::{ApplicationError, FieldErrors};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HttpError;

/// JSON request body whose rejections use the API error shape.
///
/// Malformed bodies and a wrong content type become a plain 400; a value of
/// the wrong type is reported against its field path.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation(rejection.body_text()))
            })?;

        serde_path_to_error::deserialize(value)
            .map(Self)
            .map_err(|err| HttpError::from_error(data_error(&err)))
    }
}

fn data_error(err: &serde_path_to_error::Error<serde_json::Error>) -> ApplicationError {
    let path = err.path().to_string();
    if path == "." {
        return ApplicationError::validation(format!("invalid request body: {}", err.inner()));
    }

    let mut fields = FieldErrors::new();
    fields.push(&path, err.inner().to_string());
    ApplicationError::InvalidFields(fields)
}
