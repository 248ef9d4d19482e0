//! JSON body extractor: rejections become 400 responses in the API error shape.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Like `axum::Json`, but requires a JSON object and maps every failure
/// (syntax, wrong field type, unknown field) to [`AppError::BadRequest`].
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        if !value.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        let parsed = serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(JsonBody(parsed))
    }
}
