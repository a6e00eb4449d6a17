//! JSON body extractor - Deserialization with application error mapping.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections are reported as [`AppError::BadRequest`].
///
/// Only shape is checked: missing required fields or malformed JSON are
/// rejected, field contents are accepted as-is.
///
/// # Example
///
/// ```rust,ignore
/// use user_registry::api::extractors::JsonBody;
/// use user_registry::domain::CreateUserDto;
///
/// async fn create_user(JsonBody(payload): JsonBody<CreateUserDto>) {
///     // payload has every required field
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
