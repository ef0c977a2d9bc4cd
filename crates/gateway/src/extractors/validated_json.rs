//! JSON body extractors.

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::ValidationFailure;

/// JSON extractor that reports unreadable bodies as `400 Bad Request`
/// in the common error shape.
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

/// JSON extractor that automatically validates the payload.
///
/// Every failing field is reported, not just the first.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        validate(&value)?;
        Ok(ValidatedJson(value))
    }
}

/// Like [`ValidatedJson`], but an empty body stands for `T::default()`.
pub struct ValidatedJsonOrDefault<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJsonOrDefault<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value = if bytes.is_empty() {
            T::default()
        } else {
            let Json(value) =
                Json::<T>::from_bytes(&bytes).map_err(|e| AppError::bad_request(e.body_text()))?;
            value
        };

        validate(&value)?;
        Ok(ValidatedJsonOrDefault(value))
    }
}

fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|e| AppError::InvalidFields(ValidationFailure::from_validator(&e, None)))
}
