use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::pkg::server::response::ApiError;

/// Field names in declaration order, so the first failing rule is picked
/// deterministically out of `ValidationErrors`.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Json body extractor that runs the declarative rule set before the handler
/// sees the value. Rejects with a 400 envelope carrying the first violated
/// rule's message.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        if let Err(errors) = body.validate() {
            return Err(ApiError::bad_request(first_message::<T>(&errors)));
        }
        Ok(ValidatedJson(body))
    }
}

pub fn first_message<T: FieldOrder>(errors: &ValidationErrors) -> String {
    let by_field = errors.field_errors();
    for field in T::FIELDS {
        if let Some(failures) = by_field.get(field) {
            if let Some(failure) = failures.first() {
                return failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
            }
        }
    }
    "request body is invalid".to_string()
}
