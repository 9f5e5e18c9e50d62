//! JSON body extractor that also runs `validator` rules.

use axum::extract::{FromRequest, Request};
use axum::Json;
use payroll_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Like [`Json`], but rejects with [`AppError`] and validates the payload.
///
/// - Unparseable bodies, wrong content types, and type mismatches become
///   400 `BAD_REQUEST`.
/// - Rule violations (lengths, ranges) become 400 `VALIDATION_ERROR`.
///
/// Must be the last extractor of a handler since it consumes the body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        validate_input(&value)?;
        Ok(Self(value))
    }
}
