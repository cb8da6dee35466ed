use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::EduError;
use crate::types::Validate;

/// JSON body that has been decoded and validated.
///
/// Any body rejection (bad content type, malformed JSON, missing field) or
/// failed validation becomes `EduError::Validation`, i.e. a 400, before the
/// handler runs.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = EduError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| EduError::Validation(rejection.body_text()))?;
        body.validate()?;
        Ok(ValidJson(body))
    }
}
