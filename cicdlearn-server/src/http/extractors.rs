//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::ApiError;

/// Raw query-string pairs with a JSON [`ApiError`] rejection.
///
/// Repeated keys are allowed; [`QueryParams::required`] takes the last
/// occurrence. A missing required key (e.g. `POST /items` without `name`)
/// becomes a 400 before the handler touches a store.
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Last value for `key`, or a validation error when it is absent.
    pub fn required(&self, key: &'static str) -> Result<&str, ApiError> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| ApiError::Validation {
                message: format!("missing query parameter `{key}`"),
            })
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation {
                message: rejection.body_text(),
            })?;

        Ok(Self(pairs))
    }
}
