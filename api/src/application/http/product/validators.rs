use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupProductQuery {
    /// Product name or brand to search for. Only the first occurrence is used.
    pub query: Option<String>,
}

impl LookupProductQuery {
    /// First `query` value of a raw query string; repeated keys and unknown keys are ignored.
    pub fn from_query_string(query_string: &str) -> Result<Self, ApiError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;

        let query = pairs
            .into_iter()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value);

        Ok(Self { query })
    }
}

impl<S> FromRequestParts<S> for LookupProductQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_query_string(parts.uri.query().unwrap_or_default())
    }
}
