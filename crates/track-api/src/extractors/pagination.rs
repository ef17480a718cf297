//! Pagination extractor
//!
//! Extracts page-number pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: u32 = 10;
/// Maximum page size
const MAX_LIMIT: u32 = 100;

/// Raw pagination query parameters
///
/// Deserialized signed so that `page=-1` clamps instead of failing
/// extraction with a 400.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination parameters
///
/// Pages are 1-based; a page of 0 clamps to 1 and the limit clamps
/// into 1..=100.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            page: params.page.unwrap_or(1).clamp(1, i64::from(u32::MAX)) as u32,
            limit: params
                .limit
                .unwrap_or(i64::from(DEFAULT_LIMIT))
                .clamp(1, i64::from(MAX_LIMIT)) as u32,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_clamping() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(0),
            limit: Some(1000),
        });
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, MAX_LIMIT);

        let pagination = Pagination::from(PaginationParams {
            page: Some(3),
            limit: Some(0),
        });
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.limit, 1);
    }

    #[test]
    fn test_negative_values_clamp() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(-1),
            limit: Some(-5),
        });
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 1);
    }

    #[test]
    fn test_negative_page_survives_extraction() {
        let uri: axum::http::Uri = "/topics?page=-1&limit=10".parse().unwrap();
        let Query(params) = Query::<PaginationParams>::try_from_uri(&uri).unwrap();
        let pagination = Pagination::from(params);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
    }
}
