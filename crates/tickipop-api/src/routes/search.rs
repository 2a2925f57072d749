//! 심볼 검색 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /api/search?query=<Q>` - 벤더 검색 결과 passthrough

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::{from_data_error, missing_parameter, ApiResult};
use crate::state::AppState;
use tickipop_core::SearchQuote;

/// 검색 쿼리.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// 검색 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub quotes: Vec<SearchQuote>,
}

/// 심볼 검색.
///
/// GET /api/search?query=apple
pub async fn get_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let Some(query) = params.query.as_deref().map(str::trim).filter(|s| !s.is_empty())
    else {
        return Err(missing_parameter("query"));
    };

    let quotes = state
        .service
        .search(query)
        .await
        .map_err(from_data_error)?;

    debug!(query = %query, count = quotes.len(), "검색 응답");

    Ok(Json(SearchResponse { quotes }))
}

/// 검색 라우터 생성.
pub fn search_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/search", get(get_search))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::state::create_test_state;

    #[tokio::test]
    async fn test_missing_query_returns_400() {
        let state = Arc::new(create_test_state());
        let app = search_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: crate::error::ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("query"));
    }
}
