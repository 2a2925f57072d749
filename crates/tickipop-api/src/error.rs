//! 통합 API 에러 응답 타입.
//!
//! 모든 엔드포인트에서 `{ "error": "...", "detail": "..." }` 형식의
//! 일관된 에러 body를 사용합니다. 상태 코드 매핑:
//!
//! - 파라미터 누락/잘못된 심볼 → 400
//! - 벤더에 데이터 없음 → 404
//! - 네트워크/벤더/파싱 오류 → 500

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use tickipop_data::DataError;

/// 통합 API 에러 응답.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
    /// 추가 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    /// 상세 정보 포함 에러 생성.
    pub fn with_detail(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 필수 쿼리 파라미터 누락 에러 (400).
pub fn missing_parameter(name: &str) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiErrorResponse::new(format!(
            "Missing \"{}\" query parameter",
            name
        ))),
    )
}

/// 잘못된 심볼 형식 에러 (400).
pub fn invalid_symbol(raw: &str) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiErrorResponse::new(format!("Invalid symbol: {}", raw))),
    )
}

/// 데이터 계층 에러를 상태 코드와 응답 body로 변환합니다.
pub fn from_data_error(err: DataError) -> (StatusCode, Json<ApiErrorResponse>) {
    match err {
        DataError::NotFound(symbol) => (
            StatusCode::NOT_FOUND,
            Json(ApiErrorResponse::new(format!(
                "No data found for symbol: {}",
                symbol
            ))),
        ),
        DataError::InvalidInput(message) => (
            StatusCode::BAD_REQUEST,
            Json(ApiErrorResponse::new(message)),
        ),
        DataError::Upstream(detail) | DataError::Parse(detail) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse::with_detail("Failed to fetch data", detail)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_body() {
        let (status, Json(body)) = missing_parameter("symbol");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing \"symbol\" query parameter");
        assert!(body.detail.is_none());
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, Json(body)) = from_data_error(DataError::NotFound("ZZZZ".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.error.contains("ZZZZ"));
    }

    #[test]
    fn test_upstream_maps_to_500_with_detail() {
        let (status, Json(body)) =
            from_data_error(DataError::Upstream("connection refused".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to fetch data");
        assert_eq!(body.detail.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_detail_omitted_from_json_when_none() {
        let json = serde_json::to_string(&ApiErrorResponse::new("oops")).unwrap();
        assert!(!json.contains("detail"));
        assert!(json.contains(r#""error":"oops""#));
    }
}
