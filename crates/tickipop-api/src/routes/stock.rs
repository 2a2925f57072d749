//! 월별 수익률 테이블 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /api/stock?symbol=<S>` - 연도별 12칸 수익률 테이블과 PER/PBR

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::error::{from_data_error, invalid_symbol, missing_parameter, ApiResult};
use crate::state::AppState;
use tickipop_core::{ReturnTable, Symbol};

/// 수익률 테이블 쿼리.
#[derive(Debug, Deserialize)]
pub struct StockQuery {
    pub symbol: Option<String>,
}

/// 수익률 테이블 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct StockResponse {
    /// 조회 심볼
    pub symbol: String,
    /// 연도 → 12칸 수익률(%) 매핑 (null = 데이터 없음)
    pub data: BTreeMap<String, Vec<Option<f64>>>,
    /// 주가수익비율
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per: Option<f64>,
    /// 주가순자산비율
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pbr: Option<f64>,
}

/// ReturnTable을 JSON 직렬화용 맵으로 변환.
fn table_to_map(table: &ReturnTable) -> BTreeMap<String, Vec<Option<f64>>> {
    table
        .iter()
        .map(|(year, row)| {
            let cells = row.iter().map(|cell| cell.and_then(|d| d.to_f64())).collect();
            (year.to_string(), cells)
        })
        .collect()
}

/// 월별 수익률 테이블 조회.
///
/// GET /api/stock?symbol=SPY
pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StockQuery>,
) -> ApiResult<Json<StockResponse>> {
    let Some(raw) = query.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty())
    else {
        return Err(missing_parameter("symbol"));
    };

    let symbol = Symbol::parse(raw).map_err(|_| invalid_symbol(raw))?;

    let overview = state
        .service
        .monthly_table(&symbol)
        .await
        .map_err(from_data_error)?;

    info!(symbol = %symbol, years = overview.table.len(), "수익률 테이블 응답");

    Ok(Json(StockResponse {
        symbol: overview.symbol.to_string(),
        data: table_to_map(&overview.table),
        per: overview.fundamentals.per.and_then(|d| d.to_f64()),
        pbr: overview.fundamentals.pbr.and_then(|d| d.to_f64()),
    }))
}

/// 수익률 테이블 라우터 생성.
pub fn stock_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/stock", get(get_stock))
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
    async fn test_missing_symbol_returns_400() {
        let state = Arc::new(create_test_state());
        let app = stock_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/stock")
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
        assert!(error.error.contains("symbol"));
    }

    #[tokio::test]
    async fn test_blank_symbol_returns_400() {
        let state = Arc::new(create_test_state());
        let app = stock_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/stock?symbol=%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_symbol_returns_400() {
        let state = Arc::new(create_test_state());
        let app = stock_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/stock?symbol=AAPL%3BDROP")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_symbol_returns_404() {
        use async_trait::async_trait;
        use tickipop_core::{DataConfig, HistoryInterval, PricePoint};
        use tickipop_data::{DataError, HistoryProvider, MarketDataService};

        /// 항상 데이터 없음을 돌려주는 제공자.
        struct EmptyHistory;

        #[async_trait]
        impl HistoryProvider for EmptyHistory {
            async fn fetch_history(
                &self,
                symbol: &tickipop_core::Symbol,
                _interval: HistoryInterval,
                _range: &str,
            ) -> Result<Vec<PricePoint>, DataError> {
                Err(DataError::NotFound(symbol.to_string()))
            }
        }

        let service = MarketDataService::new(&DataConfig::default())
            .unwrap()
            .with_history_provider(Arc::new(EmptyHistory));
        let state = Arc::new(AppState::new(service));
        let app = stock_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/stock?symbol=ZZZZ")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: crate::error::ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("ZZZZ"));
    }

    #[test]
    fn test_table_to_map_preserves_nulls() {
        use rust_decimal_macros::dec;

        let mut table = ReturnTable::new();
        table.set(2024, 1, dec!(10.00));

        let map = table_to_map(&table);
        let row = &map["2024"];
        assert_eq!(row.len(), 12);
        assert_eq!(row[0], None);
        assert_eq!(row[1], Some(10.00));
    }
}
