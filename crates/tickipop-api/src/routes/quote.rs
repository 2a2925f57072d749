//! 실시간 시세 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /api/websocket?symbol=<S>` - 현재가/등락 스냅샷
//!
//! 경로 이름은 스트리밍이었던 초기 설계의 흔적으로, 프런트 호환을
//! 위해 유지됩니다. 실제 동작은 폴링 방식의 단발 조회입니다.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::{from_data_error, invalid_symbol, missing_parameter, ApiResult};
use crate::state::AppState;
use tickipop_core::Symbol;

/// 시세 쿼리.
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub symbol: Option<String>,
}

/// 실시간 시세 응답.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub previous_close: f64,
    pub open: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub volume: u64,
    /// 조회 시각 (ISO 8601)
    pub timestamp: String,
}

/// 실시간 시세 조회.
///
/// GET /api/websocket?symbol=SPY
pub async fn get_live_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Json<QuoteResponse>> {
    let Some(raw) = query.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty())
    else {
        return Err(missing_parameter("symbol"));
    };

    let symbol = Symbol::parse(raw).map_err(|_| invalid_symbol(raw))?;

    let quote = state
        .service
        .quote(&symbol)
        .await
        .map_err(from_data_error)?;

    debug!(symbol = %symbol, price = %quote.price, "시세 응답");

    Ok(Json(QuoteResponse {
        symbol: symbol.to_string(),
        price: quote.price.to_f64().unwrap_or(0.0),
        change: quote.change.to_f64().unwrap_or(0.0),
        change_percent: quote.change_percent.to_f64().unwrap_or(0.0),
        previous_close: quote.previous_close.to_f64().unwrap_or(0.0),
        open: quote.open.to_f64().unwrap_or(0.0),
        day_high: quote.day_high.to_f64().unwrap_or(0.0),
        day_low: quote.day_low.to_f64().unwrap_or(0.0),
        volume: quote.volume,
        timestamp: quote.as_of.to_rfc3339(),
    }))
}

/// 실시간 시세 라우터 생성.
pub fn quote_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/websocket", get(get_live_quote))
}
