//! 낙폭 시계열 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /api/drawdown?symbol=<S>` - 일봉 기반 낙폭 시계열

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::{from_data_error, invalid_symbol, missing_parameter, ApiResult};
use crate::state::AppState;
use tickipop_core::Symbol;

/// 낙폭 쿼리.
#[derive(Debug, Deserialize)]
pub struct DrawdownQuery {
    pub symbol: Option<String>,
}

/// 낙폭 시계열의 한 항목.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawdownEntry {
    /// 관측 시각 (ISO 8601)
    pub date: String,
    /// 낙폭 (%) — 항상 0 이하
    pub drawdown: f64,
}

/// 낙폭 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawdownResponse {
    pub drawdown: Vec<DrawdownEntry>,
}

/// 낙폭 시계열 조회.
///
/// GET /api/drawdown?symbol=SPY
pub async fn get_drawdown(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DrawdownQuery>,
) -> ApiResult<Json<DrawdownResponse>> {
    let Some(raw) = query.symbol.as_deref().map(str::trim).filter(|s| !s.is_empty())
    else {
        return Err(missing_parameter("symbol"));
    };

    let symbol = Symbol::parse(raw).map_err(|_| invalid_symbol(raw))?;

    let series = state
        .service
        .drawdown(&symbol)
        .await
        .map_err(from_data_error)?;

    info!(symbol = %symbol, points = series.len(), "낙폭 시계열 응답");

    let drawdown = series
        .into_iter()
        .map(|point| DrawdownEntry {
            date: point.date.to_rfc3339(),
            drawdown: point.drawdown.to_f64().unwrap_or(0.0),
        })
        .collect();

    Ok(Json(DrawdownResponse { drawdown }))
}

/// 낙폭 라우터 생성.
pub fn drawdown_router() -> Router<Arc<AppState>> {
    Router::new().route("/api/drawdown", get(get_drawdown))
}
