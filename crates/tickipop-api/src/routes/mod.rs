//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/stock` - 월별 수익률 테이블 + PER/PBR
//! - `/api/drawdown` - 낙폭 시계열
//! - `/api/search` - 심볼 검색
//! - `/api/websocket` - 실시간 시세 (폴링)

pub mod drawdown;
pub mod health;
pub mod quote;
pub mod search;
pub mod stock;

pub use drawdown::{drawdown_router, DrawdownEntry, DrawdownResponse};
pub use health::{health_router, ComponentStatus, HealthResponse};
pub use quote::{quote_router, QuoteResponse};
pub use search::{search_router, SearchResponse};
pub use stock::{stock_router, StockResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .merge(stock_router())
        .merge(drawdown_router())
        .merge(search_router())
        .merge(quote_router())
}
