//! 모든 핸들러에서 공유되는 애플리케이션 상태.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use tickipop_data::MarketDataService;

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 시장 데이터 서비스
    pub service: Arc<MarketDataService>,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: DateTime<Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(service: MarketDataService) -> Self {
        Self {
            service: Arc::new(service),
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임(초) 반환.
    pub fn uptime_secs(&self) -> i64 {
        Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}

/// 테스트용 AppState 생성 헬퍼.
///
/// 기본 설정의 서비스로 상태를 만듭니다. 네트워크가 필요한 경로는
/// 각 테스트에서 제공자를 주입해 교체합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    use tickipop_core::DataConfig;

    let service =
        MarketDataService::new(&DataConfig::default()).expect("테스트 서비스 생성 실패");
    AppState::new(service)
}
