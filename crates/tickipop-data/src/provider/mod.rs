//! 외부 데이터 제공자.

pub mod fundamental;
pub mod search;
pub mod yahoo;

use async_trait::async_trait;

use crate::error::Result;
use tickipop_core::{HistoryInterval, PricePoint, Symbol};

/// 과거 가격 데이터 제공자 trait.
///
/// 테스트에서 네트워크 없이 서비스 계층을 구동할 수 있도록
/// 구현체를 주입하는 경계입니다.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// 과거 가격 시계열 조회.
    ///
    /// # 인자
    /// * `symbol` - 티커 심볼
    /// * `interval` - 조회 간격 (일봉/월봉)
    /// * `range` - 조회 범위 (Yahoo range 문자열: "1mo", "10y", "max" 등)
    ///
    /// 벤더가 빈 시계열을 돌려주면 [`crate::DataError::NotFound`]를
    /// 반환합니다.
    async fn fetch_history(
        &self,
        symbol: &Symbol,
        interval: HistoryInterval,
        range: &str,
    ) -> Result<Vec<PricePoint>>;
}
