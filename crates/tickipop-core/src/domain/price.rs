//! 가격 관측치 타입.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 한 거래 기간(일봉 또는 월봉)의 가격 관측치.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 관측 시각 (기간 시작 기준)
    pub timestamp: DateTime<Utc>,
    /// 시가
    pub open: Decimal,
    /// 종가
    pub close: Decimal,
}

impl PricePoint {
    /// 새 관측치를 생성합니다.
    pub fn new(timestamp: DateTime<Utc>, open: Decimal, close: Decimal) -> Self {
        Self {
            timestamp,
            open,
            close,
        }
    }

    /// 관측 연도를 반환합니다.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// 관측 월 인덱스를 반환합니다 (0 = 1월).
    pub fn month_index(&self) -> usize {
        self.timestamp.month0() as usize
    }
}

/// 낙폭 시계열의 한 포인트.
///
/// `drawdown`은 러닝 피크 대비 하락률(%)로 항상 0 이하입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    /// 관측 시각
    pub date: DateTime<Utc>,
    /// 낙폭 (%)
    pub drawdown: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calendar_helpers() {
        let point = PricePoint::new(
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            dec!(100),
            dec!(101),
        );
        assert_eq!(point.year(), 2024);
        assert_eq!(point.month_index(), 0);

        let december = PricePoint::new(
            Utc.with_ymd_and_hms(2023, 12, 29, 0, 0, 0).unwrap(),
            dec!(100),
            dec!(99),
        );
        assert_eq!(december.month_index(), 11);
    }
}
