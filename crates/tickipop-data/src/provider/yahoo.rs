//! Yahoo Finance 과거 데이터 및 실시간 시세 제공자.
//!
//! Yahoo Finance API를 사용하여 과거 캔들 데이터와 현재 시세를
//! 조회합니다.
//!
//! # 심볼 형식
//!
//! 모든 심볼은 Yahoo Finance 형식으로 전달되어야 합니다:
//! - 미국 주식/ETF: "AAPL", "SPY"
//! - 한국 주식: "005930.KS" (코스피), "035720.KQ" (코스닥)
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! use tickipop_data::{HistoryProvider, YahooFinanceProvider};
//! use tickipop_core::{HistoryInterval, Symbol};
//!
//! let provider = YahooFinanceProvider::new()?;
//! let symbol = Symbol::parse("SPY")?;
//! let points = provider
//!     .fetch_history(&symbol, HistoryInterval::Monthly, "max")
//!     .await?;
//! ```

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use yahoo_finance_api as yahoo;

use crate::error::{DataError, Result};
use crate::provider::HistoryProvider;
use tickipop_core::{HistoryInterval, LiveQuote, PricePoint, Symbol};

/// Yahoo Finance 데이터 제공자.
///
/// 하나의 커넥터로 과거 데이터와 실시간 시세를 모두 조회합니다.
pub struct YahooFinanceProvider {
    connector: yahoo::YahooConnector,
}

impl YahooFinanceProvider {
    /// 새로운 Yahoo Finance 제공자 생성.
    pub fn new() -> Result<Self> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| DataError::Upstream(format!("Yahoo Finance 연결 실패: {}", e)))?;

        Ok(Self { connector })
    }

    /// Yahoo Quote를 PricePoint로 변환.
    fn quote_to_point(quote: &yahoo::Quote) -> Option<PricePoint> {
        let timestamp = Utc.timestamp_opt(quote.timestamp as i64, 0).single()?;
        Some(PricePoint {
            timestamp,
            open: Decimal::from_f64_retain(quote.open).unwrap_or_default(),
            close: Decimal::from_f64_retain(quote.close).unwrap_or_default(),
        })
    }

    /// 실시간 시세 조회.
    ///
    /// 최신 일봉과 차트 메타데이터에서 현재가, 전일 종가, 등락률을
    /// 계산합니다.
    pub async fn fetch_quote(&self, symbol: &Symbol) -> Result<LiveQuote> {
        let response = self
            .connector
            .get_latest_quotes(symbol.as_str(), "1d")
            .await
            .map_err(|e| {
                DataError::Upstream(format!("Yahoo Finance 시세 오류 ({}): {}", symbol, e))
            })?;

        let meta = response
            .metadata()
            .map_err(|e| DataError::Parse(format!("메타데이터 파싱 오류: {}", e)))?;
        let last = response
            .last_quote()
            .map_err(|_| DataError::NotFound(symbol.to_string()))?;

        let price = Decimal::from_f64_retain(meta.regular_market_price).unwrap_or_default();
        let previous_close = meta
            .previous_close
            .unwrap_or(meta.chart_previous_close);
        let previous_close = Decimal::from_f64_retain(previous_close).unwrap_or_default();

        let change = price - previous_close;
        let change_percent = if previous_close.is_zero() {
            Decimal::ZERO
        } else {
            (change / previous_close * Decimal::from(100)).round_dp(2)
        };

        debug!(symbol = %symbol, %price, %change_percent, "실시간 시세 수신");

        Ok(LiveQuote {
            price,
            change,
            change_percent,
            previous_close,
            open: Decimal::from_f64_retain(last.open).unwrap_or_default(),
            day_high: Decimal::from_f64_retain(last.high).unwrap_or_default(),
            day_low: Decimal::from_f64_retain(last.low).unwrap_or_default(),
            volume: last.volume,
            as_of: Utc::now(),
        })
    }
}

#[async_trait]
impl HistoryProvider for YahooFinanceProvider {
    async fn fetch_history(
        &self,
        symbol: &Symbol,
        interval: HistoryInterval,
        range: &str,
    ) -> Result<Vec<PricePoint>> {
        info!(
            symbol = %symbol,
            interval = %interval,
            range = %range,
            "Yahoo Finance 과거 데이터 조회"
        );

        let response = self
            .connector
            .get_quote_range(symbol.as_str(), interval.as_yahoo_str(), range)
            .await
            .map_err(|e| {
                DataError::Upstream(format!("Yahoo Finance API 오류 ({}): {}", symbol, e))
            })?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::Parse(format!("Quote 파싱 오류: {}", e)))?;

        if quotes.is_empty() {
            warn!(symbol = %symbol, "Yahoo Finance 응답이 비어 있음");
            return Err(DataError::NotFound(symbol.to_string()));
        }

        let mut points: Vec<PricePoint> =
            quotes.iter().filter_map(Self::quote_to_point).collect();

        // 시간순 정렬 (오래된 것부터)
        points.sort_by_key(|p| p.timestamp);

        debug!(symbol = %symbol, count = points.len(), "캔들 수신 완료");

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_to_point_conversion() {
        let quote = yahoo::Quote {
            timestamp: 1_704_153_600, // 2024-01-02 00:00:00 UTC
            open: 100.5,
            high: 103.0,
            low: 99.0,
            volume: 1_000,
            close: 102.25,
            adjclose: 102.25,
        };

        let point = YahooFinanceProvider::quote_to_point(&quote).unwrap();
        assert_eq!(point.timestamp.timestamp(), 1_704_153_600);
        assert_eq!(point.open.to_string(), "100.5");
        assert_eq!(point.close.to_string(), "102.25");
    }

    #[tokio::test]
    #[ignore] // 실제 네트워크 테스트는 ignore
    async fn test_fetch_spy_monthly() {
        let provider = YahooFinanceProvider::new().unwrap();
        let symbol = Symbol::parse("SPY").unwrap();

        let points = provider
            .fetch_history(&symbol, HistoryInterval::Monthly, "1y")
            .await
            .unwrap();

        assert!(!points.is_empty());
        assert!(points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}
