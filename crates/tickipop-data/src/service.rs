//! 시장 데이터 서비스 파사드.
//!
//! 제공자(과거 데이터, 시세, 검색, 재무지표)와 캐시를 조정하여
//! API/CLI가 사용하는 단일 진입점을 제공합니다. 파생 테이블은
//! 요청마다 최신 스냅샷에서 전체 재계산됩니다.

use chrono::{Datelike, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::cache::HistoryCache;
use crate::error::Result;
use crate::provider::fundamental::FundamentalsProvider;
use crate::provider::search::SearchProvider;
use crate::provider::yahoo::YahooFinanceProvider;
use crate::provider::HistoryProvider;
use tickipop_analytics::{drawdown_series, intra_month_return, monthly_return_table};
use tickipop_core::{
    DataConfig, DrawdownPoint, Fundamentals, HistoryInterval, LiveQuote, PricePoint,
    ReturnTable, SearchQuote, Symbol,
};

/// 당월 부분 수익률 계산용 일봉 조회 범위.
const CURRENT_MONTH_RANGE: &str = "1mo";

/// `/api/stock` 한 건에 해당하는 조회 결과.
#[derive(Debug, Clone)]
pub struct StockOverview {
    /// 조회 심볼
    pub symbol: Symbol,
    /// 월별 수익률 테이블
    pub table: ReturnTable,
    /// PER/PBR (조회 실패 시 빈 값)
    pub fundamentals: Fundamentals,
}

/// 시장 데이터 서비스.
pub struct MarketDataService {
    config: DataConfig,
    quote_provider: Arc<YahooFinanceProvider>,
    history: Arc<dyn HistoryProvider>,
    search: SearchProvider,
    fundamentals: FundamentalsProvider,
    cache: HistoryCache,
}

impl MarketDataService {
    /// 설정에서 서비스를 생성합니다.
    pub fn new(config: &DataConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let provider = Arc::new(YahooFinanceProvider::new()?);

        Ok(Self {
            config: config.clone(),
            history: provider.clone(),
            quote_provider: provider,
            search: SearchProvider::new(timeout)?,
            fundamentals: FundamentalsProvider::new(timeout)?,
            cache: HistoryCache::new(Duration::from_secs(config.history_cache_ttl_secs)),
        })
    }

    /// 과거 데이터 제공자를 교체합니다 (테스트용).
    pub fn with_history_provider(mut self, provider: Arc<dyn HistoryProvider>) -> Self {
        self.history = provider;
        self
    }

    /// 재무지표 제공자를 교체합니다 (테스트용).
    pub fn with_fundamentals_provider(mut self, provider: FundamentalsProvider) -> Self {
        self.fundamentals = provider;
        self
    }

    /// 캐시를 거쳐 과거 데이터를 조회합니다.
    async fn history_cached(
        &self,
        symbol: &Symbol,
        interval: HistoryInterval,
        range: &str,
    ) -> Result<Arc<Vec<PricePoint>>> {
        if let Some(points) = self.cache.get(symbol.as_str(), interval, range).await {
            return Ok(points);
        }

        let points = self.history.fetch_history(symbol, interval, range).await?;
        Ok(self
            .cache
            .insert(symbol.as_str(), interval, range, points)
            .await)
    }

    /// 월별 수익률 테이블과 재무지표를 조회합니다.
    ///
    /// 월봉 전체 시계열로 테이블을 만든 뒤, 이번 달 일봉으로 당월
    /// 부분 수익률을 덧씌웁니다. 재무지표 조회 실패는 경고로만
    /// 남기고 빈 값으로 응답합니다.
    pub async fn monthly_table(&self, symbol: &Symbol) -> Result<StockOverview> {
        let monthly = self
            .history_cached(symbol, HistoryInterval::Monthly, &self.config.monthly_range)
            .await?;

        let mut table = monthly_return_table(&monthly);

        // 당월 부분 수익률 overlay (일봉 2개 이상 필요)
        match self
            .history
            .fetch_history(symbol, HistoryInterval::Daily, CURRENT_MONTH_RANGE)
            .await
        {
            Ok(daily) => {
                let now = Utc::now();
                let current_month: Vec<PricePoint> = daily
                    .into_iter()
                    .filter(|p| p.year() == now.year() && p.month_index() == now.month0() as usize)
                    .collect();

                if let Some(pct) = intra_month_return(&current_month) {
                    table.set(now.year(), now.month0() as usize, pct);
                }
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "당월 일봉 조회 실패, 월봉 값 유지");
            }
        }

        let fundamentals = match self.fundamentals.fetch(symbol).await {
            Ok(fundamentals) => fundamentals,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "재무지표 조회 실패, 빈 값으로 응답");
                Fundamentals::default()
            }
        };

        info!(
            symbol = %symbol,
            years = table.len(),
            has_fundamentals = !fundamentals.is_empty(),
            "월별 수익률 테이블 계산 완료"
        );

        Ok(StockOverview {
            symbol: symbol.clone(),
            table,
            fundamentals,
        })
    }

    /// 일봉 시계열에서 낙폭 시계열을 계산합니다.
    pub async fn drawdown(&self, symbol: &Symbol) -> Result<Vec<DrawdownPoint>> {
        let daily = self
            .history_cached(symbol, HistoryInterval::Daily, &self.config.drawdown_range)
            .await?;

        let series = drawdown_series(&daily);
        debug!(symbol = %symbol, points = series.len(), "낙폭 시계열 계산 완료");

        Ok(series)
    }

    /// 실시간 시세를 조회합니다.
    pub async fn quote(&self, symbol: &Symbol) -> Result<LiveQuote> {
        self.quote_provider.fetch_quote(symbol).await
    }

    /// 심볼 검색.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchQuote>> {
        self.search.search(query).await
    }

    /// 캐시에 저장된 항목 수 (헬스 체크용).
    pub async fn cache_entries(&self) -> usize {
        self.cache.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    /// 고정된 월봉 시계열을 돌려주는 테스트 제공자.
    struct FixedHistory {
        monthly: Vec<PricePoint>,
    }

    #[async_trait]
    impl HistoryProvider for FixedHistory {
        async fn fetch_history(
            &self,
            symbol: &Symbol,
            interval: HistoryInterval,
            _range: &str,
        ) -> Result<Vec<PricePoint>> {
            match interval {
                HistoryInterval::Monthly if !self.monthly.is_empty() => {
                    Ok(self.monthly.clone())
                }
                _ => Err(DataError::NotFound(symbol.to_string())),
            }
        }
    }

    fn monthly_point(year: i32, month: u32, close: rust_decimal::Decimal) -> PricePoint {
        PricePoint::new(
            Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap(),
            close,
            close,
        )
    }

    async fn service_with(
        monthly: Vec<PricePoint>,
        fundamentals_url: String,
    ) -> MarketDataService {
        let config = DataConfig {
            request_timeout_secs: 2,
            ..Default::default()
        };
        MarketDataService::new(&config)
            .unwrap()
            .with_history_provider(Arc::new(FixedHistory { monthly }))
            .with_fundamentals_provider(
                FundamentalsProvider::with_base_url(
                    Duration::from_secs(2),
                    fundamentals_url,
                )
                .unwrap(),
            )
    }

    #[tokio::test]
    async fn test_monthly_table_aggregates_and_degrades_fundamentals() {
        // 재무지표 endpoint가 500을 돌려줘도 테이블 응답은 성공해야 한다
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let monthly = vec![
            monthly_point(2024, 1, dec!(100)),
            monthly_point(2024, 2, dec!(110)),
            monthly_point(2024, 3, dec!(99)),
        ];
        let service = service_with(monthly, server.url()).await;
        let symbol = Symbol::parse("SPY").unwrap();

        let overview = service.monthly_table(&symbol).await.unwrap();

        assert_eq!(overview.table.get(2024, 1), Some(dec!(10.00)));
        assert_eq!(overview.table.get(2024, 2), Some(dec!(-10.00)));
        assert!(overview.fundamentals.is_empty());
    }

    #[tokio::test]
    async fn test_empty_history_surfaces_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let service = service_with(Vec::new(), server.url()).await;
        let symbol = Symbol::parse("ZZZZ").unwrap();

        let err = service.monthly_table(&symbol).await.unwrap_err();
        assert!(err.is_not_found());

        let err = service.drawdown(&symbol).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_repeated_table_requests_hit_the_cache() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let monthly = vec![
            monthly_point(2024, 1, dec!(100)),
            monthly_point(2024, 2, dec!(105)),
        ];
        let service = service_with(monthly, server.url()).await;
        let symbol = Symbol::parse("SPY").unwrap();

        assert_eq!(service.cache_entries().await, 0);
        service.monthly_table(&symbol).await.unwrap();
        assert_eq!(service.cache_entries().await, 1);

        // 두 번째 요청도 같은 항목을 재사용한다
        service.monthly_table(&symbol).await.unwrap();
        assert_eq!(service.cache_entries().await, 1);
    }
}
