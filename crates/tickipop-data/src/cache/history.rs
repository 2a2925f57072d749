//! 과거 데이터 인메모리 TTL 캐시.
//!
//! 같은 (심볼, 간격, 범위) 조합의 반복 조회가 매번 벤더 API를
//! 호출하지 않도록 프로세스 로컬 캐시를 제공합니다. TTL이 지난
//! 항목은 조회 시점에 무효 처리됩니다.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use tickipop_core::{HistoryInterval, PricePoint};

/// 캐시 키: (심볼, 간격, 범위).
type CacheKey = (String, HistoryInterval, String);

/// 캐시 항목.
struct CacheEntry {
    fetched_at: Instant,
    points: Arc<Vec<PricePoint>>,
}

/// 과거 데이터 TTL 캐시.
pub struct HistoryCache {
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl HistoryCache {
    /// 주어진 TTL로 캐시를 생성합니다.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// 유효한 캐시 항목을 조회합니다.
    pub async fn get(
        &self,
        symbol: &str,
        interval: HistoryInterval,
        range: &str,
    ) -> Option<Arc<Vec<PricePoint>>> {
        let key = (symbol.to_string(), interval, range.to_string());
        let entries = self.entries.read().await;
        let entry = entries.get(&key)?;

        if entry.fetched_at.elapsed() >= self.ttl {
            return None;
        }

        debug!(symbol = %symbol, interval = %interval, "캐시 적중");
        Some(Arc::clone(&entry.points))
    }

    /// 새 항목을 저장하고 공유 핸들을 반환합니다.
    pub async fn insert(
        &self,
        symbol: &str,
        interval: HistoryInterval,
        range: &str,
        points: Vec<PricePoint>,
    ) -> Arc<Vec<PricePoint>> {
        let key = (symbol.to_string(), interval, range.to_string());
        let points = Arc::new(points);

        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                points: Arc::clone(&points),
            },
        );

        points
    }

    /// 저장된 항목 수를 반환합니다 (만료 여부와 무관).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// 항목이 없는지 확인합니다.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn sample_points() -> Vec<PricePoint> {
        vec![PricePoint::new(
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            dec!(100),
            dec!(101),
        )]
    }

    #[tokio::test]
    async fn test_fresh_entry_is_returned() {
        let cache = HistoryCache::new(Duration::from_secs(60));
        cache
            .insert("SPY", HistoryInterval::Monthly, "max", sample_points())
            .await;

        let hit = cache.get("SPY", HistoryInterval::Monthly, "max").await;
        assert!(hit.is_some());
        assert_eq!(hit.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_miss() {
        let cache = HistoryCache::new(Duration::ZERO);
        cache
            .insert("SPY", HistoryInterval::Monthly, "max", sample_points())
            .await;

        assert!(cache.get("SPY", HistoryInterval::Monthly, "max").await.is_none());
    }

    #[tokio::test]
    async fn test_key_includes_interval_and_range() {
        let cache = HistoryCache::new(Duration::from_secs(60));
        cache
            .insert("SPY", HistoryInterval::Daily, "10y", sample_points())
            .await;

        assert!(cache.get("SPY", HistoryInterval::Monthly, "10y").await.is_none());
        assert!(cache.get("SPY", HistoryInterval::Daily, "max").await.is_none());
        assert!(cache.get("SPY", HistoryInterval::Daily, "10y").await.is_some());
        assert_eq!(cache.len().await, 1);
    }
}
