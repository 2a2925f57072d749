//! 심볼 검색 제공자.
//!
//! Yahoo Finance 검색 API를 호출하여 자동완성 후보 목록을 가져옵니다.
//! 응답 payload의 `quotes` 배열을 그대로 전달합니다.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{DataError, Result};
use tickipop_core::SearchQuote;

/// Yahoo Finance 검색 endpoint.
const YAHOO_SEARCH_URL: &str = "https://query2.finance.yahoo.com/v1/finance/search";

/// 요청당 최대 후보 수.
const QUOTES_COUNT: &str = "5";

/// 검색 응답 payload.
#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    quotes: Vec<SearchQuote>,
}

/// 심볼 검색 제공자.
pub struct SearchProvider {
    client: Client,
    base_url: String,
}

impl SearchProvider {
    /// 기본 endpoint로 생성.
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(timeout, YAHOO_SEARCH_URL)
    }

    /// 커스텀 endpoint로 생성 (테스트용).
    pub fn with_base_url(timeout: Duration, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("tickipop/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// 검색어로 심볼 후보를 조회합니다.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchQuote>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("quotesCount", QUOTES_COUNT),
                ("newsCount", "0"),
                ("listsCount", "0"),
                ("enableFuzzyQuery", "false"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Upstream(format!(
                "검색 API 응답 상태: {}",
                status
            )));
        }

        let payload: SearchPayload = response
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        debug!(query = %query, count = payload.quotes.len(), "검색 결과 수신");

        Ok(payload.quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_search_parses_vendor_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("q".into(), "spy".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "quotes": [
                        {"symbol": "SPY", "shortname": "SPDR S&P 500", "quoteType": "ETF", "exchange": "PCX"},
                        {"symbol": "SPYG", "longname": "SPDR Portfolio S&P 500 Growth ETF", "quoteType": "ETF"}
                    ],
                    "news": []
                }"#,
            )
            .create_async()
            .await;

        let provider =
            SearchProvider::with_base_url(Duration::from_secs(5), server.url()).unwrap();
        let quotes = provider.search("spy").await.unwrap();

        mock.assert_async().await;
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "SPY");
        assert_eq!(quotes[1].display_name(), "SPDR Portfolio S&P 500 Growth ETF");
    }

    #[tokio::test]
    async fn test_search_empty_quotes() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"quotes": [], "news": []}"#)
            .create_async()
            .await;

        let provider =
            SearchProvider::with_base_url(Duration::from_secs(5), server.url()).unwrap();
        let quotes = provider.search("zzzzz").await.unwrap();

        assert!(quotes.is_empty());
    }

    #[tokio::test]
    async fn test_search_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let provider =
            SearchProvider::with_base_url(Duration::from_secs(5), server.url()).unwrap();
        let err = provider.search("spy").await.unwrap_err();

        assert!(matches!(err, DataError::Upstream(_)));
    }
}
