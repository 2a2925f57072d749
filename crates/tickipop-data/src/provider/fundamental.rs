//! PER/PBR 재무지표 제공자.
//!
//! Yahoo Finance quoteSummary API에서 주가수익비율(PER)과
//! 주가순자산비율(PBR)을 추출합니다. 두 지표 모두 선택적이며,
//! 조회에 실패해도 호출 측의 테이블 응답을 막지 않습니다.

use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::{DataError, Result};
use tickipop_core::{Fundamentals, Symbol};

/// Yahoo Finance quoteSummary endpoint.
const YAHOO_QUOTE_SUMMARY_URL: &str =
    "https://query2.finance.yahoo.com/v10/finance/quoteSummary";

/// 재무지표 제공자.
pub struct FundamentalsProvider {
    client: Client,
    base_url: String,
}

impl FundamentalsProvider {
    /// 기본 endpoint로 생성.
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(timeout, YAHOO_QUOTE_SUMMARY_URL)
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

    /// PER/PBR 조회.
    ///
    /// 추출 경로는 우선순위 순으로 시도합니다:
    /// - PER: `summaryDetail.trailingPE` → `defaultKeyStatistics.trailingPE`
    /// - PBR: `defaultKeyStatistics.priceToBook` → `summaryDetail.priceToBook`
    pub async fn fetch(&self, symbol: &Symbol) -> Result<Fundamentals> {
        let url = format!("{}/{}", self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .query(&[("modules", "summaryDetail,defaultKeyStatistics")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Upstream(format!(
                "quoteSummary 응답 상태: {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let result = body
            .pointer("/quoteSummary/result/0")
            .ok_or_else(|| DataError::Parse("quoteSummary 결과 없음".to_string()))?;

        let per = extract_decimal(result, "/summaryDetail/trailingPE")
            .or_else(|| extract_decimal(result, "/defaultKeyStatistics/trailingPE"));
        let pbr = extract_decimal(result, "/defaultKeyStatistics/priceToBook")
            .or_else(|| extract_decimal(result, "/summaryDetail/priceToBook"));

        debug!(symbol = %symbol, ?per, ?pbr, "재무지표 수신");

        Ok(Fundamentals { per, pbr })
    }
}

/// JSON 포인터 경로에서 숫자 값을 추출합니다.
///
/// quoteSummary는 지표를 `{"raw": 35.11, "fmt": "35.11"}` 형태로
/// 감싸는 경우가 있어 `raw` 하위 경로를 먼저 시도합니다.
fn extract_decimal(value: &Value, pointer: &str) -> Option<Decimal> {
    let raw = value
        .pointer(&format!("{}/raw", pointer))
        .or_else(|| value.pointer(pointer))?;
    raw.as_f64().and_then(Decimal::from_f64)
}
