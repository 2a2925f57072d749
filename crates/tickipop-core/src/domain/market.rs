//! 실시간 시세, 검색 결과, 재무지표 타입.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 실시간 시세 데이터.
///
/// 폴링 주기마다 새로 조회되는 스냅샷입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveQuote {
    /// 현재가
    pub price: Decimal,
    /// 전일 종가 대비 변동
    pub change: Decimal,
    /// 전일 종가 대비 변동률 (%)
    pub change_percent: Decimal,
    /// 전일 종가
    pub previous_close: Decimal,
    /// 당일 시가
    pub open: Decimal,
    /// 당일 고가
    pub day_high: Decimal,
    /// 당일 저가
    pub day_low: Decimal,
    /// 당일 거래량
    pub volume: u64,
    /// 조회 시각
    pub as_of: DateTime<Utc>,
}

/// 심볼 검색 결과 한 건.
///
/// Yahoo Finance 검색 payload의 필드명을 그대로 따릅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuote {
    /// 티커 심볼
    pub symbol: String,
    /// 약식 종목명
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
    /// 정식 종목명
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longname: Option<String>,
    /// 거래소 코드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// 상품 유형 (EQUITY, ETF 등)
    #[serde(
        default,
        rename = "quoteType",
        skip_serializing_if = "Option::is_none"
    )]
    pub quote_type: Option<String>,
}

impl SearchQuote {
    /// 표시용 이름을 반환합니다 (정식명 → 약식명 → 심볼 순).
    pub fn display_name(&self) -> &str {
        self.longname
            .as_deref()
            .or(self.shortname.as_deref())
            .unwrap_or(&self.symbol)
    }
}

/// 재무지표 (PER/PBR).
///
/// 조회 실패 시 빈 값으로 유지되며 테이블 응답을 막지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    /// 주가수익비율
    pub per: Option<Decimal>,
    /// 주가순자산비율
    pub pbr: Option<Decimal>,
}

impl Fundamentals {
    /// 두 지표 모두 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.per.is_none() && self.pbr.is_none()
    }
}
