//! 과거 데이터 조회 간격.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 과거 데이터 조회 간격.
///
/// 월별 수익률 테이블은 월봉을, 낙폭 계산과 당월 부분 수익률은
/// 일봉을 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryInterval {
    /// 일봉
    Daily,
    /// 월봉
    Monthly,
}

impl HistoryInterval {
    /// Yahoo Finance API 간격 문자열로 변환합니다.
    pub fn as_yahoo_str(&self) -> &'static str {
        match self {
            Self::Daily => "1d",
            Self::Monthly => "1mo",
        }
    }
}

impl fmt::Display for HistoryInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_yahoo_str())
    }
}

impl FromStr for HistoryInterval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1d" | "d" | "daily" => Ok(Self::Daily),
            "1mo" | "m" | "monthly" => Ok(Self::Monthly),
            other => Err(CoreError::InvalidInterval(other.to_string())),
        }
    }
}
