//! 티커 심볼 정의.
//!
//! 거래 가능한 상품을 식별하는 티커 문자열을 다룹니다.
//! Yahoo Finance 형식을 그대로 사용합니다:
//! - 미국 주식/ETF: "AAPL", "SPY"
//! - 한국 주식: "005930.KS" (코스피), "035720.KQ" (코스닥)
//! - 지수: "^GSPC", 환율: "EURUSD=X"

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 심볼 최대 길이.
const MAX_SYMBOL_LEN: usize = 16;

/// 검증된 티커 심볼.
///
/// 생성 시 대문자로 정규화되며, 빈 문자열이나 허용되지 않는
/// 문자가 포함된 입력은 거부됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// 입력 문자열을 검증하여 심볼을 생성합니다.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidSymbol("(빈 문자열)".to_string()));
        }
        if trimmed.len() > MAX_SYMBOL_LEN {
            return Err(CoreError::InvalidSymbol(trimmed.to_string()));
        }
        if !trimmed.chars().all(Self::is_allowed_char) {
            return Err(CoreError::InvalidSymbol(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// 심볼 문자열 참조를 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 한국 주식 심볼인지 확인합니다 (6자리 숫자 + .KS/.KQ 접미사).
    pub fn is_korean(&self) -> bool {
        let code = self
            .0
            .strip_suffix(".KS")
            .or_else(|| self.0.strip_suffix(".KQ"))
            .unwrap_or(&self.0);
        code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
    }

    fn is_allowed_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
