//! 다국어 문자열 테이블.
//!
//! 테이블 헤더와 터미널 UI 라벨에 필요한 최소한의 문자열을 제공합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 표시 언어.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 영어
    #[default]
    En,
    /// 한국어
    Ko,
}

impl Language {
    /// 월 이름 테이블을 반환합니다 (인덱스 0 = 1월).
    pub fn month_names(&self) -> [&'static str; 12] {
        match self {
            Language::En => [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ],
            Language::Ko => [
                "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월",
                "12월",
            ],
        }
    }

    /// 연도 열 헤더.
    pub fn year_label(&self) -> &'static str {
        match self {
            Language::En => "Year",
            Language::Ko => "연도",
        }
    }

    /// 데이터 없음 표시.
    pub fn no_data_label(&self) -> &'static str {
        match self {
            Language::En => "No data available",
            Language::Ko => "데이터 없음",
        }
    }

    /// 현재가 라벨.
    pub fn current_price_label(&self) -> &'static str {
        match self {
            Language::En => "Current Price",
            Language::Ko => "현재가",
        }
    }

    /// 등락 라벨.
    pub fn change_label(&self) -> &'static str {
        match self {
            Language::En => "Change",
            Language::Ko => "등락",
        }
    }

    /// 최대 낙폭 라벨.
    pub fn max_drawdown_label(&self) -> &'static str {
        match self {
            Language::En => "Maximum Drawdown",
            Language::Ko => "최대 낙폭",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ko => write!(f, "ko"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ko" => Ok(Language::Ko),
            other => Err(format!("Unknown language: {}", other)),
        }
    }
}

/// 표시 테마.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// 라이트 모드
    #[default]
    Light,
    /// 다크 모드
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}
