//! 수익률 색상 분류.
//!
//! 월별 수익률 값을 다섯 단계 색상 버킷으로 나눕니다.
//! 임계값은 ±5%로 고정되어 있습니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 강한 상승/하락 임계값 (%).
const STRONG_THRESHOLD: Decimal = dec!(5);

/// 수익률 칸의 색상 버킷.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    /// +5% 초과
    StrongGain,
    /// 0% 초과 ~ +5% 이하
    Gain,
    /// 0% 또는 데이터 없음
    Neutral,
    /// -5% 이상 ~ 0% 미만
    Loss,
    /// -5% 미만
    StrongLoss,
}

impl CellTone {
    /// 테이블 렌더링용 색상 코드를 반환합니다.
    pub fn hex(&self) -> &'static str {
        match self {
            CellTone::StrongGain => "#32CD32",
            CellTone::Gain => "#008000",
            CellTone::Neutral => "#000000",
            CellTone::Loss => "#FF6347",
            CellTone::StrongLoss => "#FF0000",
        }
    }

    /// 버킷 이름을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellTone::StrongGain => "strong_gain",
            CellTone::Gain => "gain",
            CellTone::Neutral => "neutral",
            CellTone::Loss => "loss",
            CellTone::StrongLoss => "strong_loss",
        }
    }
}

/// 수익률 값을 색상 버킷으로 분류합니다.
///
/// `None`(데이터 없음)과 정확히 0%는 모두 [`CellTone::Neutral`]입니다.
pub fn classify(value: Option<Decimal>) -> CellTone {
    let Some(pct) = value else {
        return CellTone::Neutral;
    };

    if pct > STRONG_THRESHOLD {
        CellTone::StrongGain
    } else if pct > Decimal::ZERO {
        CellTone::Gain
    } else if pct < -STRONG_THRESHOLD {
        CellTone::StrongLoss
    } else if pct < Decimal::ZERO {
        CellTone::Loss
    } else {
        CellTone::Neutral
    }
}
