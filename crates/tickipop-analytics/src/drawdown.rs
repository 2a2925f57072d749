//! 낙폭(drawdown) 계산.
//!
//! 수익률 시퀀스를 기준값 100에서 복리로 누적한 합성 자산 곡선을
//! 만들고, 러닝 피크 대비 하락률을 구합니다. 출력은 항상 0 이하입니다.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use tickipop_core::{DrawdownPoint, PricePoint};

const BASE: Decimal = dec!(100);

/// 수익률(%) 시퀀스에서 낙폭(%) 시퀀스를 계산합니다.
///
/// 복리 값 `v`와 피크 `p`를 100으로 시작해, 각 수익률 `r`마다
/// `v *= 1 + r/100`, `p = max(p, v)`를 갱신하고 `(v - p) / p * 100`을
/// 내보냅니다. 출력 길이는 입력 길이와 같으며, 빈 입력은 빈 출력입니다.
pub fn drawdown_from_returns(returns: &[Decimal]) -> Vec<Decimal> {
    let mut value = BASE;
    let mut peak = BASE;

    returns
        .iter()
        .map(|&r| {
            value *= Decimal::ONE + r / BASE;
            if value > peak {
                peak = value;
            }
            ((value - peak) / peak * BASE)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        })
        .collect()
}

/// 가격 시계열에서 날짜가 붙은 낙폭 시계열을 계산합니다.
///
/// 종가 간 변동률을 먼저 구한 뒤 [`drawdown_from_returns`]를 적용합니다.
/// 첫 관측치는 기준 수익률이 없으므로 n개 관측치에서 n-1개 포인트가
/// 나오며, 각 낙폭은 뒤쪽 관측치의 시각과 짝지어집니다.
/// 관측치가 2개 미만이면 빈 시퀀스를 반환합니다.
pub fn drawdown_series(points: &[PricePoint]) -> Vec<DrawdownPoint> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut returns = Vec::with_capacity(points.len() - 1);
    let mut dates = Vec::with_capacity(points.len() - 1);

    for pair in points.windows(2) {
        if pair[0].close.is_zero() {
            continue;
        }
        returns.push((pair[1].close - pair[0].close) / pair[0].close * BASE);
        dates.push(pair[1].timestamp);
    }

    drawdown_from_returns(&returns)
        .into_iter()
        .zip(dates)
        .map(|(drawdown, date)| DrawdownPoint { date, drawdown })
        .collect()
}
