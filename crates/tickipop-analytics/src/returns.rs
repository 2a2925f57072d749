//! 월별 수익률 집계.
//!
//! 오름차순으로 정렬된 가격 관측치를 (연도, 월) 버킷으로 묶고
//! 연속한 두 관측치 사이의 종가 변동률을 계산합니다.
//!
//! ## 집계 규칙
//!
//! - 수익률은 뒤쪽 관측치의 (연도, 월) 칸에 기록됩니다.
//! - 12월 → 1월 전환도 일반적인 연속 쌍으로 처리됩니다.
//! - 시리즈의 첫 관측치는 기준 수익률이 없어 `None`으로 남습니다.
//! - 같은 (연도, 월) 버킷에 여러 관측치가 있으면 나중 값이 남습니다.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use tickipop_core::{PricePoint, ReturnTable};

const HUNDRED: Decimal = dec!(100);

/// 백분율을 소수 둘째 자리로 반올림합니다 (0.5는 0에서 먼 쪽으로).
fn round_pct(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// 두 종가 사이의 변동률(%)을 계산합니다.
fn pct_change(prev_close: Decimal, close: Decimal) -> Option<Decimal> {
    if prev_close.is_zero() {
        return None;
    }
    Some((close - prev_close) / prev_close * HUNDRED)
}

/// 월별 수익률 테이블을 계산합니다.
///
/// 입력은 기간당 하나의 관측치를 담아 날짜 오름차순이어야 합니다.
/// 빈 입력은 빈 테이블을 반환하며, 관측치가 하나뿐이면 해당 연도
/// 행만 만들어지고 수익률은 계산되지 않습니다.
///
/// # 예시
///
/// 종가 `[100, 110, 99]` (연속 3개월) → `[None, 10.00, -10.00]`
pub fn monthly_return_table(points: &[PricePoint]) -> ReturnTable {
    let mut table = ReturnTable::new();

    for (i, point) in points.iter().enumerate() {
        table.ensure_year(point.year());

        if i == 0 {
            continue;
        }

        if let Some(pct) = pct_change(points[i - 1].close, point.close) {
            table.set(point.year(), point.month_index(), round_pct(pct));
        }
    }

    table
}

/// 당월 부분 수익률을 계산합니다.
///
/// 이번 달 일봉 시계열에서 첫 거래일 시가 대비 마지막 거래일
/// 종가의 변동률(%)을 반환합니다. 일봉이 2개 미만이면 `None`입니다.
pub fn intra_month_return(daily: &[PricePoint]) -> Option<Decimal> {
    if daily.len() < 2 {
        return None;
    }

    let first = daily.first()?;
    let last = daily.last()?;
    if first.open.is_zero() {
        return None;
    }

    Some(round_pct((last.close - first.open) / first.open * HUNDRED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use tickipop_core::MONTHS_PER_YEAR;

    fn monthly_point(year: i32, month: u32, close: Decimal) -> PricePoint {
        PricePoint::new(
            Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap(),
            close,
            close,
        )
    }

    #[test]
    fn test_spec_vector() {
        let points = vec![
            monthly_point(2024, 1, dec!(100)),
            monthly_point(2024, 2, dec!(110)),
            monthly_point(2024, 3, dec!(99)),
        ];

        let table = monthly_return_table(&points);

        assert_eq!(table.get(2024, 0), None);
        assert_eq!(table.get(2024, 1), Some(dec!(10.00)));
        assert_eq!(table.get(2024, 2), Some(dec!(-10.00)));
    }

    #[test]
    fn test_year_boundary_is_a_normal_pair() {
        let points = vec![
            monthly_point(2023, 12, dec!(200)),
            monthly_point(2024, 1, dec!(210)),
        ];

        let table = monthly_return_table(&points);

        assert_eq!(table.get(2023, 11), None);
        assert_eq!(table.get(2024, 0), Some(dec!(5.00)));
    }

    #[test]
    fn test_month_gap_uses_previous_observation() {
        // 3월 데이터가 빠져도 2월 종가 대비 4월 수익률은 계산된다
        let points = vec![
            monthly_point(2024, 2, dec!(100)),
            monthly_point(2024, 4, dec!(120)),
        ];

        let table = monthly_return_table(&points);

        assert_eq!(table.get(2024, 2), None);
        assert_eq!(table.get(2024, 3), Some(dec!(20.00)));
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let table = monthly_return_table(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_single_point_has_no_returns() {
        let table = monthly_return_table(&[monthly_point(2024, 5, dec!(100))]);
        assert_eq!(table.len(), 1);
        assert!(!table.has_any_return());
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 100 → 100.555: +0.555% → 0.56으로 반올림
        let points = vec![
            monthly_point(2024, 1, dec!(100)),
            monthly_point(2024, 2, dec!(100.555)),
        ];

        let table = monthly_return_table(&points);
        assert_eq!(table.get(2024, 1), Some(dec!(0.56)));
    }

    #[test]
    fn test_zero_prev_close_is_skipped() {
        let points = vec![
            monthly_point(2024, 1, dec!(0)),
            monthly_point(2024, 2, dec!(100)),
        ];

        let table = monthly_return_table(&points);
        assert_eq!(table.get(2024, 1), None);
    }

    #[test]
    fn test_intra_month_return() {
        let daily = vec![
            PricePoint::new(
                Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap(),
                dec!(100),
                dec!(101),
            ),
            PricePoint::new(
                Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap(),
                dec!(101),
                dec!(103),
            ),
        ];

        // (103 - 100) / 100 * 100 = 3.00
        assert_eq!(intra_month_return(&daily), Some(dec!(3.00)));
    }

    #[test]
    fn test_intra_month_return_needs_two_bars() {
        assert_eq!(intra_month_return(&[]), None);
        assert_eq!(
            intra_month_return(&[monthly_point(2024, 6, dec!(100))]),
            None
        );
    }

    proptest! {
        #[test]
        fn prop_rows_are_always_twelve_wide(closes in prop::collection::vec(1u32..100_000, 0..120)) {
            let points: Vec<PricePoint> = closes
                .iter()
                .enumerate()
                .map(|(i, close)| {
                    let year = 2000 + (i / 12) as i32;
                    let month = (i % 12) as u32 + 1;
                    monthly_point(year, month, Decimal::from(*close))
                })
                .collect();

            let table = monthly_return_table(&points);
            for (_, row) in table.iter() {
                prop_assert_eq!(row.len(), MONTHS_PER_YEAR);
            }
        }
    }
}
