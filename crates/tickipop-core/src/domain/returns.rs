//! 월별 수익률 테이블.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 연도별 행의 월 칸 수.
pub const MONTHS_PER_YEAR: usize = 12;

/// 연도 → 12개 월별 수익률(%) 매핑.
///
/// 각 행은 항상 길이 12이며 인덱스 0이 1월입니다.
/// `None`은 해당 월의 데이터가 없음을 뜻하며, 0%와는 다릅니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnTable {
    rows: BTreeMap<String, Vec<Option<Decimal>>>,
}

impl ReturnTable {
    /// 빈 테이블을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 연도 행이 없으면 12칸 `None`으로 초기화한 뒤 반환합니다.
    pub fn ensure_year(&mut self, year: i32) -> &mut Vec<Option<Decimal>> {
        self.rows
            .entry(year.to_string())
            .or_insert_with(|| vec![None; MONTHS_PER_YEAR])
    }

    /// 특정 연/월 칸에 수익률을 기록합니다.
    ///
    /// # Panics
    ///
    /// `month_index`가 12 이상이면 패닉합니다.
    pub fn set(&mut self, year: i32, month_index: usize, pct: Decimal) {
        assert!(month_index < MONTHS_PER_YEAR, "월 인덱스 범위 초과: {}", month_index);
        self.ensure_year(year)[month_index] = Some(pct);
    }

    /// 특정 연/월 칸의 수익률을 조회합니다.
    pub fn get(&self, year: i32, month_index: usize) -> Option<Decimal> {
        self.rows
            .get(&year.to_string())
            .and_then(|row| row.get(month_index))
            .copied()
            .flatten()
    }

    /// 연도 키를 오름차순으로 순회합니다.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// (연도, 행) 쌍을 오름차순으로 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<Decimal>])> {
        self.rows.iter().map(|(y, row)| (y.as_str(), row.as_slice()))
    }

    /// 연도 행 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 행이 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 계산된 수익률이 하나라도 있는지 확인합니다.
    pub fn has_any_return(&self) -> bool {
        self.rows.values().any(|row| row.iter().any(Option::is_some))
    }
}
