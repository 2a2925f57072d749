//! 터미널 렌더링.
//!
//! 수익률 테이블과 시세를 색상 코드에 맞춰 출력합니다. 셀 색상은
//! [`tickipop_analytics::classify`]의 버킷을 따릅니다.

use crossterm::style::{Color, Stylize};
use rust_decimal::Decimal;

use tickipop_analytics::{classify, CellTone};
use tickipop_core::{
    DrawdownPoint, Fundamentals, Language, LiveQuote, ReturnTable, SearchQuote, Theme,
};

use crate::state::HistoryEntry;

/// "#RRGGBB" 색상 코드를 터미널 색상으로 변환합니다.
fn hex_to_color(hex: &str) -> Color {
    let parse = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    if hex.len() == 7 && hex.starts_with('#') {
        Color::Rgb {
            r: parse(1..3),
            g: parse(3..5),
            b: parse(5..7),
        }
    } else {
        Color::Reset
    }
}

/// 셀 버킷의 터미널 색상.
fn tone_color(tone: CellTone) -> Color {
    match tone {
        // 중립은 터미널 기본색 유지 (검정 고정 시 다크 터미널에서 안 보임)
        CellTone::Neutral => Color::Reset,
        other => hex_to_color(other.hex()),
    }
}

/// 테마별 헤더 색상.
fn header_color(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::DarkBlue,
        Theme::Dark => Color::Cyan,
    }
}

/// 수익률 셀 하나를 문자열로 포맷합니다.
fn format_cell(value: Option<Decimal>) -> String {
    match value {
        Some(pct) => format!("{:>8}", pct),
        None => format!("{:>8}", "-"),
    }
}

/// 월별 수익률 테이블을 출력합니다.
pub fn print_table(
    symbol: &str,
    table: &ReturnTable,
    fundamentals: &Fundamentals,
    lang: Language,
    theme: Theme,
) {
    if !table.has_any_return() {
        println!("{}: {}", symbol, lang.no_data_label());
        return;
    }

    println!("{}", symbol.bold());

    let mut header = format!("{:>6}", lang.year_label());
    for month in lang.month_names() {
        header.push_str(&format!("{:>8}", month));
    }
    println!("{}", header.with(header_color(theme)).bold());

    // 최근 연도가 위로 오도록 내림차순 출력
    let rows: Vec<_> = table.iter().collect();
    for (year, row) in rows.into_iter().rev() {
        print!("{:>6}", year.bold());
        for cell in row {
            let text = format_cell(*cell);
            print!("{}", text.with(tone_color(classify(*cell))));
        }
        println!();
    }

    if !fundamentals.is_empty() {
        let per = fundamentals
            .per
            .map(|d| d.round_dp(2).to_string())
            .unwrap_or_else(|| "-".to_string());
        let pbr = fundamentals
            .pbr
            .map(|d| d.round_dp(2).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("PER {}  PBR {}", per, pbr);
    }
}

/// 실시간 시세를 한 줄로 출력합니다.
pub fn print_quote(symbol: &str, quote: &LiveQuote, lang: Language) {
    let change_color = if quote.change >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    };
    let sign = if quote.change >= Decimal::ZERO { "+" } else { "" };

    let change_text = format!(
        "{}{} ({}{}%)",
        sign,
        quote.change.round_dp(2),
        sign,
        quote.change_percent.round_dp(2)
    );

    println!(
        "[{}] {} {}: {}  {}: {}",
        quote.as_of.format("%H:%M:%S"),
        symbol.bold(),
        lang.current_price_label(),
        quote.price.round_dp(2).to_string().bold(),
        lang.change_label(),
        change_text.with(change_color)
    );
}

/// 낙폭 요약을 출력합니다.
pub fn print_drawdown(symbol: &str, series: &[DrawdownPoint], lang: Language) {
    let Some(worst) = series.iter().min_by_key(|p| p.drawdown) else {
        println!("{}: {}", symbol, lang.no_data_label());
        return;
    };

    println!("{}", symbol.bold());
    println!(
        "{}: {}% ({})",
        lang.max_drawdown_label(),
        worst.drawdown.to_string().with(Color::Red),
        worst.date.format("%Y-%m-%d")
    );

    if let Some(last) = series.last() {
        println!(
            "{}: {}%  ({} points)",
            match lang {
                Language::En => "Current",
                Language::Ko => "현재",
            },
            last.drawdown,
            series.len()
        );
    }
}

/// 검색 결과 목록을 출력합니다.
pub fn print_search_results(quotes: &[SearchQuote], lang: Language) {
    if quotes.is_empty() {
        println!("{}", lang.no_data_label());
        return;
    }

    for quote in quotes {
        let mut line = format!("{:<10} {}", quote.symbol.clone().bold(), quote.display_name());
        if let Some(exchange) = &quote.exchange {
            line.push_str(&format!(" ({})", exchange));
        }
        println!("{}", line);
    }
}

/// 검색 기록을 출력합니다.
pub fn print_history(entries: &[HistoryEntry], lang: Language) {
    if entries.is_empty() {
        println!("{}", lang.no_data_label());
        return;
    }

    for (i, entry) in entries.iter().enumerate() {
        println!("{:>2}. {:<10} {}", i + 1, entry.symbol, entry.name);
    }
}
