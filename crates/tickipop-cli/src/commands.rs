//! CLI 명령 핸들러.
//!
//! 각 핸들러는 서비스와 클라이언트 상태를 명시적으로 주입받습니다.
//! 상태 저장은 호출 측(main)이 담당합니다.

use anyhow::{bail, Context};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use tickipop_core::{AppConfig, Symbol};
use tickipop_data::MarketDataService;

use crate::poller::QuotePoller;
use crate::render;
use crate::search_live::DebouncedSearch;
use crate::state::ClientState;

/// 인자 또는 마지막 조회 심볼에서 심볼을 결정합니다.
fn resolve_symbol(arg: Option<String>, state: &ClientState) -> anyhow::Result<Symbol> {
    let raw = match arg.or_else(|| state.last_symbol.clone()) {
        Some(raw) => raw,
        None => bail!("심볼을 지정하세요 (예: tickipop table SPY)"),
    };
    Symbol::parse(&raw).with_context(|| format!("심볼 형식이 올바르지 않습니다: {}", raw))
}

/// 월별 수익률 테이블 조회 및 출력.
pub async fn run_table(
    service: &MarketDataService,
    state: &mut ClientState,
    config: &AppConfig,
    symbol_arg: Option<String>,
) -> anyhow::Result<()> {
    let symbol = resolve_symbol(symbol_arg, state)?;

    let overview = service.monthly_table(&symbol).await?;

    render::print_table(
        overview.symbol.as_str(),
        &overview.table,
        &overview.fundamentals,
        state.language,
        state.theme,
    );

    // 조회 성공 시 상태 갱신
    state.last_symbol = Some(symbol.to_string());
    state.record_search(
        symbol.as_str(),
        symbol.as_str(),
        config.search.history_max_items,
    );
    state.last_table = Some(overview.table);

    Ok(())
}

/// 낙폭 요약 조회 및 출력.
pub async fn run_drawdown(
    service: &MarketDataService,
    state: &ClientState,
    symbol_arg: Option<String>,
) -> anyhow::Result<()> {
    let symbol = resolve_symbol(symbol_arg, state)?;

    let series = service.drawdown(&symbol).await?;
    render::print_drawdown(symbol.as_str(), &series, state.language);

    Ok(())
}

/// 일회성 심볼 검색.
pub async fn run_search(
    service: &MarketDataService,
    state: &ClientState,
    query: &str,
) -> anyhow::Result<()> {
    let quotes = service.search(query).await?;
    render::print_search_results(&quotes, state.language);
    Ok(())
}

/// 대화형 디바운스 검색.
///
/// 표준 입력에서 한 줄씩 검색어를 읽어 디바운서에 제출하고,
/// 최신 세대의 결과만 출력합니다. EOF(Ctrl+D)로 종료합니다.
pub async fn run_search_live(
    service: Arc<MarketDataService>,
    state: &ClientState,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let debounce = Duration::from_millis(config.search.debounce_ms);
    let fetch_service = Arc::clone(&service);

    let (search, mut events) = DebouncedSearch::new(debounce, move |query: String| {
        let service = Arc::clone(&fetch_service);
        async move { service.search(&query).await }
    });

    println!("검색어를 입력하세요 (Ctrl+D로 종료):");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(input) => {
                        let input = input.trim();
                        if !input.is_empty() {
                            search.submit(input.to_string());
                        }
                    }
                    // EOF
                    None => break,
                }
            }
            Some(event) = events.recv() => {
                match event.outcome {
                    Ok(quotes) => {
                        println!("--- {}", event.query);
                        render::print_search_results(&quotes, state.language);
                    }
                    Err(e) => warn!(query = %event.query, error = %e, "검색 실패"),
                }
            }
        }
    }

    Ok(())
}

/// 실시간 시세 폴링.
///
/// 고정 주기로 시세를 재조회해 출력합니다. 실패한 틱은 경고만 남기고
/// 이전 값이 화면에 남습니다. Ctrl+C로 중지합니다.
pub async fn run_watch(
    service: Arc<MarketDataService>,
    state: &ClientState,
    config: &AppConfig,
    symbol_arg: Option<String>,
    interval_override: Option<u64>,
) -> anyhow::Result<()> {
    let symbol = resolve_symbol(symbol_arg, state)?;
    let interval_secs = interval_override.unwrap_or(config.polling.quote_interval_secs);
    let language = state.language;

    println!(
        "{} 시세를 {}초마다 갱신합니다. Ctrl+C로 중지하세요.",
        symbol, interval_secs
    );

    let tick_symbol = symbol.clone();
    let poller = QuotePoller::start(Duration::from_secs(interval_secs), move || {
        let service = Arc::clone(&service);
        let symbol = tick_symbol.clone();
        async move {
            match service.quote(&symbol).await {
                Ok(quote) => render::print_quote(symbol.as_str(), &quote, language),
                Err(e) => warn!(symbol = %symbol, error = %e, "시세 조회 실패, 이전 값 유지"),
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    poller.stop().await;

    Ok(())
}

/// 검색 기록 출력.
pub fn run_history(state: &ClientState) {
    render::print_history(&state.search_history, state.language);
}
