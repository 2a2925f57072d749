//! 주식 성과 대시보드 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # SPY 월별 수익률 테이블
//! tickipop table SPY
//!
//! # 삼성전자 낙폭 요약
//! tickipop drawdown 005930.KS
//!
//! # 심볼 검색 (일회성 / 대화형)
//! tickipop search apple
//! tickipop search --live
//!
//! # 실시간 시세 폴링 (5초 주기)
//! tickipop watch SPY
//!
//! # 언어/테마 변경
//! tickipop config --lang ko --theme dark
//! ```

use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::error;

use tickipop_core::{init_logging, AppConfig, Language, LogConfig, Theme};
use tickipop_data::MarketDataService;

mod commands;
mod poller;
mod render;
mod search_live;
mod state;

use state::ClientState;

#[derive(Parser)]
#[command(name = "tickipop")]
#[command(about = "주식 성과 대시보드 CLI - 월별 수익률, 낙폭, 실시간 시세", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 월별 수익률 테이블 조회
    Table {
        /// 티커 심볼 (생략 시 마지막 조회 심볼)
        symbol: Option<String>,
    },

    /// 낙폭 요약 조회
    Drawdown {
        /// 티커 심볼 (생략 시 마지막 조회 심볼)
        symbol: Option<String>,
    },

    /// 심볼 검색
    Search {
        /// 검색어 (일회성 검색)
        query: Option<String>,

        /// 대화형 디바운스 검색 모드
        #[arg(long, default_value = "false")]
        live: bool,
    },

    /// 실시간 시세 폴링
    Watch {
        /// 티커 심볼 (생략 시 마지막 조회 심볼)
        symbol: Option<String>,

        /// 폴링 주기 (초, 기본값은 설정 파일)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// 검색 기록 보기
    History,

    /// 언어/테마 설정
    Config {
        /// 표시 언어 (en | ko)
        #[arg(long)]
        lang: Option<String>,

        /// 표시 테마 (light | dark)
        #[arg(long)]
        theme: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // CLI는 기본적으로 경고 이상만 출력 (RUST_LOG로 조정 가능)
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    init_logging(LogConfig::new(log_level)).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let cli = Cli::parse();
    let config = AppConfig::load_or_default();

    let state_path = ClientState::default_path();
    let mut state = ClientState::load(&state_path);

    let service = MarketDataService::new(&config.data).map_err(|e| {
        error!(error = %e, "시장 데이터 서비스 생성 실패");
        anyhow::anyhow!(e.to_string())
    })?;

    let result = match cli.command {
        Commands::Table { symbol } => {
            commands::run_table(&service, &mut state, &config, symbol).await
        }
        Commands::Drawdown { symbol } => {
            commands::run_drawdown(&service, &state, symbol).await
        }
        Commands::Search { query, live } => {
            if live {
                commands::run_search_live(Arc::new(service), &state, &config).await
            } else {
                match query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
                    Some(query) => commands::run_search(&service, &state, query).await,
                    None => Err(anyhow::anyhow!(
                        "검색어를 입력하거나 --live 모드를 사용하세요"
                    )),
                }
            }
        }
        Commands::Watch { symbol, interval } => {
            commands::run_watch(Arc::new(service), &state, &config, symbol, interval).await
        }
        Commands::History => {
            commands::run_history(&state);
            Ok(())
        }
        Commands::Config { lang, theme } => apply_config(&mut state, lang, theme),
    };

    // 상태 저장은 명령 성공 여부와 무관하게 시도
    if let Err(e) = state.save(&state_path) {
        error!(path = %state_path.display(), error = %e, "상태 저장 실패");
    }

    result
}

/// 언어/테마 설정을 적용합니다.
fn apply_config(
    state: &mut ClientState,
    lang: Option<String>,
    theme: Option<String>,
) -> anyhow::Result<()> {
    if let Some(lang) = lang {
        state.language = lang
            .parse::<Language>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    if let Some(theme) = theme {
        state.theme = theme.parse::<Theme>().map_err(|e| anyhow::anyhow!(e))?;
    }

    println!("language={} theme={:?}", state.language, state.theme);
    Ok(())
}
