//! 설정 관리.
//!
//! 애플리케이션 설정을 정의하고 로드합니다. 설정 파일이 없어도
//! 모든 섹션이 기본값으로 동작합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 데이터 조회 설정
    pub data: DataConfig,
    /// 실시간 시세 폴링 설정
    pub polling: PollingConfig,
    /// 검색 설정
    pub search: SearchConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// 데이터 조회 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// 월봉 조회 범위 (Yahoo range 문자열: "10y", "max" 등)
    pub monthly_range: String,
    /// 낙폭 계산용 일봉 조회 범위
    pub drawdown_range: String,
    /// 과거 데이터 캐시 TTL (초)
    pub history_cache_ttl_secs: u64,
    /// 외부 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            monthly_range: "max".to_string(),
            drawdown_range: "10y".to_string(),
            history_cache_ttl_secs: 300,
            request_timeout_secs: 30,
        }
    }
}

/// 실시간 시세 폴링 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollingConfig {
    /// 시세 재조회 주기 (초)
    pub quote_interval_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            quote_interval_secs: 5,
        }
    }
}

/// 검색 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 디바운스 대기 시간 (밀리초)
    pub debounce_ms: u64,
    /// 검색 기록 최대 보관 수
    pub history_max_items: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            history_max_items: 10,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드 (예: TICKIPOP__SERVER__PORT=8080)
            .add_source(
                config::Environment::with_prefix("TICKIPOP")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드하고, 파일이 없으면 기본값을 사용합니다.
    pub fn load_or_default() -> Self {
        match Self::load("config/default.toml") {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("설정 파일 로드 실패, 기본값 사용: {}", e);
                Self::default()
            }
        }
    }
}
