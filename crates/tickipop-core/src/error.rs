//! 대시보드 시스템의 에러 타입.

use thiserror::Error;

/// 핵심 도메인 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 유효하지 않은 심볼
    #[error("유효하지 않은 심볼: {0}")]
    InvalidSymbol(String),

    /// 유효하지 않은 조회 간격
    #[error("유효하지 않은 조회 간격: {0}")]
    InvalidInterval(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}
