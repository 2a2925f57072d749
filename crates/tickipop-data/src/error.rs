//! 데이터 계층 오류 타입.

use thiserror::Error;

/// 데이터 조회 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 벤더에 해당 심볼의 데이터가 없음
    #[error("데이터 없음: {0}")]
    NotFound(String),

    /// 네트워크/벤더 오류
    #[error("상류 데이터 소스 오류: {0}")]
    Upstream(String),

    /// 응답 파싱 오류
    #[error("응답 파싱 오류: {0}")]
    Parse(String),

    /// 잘못된 요청 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

impl DataError {
    /// 벤더에 데이터가 없는 경우인지 확인합니다.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::NotFound(_))
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DataError::Parse(err.to_string())
        } else {
            DataError::Upstream(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

impl From<tickipop_core::CoreError> for DataError {
    fn from(err: tickipop_core::CoreError) -> Self {
        DataError::InvalidInput(err.to_string())
    }
}

/// 데이터 작업을 위한 Result 타입.
pub type Result<T> = std::result::Result<T, DataError>;
