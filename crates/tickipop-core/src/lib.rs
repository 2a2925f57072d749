//! # Tickipop Core
//!
//! 주식 성과 대시보드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 가격 관측치 및 월별 수익률 테이블
//! - 실시간 시세 / 검색 결과 / 재무지표 구조체
//! - 심볼 및 조회 간격 정의
//! - 설정 관리
//! - 로깅 인프라
//! - 다국어 문자열 테이블

pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use i18n::*;
pub use logging::*;
pub use types::*;
