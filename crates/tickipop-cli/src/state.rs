//! 클라이언트 로컬 상태.
//!
//! 마지막 조회 심볼, 검색 기록, 언어/테마, 마지막 수익률 테이블을
//! JSON 파일 하나에 보관합니다. 상태는 시작 시 한 번 로드되어
//! 명령 핸들러에 명시적으로 전달되고, 변경 시 저장됩니다.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use tickipop_core::{Language, ReturnTable, Theme};

/// 기본 상태 파일 경로.
const DEFAULT_STATE_PATH: &str = ".tickipop/state.json";

/// 검색 기록 한 건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 티커 심볼 (대문자)
    pub symbol: String,
    /// 표시용 이름
    pub name: String,
}

/// 재시작 후에도 유지되는 클라이언트 상태.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientState {
    /// 마지막으로 조회한 심볼
    pub last_symbol: Option<String>,
    /// 검색 기록 (최신순, 중복 제거, 개수 제한)
    pub search_history: Vec<HistoryEntry>,
    /// 표시 언어
    pub language: Language,
    /// 표시 테마
    pub theme: Theme,
    /// 마지막으로 받은 수익률 테이블
    pub last_table: Option<ReturnTable>,
}

impl ClientState {
    /// 상태 파일 경로를 결정합니다.
    ///
    /// `TICKIPOP_STATE_PATH` 환경변수가 있으면 그 값을 사용합니다.
    pub fn default_path() -> PathBuf {
        std::env::var("TICKIPOP_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_PATH))
    }

    /// 파일에서 상태를 로드합니다.
    ///
    /// 파일이 없거나 손상되었으면 기본 상태로 시작합니다.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => state,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "상태 파일 파싱 실패, 초기화");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// 상태를 파일에 저장합니다.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 검색 기록에 심볼을 추가합니다.
    ///
    /// 같은 심볼의 기존 항목은 제거되고 맨 앞에 다시 들어갑니다.
    /// 기록은 `max_items`개까지만 유지됩니다.
    pub fn record_search(&mut self, symbol: &str, name: &str, max_items: usize) {
        let upper = symbol.to_uppercase();
        self.search_history.retain(|entry| entry.symbol != upper);
        self.search_history.insert(
            0,
            HistoryEntry {
                symbol: upper,
                name: name.to_string(),
            },
        );
        self.search_history.truncate(max_items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_search_is_mru_and_deduplicated() {
        let mut state = ClientState::default();
        state.record_search("spy", "SPDR S&P 500", 10);
        state.record_search("AAPL", "Apple Inc.", 10);
        state.record_search("SPY", "SPDR S&P 500", 10);

        let symbols: Vec<&str> = state
            .search_history
            .iter()
            .map(|e| e.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["SPY", "AAPL"]);
    }

    #[test]
    fn test_record_search_is_bounded() {
        let mut state = ClientState::default();
        for i in 0..15 {
            state.record_search(&format!("SYM{}", i), "name", 10);
        }

        assert_eq!(state.search_history.len(), 10);
        // 가장 최근 항목이 맨 앞에 있다
        assert_eq!(state.search_history[0].symbol, "SYM14");
        // 가장 오래된 5개는 밀려났다
        assert!(!state.search_history.iter().any(|e| e.symbol == "SYM0"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "tickipop-state-test-{}.json",
            std::process::id()
        ));

        let mut state = ClientState::default();
        state.last_symbol = Some("SPY".to_string());
        state.language = Language::Ko;
        state.theme = Theme::Dark;
        state.record_search("SPY", "SPDR S&P 500", 10);

        state.save(&path).unwrap();
        let loaded = ClientState::load(&path);

        assert_eq!(loaded.last_symbol.as_deref(), Some("SPY"));
        assert_eq!(loaded.language, Language::Ko);
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.search_history.len(), 1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let state = ClientState::load(Path::new("/nonexistent/tickipop/state.json"));
        assert!(state.last_symbol.is_none());
        assert!(state.search_history.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_gives_default() {
        let path = std::env::temp_dir().join(format!(
            "tickipop-corrupt-test-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{not json").unwrap();

        let state = ClientState::load(&path);
        assert!(state.last_symbol.is_none());

        let _ = std::fs::remove_file(&path);
    }
}
