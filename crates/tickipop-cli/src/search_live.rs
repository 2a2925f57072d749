//! 디바운스 검색.
//!
//! 입력이 잦은 대화형 검색에서 마지막 입력 후 일정 시간이 지나야
//! 실제 조회를 실행합니다. 제출마다 세대 번호를 올리고, 조회 전후로
//! 세대가 바뀌었으면 결과를 버립니다. 늦게 도착한 응답이 더 새로운
//! 결과를 덮어쓰는 일은 없습니다.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use tickipop_core::SearchQuote;
use tickipop_data::DataError;

/// 디바운스 검색 결과 이벤트.
#[derive(Debug)]
pub struct SearchEvent {
    /// 결과를 만들어낸 검색어
    pub query: String,
    /// 조회 결과
    pub outcome: Result<Vec<SearchQuote>, DataError>,
}

/// 세대 번호 기반 디바운스 검색.
pub struct DebouncedSearch<F> {
    debounce: Duration,
    generation: Arc<AtomicU64>,
    fetch: Arc<F>,
    tx: mpsc::UnboundedSender<SearchEvent>,
}

impl<F, Fut> DebouncedSearch<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<SearchQuote>, DataError>> + Send + 'static,
{
    /// 디바운서와 결과 수신 채널을 생성합니다.
    pub fn new(debounce: Duration, fetch: F) -> (Self, mpsc::UnboundedReceiver<SearchEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                debounce,
                generation: Arc::new(AtomicU64::new(0)),
                fetch: Arc::new(fetch),
                tx,
            },
            rx,
        )
    }

    /// 새 검색어를 제출합니다.
    ///
    /// 대기 시간 안에 다른 제출이 들어오면 이번 제출은 조회 없이
    /// 취소됩니다. 조회가 끝난 뒤에도 세대가 바뀌었으면 결과를
    /// 버립니다.
    pub fn submit(&self, query: String) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.generation);
        let fetch = Arc::clone(&self.fetch);
        let tx = self.tx.clone();
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            if current.load(Ordering::SeqCst) != generation {
                debug!(query = %query, "대기 중 새 입력으로 취소");
                return;
            }

            let outcome = fetch(query.clone()).await;

            if current.load(Ordering::SeqCst) != generation {
                debug!(query = %query, "늦게 도착한 응답 폐기");
                return;
            }

            let _ = tx.send(SearchEvent { query, outcome });
        });
    }
}
