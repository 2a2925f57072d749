//! 실시간 시세 폴링 태스크.
//!
//! 고정 주기로 콜백을 실행하는 취소 가능한 백그라운드 태스크입니다.
//! 명령 수명에 맞춰 명시적으로 시작/종료되며, 종료 후에는 더 이상
//! 틱이 실행되지 않습니다.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// 취소 가능한 주기 폴러.
pub struct QuotePoller {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl QuotePoller {
    /// 폴링을 시작합니다.
    ///
    /// 첫 틱은 즉시 실행되고 이후 `interval` 주기로 반복됩니다.
    /// 각 틱은 독립적이며, 틱 내부의 실패 처리는 콜백의 몫입니다.
    pub fn start<F, Fut>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let token = CancellationToken::new();
        let child = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        tick().await;
                    }
                    _ = child.cancelled() => {
                        debug!("폴링 태스크 종료");
                        break;
                    }
                }
            }
        });

        Self { token, handle }
    }

    /// 폴링을 중지하고 태스크가 끝날 때까지 기다립니다.
    pub async fn stop(self) {
        self.token.cancel();
        let _ = self.handle.await;
    }
}
