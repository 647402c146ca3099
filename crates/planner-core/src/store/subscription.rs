//! Subscription - 状態遷移の通知
//!
//! 各購読者は unbounded チャネルを持ちます。送信は同期で、取りこぼしも
//! 遅延による欠落（lag）もありません。適用された遷移ごとに 1 回だけ、
//! sequence 順に届きます。

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{ActionKind, AppState};

/// One applied action and the snapshot it produced.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Starts at 1 and increases by one per applied action.
    pub sequence: u64,
    pub action: ActionKind,
    pub state: Arc<AppState>,
}

/// Receiving half handed to a subscriber.
#[derive(Debug)]
pub struct Subscription {
    rx: UnboundedReceiver<Transition>,
}

impl Subscription {
    pub(crate) fn channel() -> (UnboundedSender<Transition>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Next pending transition without waiting.
    pub fn try_next(&mut self) -> Option<Transition> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next transition. `None` once the store is dropped.
    pub async fn next(&mut self) -> Option<Transition> {
        self.rx.recv().await
    }

    /// All transitions delivered so far.
    pub fn drain(&mut self) -> Vec<Transition> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}
