//! Cycling loading message shown while the summary is pending.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Messages shown in turn while a report is generated.
pub const LOADING_MESSAGES: [&str; 5] = [
    "正在检索时间的流向...",
    "解析生命独有的旋律...",
    "在众生轨迹中寻找你的坐标...",
    "编织属于你的岁月篇章...",
    "感悟那些被时光标记的瞬间...",
];

/// Default time each message stays on screen.
pub const DEFAULT_LOADING_INTERVAL: Duration = Duration::from_millis(2000);

/// Background task emitting [`LOADING_MESSAGES`] in a cycle.
///
/// The task is aborted when the ticker is dropped, so every exit path of
/// the caller (success, error, cancellation, unwind) stops the cycle.
#[derive(Debug)]
pub struct LoadingTicker {
    handle: JoinHandle<()>,
}

impl LoadingTicker {
    /// Starts emitting immediately, then once per `interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(interval: Duration, mut emit: F) -> Self
    where
        F: FnMut(&'static str) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticks = time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for message in LOADING_MESSAGES.iter().cycle() {
                ticks.tick().await;
                emit(*message);
            }
        });
        Self { handle }
    }

    /// Stops the cycle now instead of at drop.
    pub fn stop(self) {}
}

impl Drop for LoadingTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
