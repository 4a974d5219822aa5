use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

/// Debounce a channel: forward an item only once the input has been quiescent
/// for the full window.
///
/// Every new item replaces the pending one and restarts the timer. When the
/// input closes with an item still pending, the pending item is dropped —
/// this mirrors timer cleanup on session teardown, where a half-typed query
/// must not fire after the screen is gone. Each call owns its own timer, so
/// two debounced channels with different windows never interfere.
pub fn debounce<T: Send + 'static>(
    mut input: mpsc::UnboundedReceiver<T>,
    window: Duration,
) -> mpsc::UnboundedReceiver<T> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(mut pending) = input.recv().await {
            loop {
                tokio::select! {
                    next = input.recv() => match next {
                        Some(item) => pending = item,
                        None => return,
                    },
                    _ = sleep(window) => {
                        if tx.send(pending).is_err() {
                            return;
                        }
                        break;
                    }
                }
            }
        }
    });
    rx
}
