//! Cancellable delayed callbacks for debouncing rapid input.
//!
//! - [`Debouncer`] - arm a timer per call; a newer call cancels the older one
//! - [`SearchInput`] - search box text paired with a debounced commit channel

mod search;

pub use search::SearchInput;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

type Callback<V> = Arc<dyn Fn(V) + Send + Sync>;

/// Delays a callback until calls stop arriving for `delay`.
///
/// Each [`call`](Debouncer::call) cancels the pending timer and arms a new
/// one, so only the last value within the window reaches the callback.
/// Timers run on the current tokio runtime.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use tabula_lib::debounce::Debouncer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let debouncer = Debouncer::new(Duration::from_millis(20), move |q: String| {
///     sink.lock().unwrap().push(q);
/// });
///
/// debouncer.call("a".to_string());
/// debouncer.call("al".to_string());
/// tokio::time::sleep(Duration::from_millis(60)).await;
/// assert_eq!(*seen.lock().unwrap(), vec!["al".to_string()]);
/// # }
/// ```
pub struct Debouncer<V> {
    delay: Duration,
    callback: Callback<V>,
    pending: Mutex<Option<CancellationToken>>,
}

impl<V: Send + 'static> Debouncer<V> {
    /// Creates a debouncer firing `callback` after `delay` of quiet.
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(V) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Returns the debounce window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value`, replacing any value still pending.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&self, value: V) {
        let token = CancellationToken::new();
        if let Some(previous) = self.swap_pending(Some(token.clone())) {
            previous.cancel();
        }

        let callback = self.callback.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    log::trace!("[debounce] Superseded before firing");
                }
                _ = tokio::time::sleep(delay) => {
                    if !token.is_cancelled() {
                        callback(value);
                    }
                }
            }
        });
    }

    /// Cancels the pending value, if any. Returns `true` if one was pending.
    pub fn cancel(&self) -> bool {
        match self.swap_pending(None) {
            Some(token) => {
                let was_pending = !token.is_cancelled();
                token.cancel();
                was_pending
            }
            None => false,
        }
    }

    fn swap_pending(&self, next: Option<CancellationToken>) -> Option<CancellationToken> {
        match self.pending.lock() {
            Ok(mut guard) => std::mem::replace(&mut *guard, next),
            Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), next),
        }
    }
}

impl<V> Drop for Debouncer<V> {
    fn drop(&mut self) {
        let pending = match self.pending.get_mut() {
            Ok(pending) => pending.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(token) = pending {
            token.cancel();
        }
    }
}

impl<V> std::fmt::Debug for Debouncer<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v| sink.lock().unwrap().push(v))
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_fires() {
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(500), callback);

        for v in 1..=5 {
            debouncer.call(v);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(500), callback);

        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(600)).await;
        debouncer.call(2);
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let (seen, callback) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(500), callback);

        debouncer.call(1);
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert!(seen.lock().unwrap().is_empty());
    }
}
