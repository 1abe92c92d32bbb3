//! Debounced search box state.

use std::time::Duration;

use tokio::sync::mpsc;

use super::Debouncer;

/// A search box: the text shown while typing plus a debounced commit.
///
/// [`input`](SearchInput::input) updates [`text`](SearchInput::text) at once
/// and schedules the value; once typing pauses for the debounce window the
/// value arrives on the receiver returned by [`new`](SearchInput::new).
/// Feed it into [`Table::apply_global_filter`](crate::table::Table::apply_global_filter).
///
/// # Example
///
/// ```ignore
/// let (mut search, mut commits) = SearchInput::new(config.search_debounce);
///
/// // on keystroke
/// search.input("ali");
/// table.set_search_input(search.text());
///
/// // in the event loop
/// while let Some(query) = commits.recv().await {
///     table.apply_global_filter(query);
/// }
/// ```
#[derive(Debug)]
pub struct SearchInput {
    text: String,
    debouncer: Debouncer<String>,
}

impl SearchInput {
    /// Creates a search input and the receiver of committed queries.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(delay, move |query: String| {
            if tx.send(query).is_err() {
                log::debug!("[search] Commit receiver dropped");
            }
        });
        let input = Self {
            text: String::new(),
            debouncer,
        };
        (input, rx)
    }

    /// Returns the text currently shown in the box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Handles a change of the box's text.
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.debouncer.call(self.text.clone());
    }

    /// Clears the box and drops any pending commit.
    ///
    /// Nothing is sent; the caller resets the table's query directly.
    pub fn clear(&mut self) {
        self.text.clear();
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_commits_after_quiet_period() {
        let (mut search, mut commits) = SearchInput::new(Duration::from_millis(500));

        for text in ["a", "al", "ali"] {
            search.input(text);
            assert_eq!(search.text(), text);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert!(commits.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(commits.recv().await.as_deref(), Some("ali"));
        assert!(commits.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_pending_commit() {
        let (mut search, mut commits) = SearchInput::new(Duration::from_millis(500));

        search.input("doha");
        search.clear();
        assert_eq!(search.text(), "");
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert!(commits.try_recv().is_err());
    }
}
