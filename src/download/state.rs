//! Run statistics.

use crate::download::fetch::Outcome;

/// Per-subscription counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubscriptionState {
    pub name: String,

    /// The feed itself could not be read.
    pub feed_failed: bool,

    pub downloaded: u64,
    pub logged_only: u64,
    pub already_logged: u64,
    pub failed: u64,
    /// Entries with enclosures of which none was wanted.
    pub nothing_wanted: u64,
    /// Items that could not be processed at all (bad name, folder or log I/O).
    pub errors: u64,
}

impl SubscriptionState {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Count the outcome of one item.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Downloaded { .. } => self.downloaded += 1,
            Outcome::LoggedOnly => self.logged_only += 1,
            Outcome::AlreadyLogged => self.already_logged += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn record_nothing_wanted(&mut self) {
        self.nothing_wanted += 1;
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn mark_feed_failed(&mut self) {
        self.feed_failed = true;
    }
}

/// Totals across all subscriptions of a run.
#[derive(Debug, Default)]
pub struct GlobalState {
    pub subscriptions: Vec<SubscriptionState>,
    pub feeds_failed: u64,
    pub downloaded: u64,
    pub logged_only: u64,
    pub already_logged: u64,
    pub failed: u64,
    pub nothing_wanted: u64,
    pub errors: u64,
}

impl GlobalState {
    /// Add a finished subscription's counters.
    pub fn add_subscription_stats(&mut self, state: SubscriptionState) {
        if state.feed_failed {
            self.feeds_failed += 1;
        }
        self.downloaded += state.downloaded;
        self.logged_only += state.logged_only;
        self.already_logged += state.already_logged;
        self.failed += state.failed;
        self.nothing_wanted += state.nothing_wanted;
        self.errors += state.errors;
        self.subscriptions.push(state);
    }

    /// Items that did not reach the log this run and will be retried.
    pub fn total_unfinished(&self) -> u64 {
        self.failed + self.errors
    }
}
