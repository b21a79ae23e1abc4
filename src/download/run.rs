//! One aggregation pass over the subscription list.

use std::path::Path;

use chrono::NaiveDate;

use crate::config::{Config, Subscription};
use crate::download::fetch::Fetcher;
use crate::download::state::{GlobalState, SubscriptionState};
use crate::error::Result;
use crate::media::{select_enclosure, SelectedItem, Selection};
use crate::net::{FeedSource, Transfer};

/// Process every selected subscription once.
///
/// Failures are contained: a feed that cannot be read skips that
/// subscription, and an item that cannot be processed skips that item. Only
/// a configuration without a base directory fails the pass.
pub async fn run_pass<F, T>(
    config: &Config,
    subscriptions: &[Subscription],
    feeds: &F,
    fetcher: &Fetcher<T>,
    today: NaiveDate,
) -> Result<GlobalState>
where
    F: FeedSource,
    T: Transfer,
{
    let base_dir = config.base_dir()?;
    let mut global = GlobalState::default();

    for subscription in subscriptions
        .iter()
        .filter(|s| s.is_selected(&config.names))
    {
        tracing::info!("Processing subscription: {}", subscription.name);
        let state =
            process_subscription(config, base_dir, subscription, feeds, fetcher, today).await;
        global.add_subscription_stats(state);
    }

    Ok(global)
}

async fn process_subscription<F, T>(
    config: &Config,
    base_dir: &Path,
    subscription: &Subscription,
    feeds: &F,
    fetcher: &Fetcher<T>,
    today: NaiveDate,
) -> SubscriptionState
where
    F: FeedSource,
    T: Transfer,
{
    let mut state = SubscriptionState::new(&subscription.name);

    let entries = match feeds.entries(&subscription.url).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(
                "Failed to read feed {} ({}): {}",
                subscription.name,
                subscription.url,
                e
            );
            state.mark_feed_failed();
            return state;
        }
    };

    for entry in entries.iter().filter(|e| !e.enclosures.is_empty()) {
        let attachment = match select_enclosure(&entry.enclosures, &config.mime_types) {
            Selection::Selected(attachment) => attachment,
            Selection::NoneQualify { considered } => {
                for rejected in &considered {
                    tracing::debug!(
                        "{}: Rejected type {} in {}",
                        subscription.name,
                        rejected.mime_type,
                        rejected.url
                    );
                }
                state.record_nothing_wanted();
                continue;
            }
        };

        let item = match SelectedItem::new(
            &subscription.name,
            attachment,
            base_dir,
            &config.link_base,
            today,
        ) {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(
                    "{}: skipping entry {}: {}",
                    subscription.name,
                    entry.title.as_deref().unwrap_or("(untitled)"),
                    e
                );
                state.record_error();
                continue;
            }
        };

        match fetcher.process(&item, config.mode.is_catch_up()).await {
            Ok(outcome) => state.record(&outcome),
            Err(e) => {
                tracing::error!("Failed to process {}: {}", item.file_name, e);
                state.record_error();
            }
        }
    }

    state
}
