//! Statistics reporting.

use console::style;

use crate::download::{GlobalState, SubscriptionState};

/// Print statistics for a single subscription.
pub fn print_subscription_stats(state: &SubscriptionState) {
    println!();
    println!("{}", style(format!("Statistics for {}:", state.name)).bold());
    if state.feed_failed {
        println!("  {}", style("Feed could not be read").red());
        return;
    }
    println!("  Downloaded:     {}", state.downloaded);
    println!("  Logged only:    {}", state.logged_only);
    println!("  Already logged: {}", state.already_logged);
    println!("  Nothing wanted: {}", state.nothing_wanted);
    if state.failed + state.errors > 0 {
        println!("  Failed:         {}", style(state.failed + state.errors).red());
    }
}

/// Print global statistics across all subscriptions.
pub fn print_global_stats(state: &GlobalState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Subscriptions processed: {}", state.subscriptions.len());
    if state.feeds_failed > 0 {
        println!("  Feeds failed:            {}", style(state.feeds_failed).red());
    }
    println!("  Downloaded:     {}", style(state.downloaded).green());
    println!("  Logged only:    {}", state.logged_only);
    println!("  Already logged: {}", state.already_logged);
    if state.total_unfinished() > 0 {
        println!(
            "  Failed:         {} (retried next run)",
            style(state.total_unfinished()).red()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
