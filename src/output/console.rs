//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{}", success_line(message));
}

fn success_line(message: &str) -> String {
    format!("{} {}", style("OK").green().bold(), message)
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    println!(
        "{} {}",
        style("pa").cyan().bold(),
        style(format!("v{} podcast aggregator", env!("CARGO_PKG_VERSION"))).dim()
    );
}

/// Print configuration summary.
pub fn print_config_summary(
    subscriptions: &[String],
    mode: &str,
    mime_types: &[String],
    base_dir: &str,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Subscriptions: {}", subscriptions.join(", "));
    println!("  Mode: {}", mode);
    println!("  Media types: {}", mime_types.join(" > "));
    println!("  Directory: {}", base_dir);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_line() {
        ::console::set_colors_enabled(false);
        assert_eq!(
            success_line("Fetched ep1.mp4 to https://media.example.test/ep1.mp4"),
            "OK Fetched ep1.mp4 to https://media.example.test/ep1.mp4"
        );
    }
}
