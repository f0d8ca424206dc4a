//! Startup banner and solve-summary console output.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use crate::config::Config;

pub fn print_banner(config: &Config) {
    let banner = r#"
  __     ______  ____
  \ \   / /  _ \|  _ \
   \ \ / /| |_) | |_) |
    \ V / |  _ <|  __/
     \_/  |_| \_\_|
"#;
    println!("{}", banner.cyan().bold());
    println!(
        "  {} {}\n",
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black(),
        "Vehicle Routing Engine".bright_cyan()
    );
    println!(
        "{} {} {} listening on port ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Engine]".bright_cyan(),
        config.port.to_string().bright_yellow()
    );
}

/// Logs a one-line solve summary to the console, independent of the
/// structured `tracing` events emitted by the engine facade.
pub fn print_solve_summary(compute_id: i64, elapsed_seconds: f64, route_count: usize, unserved_count: usize) {
    println!(
        "{} {} {} compute_id ({}) solved in ({:.3}s): routes ({}), unserved ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Engine]".bright_cyan(),
        compute_id.to_string().bright_yellow(),
        elapsed_seconds,
        route_count.to_formatted_string(&Locale::en).bright_magenta().bold(),
        unserved_count.to_formatted_string(&Locale::en).white()
    );
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{}.{:03}", d.as_secs(), d.subsec_millis()))
        .unwrap_or_else(|_| "0.000".to_string())
}
