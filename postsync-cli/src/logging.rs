//! Log setup and failure reporting for the binary.

use std::io::IsTerminal;

use colored::Colorize;

/// Install the stderr subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print the run's single failure message, causes included. Under a CI action
/// runner this also emits an `::error::` workflow command so the failure is
/// annotated.
pub fn report_failure(err: &anyhow::Error) {
    let message = format!("{err:#}");
    eprintln!("{} {message}", "error:".red().bold());
    if running_in_actions() {
        println!("::error::{}", escape_workflow_data(&message));
    }
}

fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Percent-encode the characters workflow commands treat specially.
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
