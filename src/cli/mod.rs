//! Command-line interface for cloudtrust.

pub mod commands;
pub mod output;
pub mod types;

pub use commands::CommandContext;
pub use types::{Cli, Commands};

/// Print a command error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
