use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::env::{self, ConfigError, EnvVar};
use crate::translation::TranslationError;

/// Errors visible to users of the CLI and the web server
#[derive(Error, Debug)]
pub enum GreeterError {
    /// Missing or invalid configuration; the greeter cannot be built
    #[error("Failed to create greeter: {0}")]
    Config(#[from] ConfigError),

    /// The translation provider could not produce a greeting
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// The web server could not start or stopped with an error
    #[error("Server error: {0}")]
    Server(#[from] io::Error),
}

pub type GreeterResult<T> = Result<T, GreeterError>;

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `GREETER_LOG_LEVEL`. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = env::core::LogLevel::get().unwrap_or_else(|e| {
            eprintln!("{}; using 'info'", e);
            "info".to_string()
        });
        EnvFilter::new(level)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(use_color())
        .try_init();
}

fn use_color() -> bool {
    !env::core::NoColor::get_or_default(false) && atty::is(atty::Stream::Stderr)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if use_color() {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
