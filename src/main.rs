use std::process::ExitCode;

use clap::Parser;

use greeter::core::{init_logging, print_error_message, print_info_message};
use greeter::{Greeter, GreeterConfig, Stats, SystemClock};

/// Time-of-day greeting, optionally translated
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about, long_about = None)]
struct Cli {
    /// Who to greet
    #[arg(required_unless_present_any = ["server", "env_docs"])]
    recipient: Option<String>,

    /// ISO 639-1 target language code, e.g. en, es, ja
    #[arg(required_unless_present_any = ["server", "env_docs"])]
    language: Option<String>,

    /// Run the HTTP API instead of printing a greeting
    #[arg(long)]
    server: bool,

    /// Port to run the server on [default: $PORT or 8080]
    #[arg(long, requires = "server")]
    port: Option<u16>,

    /// Print the supported environment variables as a markdown table
    #[arg(long, conflicts_with = "server")]
    env_docs: bool,
}

fn main() -> ExitCode {
    greeter::env::load_dotenv();
    let cli = Cli::parse();
    init_logging();

    if cli.env_docs {
        print_info_message(&greeter::env::generate_env_docs());
        return ExitCode::SUCCESS;
    }

    let config = match GreeterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error_message(&format!("Failed to create greeter: {}", e));
            return ExitCode::FAILURE;
        }
    };
    let greeter = match Greeter::from_config(&config) {
        Ok(greeter) => greeter,
        Err(e) => {
            print_error_message(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    if cli.server {
        return serve(greeter, cli.port);
    }

    // clap guarantees both positionals outside server mode
    let (Some(recipient), Some(language)) = (cli.recipient, cli.language) else {
        return ExitCode::FAILURE;
    };

    let mut stats = Stats::default();
    match greeter.greet(&recipient, &language, &SystemClock, &mut stats) {
        Ok(greeting) => {
            print_info_message(&greeting);
            print_stats(&stats);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error_message(&format!("Error greeting in {}: {}", language, e));
            ExitCode::FAILURE
        }
    }
}

/// Prints usage statistics when the provider was called
fn print_stats(stats: &Stats) {
    if stats.api_calls == 0 {
        return;
    }

    print_info_message("\nTranslation Statistics:");
    print_info_message(&format!("From cache: {}", stats.from_cache()));
    print_info_message(&format!("Characters Translated: {}", stats.chars_sent));
    print_info_message(&format!("Estimated Cost: ${:.5}", stats.cost_estimate));
}

#[cfg(feature = "web")]
fn serve(greeter: Greeter, port: Option<u16>) -> ExitCode {
    use ::greeter::web::{self, WebConfig};
    use std::sync::Arc;

    let mut config = match WebConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error_message(&e.to_string());
            return ExitCode::FAILURE;
        }
    };
    if let Some(port) = port {
        config.port = port;
    }

    let greeter = Arc::new(greeter);
    match web::run(config, Arc::clone(&greeter)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error_message(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "web"))]
fn serve(_greeter: Greeter, _port: Option<u16>) -> ExitCode {
    print_error_message("Error: Web feature not enabled. Please compile with --features web");
    ExitCode::FAILURE
}
