//! Web server entry point

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use greeter::core::{init_logging, print_error_message};
use greeter::web::{self, WebConfig};
use greeter::{Greeter, GreeterConfig, GreeterResult};

/// Greeter web server
#[derive(Parser, Debug)]
#[command(name = "greeter-web", version, about, long_about = None)]
struct Args {
    /// Bind address
    #[arg(short, long, env = "GREETER_WEB_BIND_ADDRESS", default_value = "127.0.0.1")]
    bind: String,

    /// Port number
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Static frontend directory
    #[arg(long, env = "GREETER_WEB_STATIC_DIR", default_value = "frontend/dist")]
    static_dir: String,
}

fn main() -> ExitCode {
    greeter::env::load_dotenv();
    let args = Args::parse();
    init_logging();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error_message(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> GreeterResult<()> {
    let config = GreeterConfig::from_env()?;
    let greeter = Arc::new(Greeter::from_config(&config)?);

    let web_config = WebConfig {
        bind_addr: args.bind,
        port: args.port,
        static_dir: if args.static_dir.trim().is_empty() {
            None
        } else {
            Some(args.static_dir)
        },
    };

    web::run(web_config, Arc::clone(&greeter))
}
