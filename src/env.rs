//! Typed environment variable access
//!
//! Every setting the greeter reads from the environment is declared here once, with its
//! name, default, description and validation rules.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// A missing or invalid environment variable
#[derive(Debug, Clone, Error)]
#[error("Environment variable '{variable}': {message}")]
pub struct ConfigError {
    pub variable: String,
    pub message: String,
}

impl ConfigError {
    pub fn new(variable: &str, message: impl Into<String>) -> Self {
        Self {
            variable: variable.to_string(),
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment variable accessor
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> ConfigResult<T>;

    /// Reads and parses the variable. Unset and blank values fall back to `DEFAULT`.
    fn get() -> ConfigResult<T> {
        match env::var(Self::NAME) {
            Ok(value) if !value.trim().is_empty() => Self::parse(&value),
            _ => Self::DEFAULT.ok_or_else(|| {
                ConfigError::new(Self::NAME, "Required environment variable not set")
            }),
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// Loads a `.env` file from the working directory, if there is one.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Could not load .env file: {}", e),
    }
}

/// Core settings
pub mod core {
    use super::*;

    /// Log level
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "GREETER_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> ConfigResult<String> {
            match env::var(Self::NAME) {
                Ok(value) if !value.trim().is_empty() => Self::parse(&value),
                _ => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> ConfigResult<String> {
            let level = value.trim().to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(level),
                _ => Err(ConfigError::new(
                    Self::NAME,
                    format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                )),
            }
        }
    }

    /// Disable colored output
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> ConfigResult<bool> {
            Ok(!value.is_empty())
        }
    }
}

/// Google Cloud Translation settings
pub mod google {
    use super::*;

    /// Project the translation requests are billed to
    pub struct ProjectId;
    impl EnvVar<String> for ProjectId {
        const NAME: &'static str = "GOOGLE_CLOUD_PROJECT_ID";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Google Cloud project identifier (required)";

        fn parse(value: &str) -> ConfigResult<String> {
            let id = value.trim();
            if id.contains('/') || id.contains(char::is_whitespace) {
                return Err(ConfigError::new(
                    Self::NAME,
                    "Project id must not contain '/' or whitespace",
                ));
            }
            Ok(id.to_string())
        }
    }

    /// OAuth bearer token for the translation API
    pub struct AccessToken;
    impl EnvVar<String> for AccessToken {
        const NAME: &'static str = "GOOGLE_CLOUD_ACCESS_TOKEN";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str =
            "OAuth access token for the Cloud Translation API, e.g. from `gcloud auth print-access-token` (required)";

        fn parse(value: &str) -> ConfigResult<String> {
            Ok(value.trim().to_string())
        }
    }

    /// API base URL
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "GREETER_TRANSLATION_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Cloud Translation API base URL";

        fn get() -> ConfigResult<String> {
            match env::var(Self::NAME) {
                Ok(value) if !value.trim().is_empty() => Self::parse(&value),
                _ => Ok("https://translation.googleapis.com".to_string()),
            }
        }

        fn parse(value: &str) -> ConfigResult<String> {
            let url = value.trim().trim_end_matches('/');
            if url.starts_with("http://") || url.starts_with("https://") {
                Ok(url.to_string())
            } else {
                Err(ConfigError::new(
                    Self::NAME,
                    "API URL must start with http:// or https://",
                ))
            }
        }
    }
}

/// Translation cache settings
pub mod cache {
    use super::*;

    /// Snapshot file
    pub struct File;
    impl EnvVar<PathBuf> for File {
        const NAME: &'static str = "GREETER_CACHE_FILE";
        const DEFAULT: Option<PathBuf> = None;
        const DESCRIPTION: &'static str = "Path of the translation cache snapshot";

        fn get() -> ConfigResult<PathBuf> {
            match env::var(Self::NAME) {
                Ok(value) if !value.trim().is_empty() => Self::parse(&value),
                _ => Ok(PathBuf::from("translation_cache.json")),
            }
        }

        fn parse(value: &str) -> ConfigResult<PathBuf> {
            Ok(PathBuf::from(value.trim()))
        }
    }
}

/// Web server settings
pub mod web {
    use super::*;

    /// Bind address
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "GREETER_WEB_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Web server bind address";

        fn get() -> ConfigResult<String> {
            match env::var(Self::NAME) {
                Ok(value) if !value.trim().is_empty() => Self::parse(&value),
                _ => Ok("127.0.0.1".to_string()),
            }
        }

        fn parse(value: &str) -> ConfigResult<String> {
            Ok(value.trim().to_string())
        }
    }

    /// Port
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "PORT";
        const DEFAULT: Option<u16> = Some(8080);
        const DESCRIPTION: &'static str = "Web server port";

        fn parse(value: &str) -> ConfigResult<u16> {
            match value.trim().parse::<u16>() {
                Ok(0) | Err(_) => Err(ConfigError::new(
                    Self::NAME,
                    "Must be a valid port number (1-65535)",
                )),
                Ok(port) => Ok(port),
            }
        }
    }

    /// Static frontend directory
    pub struct StaticDir;
    impl EnvVar<String> for StaticDir {
        const NAME: &'static str = "GREETER_WEB_STATIC_DIR";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Directory of the static frontend served at /";

        fn get() -> ConfigResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("frontend/dist".to_string()),
            }
        }

        fn parse(value: &str) -> ConfigResult<String> {
            Ok(value.trim().to_string())
        }
    }
}

fn doc_line<T, V: EnvVar<T>>(docs: &mut String, default: &str) {
    docs.push_str(&format!(
        "| `{}` | {} | {} |\n",
        V::NAME,
        V::DESCRIPTION,
        default
    ));
}

/// Renders a markdown table of every variable the greeter reads.
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");
    docs.push_str("| Variable | Description | Default |\n");
    docs.push_str("|---|---|---|\n");

    doc_line::<String, google::ProjectId>(&mut docs, "required");
    doc_line::<String, google::AccessToken>(&mut docs, "required");
    doc_line::<String, google::ApiUrl>(&mut docs, "`https://translation.googleapis.com`");
    doc_line::<PathBuf, cache::File>(&mut docs, "`translation_cache.json`");
    doc_line::<String, core::LogLevel>(&mut docs, "`info`");
    doc_line::<bool, core::NoColor>(&mut docs, "unset");
    doc_line::<String, web::BindAddress>(&mut docs, "`127.0.0.1`");
    doc_line::<u16, web::Port>(&mut docs, "`8080`");
    doc_line::<String, web::StaticDir>(&mut docs, "`frontend/dist`");

    docs
}
