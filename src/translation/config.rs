//! Greeter configuration

use std::fmt;
use std::path::PathBuf;

use crate::env::{cache, google, ConfigResult, EnvVar};

/// Settings needed to build a [`Greeter`](crate::greeter::Greeter)
#[derive(Clone)]
pub struct GreeterConfig {
    pub project_id: String,
    pub access_token: String,
    pub api_url: String,
    pub cache_file: PathBuf,
}

impl GreeterConfig {
    /// Reads the configuration from the environment. Binaries load `.env` beforehand.
    ///
    /// Fails when the project id or the access token is missing.
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            project_id: google::ProjectId::get()?,
            access_token: google::AccessToken::get()?,
            api_url: google::ApiUrl::get()?,
            cache_file: cache::File::get()?,
        })
    }
}

impl fmt::Debug for GreeterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreeterConfig")
            .field("project_id", &self.project_id)
            .field("access_token", &"[configured]")
            .field("api_url", &self.api_url)
            .field("cache_file", &self.cache_file)
            .finish()
    }
}
