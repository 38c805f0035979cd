//! # Greeter
//!
//! Time-of-day greetings for a named recipient, optionally translated through the Google
//! Cloud Translation API. Translations are cached on disk so identical requests are only
//! billed once.
//!
//! # Module organization
//!
//! - `greeting` - greeting templates and clocks
//! - `greeter` - the greeting engine
//! - `translation` - cache, usage statistics and the translation provider
//! - `env` - typed environment variables
//! - `core` - top-level errors, logging and console output
//! - `web` - HTTP API (feature `web`)

pub mod core;
pub mod env;
pub mod greeter;
pub mod greeting;
pub mod translation;

#[cfg(feature = "web")]
pub mod web;

pub use crate::core::{GreeterError, GreeterResult};
pub use crate::greeter::Greeter;
pub use crate::greeting::{compose_greeting, Clock, FixedClock, SystemClock, DEFAULT_LANGUAGE};
pub use crate::translation::{GreeterConfig, SharedStats, Stats};
