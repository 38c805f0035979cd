//! Time-of-day greeting text

use chrono::{Local, Timelike};

/// Language the greeting templates are written in. Requests for it skip translation.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Source of the current hour, so greetings can be produced deterministically in tests.
pub trait Clock: Send + Sync {
    /// Hour of the day, `0..24`
    fn hour(&self) -> u32;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Clock pinned to a single hour
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    hour: u32,
}

impl FixedClock {
    pub const fn at_hour(hour: u32) -> Self {
        Self { hour }
    }
}

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.hour
    }
}

/// Salutation for an hour of the day.
///
/// `[0,12)` morning, `[12,17)` afternoon, `[17,22)` evening, anything later is night.
pub fn salutation(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        17..=21 => "Good evening",
        _ => "Good night",
    }
}

/// Builds the untranslated greeting, e.g. `Good evening, Ada!`.
pub fn compose_greeting(recipient: &str, hour: u32) -> String {
    format!("{}, {}!", salutation(hour), recipient)
}
