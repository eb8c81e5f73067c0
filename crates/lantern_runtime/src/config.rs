//! Runtime settings, from defaults, the environment, and the command line.

use std::env;
use std::str::FromStr;

/// Environment variable holding the prompt.
pub const ENV_PROMPT: &str = "LANTERN_PROMPT";
/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "LANTERN_LOG";
/// Environment variable holding ticks per command.
pub const ENV_TICKS_PER_COMMAND: &str = "LANTERN_TICKS_PER_COMMAND";
/// Environment variable that suppresses the banner when set to `1` or `true`.
pub const ENV_NO_BANNER: &str = "LANTERN_NO_BANNER";
/// Environment variable holding the world seed.
pub const ENV_SEED: &str = "LANTERN_SEED";

/// How a session runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Prompt shown before each line.
    pub prompt: String,
    /// Print the welcome banner.
    pub banner: bool,
    /// `tracing` filter directive, e.g. `lantern_parser=debug`.
    pub log_filter: String,
    /// Ticks that pass after every command.
    pub ticks_per_command: u64,
    /// Drop stop-words like "the" before parsing.
    pub stop_words: bool,
    /// Seed for the demo world.
    pub seed: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: true,
            log_filter: "warn".to_string(),
            ticks_per_command: 1,
            stop_words: true,
            seed: 0,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by any `LANTERN_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns.
    ///
    /// Values that fail to parse are ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(prompt) = lookup(ENV_PROMPT) {
            config.prompt = prompt;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(ticks) = parse_value(lookup(ENV_TICKS_PER_COMMAND)) {
            config.ticks_per_command = ticks;
        }
        if let Some(seed) = parse_value(lookup(ENV_SEED)) {
            config.seed = seed;
        }
        if lookup(ENV_NO_BANNER).is_some_and(|v| is_truthy(&v)) {
            config.banner = false;
        }
        config
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Turns the banner off.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.banner = false;
        self
    }

    /// Sets the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Sets how many ticks each command takes.
    #[must_use]
    pub fn with_ticks_per_command(mut self, ticks: u64) -> Self {
        self.ticks_per_command = ticks;
        self
    }

    /// Keeps stop-words in the input.
    #[must_use]
    pub fn keep_stop_words(mut self) -> Self {
        self.stop_words = false;
        self
    }

    /// Sets the world seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

fn parse_value<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw?.trim().parse().ok()
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
