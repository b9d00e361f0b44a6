//! Runtime configuration structures and loaders.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use shiritori_core::GameConfig;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Countdown resolution; one tick removes one second from the turn clock.
    pub tick_interval: Duration,
    /// How long the most recent score change stays visible in the view.
    pub score_notice_ttl: Duration,
    /// Spawn the countdown worker. Tests drive ticks by hand when disabled.
    pub enable_timer: bool,
    pub lookup: LookupConfig,
    pub logging: LoggingConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            command_buffer_size: 32,
            event_buffer_size: 100,
            tick_interval: Duration::from_secs(1),
            score_notice_ttl: Duration::from_secs(3),
            enable_timer: true,
            lookup: LookupConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Loads a `.env` file if present, then reads the environment.
    pub fn load() -> Self {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            tracing::warn!(target: "runtime::config", error = %err, "Ignoring unreadable .env file");
        }
        Self::from_env()
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SHIRITORI_TURN_SECONDS` - Turn length in seconds (default: 30)
    /// - `SHIRITORI_MIN_WORD_LENGTH` - Shortest accepted word (default: 4)
    /// - `SHIRITORI_WINNING_SCORE` - Score that ends the game (default: 20)
    /// - `SHIRITORI_WINNING_MARGIN` - Lead that ends the game (default: 10)
    /// - `SHIRITORI_PLAYER1_NAME` / `SHIRITORI_PLAYER2_NAME`
    /// - `SHIRITORI_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `SHIRITORI_EVENT_BUFFER` - Per-topic event capacity (default: 100)
    /// - `SHIRITORI_TIMER` - Run the countdown worker (default: true)
    /// - `SHIRITORI_DICTIONARY_URL` - Dictionary endpoint base URL
    /// - `SHIRITORI_LOOKUP_TIMEOUT_MS` - Per-attempt timeout (default: 10000)
    /// - `SHIRITORI_LOOKUP_RETRIES` - Retries after the first attempt (default: 2)
    /// - `SHIRITORI_LOOKUP_RETRY_DELAY_MS` - Delay between attempts (default: 1000)
    /// - `SHIRITORI_LOG_DIR` - Write logs to `<dir>/shiritori.log`
    /// - `SHIRITORI_LOG_FILTER` - Filter directives (default: `info`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seconds) = read_env::<u32>("SHIRITORI_TURN_SECONDS") {
            config.game.turn_seconds = seconds.max(1);
        }
        if let Some(length) = read_env::<usize>("SHIRITORI_MIN_WORD_LENGTH") {
            config.game.min_word_length = length.max(1);
        }
        if let Some(score) = read_env::<u32>("SHIRITORI_WINNING_SCORE") {
            config.game.winning_score = score;
        }
        if let Some(margin) = read_env::<u32>("SHIRITORI_WINNING_MARGIN") {
            config.game.winning_margin = margin;
        }
        if let Ok(name) = env::var("SHIRITORI_PLAYER1_NAME") {
            config.game.player_names[0] = name;
        }
        if let Ok(name) = env::var("SHIRITORI_PLAYER2_NAME") {
            config.game.player_names[1] = name;
        }

        if let Some(capacity) = read_env::<usize>("SHIRITORI_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SHIRITORI_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(enabled) = read_env_bool("SHIRITORI_TIMER") {
            config.enable_timer = enabled;
        }

        config.lookup = LookupConfig::from_env();
        config.logging = LoggingConfig::from_env();
        config
    }
}

/// Dictionary lookup settings.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    pub attempt_timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl LookupConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.dictionaryapi.dev/api/v2/entries/en";

    fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("SHIRITORI_DICTIONARY_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(ms) = read_env::<u64>("SHIRITORI_LOOKUP_TIMEOUT_MS") {
            config.attempt_timeout = Duration::from_millis(ms.max(1));
        }
        if let Some(retries) = read_env::<u32>("SHIRITORI_LOOKUP_RETRIES") {
            config.max_retries = retries;
        }
        if let Some(ms) = read_env::<u64>("SHIRITORI_LOOKUP_RETRY_DELAY_MS") {
            config.retry_delay = Duration::from_millis(ms);
        }
        config
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            attempt_timeout: Duration::from_secs(10),
            max_retries: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives, overridden by `RUST_LOG` when set.
    pub filter: String,
    /// Log to a file in this directory; stderr otherwise.
    pub directory: Option<PathBuf>,
    pub file_name: String,
}

impl LoggingConfig {
    fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(filter) = env::var("SHIRITORI_LOG_FILTER") {
            config.filter = filter;
        }
        if let Ok(dir) = env::var("SHIRITORI_LOG_DIR") {
            config.directory = Some(PathBuf::from(dir));
        }
        config
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
            file_name: "shiritori.log".to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_rules() {
        let config = RuntimeConfig::default();
        assert_eq!(config.game.turn_seconds, 30);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.score_notice_ttl, Duration::from_secs(3));
        assert_eq!(config.lookup.max_retries, 2);
        assert_eq!(config.lookup.retry_delay, Duration::from_secs(1));
        assert_eq!(config.lookup.attempt_timeout, Duration::from_secs(10));
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        // SAFETY: test-only variable name not read elsewhere.
        unsafe { env::set_var("SHIRITORI_TEST_BOOL_FLAG", "Off") };
        assert_eq!(read_env_bool("SHIRITORI_TEST_BOOL_FLAG"), Some(false));
        unsafe { env::set_var("SHIRITORI_TEST_BOOL_FLAG", "maybe") };
        assert_eq!(read_env_bool("SHIRITORI_TEST_BOOL_FLAG"), None);
        unsafe { env::remove_var("SHIRITORI_TEST_BOOL_FLAG") };
    }

    #[test]
    fn from_env_reads_overrides_and_clamps() {
        let vars = [
            ("SHIRITORI_TURN_SECONDS", "0"),
            ("SHIRITORI_MIN_WORD_LENGTH", "0"),
            ("SHIRITORI_WINNING_SCORE", "15"),
            ("SHIRITORI_PLAYER2_NAME", "Bob"),
            ("SHIRITORI_TIMER", "no"),
            ("SHIRITORI_DICTIONARY_URL", "http://localhost:9000/"),
            ("SHIRITORI_LOOKUP_RETRIES", "5"),
            ("SHIRITORI_LOOKUP_RETRY_DELAY_MS", "250"),
            ("SHIRITORI_EVENT_BUFFER", "not-a-number"),
            ("SHIRITORI_LOG_DIR", "/tmp/shiritori-logs"),
        ];
        // SAFETY: no other test reads these variables.
        for (key, value) in vars {
            unsafe { env::set_var(key, value) };
        }
        let config = RuntimeConfig::from_env();
        for (key, _) in vars {
            unsafe { env::remove_var(key) };
        }

        assert_eq!(config.game.turn_seconds, 1);
        assert_eq!(config.game.min_word_length, 1);
        assert_eq!(config.game.winning_score, 15);
        assert_eq!(config.game.winning_margin, 10);
        assert_eq!(config.game.player_names[1], "Bob");
        assert!(!config.enable_timer);
        assert_eq!(config.event_buffer_size, 100);
        assert_eq!(config.lookup.base_url, "http://localhost:9000");
        assert_eq!(config.lookup.max_retries, 5);
        assert_eq!(config.lookup.retry_delay, Duration::from_millis(250));
        assert_eq!(config.lookup.attempt_timeout, Duration::from_secs(10));
        assert_eq!(
            config.logging.directory,
            Some(PathBuf::from("/tmp/shiritori-logs"))
        );
    }
}
