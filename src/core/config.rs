use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot

/// Telegram bot token
/// Read once at startup from the BOT_TOKEN environment variable.
/// Empty when unset; startup aborts in that case.
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| env::var("BOT_TOKEN").unwrap_or_default());

/// LanguageTool check endpoint used for autocorrection
/// Read from LANGUAGETOOL_URL, defaults to the public instance.
pub static LANGUAGETOOL_URL: Lazy<String> = Lazy::new(|| {
    env::var("LANGUAGETOOL_URL").unwrap_or_else(|_| "https://api.languagetool.org/v2/check".to_string())
});

/// Ordered LibreTranslate mirror base URLs
/// Read from LIBRETRANSLATE_URLS as a comma-separated list. The first entry
/// also serves the /detect fallback; all entries are tried in order by the
/// secondary translation provider.
pub static LIBRETRANSLATE_URLS: Lazy<Vec<String>> = Lazy::new(|| {
    let raw = env::var("LIBRETRANSLATE_URLS")
        .unwrap_or_else(|_| "https://libretranslate.de,https://translate.astian.org".to_string());
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
});

/// MyMemory translation API base URL
/// Read from MYMEMORY_URL environment variable.
pub static MYMEMORY_URL: Lazy<String> = Lazy::new(|| {
    env::var("MYMEMORY_URL").unwrap_or_else(|_| "https://api.mymemory.translated.net".to_string())
});

/// Log file path
/// Read from TOLMACH_LOG_FILE environment variable.
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("TOLMACH_LOG_FILE").unwrap_or_else(|_| "tolmach.log".to_string()));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Timeout for LanguageTool check requests (in seconds)
    /// The public instance can be slow on long texts.
    pub const AUTOCORRECT_TIMEOUT_SECS: u64 = 20;

    /// Timeout for the remote language-detection call (in seconds)
    pub const DETECT_TIMEOUT_SECS: u64 = 8;

    /// Timeout for each translation provider call (in seconds)
    pub const TRANSLATE_TIMEOUT_SECS: u64 = 12;

    /// Timeout for Telegram Bot API requests (in seconds)
    pub const TELEGRAM_TIMEOUT_SECS: u64 = 30;

    /// Autocorrect request timeout duration
    pub fn autocorrect_timeout() -> Duration {
        Duration::from_secs(AUTOCORRECT_TIMEOUT_SECS)
    }

    /// Detection request timeout duration
    pub fn detect_timeout() -> Duration {
        Duration::from_secs(DETECT_TIMEOUT_SECS)
    }

    /// Translation request timeout duration
    pub fn translate_timeout() -> Duration {
        Duration::from_secs(TRANSLATE_TIMEOUT_SECS)
    }

    /// Telegram request timeout duration
    pub fn telegram_timeout() -> Duration {
        Duration::from_secs(TELEGRAM_TIMEOUT_SECS)
    }
}
