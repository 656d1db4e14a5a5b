use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_WIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// MediaWiki `api.php` endpoint
    pub wiki_api_url: String,
    /// Wikimedia asks API clients to identify themselves
    pub wiki_user_agent: String,
    pub wiki_timeout: Duration,
    /// Pause between page extract requests
    pub page_delay: Duration,
    /// Pause between `cmcontinue` requests when listing a category
    pub continue_delay: Duration,
    /// Number of words sent to the word cloud
    pub top_n: usize,
    /// Comma separated words added to the stopword list
    pub extra_stopwords: Vec<String>,
    /// Seconds until one more `/analyze` request is allowed per client
    pub rate_limit_replenish_secs: u64,
    /// Requests a client may make back to back before being throttled
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            wiki_api_url: DEFAULT_WIKI_API_URL.to_string(),
            wiki_user_agent: concat!("wikicloud/", env!("CARGO_PKG_VERSION")).to_string(),
            wiki_timeout: Duration::from_secs(30),
            page_delay: Duration::from_millis(500),
            continue_delay: Duration::from_millis(1000),
            top_n: 100,
            extra_stopwords: Vec::new(),
            rate_limit_replenish_secs: 1,
            rate_limit_burst: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            port: parse_var("PORT").unwrap_or(defaults.port),
            wiki_api_url: env::var("WIKI_API_URL").unwrap_or(defaults.wiki_api_url),
            wiki_user_agent: env::var("WIKI_USER_AGENT").unwrap_or(defaults.wiki_user_agent),
            wiki_timeout: parse_var("WIKI_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.wiki_timeout),
            page_delay: parse_var("PAGE_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.page_delay),
            continue_delay: parse_var("CONTINUE_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.continue_delay),
            top_n: parse_var("TOP_N").unwrap_or(defaults.top_n),
            extra_stopwords: env::var("EXTRA_STOPWORDS")
                .map(|v| split_word_list(&v))
                .unwrap_or_default(),
            rate_limit_replenish_secs: parse_var("RATE_LIMIT_REPLENISH_SECS")
                .unwrap_or(defaults.rate_limit_replenish_secs),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST").unwrap_or(defaults.rate_limit_burst),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}

fn split_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
