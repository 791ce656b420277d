use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Base URL of the scrape backend (e.g. "http://localhost:5000").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// BCP 47 tag driving date and price formatting.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Optional path to a JSON array of job summaries used to seed the
    /// dashboard without a listing round trip.
    #[serde(default)]
    pub bootstrap_jobs: Option<String>,

    /// Request timeout for backend calls, in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_locale() -> String {
    "tr-TR".to_string()
}

fn default_http_timeout_secs() -> u64 {
    20
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
