use anyhow::{Context, Result};

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";

/// Application configuration loaded from environment variables.
/// Nothing is required: a missing API key degrades chat replies to a notice,
/// and missing catalog files load as empty catalogs.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_api_url: String,
    pub programs_path: String,
    pub colleges_path: String,
    pub port: u16,
    pub rust_log: String,
    /// Sessions untouched for this long are dropped when a new one is created.
    pub session_idle_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_model: env_or("GROQ_MODEL", DEFAULT_GROQ_MODEL),
            groq_api_url: env_or("GROQ_API_URL", DEFAULT_GROQ_API_URL),
            programs_path: env_or("PROGRAMS_PATH", "data/women_programs_kb.json"),
            colleges_path: env_or("COLLEGES_PATH", "data/colleges.json"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            session_idle_minutes: env_or("SESSION_IDLE_MINUTES", "120")
                .parse::<i64>()
                .ok()
                .filter(|m| *m > 0)
                .context("SESSION_IDLE_MINUTES must be a positive number of minutes")?,
        })
    }
}

/// Blank values count as unset so an empty `GROQ_API_KEY=` line in `.env`
/// behaves like a missing key.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
