use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// Gemini credential; `None` puts the chat endpoint in offline mode.
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    /// Override for the Gemini endpoint root.
    pub llm_base_url: Option<String>,
    pub llm_timeout_secs: u64,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            data_dir: var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            llm_api_key: non_empty("GOOGLE_GENAI_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY")),
            llm_model: var("LLM_MODEL").unwrap_or_else(|| "gemini-2.5-flash".to_string()),
            llm_base_url: non_empty("LLM_BASE_URL"),
            llm_timeout_secs: var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            cors_origins: var("CORS_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000,http://localhost:3001".to_string())
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
        })
    }
}
