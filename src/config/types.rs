use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub bulk: BulkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Settings for the hosted text-classification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Answer `{mood: "Error", confidence: 0}` with 200 instead of a 502 when the provider fails.
    #[serde(default = "default_degrade_on_error")]
    pub degrade_on_error: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkConfig {
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
}

impl Config {
    /// Applies `HUGGINGFACE_API_TOKEN`, `HUGGINGFACE_API_URL`, `HOST` and `PORT`
    /// as resolved by `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("HUGGINGFACE_API_TOKEN").filter(|t| !t.is_empty()) {
            self.inference.api_token = Some(token);
        }
        if let Some(url) = lookup("HUGGINGFACE_API_URL").filter(|u| !u.is_empty()) {
            self.inference.api_url = url;
        }
        if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let bulk = &self.bulk;
        let in_range = |v: f64| (-1.0..=1.0).contains(&v);

        if !in_range(bulk.positive_threshold) || !in_range(bulk.negative_threshold) {
            return Err(Error::config("Bulk thresholds must lie within [-1, 1]"));
        }
        if bulk.negative_threshold > bulk.positive_threshold {
            return Err(Error::config(format!(
                "negative_threshold ({}) must not exceed positive_threshold ({})",
                bulk.negative_threshold, bulk.positive_threshold
            )));
        }
        if self.inference.timeout_secs == 0 {
            return Err(Error::config("inference.timeout_secs must be greater than zero"));
        }
        if self.inference.api_url.is_empty() {
            return Err(Error::config("inference.api_url must not be empty"));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            timeout_secs: default_timeout_secs(),
            degrade_on_error: default_degrade_on_error(),
        }
    }
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_url() -> String {
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english"
        .to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_degrade_on_error() -> bool {
    true
}

fn default_positive_threshold() -> f64 {
    0.2
}

fn default_negative_threshold() -> f64 {
    -0.2
}
