use serde::{Deserialize, Serialize};

use crate::translate::DirectionPreference;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Initial values of the sidebar settings and client timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Model selected when the page opens.
    #[serde(default = "default_model")]
    pub model: String,
    /// Direction selected when the page opens.
    #[serde(default)]
    pub direction: DirectionPreference,
    /// Record finished translations in the session history.
    #[serde(default = "default_keep_history")]
    pub keep_history: bool,
    /// Show the system prompt that produced the last output.
    #[serde(default)]
    pub show_prompt: bool,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Chat-completion provider (OpenAI-compatible API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL including the API version prefix, e.g. "https://api.groq.com/openai/v1".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Models offered in the sidebar.
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Sampling temperature; the provider default is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Reorder right-to-left output into visual order before drawing it.
    #[serde(default = "default_reorder_rtl")]
    pub reorder_rtl: bool,
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_keep_history() -> bool {
    true
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_models() -> Vec<String> {
    vec![
        "llama-3.1-8b-instant".to_string(),
        "gemma2-9b-it".to_string(),
    ]
}

fn default_reorder_rtl() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            model: default_model(),
            direction: DirectionPreference::default(),
            keep_history: default_keep_history(),
            show_prompt: false,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            models: default_models(),
            temperature: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reorder_rtl: default_reorder_rtl(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            provider: ProviderConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}
