//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tarjuman::config::{Config, SecureString};
use tarjuman::translate::{
    DetectionError, GroqTranslator, LanguageIdentifier, TranslateError, Translator,
};
use tempfile::TempDir;

/// Identifier that always answers with a fixed code, or fails.
pub struct FixedIdentifier(pub Option<&'static str>);

impl LanguageIdentifier for FixedIdentifier {
    fn identify(&self, text: &str) -> Result<String, DetectionError> {
        if text.trim().is_empty() {
            return Err(DetectionError::EmptyInput);
        }
        self.0
            .map(str::to_string)
            .ok_or(DetectionError::Undetermined)
    }
}

/// A call seen by [`FakeTranslator`].
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorCall {
    pub instruction: String,
    pub text: String,
}

/// Translator that records calls and replies with a canned outcome.
pub struct FakeTranslator {
    reply: Result<String, String>,
    calls: Mutex<Vec<TranslatorCall>>,
    count: AtomicUsize,
}

impl FakeTranslator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
            count: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
            count: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> Vec<TranslatorCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, instruction: &str, text: &str) -> Result<String, TranslateError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(TranslatorCall {
            instruction: instruction.to_string(),
            text: text.to_string(),
        });
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(TranslateError::Other(message.clone())),
        }
    }
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config pointing at `base_url` with short timeouts.
pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.provider.base_url = base_url.to_string();
    config.defaults.timeout_seconds = 5;
    config.defaults.connect_timeout_seconds = 2;
    config
}

pub fn translator_for(base_url: &str, model: &str, key: &str) -> GroqTranslator {
    let config = config_for(base_url);
    GroqTranslator::new(
        &config.provider,
        &config.defaults,
        model,
        SecureString::new(key.to_string()),
    )
    .expect("client builds")
}
