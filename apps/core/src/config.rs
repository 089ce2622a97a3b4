//! Layered configuration for the remote generation service.
//!
//! Lookup order for every key: the session-scoped [`SecretStore`] first,
//! then the process environment. Empty values count as absent.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;
use crate::models::ModelConfig;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Session-scoped secrets, kept apart from the process environment.
#[derive(Clone, Default)]
pub struct SecretStore {
    values: HashMap<String, String>,
}

impl fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("SecretStore").field("keys", &keys).finish()
    }
}

impl SecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Read a dotenv-format file without exporting anything to the environment.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let mut values = HashMap::new();
        for item in dotenv::from_path_iter(path)? {
            let (key, value) = item?;
            values.insert(key, value);
        }
        debug!("Loaded {} secrets from {:?}", values.len(), path);
        Ok(Self { values })
    }

    /// Like [`SecretStore::load`], but a missing file yields an empty store.
    pub fn load_optional(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Non-empty value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolved settings for the remote generation service.
#[derive(Clone, PartialEq)]
pub struct RemoteSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Url,
}

impl fmt::Debug for RemoteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl RemoteSettings {
    /// Apply the secrets-then-environment layering.
    pub fn resolve(secrets: &SecretStore) -> Self {
        let api_key = lookup(secrets, API_KEY_VAR);
        let model = lookup(secrets, MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = match lookup(secrets, BASE_URL_VAR) {
            Some(raw) => Url::parse(&raw).unwrap_or_else(|e| {
                warn!("Ignoring invalid {}: {}", BASE_URL_VAR, e);
                default_base_url()
            }),
            None => default_base_url(),
        };

        Self {
            api_key,
            model,
            base_url,
        }
    }

    /// Whether a remote call can be attempted at all.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Default generation parameters for the resolved model.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::for_model(self.model.clone())
    }
}

fn lookup(secrets: &SecretStore, key: &str) -> Option<String> {
    secrets.get(key).map(str::to_string).or_else(|| {
        env::var(key)
            .ok()
            .filter(|v| !v.trim().is_empty())
    })
}

fn default_base_url() -> Url {
    // NOTE: expect() is acceptable here: the default is a compile-time constant
    Url::parse(DEFAULT_BASE_URL).expect("Invalid default base URL")
}
