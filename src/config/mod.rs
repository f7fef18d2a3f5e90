//! Startup configuration.
//!
//! One struct, read once in `main`, passed by value. The only process-wide
//! side effect is `dotenvy::dotenv()` populating the environment before the
//! lookup; everything downstream sees `Settings` only.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{RazorbackError, Result};

/// Environment variable holding the OpenAI credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Configuration required to run the agent.
#[derive(Debug, Clone)]
pub struct Settings {
    pub openai_api_key: String,
}

impl Settings {
    /// Load from the process environment, reading `.env` first if present.
    ///
    /// Fails with a configuration error naming the key when the credential
    /// is unset or empty; running without one is never silently allowed.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // no-op when the file is absent
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from a specific env file without touching the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let entries = dotenvy::from_path_iter(path.as_ref()).map_err(|e| {
            RazorbackError::Configuration(format!("failed to read env file: {e}"))
        })?;

        let mut vars = HashMap::new();
        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                RazorbackError::Configuration(format!("malformed env file: {e}"))
            })?;
            vars.insert(key, value);
        }

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let openai_api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RazorbackError::Configuration(format!("missing {API_KEY_VAR}")))?;

        Ok(Self { openai_api_key })
    }
}
