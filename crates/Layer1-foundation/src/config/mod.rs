//! Gateway configuration
//!
//! All settings come from environment variables, read once at startup.
//! The completion credential is required; everything else has a default
//! suitable for local development.

use crate::{Error, Result};
use std::path::PathBuf;

/// Default completion endpoint (any OpenAI-compatible chat completions URL)
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default completion model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default confined directory for generated scripts
pub const DEFAULT_DATA_DIR: &str = "/data";

/// Runtime configuration for the gateway.
///
/// | Env Var                | Default                     |
/// |------------------------|-----------------------------|
/// | `SCRIPTFORGE_API_KEY`  | required, startup fails     |
/// | `SCRIPTFORGE_BASE_URL` | OpenAI chat completions URL |
/// | `SCRIPTFORGE_MODEL`    | `gpt-4o-mini`               |
/// | `SCRIPTFORGE_DATA_DIR` | `/data`                     |
/// | `HOST`                 | `0.0.0.0`                   |
/// | `PORT`                 | `8000`                      |
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Bearer credential for the completion endpoint (required)
    pub api_key: String,

    /// Completion endpoint URL
    pub base_url: String,

    /// Completion model identifier
    pub model: String,

    /// Confined directory all script writes and reads are restricted to
    pub data_dir: PathBuf,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when `SCRIPTFORGE_API_KEY` is absent or empty so a
    /// misconfigured process never starts serving requests.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SCRIPTFORGE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::Config("SCRIPTFORGE_API_KEY is required but not set".to_string())
            })?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| Error::Config("PORT must be a valid u16".to_string()))?;

        let base_url =
            std::env::var("SCRIPTFORGE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model =
            std::env::var("SCRIPTFORGE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let data_dir = std::env::var("SCRIPTFORGE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(Self {
            host,
            port,
            api_key,
            base_url,
            model,
            data_dir,
        })
    }
}
