//! Application configuration: environment variables plus optional
//! `config.toml` reference data.

/// Static reference data (branches, managers, expense categories) from
/// config.toml
pub mod reference;

use crate::errors::Result;
use reference::ReferenceData;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_EXPORT_DIR: &str = "exports";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Everything the binary needs beyond the report itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key for the summary endpoint. Absent simply disables summaries.
    pub gemini_api_key: Option<String>,
    /// Model name for the summary endpoint.
    pub gemini_model: String,
    /// Directory the rendered report is exported into.
    pub export_dir: PathBuf,
    /// Branch/manager/expense-category reference lists.
    pub reference: ReferenceData,
}

/// Loads configuration from the environment and, when present, the
/// `config.toml` reference file (path overridable via `CLOSEOUT_CONFIG`).
///
/// # Errors
/// Returns an error only when a reference file exists but cannot be parsed;
/// every environment variable has a default or is optional.
pub fn load_app_configuration() -> Result<AppConfig> {
    let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
    if gemini_api_key.is_none() {
        info!("GEMINI_API_KEY not set; AI summaries disabled.");
    }

    let gemini_model = env::var("CLOSEOUT_GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let export_dir =
        PathBuf::from(env::var("CLOSEOUT_EXPORT_DIR").unwrap_or_else(|_| DEFAULT_EXPORT_DIR.to_string()));

    let config_path =
        PathBuf::from(env::var("CLOSEOUT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()));
    let reference = if Path::new(&config_path).exists() {
        reference::load_reference(&config_path)?
    } else {
        debug!("No reference file at {:?}; using built-in lists.", config_path);
        ReferenceData::default()
    };

    Ok(AppConfig {
        gemini_api_key,
        gemini_model,
        export_dir,
        reference,
    })
}
