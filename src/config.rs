use crate::types::Preset;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// scheme://host[:port] every endpoint resolves against
    pub origin: Option<String>,
    /// Endpoint fetched once at startup, result only logged
    #[serde(default = "default_startup_probe")]
    pub startup_probe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl UiConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            origin: None,
            startup_probe: default_startup_probe(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ui: UiConfig::default(),
            presets: default_presets(),
        }
    }
}

fn default_startup_probe() -> String {
    "/api/quotes/categories".to_string()
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_presets() -> Vec<Preset> {
    vec![
        Preset::new("Random quote", "/api/quotes/random"),
        Preset::new("All quotes", "/api/quotes"),
        Preset::new("Quotes, page 2", "/api/quotes?page=2&per_page=5"),
        Preset::new("Categories", "/api/quotes/categories"),
        Preset::new("Programming quotes", "/api/quotes/category/programming"),
    ]
}

impl Config {
    /// Directory holding the config file and logs
    pub fn app_dir() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        let app_dir = home_dir.join(".config").join("api-probe");

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    pub fn log_dir() -> Result<PathBuf> {
        let dir = Self::app_dir()?.join("logs");
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Validate the origin and save it to `path`.
    ///
    /// The in-memory config only changes once the file has been written.
    pub fn set_origin_at(&mut self, origin: &str, path: &Path) -> Result<String> {
        let origin = validate_origin(origin)?;

        let mut updated = self.clone();
        updated.server.origin = Some(origin.clone());
        updated.save_to(path)?;

        *self = updated;
        Ok(origin)
    }

    pub fn set_origin(&mut self, origin: &str) -> Result<String> {
        self.set_origin_at(origin, &Self::config_path()?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OriginError {
    #[error("URL cannot be empty")]
    Empty,
    #[error("URL must start with http:// or https://")]
    MissingScheme,
    #[error("Invalid URL: {0}")]
    Invalid(String),
}

/// Check an origin typed by the user and reduce it to scheme://host[:port]
pub fn validate_origin(url: &str) -> Result<String, OriginError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(OriginError::Empty);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(OriginError::MissingScheme);
    }

    let parsed = url::Url::parse(url).map_err(|e| OriginError::Invalid(e.to_string()))?;
    Ok(extract_origin(&parsed))
}

/// http://localhost:5000/some/page -> http://localhost:5000
fn extract_origin(parsed: &url::Url) -> String {
    let scheme = parsed.scheme();
    let host = parsed.host_str().unwrap_or("localhost");

    match parsed.port() {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    }
}
