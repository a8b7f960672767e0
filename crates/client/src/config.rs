use serde::Deserialize;

pub const BACKEND_URL_ENV: &str = "REACT_APP_BACKEND_URL";
pub const API_KEY_ENV: &str = "REACT_APP_BXI_API_KEY";
pub const LOGIN_URL_ENV: &str = "REACT_APP_LOGIN_URL";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub login_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WizardConfig {
    /// Where to go when the step graph has no next page
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            fallback_path: default_fallback_path(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_fallback_path() -> String {
    "/sellerhub".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[backend]
url = "http://localhost:7000/api/v1"
timeout_secs = 30

[wizard]
fallback_path = "/sellerhub"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment variables override the file in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_config()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn load_file_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.backend.url.trim().is_empty() {
        anyhow::bail!("backend.url must not be empty");
    }
    Ok(config)
}

/// Apply `REACT_APP_*` overrides; empty values are ignored
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = value(BACKEND_URL_ENV) {
        tracing::debug!("{} overrides backend url", BACKEND_URL_ENV);
        config.backend.url = url;
    }
    if let Some(key) = value(API_KEY_ENV) {
        config.backend.api_key = Some(key);
    }
    if let Some(login_url) = value(LOGIN_URL_ENV) {
        config.backend.login_url = Some(login_url);
    }
}
