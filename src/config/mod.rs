//! Configuration management
//!
//! The server reads a layered [`Config`] (defaults, optional config file,
//! `DASHBOARD_*` environment). The browser client has no filesystem or
//! environment, so its settings are baked in at compile time as
//! [`ClientConfig`].

use serde::Deserialize;

/// Backend base URL the browser talks to when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "/backend/";

/// Session lifetime when nothing else is configured.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Camera-monitoring backend the `/backend/` proxy forwards to.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: i64,
}

fn default_port() -> u16 {
    8080
}

fn default_backend_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_session_ttl() -> i64 {
    DEFAULT_SESSION_TTL_MINUTES
}

/// Settings compiled into the client bundle.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub session_ttl_minutes: i64,
}

impl ClientConfig {
    /// Read `DASHBOARD_API_BASE` / `DASHBOARD_SESSION_TTL_MINUTES` as set when
    /// the bundle was built.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DASHBOARD_API_BASE"),
            option_env!("DASHBOARD_SESSION_TTL_MINUTES"),
        )
    }

    fn from_values(api_base: Option<&str>, ttl: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();
        let session_ttl_minutes = ttl
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_SESSION_TTL_MINUTES);
        Self {
            api_base,
            session_ttl_minutes,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
#[cfg(feature = "server")]
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("DASHBOARD_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/camera-dashboard");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("camera-dashboard");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/camera-dashboard");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("camera-dashboard");
        }
    }

    std::path::PathBuf::from(".")
}

#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("backend_url", default_backend_url())?
        .set_default("session_ttl_minutes", DEFAULT_SESSION_TTL_MINUTES)?
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // DASHBOARD_PORT, DASHBOARD_BACKEND_URL, DASHBOARD_SESSION_TTL_MINUTES
        .add_source(
            ::config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: DASHBOARD_PORT > PORT > config file > default
    if let Ok(port) = std::env::var("DASHBOARD_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;
    url::Url::parse(&config.backend_url)
        .map_err(|e| anyhow::anyhow!("invalid backend_url {:?}: {}", config.backend_url, e))?;
    Ok(config)
}
