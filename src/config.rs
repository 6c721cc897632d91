use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Preferred theme to start in ("Light" or "Dark")
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    /// Logging behavior; only consulted at startup
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level for everything not overridden below
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for rotating log files; None means "logs"
    #[serde(default)]
    pub log_directory: Option<String>,
    /// Per-module overrides, e.g. "tui_dict_app::api": "debug"
    #[serde(default)]
    pub module_levels: HashMap<String, String>,
    /// Emit frame timing at debug level (debug builds only)
    #[serde(default)]
    pub enable_performance_metrics: bool,
}

fn default_theme_name() -> String {
    "Light".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_name: default_theme_name(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_directory: None,
            module_levels: HashMap::new(),
            enable_performance_metrics: false,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        // Look for config.ron in current directory or next to executable
        let mut candidates = Vec::new();

        // 1. Current working directory
        candidates.push(PathBuf::from("config.ron"));

        // 2. Next to executable
        if let Ok(exe) = std::env::current_exe()
            && let Some(dir) = exe.parent()
        {
            candidates.push(dir.join("config.ron"));
        }

        for path in candidates {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match ron::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse config at {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Self::default()
    }
}
