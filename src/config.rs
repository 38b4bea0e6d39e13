use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    pub notifier: NotifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Resource path of the user collection, e.g. `http://host:port/users`
    pub base_url: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    pub auto_hide_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            notifier: NotifierConfig::default(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3001/users".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self { auto_hide_ms: 4000 }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file and
    /// `ROSTER_`-prefixed environment variables, in that order
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        config = config.add_source(config::File::with_name("config").required(false));

        // e.g. ROSTER_REMOTE__BASE_URL
        config = config.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.notifier.auto_hide_ms)
    }
}
