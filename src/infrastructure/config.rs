use serde::Deserialize;

use crate::domain::campus::Floor;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub demo: DemoSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoSettings {
    /// Days of daily history the demo source generates.
    #[serde(default = "default_history_days")]
    pub history_days: u32,
    /// Fixed seed for reproducible demo data. Unset means a fresh run each
    /// start.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            history_days: default_history_days(),
            seed: None,
        }
    }
}

fn default_history_days() -> u32 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct CampusConfig {
    #[serde(default)]
    pub floors: Vec<Floor>,
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_campus_config() -> anyhow::Result<CampusConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/campus"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
