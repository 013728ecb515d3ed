pub mod models;

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use validator::Validate;

use crate::{
    api::{Credentials, API_BASE_URL},
    cli::Cli,
};
pub use models::{Config, Settings};

pub fn load_config(config_file: &Path) -> Result<Config> {
    let mut file = File::open(config_file)
        .with_context(|| format!("Failed to open config file: {}", config_file.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", config_file.display()))
}

impl Settings {
    /// Flags take precedence over the config file.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };

        let settings = Self {
            email: cli
                .email
                .clone()
                .or(config.email)
                .context("No email given, use -e or the config file")?,
            api_token: cli
                .token
                .clone()
                .or(config.api_token)
                .context("No API token given, use -t or the config file")?,
            api_endpoint: cli
                .endpoint
                .clone()
                .or(config.api_endpoint)
                .unwrap_or_else(|| API_BASE_URL.to_string()),
        };

        settings.validate().context("Invalid settings")?;
        Ok(settings)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.email, &self.api_token)
    }
}
