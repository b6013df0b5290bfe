// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use ndstate::UnitStore;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) apply: ApplyConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ApplyConfig {
    /// Folder the unit files are written to
    #[serde(default)]
    pub(crate) unit_dir: Option<String>,
}

impl Config {
    pub(crate) const DEFAULT_CONFIG_PATH: &'static str =
        "/etc/ndstate/ndstate.conf";

    pub(crate) fn load(path: &str) -> Result<Self, CliError> {
        let path = std::path::Path::new(path);
        if !path.exists() {
            log::debug!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Ok(Config::default());
        }
        let mut fd = std::fs::File::open(path)?;
        let mut content = String::new();
        fd.read_to_string(&mut content)?;
        Self::from_toml(&content).map_err(|e| {
            CliError::from(format!(
                "Failed to read configuration from {}: {e}",
                path.display()
            ))
        })
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let config = toml::from_str::<Config>(content)?;
        log::info!("Configuration loaded:\n{content}");
        Ok(config)
    }

    /// The `--unit-dir` argument wins over the configuration file.
    pub(crate) fn unit_dir(&self, cli_unit_dir: Option<&String>) -> String {
        cli_unit_dir
            .or(self.apply.unit_dir.as_ref())
            .cloned()
            .unwrap_or_else(|| UnitStore::DEFAULT_UNIT_DIR.to_string())
    }
}
