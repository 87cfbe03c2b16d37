use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::error::Result;
use crate::processors::UnknownStationPolicy;
use crate::utils::constants::{DEFAULT_DISCOVERY_BYTES, ENV_PREFIX};

/// Run configuration.
///
/// Layered as: built-in defaults, optional config file, `BRC_*` environment
/// variables, then command-line overrides.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(range(min = 1))]
    pub max_workers: usize,

    #[validate(range(min = 1))]
    pub discovery_bytes: usize,

    #[serde(default)]
    pub skip_unknown_stations: bool,
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("max_workers", num_cpus::get() as u64)?
            .set_default("discovery_bytes", DEFAULT_DISCOVERY_BYTES as u64)?
            .set_default("skip_unknown_stations", false)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line values on top of the loaded settings
    pub fn with_overrides(
        mut self,
        max_workers: Option<usize>,
        discovery_bytes: Option<usize>,
        skip_unknown_stations: bool,
    ) -> Result<Self> {
        if let Some(workers) = max_workers {
            self.max_workers = workers;
        }
        if let Some(bytes) = discovery_bytes {
            self.discovery_bytes = bytes;
        }
        self.skip_unknown_stations |= skip_unknown_stations;

        self.validate()?;
        Ok(self)
    }

    pub fn unknown_station_policy(&self) -> UnknownStationPolicy {
        if self.skip_unknown_stations {
            UnknownStationPolicy::Skip
        } else {
            UnknownStationPolicy::Fail
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_workers: num_cpus::get(),
            discovery_bytes: DEFAULT_DISCOVERY_BYTES,
            skip_unknown_stations: false,
        }
    }
}
