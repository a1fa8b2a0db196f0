// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path, ConfigFile};
use crate::yaml::load_yaml_with_env;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sss_shares::ShareCountPolicy;
use sss_solver::{AcceptancePolicy, ReconstructionSolver};
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_NAME: &str = "recover.config.yaml";
pub const ENV_PREFIX: &str = "RECOVER_";

/// Report format written by the command line tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// The config actually used throughout the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct RecoveryConfig {
    /// How a declared `n` that differs from the shares present is handled
    pub share_count: ShareCountPolicy,
    /// Acceptance rule for candidate subsets eg. `{ policy: fault_budget, max_faults: 1 }`
    pub acceptance: AcceptancePolicy,
    /// Give up on a share set after this many milliseconds
    pub deadline_ms: Option<u64>,
    pub output: OutputFormat,
}

impl RecoveryConfig {
    pub fn solver(&self) -> ReconstructionSolver {
        ReconstructionSolver::new(self.acceptance)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

/// Value struct for passing configuration from the cli to the configuration
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_count: Option<ShareCountPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance: Option<AcceptancePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sss-recover"))
    }
}

/// Load the config from the given file, or from `recover.config.yaml` in the working directory,
/// one of its parents or the user config dir. Environment variables prefixed with `RECOVER_`
/// and then `overrides` take precedence over the file.
pub fn load_config(config_file: Option<&Path>, overrides: CliOverrides) -> Result<RecoveryConfig> {
    let location = resolve_config_path(
        find_in_parent,
        &env::current_dir()?,
        OsDirs::config_dir().as_deref(),
        DEFAULT_CONFIG_NAME,
        config_file,
    );

    let mut figment = Figment::from(Serialized::defaults(RecoveryConfig::default()));

    match &location {
        ConfigFile::Required(path) => {
            let loaded_yaml = load_yaml_with_env(path)
                .with_context(|| format!("Could not read configuration file {}", path.display()))?;
            figment = figment.merge(Yaml::string(&loaded_yaml));
        }
        ConfigFile::Optional(path) if path.exists() => {
            let loaded_yaml = load_yaml_with_env(path)
                .with_context(|| format!("Could not read configuration file {}", path.display()))?;
            figment = figment.merge(Yaml::string(&loaded_yaml));
        }
        _ => debug!("No configuration file found; using defaults"),
    }

    let config: RecoveryConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(&overrides))
        .extract()
        .context("Could not parse configuration")?;

    info!(file = ?location.path(), ?config, "configuration loaded");
    Ok(config)
}
