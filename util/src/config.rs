//! This module contain application configuration related functionality.
//!
//! All the application configurations should be set in corresponding
//! TOML file in `config` directory.
use config::{Config, ConfigError, Environment, File};

use crate::str_util::{mask_creds, mask_url_passwd};
use serde::Deserialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

const DEFAULT_CONFIG_FILE_PREFIX: &str = "config";
const DEFAULT_CONFIG_FILE_NAME: &str = "default.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvProfile {
    Prod,
    Local,
    Dev,
}

/// Node connection. Immutable for the lifetime of the process.
#[derive(Deserialize, Clone)]
pub struct ChainCfg {
    pub rpc_url: String,
    /// Network this deployment targets; sessions on any other chain are
    /// refused.
    pub chain_id: u64,
}

impl fmt::Debug for ChainCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainCfg")
            .field("rpc_url", &mask_url_passwd(&self.rpc_url))
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

/// Deployed contract addresses, hex-encoded. Read-only process
/// configuration, never mutated at runtime.
#[derive(Debug, Deserialize, Clone)]
pub struct ContractsCfg {
    pub marketplace_address: String,
    pub asset_address: String,
}

#[derive(Deserialize, Clone)]
pub struct WalletCfg {
    /// Hex-encoded signing key of the wallet account.
    pub private_key: String,
}

impl fmt::Debug for WalletCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletCfg")
            .field("private_key", &mask_creds(&self.private_key))
            .finish()
    }
}

#[allow(unused)]
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub chain: ChainCfg,
    pub contracts: ContractsCfg,
    pub wallet: WalletCfg,
    pub log_level: String,
    pub env: EnvProfile,
}

impl Settings {
    pub fn for_env(env_name: &str) -> Result<Self, ConfigError> {
        Settings::load(Some(env_name), None)
    }

    /// This method should be used for production.
    /// It loads application configuration based on the environment variables.
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Result<Self, ConfigError> {
        Settings::load(None, None)
    }

    pub fn is_production_profile(&self) -> bool {
        self.env.eq(&EnvProfile::Prod)
    }

    pub fn is_not_production_profile(&self) -> bool {
        !self.is_production_profile()
    }

    fn load(env_name: Option<&str>, config_path: Option<&str>) -> Result<Self, ConfigError> {
        let configs_path = config_path.map(|s| s.to_string()).unwrap_or(
            std::env::var("RUN_CONFIG_DIR")
                .unwrap_or_else(|_| DEFAULT_CONFIG_FILE_PREFIX.to_string()),
        );

        let env = env_name
            .map(|s| s.to_string())
            .unwrap_or(std::env::var("RUN_ENV").unwrap_or_else(|_| "local".into()));

        let raw_config = Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(File::from(
                default_config_file_path(&configs_path).as_path(),
            ))
            // Add in the current environment file, which is optional
            .add_source(File::with_name(&format!("{}/{}", configs_path, env)).required(false))
            // Add in settings from the environment (with a prefix of APP)
            // Eg.. `APP_CHAIN__RPC_URL=... ./target/app` would set the rpc url
            .add_source(Environment::with_prefix("app").separator("__"))
            .set_override("env", env)?
            .build()?;

        raw_config.try_deserialize()
    }
}

fn default_config_file_path(base_path: &str) -> PathBuf {
    // Check if the base path is a full path
    let full_path = Path::new(base_path);
    if full_path.exists() {
        return full_path.to_owned();
    }

    // it's OK to unwrap(), since it's the initialization phase,
    // and it's better to fail fast in case of a problem.
    let current_dir = std::env::current_dir().unwrap();

    let mut config_dir = current_dir.join(base_path);
    if !config_dir.exists() {
        config_dir = current_dir.parent().unwrap().join(base_path);
    }

    config_dir.join(DEFAULT_CONFIG_FILE_NAME)
}
