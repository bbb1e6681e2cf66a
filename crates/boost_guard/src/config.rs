use std::fs;
use std::path::Path;

use ethers::types::Address;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION};
use crate::digest::{ClaimDomain, DigestScheme};
use crate::error::{GuardError, Result};
use crate::strategy::StrategyKind;

/// Name and version of the typed-data domain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub name: String,
    pub version: String,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DOMAIN_NAME.to_string(),
            version: DEFAULT_DOMAIN_VERSION.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    RawHash,
    #[default]
    TypedData,
}

/**
 * Guard configuration
 *
 * ```toml
 * scheme = "typed_data"
 * strategy = "fixed_unit"
 *
 * [domain]
 * name = "boost"
 * version = "1"
 * ```
 *
 * Every key is optional.
 */
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub domain: DomainConfig,
    pub scheme: SchemeKind,
    pub strategy: StrategyKind,
}

impl GuardConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading guard config from {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| GuardError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GuardConfig =
            toml::from_str(content).map_err(|e| GuardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scheme == SchemeKind::TypedData {
            if self.domain.name.trim().is_empty() {
                return Err(GuardError::Config("domain name is empty".to_string()));
            }
            if self.domain.version.trim().is_empty() {
                return Err(GuardError::Config("domain version is empty".to_string()));
            }
        }
        Ok(())
    }

    /// Digest scheme of the contract deployed at `verifying_contract`
    pub fn scheme_for(&self, verifying_contract: Address) -> DigestScheme {
        match self.scheme {
            SchemeKind::RawHash => DigestScheme::RawHash,
            SchemeKind::TypedData => DigestScheme::TypedData(ClaimDomain::new(
                self.domain.name.clone(),
                self.domain.version.clone(),
                verifying_contract,
            )),
        }
    }
}
