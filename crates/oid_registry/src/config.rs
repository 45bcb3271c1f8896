//! Registry configuration
//!
//! The configuration is decoded from TOML text handed over by the caller;
//! this crate never reads files or the environment.

use crate::builtins;
use crate::errors::*;
use crate::registry::OidRegistry;
use crate::types::DataSet;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Which data sets a registry starts with
///
/// ```toml
/// builtins = ["x509"]
///
/// [[data_sets]]
/// setName = "vendor"
/// nameToOid = { vendorPolicy = "1.3.6.1.4.1.99999.1" }
/// aliasToName = { vendor = "vendorPolicy" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Bundled sets to seed, by set name, in registration order
    pub builtins: Vec<String>,
    /// Custom sets registered after the builtins
    pub data_sets: Vec<DataSet>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtins: builtins::BUILTIN_SET_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            data_sets: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// A configuration with no builtins and no custom sets
    pub fn empty() -> Self {
        Self {
            builtins: Vec::new(),
            data_sets: Vec::new(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RegistryConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check builtin names and custom set names
    pub fn validate(&self) -> Result<()> {
        for name in &self.builtins {
            builtins::by_name(name)?;
        }
        for set in &self.data_sets {
            set.validate()?;
        }
        Ok(())
    }

    /// All data sets this configuration registers, in order
    pub fn data_sets(&self) -> Result<Vec<DataSet>> {
        let mut sets = self
            .builtins
            .iter()
            .map(|name| builtins::by_name(name))
            .collect::<Result<Vec<_>>>()?;
        for set in &self.data_sets {
            set.validate()?;
            sets.push(set.clone());
        }
        Ok(sets)
    }
}

impl OidRegistry {
    /// Create a registry and register every set named by `config`
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let sets = config.data_sets()?;
        let registry = Self::new();
        registry.register(&sets);
        info!(
            "OID registry initialized with {} data sets",
            registry.stats().data_sets
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads_builtins() {
        let registry = OidRegistry::from_config(&RegistryConfig::default()).unwrap();

        assert_eq!(
            registry.registered_sets(),
            vec!["crypto".to_string(), "x509".to_string()]
        );
        assert_eq!(registry.name_to_oid("P-256").unwrap(), "1.2.840.10045.3.1.7");
    }

    #[test]
    fn test_empty_config() {
        let registry = OidRegistry::from_config(&RegistryConfig::empty()).unwrap();
        assert_eq!(registry.stats().data_sets, 0);
    }

    #[test]
    fn test_toml_with_custom_set() {
        let config = RegistryConfig::from_toml_str(
            r#"
builtins = ["x509"]

[[data_sets]]
setName = "vendor"
nameToOid = { vendorPolicy = "1.3.6.1.4.1.99999.1", commonName = "9.9.9" }
aliasToName = { vendor = "vendorPolicy" }
"#,
        )
        .unwrap();

        let registry = OidRegistry::from_config(&config).unwrap();

        assert_eq!(registry.name_to_oid("vendor").unwrap(), "1.3.6.1.4.1.99999.1");
        // builtins are registered first and keep their entries
        assert_eq!(registry.name_to_oid("commonName").unwrap(), "2.5.4.3");
        assert!(!registry.is_registered("crypto"));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_unknown_builtin_is_rejected() {
        let err = RegistryConfig::from_toml_str(r#"builtins = ["pkcs11"]"#).unwrap_err();
        assert!(matches!(err, OidRegistryError::UnknownBuiltin { name } if name == "pkcs11"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = RegistryConfig::from_toml_str("builtins = 3").unwrap_err();
        assert!(matches!(err, OidRegistryError::ConfigDecode(_)));
    }
}
