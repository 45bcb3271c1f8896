//! Types for the OID registry

use crate::errors::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named bundle of identifier mappings offered for registration.
///
/// The registry copies entries out of a data set; it never keeps the set
/// itself. Mappings preserve insertion order, so when two names in one set
/// share an OID the first one listed becomes the OID's canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    /// Unique label; a second set with the same label is never merged.
    pub set_name: String,
    /// Canonical name → dotted OID.
    pub name_to_oid: IndexMap<String, String>,
    /// DN short name → canonical name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub short_to_name: IndexMap<String, String>,
    /// Alias → canonical name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub alias_to_name: IndexMap<String, String>,
}

impl DataSet {
    /// Create an empty data set
    pub fn new(set_name: impl Into<String>) -> Self {
        Self {
            set_name: set_name.into(),
            name_to_oid: IndexMap::new(),
            short_to_name: IndexMap::new(),
            alias_to_name: IndexMap::new(),
        }
    }

    /// Build a data set from static `(key, value)` tables
    pub fn from_tables(
        set_name: impl Into<String>,
        name_to_oid: &[(&str, &str)],
        short_to_name: &[(&str, &str)],
        alias_to_name: &[(&str, &str)],
    ) -> Self {
        fn collect(table: &[(&str, &str)]) -> IndexMap<String, String> {
            table
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect()
        }

        Self {
            set_name: set_name.into(),
            name_to_oid: collect(name_to_oid),
            short_to_name: collect(short_to_name),
            alias_to_name: collect(alias_to_name),
        }
    }

    /// Decode a data set from its JSON form
    /// (`{ "setName", "nameToOid", "shortToName"?, "aliasToName"? }`).
    pub fn from_json(json: &str) -> Result<Self> {
        let set: DataSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Encode the data set as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check that the set can be identified in the registry
    pub fn validate(&self) -> Result<()> {
        if self.set_name.trim().is_empty() {
            return Err(OidRegistryError::EmptySetName);
        }
        Ok(())
    }

    pub fn with_oid(mut self, name: impl Into<String>, oid: impl Into<String>) -> Self {
        self.name_to_oid.entry(name.into()).or_insert(oid.into());
        self
    }

    pub fn with_short(mut self, short: impl Into<String>, name: impl Into<String>) -> Self {
        self.short_to_name.entry(short.into()).or_insert(name.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>, name: impl Into<String>) -> Self {
        self.alias_to_name.entry(alias.into()).or_insert(name.into());
        self
    }

    /// Total number of entries across all three mappings
    pub fn len(&self) -> usize {
        self.name_to_oid.len() + self.short_to_name.len() + self.alias_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Table sizes of a registry at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub oids: usize,
    pub names: usize,
    pub short_names: usize,
    pub aliases: usize,
    pub data_sets: usize,
}
