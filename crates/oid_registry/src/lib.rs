//! OID Registry for Certificate and PKI Parsing
//!
//! This crate maps between four string forms of an identifier: dotted
//! OIDs (`2.5.4.3`), canonical names (`commonName`), RFC 4514 short names
//! (`CN`) and informal aliases (`P-256`). Data sets are merged into an
//! [`OidRegistry`] under a first-wins policy; lookups in the OID and short
//! name directions echo unknown input back, while alias and name → OID
//! lookups report a miss.
//!
//! ```
//! use ippan_oid_registry::OidRegistry;
//!
//! let registry = OidRegistry::with_builtins();
//! assert_eq!(registry.oid_to_short("2.5.4.6"), "C");
//! assert_eq!(registry.name_to_oid("P-256").as_deref(), Some("1.2.840.10045.3.1.7"));
//! assert_eq!(registry.oid_to_name("1.2.3.4"), "1.2.3.4");
//! ```

pub mod builtins;
pub mod config;
pub mod errors;
pub mod events;
pub mod global;
pub mod registry;
pub mod types;

pub use config::RegistryConfig;
pub use errors::*;
pub use events::{EntryKind, EventSink, RegistryEvent};
pub use global::global;
pub use registry::OidRegistry;
pub use types::*;
