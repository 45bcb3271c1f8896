//! Process-wide shared registry
//!
//! Code that owns its own [`OidRegistry`] should pass it around
//! explicitly. The shared instance exists for callers that want one table
//! set per process without threading it through.

use crate::registry::OidRegistry;
use once_cell::sync::Lazy;

static GLOBAL_REGISTRY: Lazy<OidRegistry> = Lazy::new(OidRegistry::new);

impl OidRegistry {
    /// The shared registry, created empty on first access
    pub fn global() -> &'static OidRegistry {
        &GLOBAL_REGISTRY
    }
}

/// Convenience function to get the shared registry
pub fn global() -> &'static OidRegistry {
    OidRegistry::global()
}

/// Tests in this crate share the global registry; serialize them.
#[cfg(test)]
static TEST_LOCK: Lazy<std::sync::Mutex<()>> =
    Lazy::new(|| std::sync::Mutex::new(()));
