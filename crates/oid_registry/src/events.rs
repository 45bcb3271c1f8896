//! Registration events
//!
//! Duplicate entries are dropped silently by the registry. Callers that
//! want to see what was dropped install an [`EventSink`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback receiving registration events
pub type EventSink = Arc<dyn Fn(&RegistryEvent) + Send + Sync>;

/// Which table an ignored entry targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Canonical name → OID
    Name,
    /// OID → canonical name
    Oid,
    /// Short name → canonical name
    ShortName,
    /// Canonical name → short name
    ShortNameReverse,
    Alias,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Name => "name",
            EntryKind::Oid => "oid",
            EntryKind::ShortName => "short name",
            EntryKind::ShortNameReverse => "short name reverse",
            EntryKind::Alias => "alias",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A data set was merged
    SetRegistered { set: String, inserted: usize },
    /// A data set was skipped because its name was already merged
    SetSkipped { set: String },
    /// An entry was dropped because its key already existed
    DuplicateIgnored {
        set: String,
        kind: EntryKind,
        key: String,
    },
}

impl fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryEvent::SetRegistered { set, inserted } => {
                write!(f, "registered data set {set} ({inserted} entries)")
            }
            RegistryEvent::SetSkipped { set } => {
                write!(f, "skipped data set {set}: already registered")
            }
            RegistryEvent::DuplicateIgnored { set, kind, key } => {
                write!(f, "ignored duplicate {kind} {key} from data set {set}")
            }
        }
    }
}
