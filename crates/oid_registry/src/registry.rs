//! OID registry implementation
//!
//! Bidirectional tables between dotted OIDs, canonical names, DN short
//! names (`CN`, `O`, ...) and informal aliases (`P-256`).

use crate::builtins;
use crate::events::*;
use crate::types::*;
use indexmap::IndexSet;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Default)]
struct Tables {
    oid_to_name: HashMap<String, String>,
    name_to_oid: HashMap<String, String>,
    short_to_name: HashMap<String, String>,
    name_to_short: HashMap<String, String>,
    alias_to_name: HashMap<String, String>,
    /// Names of merged data sets, in merge order
    registered_sets: IndexSet<String>,
}

/// Insert `key → value` unless `key` is already present.
///
/// Returns whether the entry was inserted.
fn insert_first(table: &mut HashMap<String, String>, key: &str, value: &str) -> bool {
    if table.contains_key(key) {
        return false;
    }
    table.insert(key.to_string(), value.to_string());
    true
}

/// Collects duplicate events only while a sink is installed.
struct Recorder<'a> {
    set: &'a str,
    events: Option<&'a mut Vec<RegistryEvent>>,
    ignored: usize,
}

impl Recorder<'_> {
    fn ignored(&mut self, kind: EntryKind, key: &str) {
        self.ignored += 1;
        trace!("Ignoring duplicate {} {} from data set {}", kind, key, self.set);
        if let Some(events) = self.events.as_deref_mut() {
            events.push(RegistryEvent::DuplicateIgnored {
                set: self.set.to_string(),
                kind,
                key: key.to_string(),
            });
        }
    }
}

impl Tables {
    /// Merge one data set under the first-wins policy
    fn merge(&mut self, set: &DataSet, mut events: Option<&mut Vec<RegistryEvent>>) {
        if self.registered_sets.contains(&set.set_name) {
            debug!("Data set {} already registered, skipping", set.set_name);
            if let Some(events) = events.as_deref_mut() {
                events.push(RegistryEvent::SetSkipped {
                    set: set.set_name.clone(),
                });
            }
            return;
        }

        let mut inserted = 0;
        let mut recorder = Recorder {
            set: &set.set_name,
            events: events.as_deref_mut(),
            ignored: 0,
        };

        for (name, oid) in &set.name_to_oid {
            if !insert_first(&mut self.name_to_oid, name, oid) {
                recorder.ignored(EntryKind::Name, name);
                continue;
            }
            inserted += 1;
            if insert_first(&mut self.oid_to_name, oid, name) {
                inserted += 1;
            } else {
                recorder.ignored(EntryKind::Oid, oid);
            }
        }

        for (short, name) in &set.short_to_name {
            if !insert_first(&mut self.short_to_name, short, name) {
                recorder.ignored(EntryKind::ShortName, short);
                continue;
            }
            inserted += 1;
            if insert_first(&mut self.name_to_short, name, short) {
                inserted += 1;
            } else {
                recorder.ignored(EntryKind::ShortNameReverse, name);
            }
        }

        for (alias, name) in &set.alias_to_name {
            if insert_first(&mut self.alias_to_name, alias, name) {
                inserted += 1;
            } else {
                recorder.ignored(EntryKind::Alias, alias);
            }
        }

        let ignored = recorder.ignored;
        self.registered_sets.insert(set.set_name.clone());
        debug!(
            "Registered data set {} ({} entries inserted, {} duplicates ignored)",
            set.set_name, inserted, ignored
        );

        if let Some(events) = events {
            events.push(RegistryEvent::SetRegistered {
                set: set.set_name.clone(),
                inserted,
            });
        }
    }
}

/// OID registry
///
/// All tables sit behind one lock: a registration call is applied as a
/// whole before any reader sees it. Tables only grow, except through
/// [`OidRegistry::reset`].
pub struct OidRegistry {
    tables: RwLock<Tables>,
    sink: RwLock<Option<EventSink>>,
}

impl OidRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            sink: RwLock::new(None),
        }
    }

    /// Create a registry seeded with the bundled `crypto` and `x509` sets
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(&builtins::all());
        registry
    }

    /// Attach an event sink, builder style
    pub fn with_event_sink(self, sink: EventSink) -> Self {
        *self.sink.write() = Some(sink);
        self
    }

    /// Replace or remove the event sink
    pub fn set_event_sink(&self, sink: Option<EventSink>) {
        *self.sink.write() = sink;
    }

    /// Merge data sets in order.
    ///
    /// A set whose name was merged before is skipped entirely. Within the
    /// remaining sets, a key that already exists in a table keeps its
    /// value. Duplicates are not errors; they surface only as events.
    pub fn register<'a, I>(&self, data_sets: I)
    where
        I: IntoIterator<Item = &'a DataSet>,
    {
        let sink = self.sink.read().clone();
        let mut events = Vec::new();

        {
            let mut tables = self.tables.write();
            for set in data_sets {
                let recording = if sink.is_some() {
                    Some(&mut events)
                } else {
                    None
                };
                tables.merge(set, recording);
            }
        }

        if let Some(sink) = sink {
            for event in &events {
                sink(event);
            }
        }
    }

    /// Drop every table entry and the record of merged sets
    pub fn reset(&self) {
        let mut tables = self.tables.write();
        *tables = Tables::default();
        debug!("OID registry reset");
    }

    /// Canonical name for `oid`, or `oid` itself when unknown
    pub fn oid_to_name(&self, oid: &str) -> String {
        self.oid_to_name_strict(oid).unwrap_or_else(|| oid.to_string())
    }

    pub fn oid_to_name_strict(&self, oid: &str) -> Option<String> {
        self.tables.read().oid_to_name.get(oid).cloned()
    }

    /// OID for a canonical name or alias.
    ///
    /// An alias is substituted by its target first. There is no fallback:
    /// unknown names resolve to `None`.
    pub fn name_to_oid(&self, name: &str) -> Option<String> {
        let tables = self.tables.read();
        let resolved = tables
            .alias_to_name
            .get(name)
            .map(String::as_str)
            .unwrap_or(name);
        tables.name_to_oid.get(resolved).cloned()
    }

    /// Canonical name for a DN short name, or `short` itself when unknown
    pub fn short_to_name(&self, short: &str) -> String {
        self.short_to_name_strict(short).unwrap_or_else(|| short.to_string())
    }

    pub fn short_to_name_strict(&self, short: &str) -> Option<String> {
        self.tables.read().short_to_name.get(short).cloned()
    }

    /// DN short name for a canonical name, or `name` itself when it has none
    pub fn name_to_short(&self, name: &str) -> String {
        self.name_to_short_strict(name).unwrap_or_else(|| name.to_string())
    }

    pub fn name_to_short_strict(&self, name: &str) -> Option<String> {
        self.tables.read().name_to_short.get(name).cloned()
    }

    /// Display form of an OID.
    ///
    /// Unknown OIDs come back unchanged; known OIDs without a short name
    /// come back as their canonical name.
    pub fn oid_to_short(&self, oid: &str) -> String {
        let tables = self.tables.read();
        match tables.oid_to_name.get(oid) {
            None => oid.to_string(),
            Some(name) => tables.name_to_short.get(name).unwrap_or(name).clone(),
        }
    }

    /// Short name for an OID; `None` unless both steps resolve
    pub fn oid_to_short_strict(&self, oid: &str) -> Option<String> {
        let tables = self.tables.read();
        tables
            .oid_to_name
            .get(oid)
            .and_then(|name| tables.name_to_short.get(name))
            .cloned()
    }

    /// OID for a DN short name; `None` unless both steps resolve
    pub fn short_to_oid(&self, short: &str) -> Option<String> {
        let tables = self.tables.read();
        tables
            .short_to_name
            .get(short)
            .and_then(|name| tables.name_to_oid.get(name))
            .cloned()
    }

    /// Target of an alias; no fallback
    pub fn alias_to_name(&self, alias: &str) -> Option<String> {
        self.tables.read().alias_to_name.get(alias).cloned()
    }

    /// Whether a data set with this name has been merged
    pub fn is_registered(&self, set_name: &str) -> bool {
        self.tables.read().registered_sets.contains(set_name)
    }

    /// Names of merged data sets, in merge order
    pub fn registered_sets(&self) -> Vec<String> {
        self.tables.read().registered_sets.iter().cloned().collect()
    }

    pub fn stats(&self) -> RegistryStats {
        let tables = self.tables.read();
        RegistryStats {
            oids: tables.oid_to_name.len(),
            names: tables.name_to_oid.len(),
            short_names: tables.short_to_name.len(),
            aliases: tables.alias_to_name.len(),
            data_sets: tables.registered_sets.len(),
        }
    }
}

impl Default for OidRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OidRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidRegistry")
            .field("stats", &self.stats())
            .field("event_sink", &self.sink.read().is_some())
            .finish()
    }
}
