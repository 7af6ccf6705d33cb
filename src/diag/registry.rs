// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Global registry of named diagnostic sinks.
//!
//! Decorators register the sinks they attach to classes; callers can look a
//! sink up by name without holding the class handle.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use super::sink::DiagnosticSink;

/// Global sink registry instance.
pub static GLOBAL_SINKS: Lazy<SinkRegistry> = Lazy::new(SinkRegistry::new);

/// Access the global sink registry.
pub fn registry() -> &'static SinkRegistry {
    &GLOBAL_SINKS
}

/// Name to sink map. Registration is last-wins.
#[derive(Debug)]
pub struct SinkRegistry {
    sinks: RwLock<HashMap<String, DiagnosticSink>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(HashMap::new()),
        }
    }

    /// Register a sink under its own name, replacing any previous entry.
    pub fn register(&self, sink: DiagnosticSink) {
        self.sinks
            .write()
            .unwrap()
            .insert(sink.name().to_string(), sink);
    }

    /// Look up a registered sink by name.
    pub fn get(&self, name: &str) -> Option<DiagnosticSink> {
        self.sinks.read().unwrap().get(name).cloned()
    }

    /// Get a sink by name, creating and registering one if absent.
    pub fn sink(&self, name: &str) -> DiagnosticSink {
        if let Some(existing) = self.get(name) {
            return existing;
        }
        let created = DiagnosticSink::new(name);
        self.register(created.clone());
        created
    }

    /// Names of all registered sinks, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sinks.read().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.sinks.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all registered sinks.
    pub fn clear(&self) {
        self.sinks.write().unwrap().clear();
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
