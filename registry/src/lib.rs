use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tool known to the workbench: a named component that may produce
/// and/or consume named events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub name: String,
    #[serde(default)]
    pub produced_events: Vec<String>,
    #[serde(default)]
    pub consumed_events: Vec<String>,
}

impl Endpoint {
    pub fn new(
        name: impl Into<String>,
        produced_events: Vec<String>,
        consumed_events: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            produced_events,
            consumed_events,
        }
    }

    pub fn is_producer(&self) -> bool {
        !self.produced_events.is_empty()
    }

    pub fn is_consumer(&self) -> bool {
        !self.consumed_events.is_empty()
    }
}

/// Roster of endpoints, keyed by name. Enumeration is always sorted by
/// name ascending so repeated queries see the same order.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    endpoints: BTreeMap<String, Endpoint>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an endpoint. No-op if one with the same name is already
    /// present.
    pub fn add(&mut self, endpoint: Endpoint) {
        self.endpoints
            .entry(endpoint.name.clone())
            .or_insert(endpoint);
    }

    /// Unregisters by name. Returns the removed endpoint, or `None` if it
    /// was never registered.
    pub fn remove(&mut self, name: &str) -> Option<Endpoint> {
        self.endpoints.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.endpoints.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// All endpoints, sorted by name.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values()
    }

    /// Endpoints that produce at least one event, sorted by name.
    pub fn producers(&self) -> Vec<&Endpoint> {
        self.endpoints
            .values()
            .filter(|e| e.is_producer())
            .collect()
    }

    /// Endpoints that consume at least one event, sorted by name.
    pub fn consumers(&self) -> Vec<&Endpoint> {
        self.endpoints
            .values()
            .filter(|e| e.is_consumer())
            .collect()
    }
}
