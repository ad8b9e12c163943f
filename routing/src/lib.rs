use registry::EndpointRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("producer and consumer must be different tools")]
    SelfConnection,
    #[error("event '{0}' is not shared by this producer and consumer")]
    UnknownEvent(String),
}

/// One row of a connection snapshot: an event shared by the pair, whether
/// it is currently wired, and whether a host may toggle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWiring {
    pub event: String,
    pub connected: bool,
    pub enabled: bool,
}

/// Immutable snapshot of one directed connection. Events appear in the
/// order the producer declares them; flags reflect the table at the time
/// the snapshot was taken.
#[derive(Debug, Clone)]
pub struct ConnectionView {
    producer: String,
    consumer: String,
    events: Vec<String>,
    connected: HashSet<String>,
}

impl ConnectionView {
    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn consumer(&self) -> &str {
        &self.consumer
    }

    /// Events the producer emits that the consumer can receive, in the
    /// producer's declaration order. Empty when either endpoint is
    /// unknown.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn is_connected(&self, event: &str) -> Result<bool, ConnectionError> {
        if !self.events.iter().any(|e| e == event) {
            return Err(ConnectionError::UnknownEvent(event.to_string()));
        }
        Ok(self.connected.contains(event))
    }

    pub fn connected_count(&self) -> usize {
        self.connected.len()
    }

    pub fn wirings(&self) -> Vec<EventWiring> {
        self.events
            .iter()
            .map(|event| EventWiring {
                event: event.clone(),
                connected: self.connected.contains(event),
                enabled: true,
            })
            .collect()
    }
}

/// Outcome of a bulk toggle. Best-effort: failed events are recorded and
/// do not abort the rest, so callers re-query instead of trusting the
/// report to describe final state.
#[derive(Debug, Clone, Default)]
pub struct BulkReport {
    pub toggled: Vec<ToggledEvent>,
    pub skipped: usize,
    pub failures: Vec<(String, ConnectionError)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggledEvent {
    pub producer: String,
    pub consumer: String,
    pub event: String,
    pub connected: bool,
}

/// Per-(producer, consumer) wiring flags keyed by event name. Event sets
/// are never stored here; they are recomputed from the registry on every
/// query, so views for removed endpoints come back empty.
#[derive(Debug, Clone, Default)]
pub struct ConnectionTable {
    connected: HashMap<(String, String), HashSet<String>>,
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn shared_events(
        registry: &EndpointRegistry,
        producer: &str,
        consumer: &str,
    ) -> Vec<String> {
        let (Some(producer), Some(consumer)) = (registry.get(producer), registry.get(consumer))
        else {
            return Vec::new();
        };
        producer
            .produced_events
            .iter()
            .filter(|event| consumer.consumed_events.contains(event))
            .cloned()
            .collect()
    }

    /// Snapshot of the directed connection from `producer` to `consumer`.
    /// Unknown endpoints degrade to an empty event set; a self pair is
    /// rejected.
    pub fn connection(
        &self,
        registry: &EndpointRegistry,
        producer: &str,
        consumer: &str,
    ) -> Result<ConnectionView, ConnectionError> {
        if producer == consumer {
            return Err(ConnectionError::SelfConnection);
        }
        let events = Self::shared_events(registry, producer, consumer);
        let connected = self
            .connected
            .get(&(producer.to_string(), consumer.to_string()))
            .map(|flags| {
                flags
                    .iter()
                    .filter(|event| events.contains(event))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(ConnectionView {
            producer: producer.to_string(),
            consumer: consumer.to_string(),
            events,
            connected,
        })
    }

    /// Wires `event` from `producer` to `consumer`. Returns whether the
    /// flag actually changed; re-connecting an already wired event is a
    /// no-op.
    pub fn connect(
        &mut self,
        registry: &EndpointRegistry,
        producer: &str,
        consumer: &str,
        event: &str,
    ) -> Result<bool, ConnectionError> {
        self.set_connected(registry, producer, consumer, event, true)
    }

    /// Unwires `event`. Symmetric to [`ConnectionTable::connect`].
    pub fn disconnect(
        &mut self,
        registry: &EndpointRegistry,
        producer: &str,
        consumer: &str,
        event: &str,
    ) -> Result<bool, ConnectionError> {
        self.set_connected(registry, producer, consumer, event, false)
    }

    fn set_connected(
        &mut self,
        registry: &EndpointRegistry,
        producer: &str,
        consumer: &str,
        event: &str,
        enable: bool,
    ) -> Result<bool, ConnectionError> {
        if producer == consumer {
            return Err(ConnectionError::SelfConnection);
        }
        let events = Self::shared_events(registry, producer, consumer);
        if !events.iter().any(|e| e == event) {
            return Err(ConnectionError::UnknownEvent(event.to_string()));
        }
        let flags = self
            .connected
            .entry((producer.to_string(), consumer.to_string()))
            .or_default();
        let changed = if enable {
            flags.insert(event.to_string())
        } else {
            flags.remove(event)
        };
        Ok(changed)
    }

    /// Toggles every shared event in both directions (`a`→`b` and
    /// `b`→`a`) to `enable`. Best-effort and non-atomic: per-event
    /// failures are collected in the report and do not stop the
    /// remaining toggles.
    pub fn connect_all(
        &mut self,
        registry: &EndpointRegistry,
        a: &str,
        b: &str,
        enable: bool,
    ) -> Result<BulkReport, ConnectionError> {
        if a == b {
            return Err(ConnectionError::SelfConnection);
        }
        let mut report = BulkReport::default();
        for (producer, consumer) in [(a, b), (b, a)] {
            for event in Self::shared_events(registry, producer, consumer) {
                match self.set_connected(registry, producer, consumer, &event, enable) {
                    Ok(true) => report.toggled.push(ToggledEvent {
                        producer: producer.to_string(),
                        consumer: consumer.to_string(),
                        event,
                        connected: enable,
                    }),
                    Ok(false) => report.skipped += 1,
                    Err(err) => report.failures.push((event, err)),
                }
            }
        }
        Ok(report)
    }

    /// Drops every stored flag set referencing `name` in either position.
    /// Called when an endpoint leaves the workspace so its wiring is
    /// never silently resurrected.
    pub fn drop_endpoint(&mut self, name: &str) {
        self.connected
            .retain(|(producer, consumer), _| producer != name && consumer != name);
    }
}
