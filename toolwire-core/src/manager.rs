use crate::observer::{LogObserver, RosterKind, RoutingObserver};
use registry::{Endpoint, EndpointRegistry};
use routing::{BulkReport, ConnectionError, ConnectionTable, ConnectionView, EventWiring};

/// Connected-versus-total counts for one directed pair, used by hosts to
/// enable their "connect all" / "disconnect all" actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionSummary {
    pub connected: usize,
    pub total: usize,
}

impl ConnectionSummary {
    pub fn can_connect_all(&self) -> bool {
        self.connected < self.total
    }

    pub fn can_disconnect_all(&self) -> bool {
        self.connected > 0
    }
}

/// Owns the endpoint roster and the connection table and keeps them
/// consistent across tool lifecycle events. All mutation goes through
/// `&mut self`, so one manager instance is one serialization domain;
/// embedders sharing a manager across threads wrap it in a mutex.
pub struct RoutingManager {
    registry: EndpointRegistry,
    table: ConnectionTable,
    observer: Box<dyn RoutingObserver>,
}

impl Default for RoutingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingManager {
    pub fn new() -> Self {
        Self::with_observer(Box::new(LogObserver))
    }

    pub fn with_observer(observer: Box<dyn RoutingObserver>) -> Self {
        Self {
            registry: EndpointRegistry::new(),
            table: ConnectionTable::new(),
            observer,
        }
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Tool joined the workspace. Idempotent by name.
    pub fn tool_added(&mut self, endpoint: Endpoint) {
        self.registry.add(endpoint);
    }

    /// Tool left the workspace. Every connection referencing it, in
    /// either position, is dropped with it.
    pub fn tool_removed(&mut self, name: &str) {
        if self.registry.remove(name).is_some() {
            self.table.drop_endpoint(name);
        }
    }

    pub fn producers(&self) -> Vec<&Endpoint> {
        let producers = self.registry.producers();
        if producers.is_empty() {
            self.observer.roster_empty(RosterKind::Producers);
        }
        producers
    }

    pub fn consumers(&self) -> Vec<&Endpoint> {
        let consumers = self.registry.consumers();
        if consumers.is_empty() {
            self.observer.roster_empty(RosterKind::Consumers);
        }
        consumers
    }

    pub fn connection(
        &self,
        producer: &str,
        consumer: &str,
    ) -> Result<ConnectionView, ConnectionError> {
        self.table.connection(&self.registry, producer, consumer)
    }

    /// Snapshot rows for one directed pair: the single query call hosts
    /// render from, instead of holding parallel mutable arrays.
    pub fn connection_view(
        &self,
        producer: &str,
        consumer: &str,
    ) -> Result<Vec<EventWiring>, ConnectionError> {
        Ok(self.connection(producer, consumer)?.wirings())
    }

    pub fn summary(
        &self,
        producer: &str,
        consumer: &str,
    ) -> Result<ConnectionSummary, ConnectionError> {
        let view = self.connection(producer, consumer)?;
        Ok(ConnectionSummary {
            connected: view.connected_count(),
            total: view.events().len(),
        })
    }

    pub fn connect(
        &mut self,
        producer: &str,
        consumer: &str,
        event: &str,
    ) -> Result<(), ConnectionError> {
        let changed = self
            .table
            .connect(&self.registry, producer, consumer, event)?;
        if changed {
            self.observer
                .connection_changed(producer, consumer, event, true);
        }
        Ok(())
    }

    pub fn disconnect(
        &mut self,
        producer: &str,
        consumer: &str,
        event: &str,
    ) -> Result<(), ConnectionError> {
        let changed = self
            .table
            .disconnect(&self.registry, producer, consumer, event)?;
        if changed {
            self.observer
                .connection_changed(producer, consumer, event, false);
        }
        Ok(())
    }

    /// Bulk toggle of both directions between `a` and `b`. Best-effort;
    /// see [`ConnectionTable::connect_all`].
    pub fn connect_all(
        &mut self,
        a: &str,
        b: &str,
        enable: bool,
    ) -> Result<BulkReport, ConnectionError> {
        let report = self.table.connect_all(&self.registry, a, b, enable)?;
        for toggled in &report.toggled {
            self.observer.connection_changed(
                &toggled.producer,
                &toggled.consumer,
                &toggled.event,
                toggled.connected,
            );
        }
        Ok(report)
    }
}
