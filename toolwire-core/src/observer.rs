#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterKind {
    Producers,
    Consumers,
}

/// Host hooks for routing state changes. All methods default to no-ops;
/// correctness never depends on an observer being installed.
pub trait RoutingObserver {
    /// Fired once per actual transition. Idempotent re-connects and
    /// re-disconnects do not reach here.
    fn connection_changed(&self, producer: &str, consumer: &str, event: &str, connected: bool) {
        let _ = (producer, consumer, event, connected);
    }

    /// Fired when a roster query finds no producers or no consumers.
    fn roster_empty(&self, kind: RosterKind) {
        let _ = kind;
    }
}

/// Observer that routes notifications to the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl RoutingObserver for LogObserver {
    fn connection_changed(&self, producer: &str, consumer: &str, event: &str, connected: bool) {
        if connected {
            log::info!(
                "Tool Connection: Connected consumer {consumer} to producer {producer} for event {event}"
            );
        } else {
            log::info!(
                "Tool Connection: Disconnected consumer {consumer} from producer {producer} for event {event}"
            );
        }
    }

    fn roster_empty(&self, kind: RosterKind) {
        match kind {
            RosterKind::Producers => log::info!("Tool Connection: No tool generates events"),
            RosterKind::Consumers => log::info!("Tool Connection: No tool consumes any events"),
        }
    }
}
