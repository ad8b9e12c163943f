use crate::protocol::{BulkSummary, DaemonResponse, WiringSummary};
use toolwire_core::RoutingManager;

pub fn connection_show(
    manager: &RoutingManager,
    producer: &str,
    consumer: &str,
) -> DaemonResponse {
    let view = match manager.connection(producer, consumer) {
        Ok(view) => view,
        Err(err) => {
            return DaemonResponse::Error {
                message: err.to_string(),
            }
        }
    };
    let wirings: Vec<WiringSummary> = view
        .wirings()
        .into_iter()
        .map(|wiring| WiringSummary {
            event: wiring.event,
            connected: wiring.connected,
            enabled: wiring.enabled,
        })
        .collect();
    let connected = wirings.iter().filter(|w| w.connected).count();
    let total = wirings.len();
    DaemonResponse::ConnectionShow {
        producer: producer.to_string(),
        consumer: consumer.to_string(),
        wirings,
        connected,
        total,
    }
}

pub fn connect(
    manager: &mut RoutingManager,
    producer: &str,
    consumer: &str,
    event: &str,
) -> DaemonResponse {
    match manager.connect(producer, consumer, event) {
        Ok(()) => DaemonResponse::Ok {
            message: format!("Connected {consumer} to {producer} for event {event}"),
        },
        Err(err) => DaemonResponse::Error {
            message: err.to_string(),
        },
    }
}

pub fn disconnect(
    manager: &mut RoutingManager,
    producer: &str,
    consumer: &str,
    event: &str,
) -> DaemonResponse {
    match manager.disconnect(producer, consumer, event) {
        Ok(()) => DaemonResponse::Ok {
            message: format!("Disconnected {consumer} from {producer} for event {event}"),
        },
        Err(err) => DaemonResponse::Error {
            message: err.to_string(),
        },
    }
}

pub fn connect_all(
    manager: &mut RoutingManager,
    a: &str,
    b: &str,
    enable: bool,
) -> DaemonResponse {
    match manager.connect_all(a, b, enable) {
        Ok(report) => DaemonResponse::BulkResult {
            report: BulkSummary {
                toggled: report.toggled.len(),
                skipped: report.skipped,
                failures: report
                    .failures
                    .iter()
                    .map(|(event, err)| format!("{event}: {err}"))
                    .collect(),
            },
        },
        Err(err) => DaemonResponse::Error {
            message: err.to_string(),
        },
    }
}
