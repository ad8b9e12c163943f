use crate::protocol::{DaemonResponse, EndpointSummary, RosterSummary};
use registry::Endpoint;
use std::path::Path;
use toolwire_core::{scan_roster_entries, RosterDefinition, RoutingManager};

fn summarize(endpoints: &[&Endpoint]) -> Vec<EndpointSummary> {
    endpoints
        .iter()
        .map(|endpoint| EndpointSummary {
            name: endpoint.name.clone(),
            produced_events: endpoint.produced_events.clone(),
            consumed_events: endpoint.consumed_events.clone(),
        })
        .collect()
}

pub fn endpoint_list(manager: &RoutingManager) -> DaemonResponse {
    let endpoints = manager
        .registry()
        .endpoints()
        .map(|endpoint| EndpointSummary {
            name: endpoint.name.clone(),
            produced_events: endpoint.produced_events.clone(),
            consumed_events: endpoint.consumed_events.clone(),
        })
        .collect();
    DaemonResponse::EndpointList { endpoints }
}

fn clean_event_names(events: Vec<String>) -> Vec<String> {
    events
        .into_iter()
        .map(|event| event.trim().to_string())
        .filter(|event| !event.is_empty())
        .collect()
}

pub fn endpoint_add(
    manager: &mut RoutingManager,
    name: String,
    produces: Vec<String>,
    consumes: Vec<String>,
) -> DaemonResponse {
    if name.trim().is_empty() {
        return DaemonResponse::Error {
            message: "Endpoint name must not be empty".to_string(),
        };
    }
    // Comma-delimited CLI input can carry empty items; blank event names
    // must never enter an intersection.
    manager.tool_added(Endpoint::new(
        name.trim(),
        clean_event_names(produces),
        clean_event_names(consumes),
    ));
    DaemonResponse::Ok {
        message: "Endpoint added".to_string(),
    }
}

pub fn endpoint_remove(manager: &mut RoutingManager, name: &str) -> DaemonResponse {
    // Silent when absent, like the registry itself.
    manager.tool_removed(name);
    DaemonResponse::Ok {
        message: "Endpoint removed".to_string(),
    }
}

pub fn producer_list(manager: &RoutingManager) -> DaemonResponse {
    DaemonResponse::EndpointList {
        endpoints: summarize(&manager.producers()),
    }
}

pub fn consumer_list(manager: &RoutingManager) -> DaemonResponse {
    DaemonResponse::EndpointList {
        endpoints: summarize(&manager.consumers()),
    }
}

pub fn roster_list(dir: &str) -> DaemonResponse {
    let rosters = scan_roster_entries(Path::new(dir))
        .into_iter()
        .map(|entry| RosterSummary {
            name: entry.name,
            description: entry.description,
            endpoints: entry.endpoints,
            path: entry.path.to_string_lossy().to_string(),
        })
        .collect();
    DaemonResponse::RosterList { rosters }
}

/// Replaces the live roster with the file's declarations. Current
/// endpoints are removed first, which also drops their connections.
pub fn roster_load(manager: &mut RoutingManager, path: &str) -> DaemonResponse {
    let roster = match RosterDefinition::load_from_file(path) {
        Ok(roster) => roster,
        Err(err) => {
            return DaemonResponse::Error {
                message: format!("Failed to load roster: {err}"),
            }
        }
    };

    let current: Vec<String> = manager
        .registry()
        .endpoints()
        .map(|e| e.name.clone())
        .collect();
    for name in current {
        manager.tool_removed(&name);
    }
    let count = roster.endpoints.len();
    for endpoint in roster.endpoints {
        manager.tool_added(endpoint);
    }
    DaemonResponse::Ok {
        message: format!("Loaded roster '{}' with {count} endpoints", roster.name),
    }
}

pub fn roster_save(manager: &RoutingManager, path: &str, name: &str) -> DaemonResponse {
    let endpoints: Vec<Endpoint> = manager.registry().endpoints().cloned().collect();

    let roster = RosterDefinition {
        name: name.to_string(),
        description: String::new(),
        endpoints,
    };
    match roster.save_to_file(path) {
        Ok(()) => DaemonResponse::Ok {
            message: format!("Saved roster '{name}'"),
        },
        Err(err) => DaemonResponse::Error {
            message: format!("Failed to save roster: {err}"),
        },
    }
}
