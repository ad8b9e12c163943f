use toolwire_cli::daemon::endpoint_handler;
use toolwire_cli::protocol::DaemonResponse;
use toolwire_core::RoutingManager;

#[test]
fn endpoint_add_drops_blank_event_names() {
    let mut manager = RoutingManager::new();
    let response = endpoint_handler::endpoint_add(
        &mut manager,
        "IDAPro".to_string(),
        vec![
            "Open".to_string(),
            String::new(),
            "  ".to_string(),
            "Close".to_string(),
        ],
        vec![String::new()],
    );
    assert!(matches!(response, DaemonResponse::Ok { .. }));

    let endpoint = manager.registry().get("IDAPro").expect("endpoint added");
    assert_eq!(endpoint.produced_events, vec!["Open", "Close"]);
    assert!(endpoint.consumed_events.is_empty());
    // With no real consumed events this endpoint is not a consumer.
    assert!(!endpoint.is_consumer());
}

#[test]
fn endpoint_add_trims_event_names() {
    let mut manager = RoutingManager::new();
    endpoint_handler::endpoint_add(
        &mut manager,
        "Notepad".to_string(),
        Vec::new(),
        vec![" Open ".to_string()],
    );

    let endpoint = manager.registry().get("Notepad").expect("endpoint added");
    assert_eq!(endpoint.consumed_events, vec!["Open"]);
}

#[test]
fn endpoint_add_rejects_blank_name() {
    let mut manager = RoutingManager::new();
    let response = endpoint_handler::endpoint_add(
        &mut manager,
        "   ".to_string(),
        vec!["Open".to_string()],
        Vec::new(),
    );
    assert!(matches!(response, DaemonResponse::Error { .. }));
    assert!(manager.registry().is_empty());
}
