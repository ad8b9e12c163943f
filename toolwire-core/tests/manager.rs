use registry::Endpoint;
use routing::ConnectionError;
use std::cell::RefCell;
use std::rc::Rc;
use toolwire_core::{RosterKind, RoutingManager, RoutingObserver};

fn endpoint(name: &str, produces: &[&str], consumes: &[&str]) -> Endpoint {
    Endpoint::new(
        name,
        produces.iter().map(|s| s.to_string()).collect(),
        consumes.iter().map(|s| s.to_string()).collect(),
    )
}

#[derive(Default)]
struct Recorder {
    changes: Rc<RefCell<Vec<(String, String, String, bool)>>>,
    empty_rosters: Rc<RefCell<Vec<RosterKind>>>,
}

struct RecordingObserver {
    changes: Rc<RefCell<Vec<(String, String, String, bool)>>>,
    empty_rosters: Rc<RefCell<Vec<RosterKind>>>,
}

impl RoutingObserver for RecordingObserver {
    fn connection_changed(&self, producer: &str, consumer: &str, event: &str, connected: bool) {
        self.changes.borrow_mut().push((
            producer.to_string(),
            consumer.to_string(),
            event.to_string(),
            connected,
        ));
    }

    fn roster_empty(&self, kind: RosterKind) {
        self.empty_rosters.borrow_mut().push(kind);
    }
}

fn recording_manager() -> (RoutingManager, Recorder) {
    let recorder = Recorder::default();
    let observer = RecordingObserver {
        changes: Rc::clone(&recorder.changes),
        empty_rosters: Rc::clone(&recorder.empty_rosters),
    };
    (RoutingManager::with_observer(Box::new(observer)), recorder)
}

#[test]
fn observer_fires_once_per_real_transition() {
    let (mut manager, recorder) = recording_manager();
    manager.tool_added(endpoint("IDAPro", &["Open"], &[]));
    manager.tool_added(endpoint("Notepad", &[], &["Open"]));

    manager.connect("IDAPro", "Notepad", "Open").expect("connect");
    manager.connect("IDAPro", "Notepad", "Open").expect("re-connect");
    manager
        .disconnect("IDAPro", "Notepad", "Open")
        .expect("disconnect");
    manager
        .disconnect("IDAPro", "Notepad", "Open")
        .expect("re-disconnect");

    let changes = recorder.changes.borrow();
    assert_eq!(changes.len(), 2);
    assert_eq!(
        changes[0],
        (
            "IDAPro".to_string(),
            "Notepad".to_string(),
            "Open".to_string(),
            true
        )
    );
    assert!(!changes[1].3);
}

#[test]
fn empty_roster_hook_fires_per_kind() {
    let (mut manager, recorder) = recording_manager();
    assert!(manager.producers().is_empty());
    assert!(manager.consumers().is_empty());

    manager.tool_added(endpoint("IDAPro", &["Open"], &[]));
    assert_eq!(manager.producers().len(), 1);
    assert!(manager.consumers().is_empty());

    let kinds = recorder.empty_rosters.borrow();
    assert_eq!(
        *kinds,
        vec![
            RosterKind::Producers,
            RosterKind::Consumers,
            RosterKind::Consumers
        ]
    );
}

#[test]
fn tool_removed_drops_connections_both_ways() {
    let (mut manager, _recorder) = recording_manager();
    manager.tool_added(endpoint("Debugger", &["Break"], &["Open"]));
    manager.tool_added(endpoint("Editor", &["Open"], &["Break"]));
    manager.connect_all("Debugger", "Editor", true).expect("bulk");

    manager.tool_removed("Editor");
    let view = manager.connection("Debugger", "Editor").expect("valid pair");
    assert!(view.events().is_empty());

    // Re-join with the same declarations: wiring starts from scratch.
    manager.tool_added(endpoint("Editor", &["Open"], &["Break"]));
    let view = manager.connection("Debugger", "Editor").expect("valid pair");
    assert_eq!(view.is_connected("Break"), Ok(false));
    let reverse = manager.connection("Editor", "Debugger").expect("valid pair");
    assert_eq!(reverse.is_connected("Open"), Ok(false));
}

#[test]
fn summary_drives_bulk_button_enablement() {
    let (mut manager, _recorder) = recording_manager();
    manager.tool_added(endpoint("IDAPro", &["Open", "Close"], &[]));
    manager.tool_added(endpoint("Hexdump", &[], &["Open", "Close"]));

    let summary = manager.summary("IDAPro", "Hexdump").expect("summary");
    assert_eq!(summary.total, 2);
    assert_eq!(summary.connected, 0);
    assert!(summary.can_connect_all());
    assert!(!summary.can_disconnect_all());

    manager.connect("IDAPro", "Hexdump", "Open").expect("connect");
    let summary = manager.summary("IDAPro", "Hexdump").expect("summary");
    assert!(summary.can_connect_all());
    assert!(summary.can_disconnect_all());

    manager.connect("IDAPro", "Hexdump", "Close").expect("connect");
    let summary = manager.summary("IDAPro", "Hexdump").expect("summary");
    assert!(!summary.can_connect_all());
    assert!(summary.can_disconnect_all());
}

#[test]
fn connection_view_returns_snapshot_rows() {
    let (mut manager, _recorder) = recording_manager();
    manager.tool_added(endpoint("IDAPro", &["Open", "Close"], &[]));
    manager.tool_added(endpoint("Notepad", &[], &["Open"]));
    manager.connect("IDAPro", "Notepad", "Open").expect("connect");

    let rows = manager.connection_view("IDAPro", "Notepad").expect("view");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].event, "Open");
    assert!(rows[0].connected);
    assert!(rows[0].enabled);

    assert_eq!(
        manager.connection_view("Notepad", "Notepad").unwrap_err(),
        ConnectionError::SelfConnection
    );
}

#[test]
fn bulk_toggle_notifies_per_toggled_event() {
    let (mut manager, recorder) = recording_manager();
    manager.tool_added(endpoint("Debugger", &["Break"], &["Open"]));
    manager.tool_added(endpoint("Editor", &["Open"], &["Break"]));

    let report = manager.connect_all("Debugger", "Editor", true).expect("bulk");
    assert_eq!(report.toggled.len(), 2);
    assert_eq!(recorder.changes.borrow().len(), 2);

    // Second pass is all skips: no further notifications.
    let report = manager.connect_all("Debugger", "Editor", true).expect("bulk");
    assert!(report.toggled.is_empty());
    assert_eq!(report.skipped, 2);
    assert_eq!(recorder.changes.borrow().len(), 2);
}
