pub mod manager;
pub mod observer;
pub mod roster;

pub use manager::{ConnectionSummary, RoutingManager};
pub use observer::{LogObserver, RosterKind, RoutingObserver};
pub use roster::{scan_roster_entries, RosterDefinition, RosterEntry, RosterError};
