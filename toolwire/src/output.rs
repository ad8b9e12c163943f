use toolwire_cli::protocol::{BulkSummary, EndpointSummary, RosterSummary, WiringSummary};

pub fn print_info(message: &str) {
    println!("[Toolwire][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[Toolwire][ERROR] {message}");
}

pub fn print_endpoint_list(endpoints: &[EndpointSummary]) {
    if endpoints.is_empty() {
        print_info("No endpoints");
        return;
    }
    for endpoint in endpoints {
        let produces = endpoint.produced_events.join(", ");
        let consumes = endpoint.consumed_events.join(", ");
        println!(
            "{} (produces: [{}], consumes: [{}])",
            endpoint.name, produces, consumes
        );
    }
}

pub fn print_wirings(
    producer: &str,
    consumer: &str,
    wirings: &[WiringSummary],
    connected: usize,
    total: usize,
) {
    if wirings.is_empty() {
        print_info(&format!("No shared events between {producer} and {consumer}"));
        return;
    }
    print_info(&format!(
        "{producer} -> {consumer}: {connected} of {total} events connected"
    ));
    for wiring in wirings {
        let mark = if wiring.connected { "x" } else { " " };
        println!("[{mark}] {}", wiring.event);
    }
}

pub fn print_bulk_report(report: &BulkSummary) {
    print_info(&format!(
        "Toggled {} events ({} already in place)",
        report.toggled, report.skipped
    ));
    for failure in &report.failures {
        print_error(failure);
    }
}

pub fn print_roster_list(rosters: &[RosterSummary]) {
    if rosters.is_empty() {
        print_info("No rosters found");
        return;
    }
    for roster in rosters {
        println!(
            "{} ({} endpoints) {}",
            roster.name, roster.endpoints, roster.path
        );
    }
}
