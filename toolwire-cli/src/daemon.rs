pub mod connection_handler;
pub mod endpoint_handler;

use crate::protocol::{DaemonRequest, DaemonResponse, DEFAULT_SOCKET_PATH};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use toolwire_core::RoutingManager;

enum ClientOutcome {
    Continue,
    Stop,
}

pub fn run_daemon() -> Result<(), String> {
    run_daemon_at(DEFAULT_SOCKET_PATH)
}

/// Accepts one JSON request line per connection and dispatches it against
/// a single manager instance, so all mutation is serialized on this
/// thread. Returns once a `DaemonStop` request is served.
pub fn run_daemon_at(socket_path: &str) -> Result<(), String> {
    let mut manager = RoutingManager::new();

    if std::path::Path::new(socket_path).exists() {
        let _ = std::fs::remove_file(socket_path);
    }
    let listener = UnixListener::bind(socket_path)
        .map_err(|e| format!("Failed to bind daemon socket: {e}"))?;
    log::info!("toolwire daemon listening on {socket_path}");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => match handle_client(stream, &mut manager) {
                Ok(ClientOutcome::Continue) => {}
                Ok(ClientOutcome::Stop) => break,
                Err(err) => {
                    eprintln!("Daemon client error: {err}");
                }
            },
            Err(err) => {
                eprintln!("Daemon accept error: {err}");
            }
        }
    }

    let _ = std::fs::remove_file(socket_path);
    Ok(())
}

fn handle_client(stream: UnixStream, manager: &mut RoutingManager) -> Result<ClientOutcome, String> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| e.to_string())?;
    let request: DaemonRequest =
        serde_json::from_str(line.trim()).map_err(|e| e.to_string())?;
    let mut stream = reader.into_inner();

    let mut outcome = ClientOutcome::Continue;
    let response = match request {
        DaemonRequest::EndpointList => endpoint_handler::endpoint_list(manager),
        DaemonRequest::EndpointAdd {
            name,
            produces,
            consumes,
        } => endpoint_handler::endpoint_add(manager, name, produces, consumes),
        DaemonRequest::EndpointRemove { name } => {
            endpoint_handler::endpoint_remove(manager, &name)
        }
        DaemonRequest::ProducerList => endpoint_handler::producer_list(manager),
        DaemonRequest::ConsumerList => endpoint_handler::consumer_list(manager),
        DaemonRequest::ConnectionShow { producer, consumer } => {
            connection_handler::connection_show(manager, &producer, &consumer)
        }
        DaemonRequest::Connect {
            producer,
            consumer,
            event,
        } => connection_handler::connect(manager, &producer, &consumer, &event),
        DaemonRequest::Disconnect {
            producer,
            consumer,
            event,
        } => connection_handler::disconnect(manager, &producer, &consumer, &event),
        DaemonRequest::ConnectAll { a, b, enable } => {
            connection_handler::connect_all(manager, &a, &b, enable)
        }
        DaemonRequest::RosterList { dir } => endpoint_handler::roster_list(&dir),
        DaemonRequest::RosterLoad { path } => endpoint_handler::roster_load(manager, &path),
        DaemonRequest::RosterSave { path, name } => {
            endpoint_handler::roster_save(manager, &path, &name)
        }
        DaemonRequest::DaemonStop => {
            outcome = ClientOutcome::Stop;
            DaemonResponse::Ok {
                message: "Daemon stopping".to_string(),
            }
        }
    };

    send_response(&mut stream, &response)?;
    Ok(outcome)
}

fn send_response(stream: &mut impl Write, response: &DaemonResponse) -> Result<(), String> {
    let payload = serde_json::to_string(response).map_err(|e| e.to_string())?;
    stream
        .write_all(format!("{payload}\n").as_bytes())
        .map_err(|e| e.to_string())?;
    Ok(())
}
