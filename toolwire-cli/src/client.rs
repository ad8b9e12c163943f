use crate::protocol::{DaemonRequest, DaemonResponse, DEFAULT_SOCKET_PATH};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;

/// Sends one request to the routing daemon and waits for its single
/// response line.
pub fn send_request(request: &DaemonRequest) -> Result<DaemonResponse, String> {
    send_request_to(DEFAULT_SOCKET_PATH, request)
}

pub fn send_request_to(
    socket_path: &str,
    request: &DaemonRequest,
) -> Result<DaemonResponse, String> {
    let stream = UnixStream::connect(socket_path)
        .map_err(|e| format!("No routing daemon at {socket_path} ({e})"))?;
    write_request(&stream, request)?;
    read_response(stream)
}

fn write_request(mut stream: &UnixStream, request: &DaemonRequest) -> Result<(), String> {
    let mut payload = serde_json::to_vec(request).map_err(|e| e.to_string())?;
    payload.push(b'\n');
    stream.write_all(&payload).map_err(|e| e.to_string())
}

fn read_response(stream: UnixStream) -> Result<DaemonResponse, String> {
    let mut line = String::new();
    BufReader::new(stream)
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    let line = line.trim();
    if line.is_empty() {
        return Err("Routing daemon closed the connection without replying".to_string());
    }
    serde_json::from_str(line).map_err(|e| format!("Malformed daemon response: {e}"))
}
