use serde::{Deserialize, Serialize};

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/toolwire-daemon.sock";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSummary {
    pub name: String,
    pub produced_events: Vec<String>,
    pub consumed_events: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WiringSummary {
    pub event: String,
    pub connected: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSummary {
    pub toggled: usize,
    pub skipped: usize,
    pub failures: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSummary {
    pub name: String,
    pub description: String,
    pub endpoints: usize,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DaemonRequest {
    EndpointList,
    EndpointAdd {
        name: String,
        produces: Vec<String>,
        consumes: Vec<String>,
    },
    EndpointRemove {
        name: String,
    },
    ProducerList,
    ConsumerList,
    ConnectionShow {
        producer: String,
        consumer: String,
    },
    Connect {
        producer: String,
        consumer: String,
        event: String,
    },
    Disconnect {
        producer: String,
        consumer: String,
        event: String,
    },
    ConnectAll {
        a: String,
        b: String,
        enable: bool,
    },
    RosterList {
        dir: String,
    },
    RosterLoad {
        path: String,
    },
    RosterSave {
        path: String,
        name: String,
    },
    DaemonStop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DaemonResponse {
    Ok {
        message: String,
    },
    Error {
        message: String,
    },
    EndpointList {
        endpoints: Vec<EndpointSummary>,
    },
    ConnectionShow {
        producer: String,
        consumer: String,
        wirings: Vec<WiringSummary>,
        connected: usize,
        total: usize,
    },
    BulkResult {
        report: BulkSummary,
    },
    RosterList {
        rosters: Vec<RosterSummary>,
    },
}
