use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "toolwire", version, about = "Event routing between workbench tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Daemon {
        #[command(subcommand)]
        command: DaemonCommands,
    },
    Endpoint {
        #[command(subcommand)]
        command: EndpointCommands,
    },
    /// List endpoints that produce at least one event
    Producers,
    /// List endpoints that consume at least one event
    Consumers,
    Connection {
        #[command(subcommand)]
        command: ConnectionCommands,
    },
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },
}

#[derive(Subcommand)]
pub enum DaemonCommands {
    /// Run the routing daemon in the foreground
    Run,
    /// Ask a running daemon to stop
    Stop,
}

#[derive(Subcommand)]
pub enum EndpointCommands {
    Add {
        name: String,
        /// Event names this endpoint produces
        #[arg(long, value_delimiter = ',')]
        produces: Vec<String>,
        /// Event names this endpoint consumes
        #[arg(long, value_delimiter = ',')]
        consumes: Vec<String>,
    },
    Remove {
        name: String,
    },
    List,
}

#[derive(Subcommand)]
pub enum ConnectionCommands {
    /// Show the shared events and wiring state for a directed pair
    Show {
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
    /// Wire every shared event in both directions between two endpoints
    ConnectAll {
        a: String,
        b: String,
    },
    /// Unwire every shared event in both directions between two endpoints
    DisconnectAll {
        a: String,
        b: String,
    },
}

#[derive(Subcommand)]
pub enum RosterCommands {
    List {
        dir: String,
    },
    Load {
        path: String,
    },
    Save {
        path: String,
        #[arg(long, default_value = "default")]
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_endpoint_add_with_event_lists() {
        let cli = Cli::try_parse_from([
            "toolwire",
            "endpoint",
            "add",
            "IDAPro",
            "--produces",
            "Open,Close",
        ])
        .expect("parse");
        match cli.command {
            Commands::Endpoint {
                command: EndpointCommands::Add { name, produces, .. },
            } => {
                assert_eq!(name, "IDAPro");
                assert_eq!(produces, vec!["Open", "Close"]);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn parses_connection_connect() {
        let cli = Cli::try_parse_from([
            "toolwire",
            "connection",
            "connect",
            "IDAPro",
            "Notepad",
            "Open",
        ])
        .expect("parse");
        match cli.command {
            Commands::Connection {
                command:
                    ConnectionCommands::Connect {
                        producer,
                        consumer,
                        event,
                    },
            } => {
                assert_eq!(producer, "IDAPro");
                assert_eq!(consumer, "Notepad");
                assert_eq!(event, "Open");
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn rejects_connection_connect_without_event() {
        let result =
            Cli::try_parse_from(["toolwire", "connection", "connect", "IDAPro", "Notepad"]);
        assert!(result.is_err());
    }
}
