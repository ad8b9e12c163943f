use crate::commands::*;
use crate::output::*;
use toolwire_cli::{
    client, daemon,
    protocol::{DaemonRequest, DaemonResponse},
};

pub fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Daemon { command } => handle_daemon_command(command)?,
        Commands::Endpoint { command } => handle_endpoint_command(command)?,
        Commands::Producers => dispatch(DaemonRequest::ProducerList)?,
        Commands::Consumers => dispatch(DaemonRequest::ConsumerList)?,
        Commands::Connection { command } => handle_connection_command(command)?,
        Commands::Roster { command } => handle_roster_command(command)?,
    }
    Ok(())
}

fn handle_daemon_command(command: DaemonCommands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        DaemonCommands::Run => {
            daemon::run_daemon()?;
        }
        DaemonCommands::Stop => dispatch(DaemonRequest::DaemonStop)?,
    }
    Ok(())
}

fn handle_endpoint_command(command: EndpointCommands) -> Result<(), Box<dyn std::error::Error>> {
    let request = match command {
        EndpointCommands::Add {
            name,
            produces,
            consumes,
        } => DaemonRequest::EndpointAdd {
            name,
            produces,
            consumes,
        },
        EndpointCommands::Remove { name } => DaemonRequest::EndpointRemove { name },
        EndpointCommands::List => DaemonRequest::EndpointList,
    };
    dispatch(request)
}

fn handle_connection_command(
    command: ConnectionCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = match command {
        ConnectionCommands::Show { producer, consumer } => {
            DaemonRequest::ConnectionShow { producer, consumer }
        }
        ConnectionCommands::Connect {
            producer,
            consumer,
            event,
        } => DaemonRequest::Connect {
            producer,
            consumer,
            event,
        },
        ConnectionCommands::Disconnect {
            producer,
            consumer,
            event,
        } => DaemonRequest::Disconnect {
            producer,
            consumer,
            event,
        },
        ConnectionCommands::ConnectAll { a, b } => DaemonRequest::ConnectAll {
            a,
            b,
            enable: true,
        },
        ConnectionCommands::DisconnectAll { a, b } => DaemonRequest::ConnectAll {
            a,
            b,
            enable: false,
        },
    };
    dispatch(request)
}

fn handle_roster_command(command: RosterCommands) -> Result<(), Box<dyn std::error::Error>> {
    let request = match command {
        RosterCommands::List { dir } => DaemonRequest::RosterList { dir },
        RosterCommands::Load { path } => DaemonRequest::RosterLoad { path },
        RosterCommands::Save { path, name } => DaemonRequest::RosterSave { path, name },
    };
    dispatch(request)
}

fn dispatch(request: DaemonRequest) -> Result<(), Box<dyn std::error::Error>> {
    let response = client::send_request(&request)?;
    print_response(response);
    Ok(())
}

fn print_response(response: DaemonResponse) {
    match response {
        DaemonResponse::Ok { message } => print_info(&message),
        DaemonResponse::Error { message } => print_error(&message),
        DaemonResponse::EndpointList { endpoints } => print_endpoint_list(&endpoints),
        DaemonResponse::ConnectionShow {
            producer,
            consumer,
            wirings,
            connected,
            total,
        } => print_wirings(&producer, &consumer, &wirings, connected, total),
        DaemonResponse::BulkResult { report } => print_bulk_report(&report),
        DaemonResponse::RosterList { rosters } => print_roster_list(&rosters),
    }
}
