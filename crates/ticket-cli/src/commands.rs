use std::net::SocketAddr;

use anyhow::Context;
use colored::Colorize;
use ticket_server::{ServerConfig, TicketServer};
use ticket_store::archive;
use ticket_types::Ticket;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

/// Resolve the server configuration: file first, then flags on top.
pub fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if args.host.is_some() || args.port.is_some() {
        let host = args.host.unwrap_or(config.bind_addr.ip());
        let port = args.port.unwrap_or(config.bind_addr.port());
        config.bind_addr = SocketAddr::new(host, port);
    }
    if let Some(dir) = &args.import {
        config.import_dir = Some(dir.clone());
    }
    if let Some(root) = &args.export_root {
        config.board.export_root = root.clone();
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    println!(
        "{} Ticket board on {} (exports to {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.board.export_root.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(TicketServer::new(config).serve())?;
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let mut tickets = archive::import_tickets(&args.dir)
        .with_context(|| format!("reading {}", args.dir.display()))?;
    tickets.sort_by_key(|t| t.id);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tickets)?),
        OutputFormat::Text => {
            if tickets.is_empty() {
                println!("No tickets.");
            }
            for ticket in &tickets {
                print_ticket(ticket);
            }
        }
    }
    Ok(())
}

fn print_ticket(ticket: &Ticket) {
    let state = if ticket.complete {
        "complete".green()
    } else {
        "pending".yellow()
    };
    println!("{}  {}", format!("#{}", ticket.id).yellow().bold(), state);
    println!("  {} {}", ticket.message_type.cyan(), ticket.message);
    if !ticket.response_type.is_empty() || !ticket.response.is_empty() {
        println!("  {} {}", ticket.response_type.cyan(), ticket.response);
    }
}
