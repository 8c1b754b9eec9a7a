use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ticketboard",
    about = "In-memory translation ticket board served over HTTP",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the board over HTTP
    Serve(ServeArgs),
    /// Print the tickets stored in an export directory
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub host: Option<IpAddr>,
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Export directory to load before serving
    #[arg(long)]
    pub import: Option<PathBuf>,
    /// Directory that receives export snapshots
    #[arg(long)]
    pub export_root: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    pub dir: PathBuf,
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["ticketboard", "serve"]).unwrap();
        assert!(!cli.verbose);
        let Command::Serve(args) = cli.command else {
            panic!("wrong command");
        };
        assert!(args.port.is_none());
        assert!(args.import.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "ticketboard",
            "-v",
            "serve",
            "--port",
            "9000",
            "--host",
            "0.0.0.0",
            "--import",
            "/data/snap",
            "--export-root",
            "/data",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Command::Serve(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.host, Some("0.0.0.0".parse().unwrap()));
        assert_eq!(args.import, Some(PathBuf::from("/data/snap")));
        assert_eq!(args.export_root, Some(PathBuf::from("/data")));
    }

    #[test]
    fn parse_inspect_json() {
        let cli =
            Cli::try_parse_from(["ticketboard", "inspect", "snap", "--format", "json"]).unwrap();
        let Command::Inspect(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.dir, PathBuf::from("snap"));
        assert!(matches!(args.format, OutputFormat::Json));
    }

    #[test]
    fn bad_port_rejected() {
        assert!(Cli::try_parse_from(["ticketboard", "serve", "--port", "99999"]).is_err());
    }
}
