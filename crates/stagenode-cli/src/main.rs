use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod runtime;
mod sink;

#[derive(Parser, Debug)]
#[command(name = "stagenode")]
#[command(version)]
#[command(
    about = "Art-Net lighting node with PropLink control-server discovery.",
    long_about = None,
    after_help = "Examples:\n  stagenode --universe 1 --mode strip:8 --mac EC:DA:3B:AA:C1:60\n  stagenode --config node.json\n  stagenode --config node.json --universe 2 --check"
)]
struct Cli {
    /// Path to a JSON configuration file; flags override its values
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Art-Net universe (15-bit port address)
    #[arg(long)]
    universe: Option<u16>,

    /// Offset of the first channel within the packet data section
    #[arg(long)]
    first_channel: Option<usize>,

    /// Output mode: none, lamp, or strip:<count>
    #[arg(long)]
    mode: Option<String>,

    /// Node MAC address, XX:XX:XX:XX:XX:XX
    #[arg(long)]
    mac: Option<String>,

    /// IPv4 address reported in poll replies
    #[arg(long)]
    address: Option<Ipv4Addr>,

    /// Art-Net listening port
    #[arg(long)]
    artnet_port: Option<u16>,

    /// PropLink discovery port
    #[arg(long)]
    discovery_port: Option<u16>,

    /// Seconds between discovery beacons
    #[arg(long)]
    beacon_interval_secs: Option<u64>,

    /// Short node name (poll-reply port-name field)
    #[arg(long)]
    short_name: Option<String>,

    /// Long node name
    #[arg(long)]
    long_name: Option<String>,

    /// Free text for the poll-reply node report
    #[arg(long)]
    status_text: Option<String>,

    /// Validate the configuration, print it as JSON and exit
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    pub(crate) fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let file = match cli.config.as_deref() {
        Some(path) => config::load_file(path)?,
        None => config::FileConfig::default(),
    };

    let overrides = config::Overrides {
        universe: cli.universe,
        first_channel: cli.first_channel,
        mode: cli.mode,
        mac: cli.mac,
        address: cli.address,
        artnet_port: cli.artnet_port,
        discovery_port: cli.discovery_port,
        beacon_interval_secs: cli.beacon_interval_secs,
        short_name: cli.short_name,
        long_name: cli.long_name,
        status_text: cli.status_text,
    };
    let node = config::resolve(file, overrides)?;

    if cli.check {
        let summary = config::summarize(&node);
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|err| CliError::new(format!("JSON serialization failed: {err}"), None))?;
        println!("{json}");
        return Ok(());
    }

    runtime::run(node).map_err(CliError::from)
}
