//! Configuration layer: JSON file values merged with CLI overrides into
//! a fully resolved node configuration.

use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stagenode_core::protocols::proplink;
use stagenode_core::{
    ARTNET_PORT, DISCOVERY_INTERVAL_SECS, DISCOVERY_PORT, DeviceIdentity, OutputMode,
    PortAddress, SessionConfig,
};

use crate::CliError;

/// Optional values as they appear in the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub universe: Option<u16>,
    pub first_channel: Option<usize>,
    pub mode: Option<String>,
    pub mac: Option<String>,
    pub address: Option<Ipv4Addr>,
    pub artnet_port: Option<u16>,
    pub discovery_port: Option<u16>,
    pub beacon_interval_secs: Option<u64>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub status_text: Option<String>,
    pub firmware_version: Option<u16>,
    pub oem_code: Option<u16>,
    pub esta_code: Option<u16>,
}

/// CLI flag values; each `Some` wins over the file value.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub universe: Option<u16>,
    pub first_channel: Option<usize>,
    pub mode: Option<String>,
    pub mac: Option<String>,
    pub address: Option<Ipv4Addr>,
    pub artnet_port: Option<u16>,
    pub discovery_port: Option<u16>,
    pub beacon_interval_secs: Option<u64>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub status_text: Option<String>,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub(crate) struct NodeConfig {
    pub identity: DeviceIdentity,
    pub session: SessionConfig,
    pub mac: String,
    pub artnet_port: u16,
    pub discovery_port: u16,
    pub beacon_interval: Duration,
}

pub(crate) fn load_file(path: &Path) -> Result<FileConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|err| {
        CliError::new(
            format!("failed to read config file {}: {err}", path.display()),
            Some("pass a readable JSON file via -c/--config".to_string()),
        )
    })?;
    serde_json::from_str(&text).map_err(|err| {
        CliError::new(
            format!("invalid config file {}: {err}", path.display()),
            Some("see --help for the recognized fields".to_string()),
        )
    })
}

pub(crate) fn resolve(file: FileConfig, overrides: Overrides) -> Result<NodeConfig, CliError> {
    let mode_text = overrides
        .mode
        .or(file.mode)
        .unwrap_or_else(|| "none".to_string());
    let mode = parse_mode(&mode_text)?;

    let mac = overrides
        .mac
        .or(file.mac)
        .unwrap_or_else(|| "00:00:00:00:00:00".to_string());
    proplink::validate_mac(&mac).map_err(|err| {
        CliError::new(
            format!("invalid MAC address '{mac}': {err}"),
            Some("expected the 17-character form XX:XX:XX:XX:XX:XX".to_string()),
        )
    })?;

    let beacon_interval_secs = overrides
        .beacon_interval_secs
        .or(file.beacon_interval_secs)
        .unwrap_or(DISCOVERY_INTERVAL_SECS);
    if beacon_interval_secs == 0 {
        return Err(CliError::new(
            "beacon interval must be at least one second",
            Some("use --beacon-interval-secs with a positive value".to_string()),
        ));
    }

    let artnet_port = overrides
        .artnet_port
        .or(file.artnet_port)
        .unwrap_or(ARTNET_PORT);

    let identity = DeviceIdentity {
        address: overrides
            .address
            .or(file.address)
            .unwrap_or(Ipv4Addr::UNSPECIFIED),
        port: artnet_port,
        firmware_version: file.firmware_version.unwrap_or(0x0100),
        short_name: overrides
            .short_name
            .or(file.short_name)
            .unwrap_or_else(|| "stagenode".to_string()),
        long_name: overrides
            .long_name
            .or(file.long_name)
            .unwrap_or_else(|| "stagenode lighting prop".to_string()),
        oem_code: file.oem_code.unwrap_or(0x00ff),
        esta_code: file.esta_code.unwrap_or(0x7ff0),
        status_text: overrides
            .status_text
            .or(file.status_text)
            .unwrap_or_else(|| "running".to_string()),
    };

    Ok(NodeConfig {
        identity,
        session: SessionConfig {
            universe: PortAddress::new(overrides.universe.or(file.universe).unwrap_or(0)),
            first_channel: overrides
                .first_channel
                .or(file.first_channel)
                .unwrap_or(0),
            mode,
        },
        mac,
        artnet_port,
        discovery_port: overrides
            .discovery_port
            .or(file.discovery_port)
            .unwrap_or(DISCOVERY_PORT),
        beacon_interval: Duration::from_secs(beacon_interval_secs),
    })
}

fn parse_mode(text: &str) -> Result<OutputMode, CliError> {
    let hint = Some("expected none, lamp, or strip:<count>".to_string());
    match text {
        "none" => Ok(OutputMode::None),
        "lamp" => Ok(OutputMode::SinglePwmLamp),
        _ => {
            let Some(count_text) = text.strip_prefix("strip:") else {
                return Err(CliError::new(format!("unknown output mode '{text}'"), hint));
            };
            let count: usize = count_text
                .parse()
                .map_err(|_| CliError::new(format!("invalid strip count '{count_text}'"), hint.clone()))?;
            if count == 0 || count > 128 {
                return Err(CliError::new(
                    format!("strip count {count} out of range"),
                    Some("a universe carries at most 128 four-channel pixels".to_string()),
                ));
            }
            Ok(OutputMode::PixelStrip(count))
        }
    }
}

/// Flat, serializable view of a resolved configuration for `--check`.
#[derive(Debug, Serialize)]
pub(crate) struct ConfigSummary {
    pub universe: u16,
    pub first_channel: usize,
    pub mode: String,
    pub mac: String,
    pub address: Ipv4Addr,
    pub artnet_port: u16,
    pub discovery_port: u16,
    pub beacon_interval_secs: u64,
    pub short_name: String,
    pub long_name: String,
    pub status_text: String,
    pub firmware_version: u16,
    pub oem_code: u16,
    pub esta_code: u16,
}

pub(crate) fn summarize(node: &NodeConfig) -> ConfigSummary {
    let mode = match node.session.mode {
        OutputMode::None => "none".to_string(),
        OutputMode::SinglePwmLamp => "lamp".to_string(),
        OutputMode::PixelStrip(count) => format!("strip:{count}"),
    };
    ConfigSummary {
        universe: node.session.universe.value(),
        first_channel: node.session.first_channel,
        mode,
        mac: node.mac.clone(),
        address: node.identity.address,
        artnet_port: node.artnet_port,
        discovery_port: node.discovery_port,
        beacon_interval_secs: node.beacon_interval.as_secs(),
        short_name: node.identity.short_name.clone(),
        long_name: node.identity.long_name.clone(),
        status_text: node.identity.status_text.clone(),
        firmware_version: node.identity.firmware_version,
        oem_code: node.identity.oem_code,
        esta_code: node.identity.esta_code,
    }
}
