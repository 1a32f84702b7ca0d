//! The two UDP receive loops.
//!
//! Each protocol owns one socket. Datagrams are processed strictly one
//! at a time within a loop, so render calls never overlap. A transport
//! error is fatal to the owning loop; restart policy, if any, belongs
//! to whatever supervises the process.

use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use stagenode_core::{ArtNetSession, Discovery, SessionEvent};
use tracing::{debug, error, info, trace};

use crate::config::NodeConfig;
use crate::sink::TraceSink;

pub(crate) fn run(node: NodeConfig) -> Result<()> {
    info!(
        universe = node.session.universe.value(),
        mode = ?node.session.mode,
        "starting stagenode"
    );

    let mac = node.mac.clone();
    let discovery_port = node.discovery_port;
    let beacon_interval = node.beacon_interval;
    thread::Builder::new()
        .name("discovery".to_string())
        .spawn(move || {
            if let Err(err) = discovery_loop(&mac, discovery_port, beacon_interval) {
                error!("discovery loop terminated: {err:#}");
            }
        })
        .context("failed to spawn discovery thread")?;

    lighting_loop(&node)
}

fn lighting_loop(node: &NodeConfig) -> Result<()> {
    let socket = UdpSocket::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, node.artnet_port)))
        .with_context(|| format!("failed to bind lighting socket on port {}", node.artnet_port))?;
    info!(port = node.artnet_port, "lighting socket bound");

    let mut session = ArtNetSession::new(node.identity.clone(), node.session, TraceSink);
    let mut buf = [0u8; 2048];
    loop {
        let (len, source) = socket
            .recv_from(&mut buf)
            .context("lighting receive failed")?;

        match session.handle_datagram(&buf[..len], source) {
            Ok(SessionEvent::Rendered { pixels }) => trace!(pixels, "rendered frame"),
            Ok(SessionEvent::IgnoredUniverse { universe }) => {
                trace!(universe, "output data for another universe")
            }
            Ok(SessionEvent::Reply { bytes, destination }) => {
                socket
                    .send_to(&bytes, destination)
                    .context("reply send failed")?;
                debug!(%destination, len = bytes.len(), "sent reply");
            }
            Ok(SessionEvent::Ignored { opcode }) => {
                debug!(opcode = format_args!("{opcode:#06x}"), "unhandled opcode")
            }
            Err(err) => debug!("dropped malformed packet: {err}"),
        }
    }
}

fn discovery_loop(mac: &str, port: u16, interval: Duration) -> Result<()> {
    let socket = UdpSocket::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
        .with_context(|| format!("failed to bind discovery socket on port {port}"))?;
    socket
        .set_broadcast(true)
        .context("failed to enable broadcast")?;
    info!(port, "discovery socket bound");

    let broadcast = SocketAddr::from((Ipv4Addr::BROADCAST, port));
    let mut discovery = Discovery::new(mac).context("invalid MAC for discovery")?;
    let mut buf = [0u8; 256];
    let mut next_beacon = Instant::now() + interval;

    loop {
        if Instant::now() >= next_beacon {
            if let Some(beacon) = discovery.on_tick() {
                socket
                    .send_to(&beacon, broadcast)
                    .context("beacon send failed")?;
                trace!("sent discovery beacon");
            }
            next_beacon = Instant::now() + interval;
        }

        // The receive call doubles as the beacon timer.
        let timeout = next_beacon
            .saturating_duration_since(Instant::now())
            .max(Duration::from_millis(10));
        socket
            .set_read_timeout(Some(timeout))
            .context("failed to set read timeout")?;

        match socket.recv_from(&mut buf) {
            Ok((len, source)) => {
                if let Some(server) = discovery.on_datagram(&buf[..len], source) {
                    info!(%server, "control server bound");
                }
            }
            Err(err) if matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {}
            Err(err) => return Err(err).context("discovery receive failed"),
        }
    }
}
