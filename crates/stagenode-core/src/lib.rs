//! Stagenode core library: the wire-protocol engine of an Art-Net
//! lighting node.
//!
//! This crate implements the two protocols the node speaks, without any
//! I/O: the Art-Net decoder and responder (layout/reader/parser/reply),
//! the per-datagram session that turns decoded packets into sink renders
//! and reply bytes, and the PropLink discovery state machine used to
//! locate the companion control server. Sockets, timers and actuator
//! drivers live in the `stagenode` binary; the engine only consumes byte
//! buffers and returns values.
//!
//! Invariants:
//! - Only packets whose universe matches the configured universe affect
//!   local output or the channel frame buffer.
//! - Decode failures are rejection values, never panics, and never
//!   produce a reply (the protocol has no error channel).
//! - Pixel extraction is bounds-checked against the declared channel
//!   data; a quad that would cross the boundary is skipped.
//! - The discovery state machine only moves forward: once a server is
//!   bound, no datagram or timer tick changes the state.
//!
//! Version française (résumé):
//! Cette crate fournit le moteur protocolaire du nœud lumière : décodage
//! Art-Net (layout/reader/parser/reply), session par datagramme, et
//! machine à états de découverte PropLink. Aucune E/S ici ; les sockets
//! et pilotes restent dans le binaire. Garanties : filtrage par univers,
//! rejets sans panique, extraction de pixels bornée, découverte
//! monotone.
//!
//! # Examples
//! ```
//! use stagenode_core::protocols::artnet::{self, parser::ArtNetPacket};
//!
//! let mut packet = vec![0u8; 18 + 4];
//! packet[..8].copy_from_slice(b"Art-Net\0");
//! packet[8..10].copy_from_slice(&0x5000u16.to_le_bytes());
//! packet[10..12].copy_from_slice(&14u16.to_be_bytes());
//! packet[14..16].copy_from_slice(&3u16.to_le_bytes());
//! packet[16..18].copy_from_slice(&4u16.to_be_bytes());
//! let parsed = artnet::parse_packet(&packet)?;
//! assert!(matches!(parsed, ArtNetPacket::Dmx(_)));
//! # Ok::<(), stagenode_core::protocols::artnet::error::ArtNetError>(())
//! ```

mod device;
mod discovery;
mod frame;
mod pixel;
pub mod protocols;
mod session;

pub use device::{DeviceIdentity, OutputMode, OutputSink, PortAddress};
pub use discovery::{Discovery, DiscoveryState};
pub use frame::ChannelFrame;
pub use pixel::PixelQuad;
pub use session::{ArtNetSession, SessionConfig, SessionEvent};

/// Default Art-Net listening port.
pub const ARTNET_PORT: u16 = 6454;
/// Default PropLink discovery port.
pub const DISCOVERY_PORT: u16 = 6566;
/// Default interval between discovery beacons, in seconds.
pub const DISCOVERY_INTERVAL_SECS: u64 = 10;
