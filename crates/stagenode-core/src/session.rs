//! Per-datagram Art-Net orchestration.
//!
//! The session owns the node's protocol-facing state: the configured
//! universe, the channel frame buffer, the output sink and the poll
//! counter. One call to [`ArtNetSession::handle_datagram`] fully
//! processes one datagram; rendering completes before the call returns,
//! so render calls never overlap when the caller processes datagrams
//! one at a time.

use std::net::SocketAddr;

use crate::device::{DeviceIdentity, OutputMode, OutputSink, PortAddress};
use crate::frame::ChannelFrame;
use crate::protocols::artnet::error::ArtNetError;
use crate::protocols::artnet::{
    ArtNetPacket, build_poll_reply, build_tod_data_reply, extract_quads, parse_packet,
};

/// Node settings the session needs for decoding and replying.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub universe: PortAddress,
    /// Offset of the first channel within the packet's data section.
    pub first_channel: usize,
    pub mode: OutputMode,
}

/// Outcome of one processed datagram.
#[derive(Debug)]
pub enum SessionEvent {
    /// Output data was accepted and rendered.
    Rendered { pixels: usize },
    /// Output data for a different universe; accepted, no side effect.
    IgnoredUniverse { universe: u16 },
    /// A reply must be sent back to the datagram's source.
    Reply {
        bytes: Vec<u8>,
        destination: SocketAddr,
    },
    /// Valid Art-Net, but an opcode this node does not handle.
    Ignored { opcode: u16 },
}

pub struct ArtNetSession<S> {
    identity: DeviceIdentity,
    config: SessionConfig,
    frame: ChannelFrame,
    sink: S,
    poll_count: u32,
}

impl<S: OutputSink> ArtNetSession<S> {
    pub fn new(identity: DeviceIdentity, config: SessionConfig, sink: S) -> Self {
        Self {
            identity,
            config,
            frame: ChannelFrame::new(),
            sink,
            poll_count: 0,
        }
    }

    /// Decode one datagram and perform its side effects.
    ///
    /// Decode failures propagate as errors; the caller drops the
    /// datagram without replying, since the protocol has no error
    /// channel.
    pub fn handle_datagram(
        &mut self,
        payload: &[u8],
        source: SocketAddr,
    ) -> Result<SessionEvent, ArtNetError> {
        match parse_packet(payload)? {
            ArtNetPacket::Dmx(dmx) => {
                if dmx.universe != self.config.universe.value() {
                    return Ok(SessionEvent::IgnoredUniverse {
                        universe: dmx.universe,
                    });
                }
                self.frame.store(dmx.channels);
                let pixels = self.render(dmx.channels);
                Ok(SessionEvent::Rendered { pixels })
            }
            ArtNetPacket::Poll => {
                self.poll_count = self.poll_count.wrapping_add(1);
                let bytes =
                    build_poll_reply(&self.identity, self.config.universe, self.poll_count);
                Ok(SessionEvent::Reply {
                    bytes: bytes.to_vec(),
                    destination: source,
                })
            }
            ArtNetPacket::TodRequest => {
                let bytes = build_tod_data_reply(&self.identity, self.config.universe);
                Ok(SessionEvent::Reply {
                    bytes: bytes.to_vec(),
                    destination: source,
                })
            }
            ArtNetPacket::Unknown(opcode) => Ok(SessionEvent::Ignored { opcode }),
        }
    }

    fn render(&mut self, channels: &[u8]) -> usize {
        match self.config.mode {
            OutputMode::None => 0,
            OutputMode::PixelStrip(count) => {
                let quads = extract_quads(channels, self.config.first_channel, count);
                for (index, quad) in quads.iter().enumerate() {
                    let (red, green, blue) = quad.scaled();
                    self.sink.set_pixel(index, red, green, blue);
                }
                self.sink.flush();
                quads.len()
            }
            OutputMode::SinglePwmLamp => {
                let quads = extract_quads(channels, self.config.first_channel, 1);
                let Some(quad) = quads.first() else {
                    return 0;
                };
                let (red, green, blue) = quad.scaled();
                self.sink.set_lamp(red, green, blue);
                self.sink.flush();
                1
            }
        }
    }

    /// Most recently accepted channel data for the configured universe.
    pub fn frame(&self) -> &ChannelFrame {
        &self.frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
