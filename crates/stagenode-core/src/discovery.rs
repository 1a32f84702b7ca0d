//! PropLink discovery state machine.
//!
//! The node starts out `Searching` and broadcasts a beacon on every
//! timer tick until a server answers with a single-byte reply; from
//! then on it is `Bound` to that server's address, stops beaconing and
//! may send button and voltage messages on demand. The machine is
//! sans-io: ticks and datagrams are injected, outbound messages are
//! returned as bytes for the caller to send.
//!
//! The state only moves forward. There is no server-loss detection;
//! once bound, received datagrams are ignored.

use std::net::SocketAddr;

use crate::protocols::proplink::error::PropLinkError;
use crate::protocols::proplink::{
    PropLinkMessage, button_press, discovery_beacon, parse_message, voltage_report,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryState {
    /// No server known; beacons are broadcast on each tick.
    Searching,
    /// A server answered; unicast messages go to this address.
    Bound(SocketAddr),
}

#[derive(Debug)]
pub struct Discovery {
    mac: String,
    state: DiscoveryState,
}

impl Discovery {
    /// Create a machine in `Searching` for a node with the given MAC
    /// string. The MAC must be the 17-character `XX:XX:XX:XX:XX:XX`
    /// form.
    pub fn new(mac: impl Into<String>) -> Result<Self, PropLinkError> {
        let mac = mac.into();
        crate::protocols::proplink::validate_mac(&mac)?;
        Ok(Self {
            mac,
            state: DiscoveryState::Searching,
        })
    }

    pub fn state(&self) -> DiscoveryState {
        self.state
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, DiscoveryState::Bound(_))
    }

    /// Periodic timer tick: returns beacon bytes to broadcast while
    /// still searching, and nothing once bound.
    pub fn on_tick(&self) -> Option<Vec<u8>> {
        match self.state {
            // The MAC was validated at construction, so building the
            // beacon cannot fail.
            DiscoveryState::Searching => discovery_beacon(&self.mac).ok(),
            DiscoveryState::Bound(_) => None,
        }
    }

    /// Feed one received datagram. Returns the newly bound server
    /// address when this datagram caused the transition.
    pub fn on_datagram(&mut self, payload: &[u8], source: SocketAddr) -> Option<SocketAddr> {
        if self.is_bound() {
            return None;
        }
        match parse_message(payload) {
            Ok(PropLinkMessage::Reply) => {
                self.state = DiscoveryState::Bound(source);
                Some(source)
            }
            _ => None,
        }
    }

    /// Button event bytes plus the server to send them to, once bound.
    pub fn button_message(
        &self,
        button: u8,
    ) -> Result<Option<(Vec<u8>, SocketAddr)>, PropLinkError> {
        let DiscoveryState::Bound(server) = self.state else {
            return Ok(None);
        };
        Ok(Some((button_press(&self.mac, button)?, server)))
    }

    /// Voltage report bytes plus the server to send them to, once
    /// bound. The value is clamped to [0, 9990] millivolts.
    pub fn voltage_message(
        &self,
        millivolts: i32,
    ) -> Result<Option<(Vec<u8>, SocketAddr)>, PropLinkError> {
        let DiscoveryState::Bound(server) = self.state else {
            return Ok(None);
        };
        Ok(Some((voltage_report(&self.mac, millivolts)?, server)))
    }
}
