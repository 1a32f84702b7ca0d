//! PropLink discovery wire protocol.
//!
//! PropLink is the ASCII UDP protocol props use to find their control
//! server without pulling in a full service-discovery stack. The first
//! byte of every message is its type tag; the MAC address is the fixed
//! 17-character `XX:XX:XX:XX:XX:XX` form:
//!
//! - `D<mac>`: discovery beacon, broadcast
//! - `R`: reply, unicast from a server (exactly one byte)
//! - `B<mac><buttonDigit>`: button event, unicast to the bound server
//! - `V<mac><4-digit mV>`: voltage report, clamped to [0, 9990]
//!
//! `builder` constructs outbound messages, `parser` classifies inbound
//! datagrams; the state machine in `crate::discovery` drives both.
//!
//! Version française (résumé):
//! Protocole ASCII de découverte : balise `D`, réponse `R`, bouton `B`,
//! tension `V`. Construction dans `builder`, classification dans
//! `parser`, longueurs et tags dans `layout`.

pub mod builder;
pub mod error;
pub mod layout;
pub mod parser;

pub use builder::{button_press, discovery_beacon, validate_mac, voltage_report};
pub use parser::{PropLinkMessage, parse_message};
