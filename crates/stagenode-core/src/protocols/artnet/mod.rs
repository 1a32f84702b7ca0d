//! Art-Net protocol decoding and reply construction.
//!
//! The parser validates the signature and the protocol version, then
//! dispatches on the opcode: ArtDMX payloads are decoded into channel
//! data with a strict declared-length check, poll and table-of-devices
//! requests are classified for the session to answer, and any other
//! opcode is surfaced as `Unknown` so the caller can log and drop it.
//! Malformed packets are rejection values; the protocol has no error
//! reply.
//!
//! Byte offsets and constants live in `layout`, byte-access conventions
//! in `reader`, and the fixed-layout poll / table-of-devices replies in
//! `reply`.
//!
//! Version française (résumé):
//! Décodage Art-Net avec validations strictes (signature, version,
//! longueur déclarée) et dispatch par opcode. Les positions sont dans
//! `layout`, les conventions dans `reader`, les réponses dans `reply`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod reply;

pub use parser::{ArtDmx, ArtNetPacket, extract_quads, parse_packet};
pub use reply::{build_poll_reply, build_tod_data_reply};
