//! Protocol wire modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets, ranges and constants (source of truth)
//! - `reader`: safe byte access and protocol conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Art-Net additionally carries a `reply` layer for the fixed-layout
//! response datagrams. Parsers and builders are pure and contain no
//! I/O; the session and the binary handle sockets and rendering.

pub mod artnet;
pub mod proplink;
