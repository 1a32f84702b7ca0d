//! Bring-up output sink.
//!
//! The real actuator drivers (LED chain, PWM lamp) live outside this
//! repository and plug in behind `OutputSink`; this sink logs the
//! scaled values so a node can be exercised without hardware.

use stagenode_core::OutputSink;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TraceSink;

impl OutputSink for TraceSink {
    fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8) {
        trace!(index, red, green, blue, "set pixel");
    }

    fn set_lamp(&mut self, red: u8, green: u8, blue: u8) {
        trace!(red, green, blue, "set lamp");
    }

    fn flush(&mut self) {
        trace!("flush");
    }
}
