/// Most recently accepted channel data for the configured universe.
///
/// Pure data; the session replaces the contents whenever an output-data
/// packet for the matching universe is decoded. Holds at most 512
/// channels.
#[derive(Debug, Clone)]
pub struct ChannelFrame {
    slots: [u8; Self::MAX_CHANNELS],
    len: usize,
}

impl ChannelFrame {
    pub const MAX_CHANNELS: usize = 512;

    pub fn new() -> Self {
        Self {
            slots: [0u8; Self::MAX_CHANNELS],
            len: 0,
        }
    }

    /// Replace the frame with new channel data, truncating past 512.
    pub fn store(&mut self, channels: &[u8]) {
        let len = channels.len().min(Self::MAX_CHANNELS);
        self.slots[..len].copy_from_slice(&channels[..len]);
        self.len = len;
    }

    pub fn channels(&self) -> &[u8] {
        &self.slots[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for ChannelFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelFrame;

    #[test]
    fn store_replaces_previous_frame() {
        let mut frame = ChannelFrame::new();
        frame.store(&[1, 2, 3, 4]);
        assert_eq!(frame.channels(), &[1, 2, 3, 4]);

        frame.store(&[9]);
        assert_eq!(frame.channels(), &[9]);
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn store_truncates_past_max() {
        let mut frame = ChannelFrame::new();
        frame.store(&[7u8; 600]);
        assert_eq!(frame.len(), ChannelFrame::MAX_CHANNELS);
    }

    #[test]
    fn new_frame_is_empty() {
        assert!(ChannelFrame::new().is_empty());
    }
}
