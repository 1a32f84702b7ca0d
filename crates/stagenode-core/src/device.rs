//! Node data model: universe addressing, device identity and the output
//! seam towards actuator drivers.

use std::net::Ipv4Addr;

/// 15-bit Art-Net port address selecting one universe of up to 512
/// channels.
///
/// The wire encoding splits the address into a 7-bit high part ("net")
/// and an 8-bit low part; both halves are carried in replies so a
/// controller can reconstruct the full address.
///
/// # Examples
/// ```
/// use stagenode_core::PortAddress;
///
/// let address = PortAddress::new(0x1234);
/// assert_eq!(address.net(), 0x12);
/// assert_eq!(address.sub(), 0x34);
/// assert_eq!(PortAddress::from_split(0x12, 0x34), address);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortAddress(u16);

impl PortAddress {
    /// Construct from a raw value; the top bit is not an address bit
    /// and is masked off.
    pub fn new(value: u16) -> Self {
        Self(value & 0x7fff)
    }

    /// Rebuild an address from its wire halves.
    pub fn from_split(net: u8, sub: u8) -> Self {
        Self::new(u16::from(net) << 8 | u16::from(sub))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// High 7 bits of the address.
    pub fn net(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Low 8 bits of the address.
    pub fn sub(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

/// Read-only device identity, supplied by configuration and serialized
/// into poll replies.
#[derive(Debug, Clone)]
pub struct DeviceIdentity {
    /// Node IPv4 address as reported to controllers.
    pub address: Ipv4Addr,
    /// Art-Net listening port.
    pub port: u16,
    /// Firmware version, big-endian on the wire.
    pub firmware_version: u16,
    /// Short name, truncated to fit the 18-byte port-name field.
    pub short_name: String,
    /// Long name, truncated to fit the 64-byte field.
    pub long_name: String,
    /// OEM code.
    pub oem_code: u16,
    /// ESTA manufacturer code.
    pub esta_code: u16,
    /// Free text appended to the node-report field.
    pub status_text: String,
}

/// What kind of light output the node drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// No local output; channel data is still buffered.
    None,
    /// Addressable LED chain with the given pixel count.
    PixelStrip(usize),
    /// One tri-color PWM lamp driven from a single quad.
    SinglePwmLamp,
}

/// Seam towards the actuator drivers.
///
/// Implementations receive already intensity-scaled RGB values; `flush`
/// latches them to hardware and is expected to complete before the next
/// datagram is processed.
pub trait OutputSink {
    fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8);
    fn set_lamp(&mut self, red: u8, green: u8, blue: u8);
    fn flush(&mut self);
}

#[cfg(test)]
mod tests {
    use super::PortAddress;

    #[test]
    fn top_bit_is_masked() {
        assert_eq!(PortAddress::new(0xffff).value(), 0x7fff);
    }

    #[test]
    fn split_roundtrip() {
        let address = PortAddress::new(0x7abc);
        assert_eq!(
            PortAddress::from_split(address.net(), address.sub()),
            address
        );
    }
}
