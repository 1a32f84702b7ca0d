/// Four-byte channel group: red, green, blue and a per-pixel intensity.
///
/// The final color is `channel * intensity / 255` per component. This is
/// a deliberate non-reciprocal scaling, not alpha blending.
///
/// # Examples
/// ```
/// use stagenode_core::PixelQuad;
///
/// let quad = PixelQuad::from_bytes([10, 20, 30, 255]);
/// assert_eq!(quad.scaled(), (10, 20, 30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelQuad {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub intensity: u8,
}

impl PixelQuad {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            red: bytes[0],
            green: bytes[1],
            blue: bytes[2],
            intensity: bytes[3],
        }
    }

    /// Intensity-scaled RGB, integer floor division.
    pub fn scaled(self) -> (u8, u8, u8) {
        (
            scale(self.red, self.intensity),
            scale(self.green, self.intensity),
            scale(self.blue, self.intensity),
        )
    }
}

fn scale(channel: u8, intensity: u8) -> u8 {
    (u16::from(channel) * u16::from(intensity) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::PixelQuad;

    #[test]
    fn full_intensity_passes_through() {
        let quad = PixelQuad::from_bytes([10, 20, 30, 255]);
        assert_eq!(quad.scaled(), (10, 20, 30));
    }

    #[test]
    fn zero_intensity_blanks() {
        let quad = PixelQuad::from_bytes([255, 255, 255, 0]);
        assert_eq!(quad.scaled(), (0, 0, 0));
    }

    #[test]
    fn half_intensity_floors() {
        let quad = PixelQuad::from_bytes([255, 101, 1, 128]);
        assert_eq!(quad.scaled(), (128, 50, 0));
    }
}
