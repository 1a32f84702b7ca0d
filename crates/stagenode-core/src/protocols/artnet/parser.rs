use crate::pixel::PixelQuad;

use super::error::ArtNetError;
use super::layout;
use super::reader::ArtNetReader;

/// One decoded Art-Net datagram.
#[derive(Debug)]
pub enum ArtNetPacket<'a> {
    /// Output data for one universe.
    Dmx(ArtDmx<'a>),
    /// Device poll; the session must answer with a poll reply.
    Poll,
    /// Table-of-devices request; answered with a ToD data reply.
    TodRequest,
    /// Recognized as Art-Net but not handled by this node.
    Unknown(u16),
}

#[derive(Debug)]
pub struct ArtDmx<'a> {
    /// 15-bit port address the data is destined for.
    pub universe: u16,
    /// Declared channel data, already length-checked.
    pub channels: &'a [u8],
}

/// Validate and classify one received datagram.
///
/// Validation short-circuits in order: minimum length, magic, protocol
/// version, then opcode dispatch. Any failure is a rejection value; the
/// caller drops the datagram without replying.
pub fn parse_packet(payload: &[u8]) -> Result<ArtNetPacket<'_>, ArtNetError> {
    let reader = ArtNetReader::new(payload);
    reader.require_len(layout::MIN_PACKET_LEN)?;

    let signature = reader.read_signature()?;
    if signature != layout::ARTNET_ID {
        return Err(ArtNetError::BadMagic);
    }

    let version = reader.read_u16_be(layout::PROT_VER_RANGE.clone())?;
    if version != layout::PROTOCOL_VERSION {
        return Err(ArtNetError::VersionMismatch { version });
    }

    let opcode = reader.read_u16_le(layout::OP_CODE_RANGE.clone())?;
    match opcode {
        layout::OP_DMX => parse_dmx(&reader).map(ArtNetPacket::Dmx),
        layout::OP_POLL => Ok(ArtNetPacket::Poll),
        layout::OP_TOD_REQUEST => Ok(ArtNetPacket::TodRequest),
        other => Ok(ArtNetPacket::Unknown(other)),
    }
}

fn parse_dmx<'a>(reader: &ArtNetReader<'a>) -> Result<ArtDmx<'a>, ArtNetError> {
    reader.require_len(layout::DMX_DATA_OFFSET)?;

    let universe = reader.read_u16_le(layout::UNIVERSE_RANGE.clone())? & layout::UNIVERSE_MASK;
    let declared = reader.read_u16_be(layout::LENGTH_RANGE.clone())?;
    if declared as usize > layout::DMX_MAX_SLOTS {
        return Err(ArtNetError::InvalidLength { length: declared });
    }

    let actual = reader.len() - layout::DMX_DATA_OFFSET;
    if declared as usize != actual {
        return Err(ArtNetError::LengthMismatch {
            declared: declared as usize,
            actual,
        });
    }

    let channels =
        reader.read_slice(layout::DMX_DATA_OFFSET..layout::DMX_DATA_OFFSET + actual)?;
    Ok(ArtDmx { universe, channels })
}

/// Extract up to `count` pixel quads starting at `first_channel`.
///
/// Quads that would extend past the available channel data are skipped;
/// the declared length is the hard boundary.
pub fn extract_quads(channels: &[u8], first_channel: usize, count: usize) -> Vec<PixelQuad> {
    let mut quads = Vec::with_capacity(count);
    for index in 0..count {
        let Some(start) = first_channel.checked_add(index * 4) else {
            break;
        };
        let Some(bytes) = start.checked_add(4).and_then(|end| channels.get(start..end)) else {
            break;
        };
        quads.push(PixelQuad::from_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
    }
    quads
}
