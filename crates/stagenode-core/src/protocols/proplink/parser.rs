use super::builder::validate_mac;
use super::error::PropLinkError;
use super::layout;

/// One classified PropLink datagram.
///
/// Nodes only ever act on `Reply`; the other inbound variants exist so
/// a server implementation can reuse the same parser.
#[derive(Debug, PartialEq, Eq)]
pub enum PropLinkMessage<'a> {
    Discover { mac: &'a str },
    Reply,
    ButtonPress { mac: &'a str, button: u8 },
    Voltage { mac: &'a str, millivolts: u16 },
}

/// Classify one received datagram.
pub fn parse_message(payload: &[u8]) -> Result<PropLinkMessage<'_>, PropLinkError> {
    let tag = *payload.first().ok_or(PropLinkError::TooShort {
        needed: 1,
        actual: 0,
    })?;

    match tag {
        layout::TAG_REPLY => {
            require_exact(payload, layout::REPLY_LEN)?;
            Ok(PropLinkMessage::Reply)
        }
        layout::TAG_DISCOVER => {
            require_exact(payload, layout::BEACON_LEN)?;
            Ok(PropLinkMessage::Discover {
                mac: parse_mac(payload)?,
            })
        }
        layout::TAG_BUTTON => {
            require_exact(payload, layout::BUTTON_LEN)?;
            let digit = payload[layout::BUTTON_ID_OFFSET];
            if !digit.is_ascii_digit() {
                return Err(PropLinkError::InvalidButton { value: digit });
            }
            Ok(PropLinkMessage::ButtonPress {
                mac: parse_mac(payload)?,
                button: digit - b'0',
            })
        }
        layout::TAG_VOLTAGE => {
            require_exact(payload, layout::VOLTAGE_LEN)?;
            let digits = &payload[layout::VOLTAGE_OFFSET..];
            let text =
                std::str::from_utf8(digits).map_err(|_| PropLinkError::InvalidVoltage)?;
            if !digits.iter().all(|byte| byte.is_ascii_digit()) {
                return Err(PropLinkError::InvalidVoltage);
            }
            let millivolts: u16 = text.parse().map_err(|_| PropLinkError::InvalidVoltage)?;
            Ok(PropLinkMessage::Voltage {
                mac: parse_mac(payload)?,
                millivolts,
            })
        }
        tag => Err(PropLinkError::UnknownTag { tag }),
    }
}

fn require_exact(payload: &[u8], expected: usize) -> Result<(), PropLinkError> {
    if payload.len() != expected {
        return Err(PropLinkError::LengthMismatch {
            expected,
            actual: payload.len(),
        });
    }
    Ok(())
}

fn parse_mac(payload: &[u8]) -> Result<&str, PropLinkError> {
    let bytes = payload
        .get(layout::MAC_OFFSET..layout::MAC_OFFSET + layout::MAC_LEN)
        .ok_or(PropLinkError::TooShort {
            needed: layout::MAC_OFFSET + layout::MAC_LEN,
            actual: payload.len(),
        })?;
    let mac = std::str::from_utf8(bytes).map_err(|_| PropLinkError::InvalidMac)?;
    validate_mac(mac)?;
    Ok(mac)
}
