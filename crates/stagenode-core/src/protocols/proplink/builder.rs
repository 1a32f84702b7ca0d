use super::error::PropLinkError;
use super::layout;

/// Check that `mac` is the fixed 17-character `XX:XX:XX:XX:XX:XX` form.
pub fn validate_mac(mac: &str) -> Result<(), PropLinkError> {
    let bytes = mac.as_bytes();
    if bytes.len() != layout::MAC_LEN {
        return Err(PropLinkError::InvalidMac);
    }
    for (index, byte) in bytes.iter().enumerate() {
        let is_separator = index % 3 == 2;
        if is_separator {
            if *byte != b':' {
                return Err(PropLinkError::InvalidMac);
            }
        } else if !byte.is_ascii_hexdigit() {
            return Err(PropLinkError::InvalidMac);
        }
    }
    Ok(())
}

/// Build a broadcast discovery beacon: `D<mac>`.
pub fn discovery_beacon(mac: &str) -> Result<Vec<u8>, PropLinkError> {
    validate_mac(mac)?;
    let mut message = Vec::with_capacity(layout::BEACON_LEN);
    message.push(layout::TAG_DISCOVER);
    message.extend_from_slice(mac.as_bytes());
    Ok(message)
}

/// Build a button event: `B<mac><buttonDigit>`. Button ids are a single
/// ASCII digit.
pub fn button_press(mac: &str, button: u8) -> Result<Vec<u8>, PropLinkError> {
    validate_mac(mac)?;
    if button > 9 {
        return Err(PropLinkError::InvalidButton { value: button });
    }
    let mut message = Vec::with_capacity(layout::BUTTON_LEN);
    message.push(layout::TAG_BUTTON);
    message.extend_from_slice(mac.as_bytes());
    message.push(b'0' + button);
    Ok(message)
}

/// Build a voltage report: `V<mac><4-digit mV>`, clamped to
/// [0, 9990] millivolts.
pub fn voltage_report(mac: &str, millivolts: i32) -> Result<Vec<u8>, PropLinkError> {
    validate_mac(mac)?;
    let clamped = millivolts.clamp(0, layout::VOLTAGE_MAX_MILLIVOLTS);
    let mut message = Vec::with_capacity(layout::VOLTAGE_LEN);
    message.push(layout::TAG_VOLTAGE);
    message.extend_from_slice(mac.as_bytes());
    message.extend_from_slice(format!("{clamped:04}").as_bytes());
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::{button_press, discovery_beacon, validate_mac, voltage_report};
    use crate::protocols::proplink::error::PropLinkError;
    use crate::protocols::proplink::layout;

    const MAC: &str = "EC:DA:3B:AA:C1:60";

    #[test]
    fn mac_validation() {
        assert!(validate_mac(MAC).is_ok());
        assert!(validate_mac("ec:da:3b:aa:c1:60").is_ok());
        assert!(validate_mac("EC:DA:3B:AA:C1:6").is_err());
        assert!(validate_mac("EC-DA-3B-AA-C1-60").is_err());
        assert!(validate_mac("EC:DA:3B:AA:C1:6G").is_err());
        assert!(validate_mac("").is_err());
    }

    #[test]
    fn beacon_layout() {
        let message = discovery_beacon(MAC).unwrap();
        assert_eq!(message.len(), layout::BEACON_LEN);
        assert_eq!(message[0], b'D');
        assert_eq!(&message[1..], MAC.as_bytes());
    }

    #[test]
    fn button_layout() {
        let message = button_press(MAC, 0).unwrap();
        assert_eq!(message.len(), layout::BUTTON_LEN);
        assert_eq!(message[0], b'B');
        assert_eq!(message[layout::BUTTON_ID_OFFSET], b'0');
    }

    #[test]
    fn button_out_of_range() {
        let err = button_press(MAC, 10).unwrap_err();
        assert!(matches!(err, PropLinkError::InvalidButton { value: 10 }));
    }

    #[test]
    fn voltage_is_clamped_and_zero_padded() {
        let message = voltage_report(MAC, 324).unwrap();
        assert_eq!(message.len(), layout::VOLTAGE_LEN);
        assert_eq!(&message[layout::VOLTAGE_OFFSET..], b"0324");

        let low = voltage_report(MAC, -5).unwrap();
        assert_eq!(&low[layout::VOLTAGE_OFFSET..], b"0000");

        let high = voltage_report(MAC, 12000).unwrap();
        assert_eq!(&high[layout::VOLTAGE_OFFSET..], b"9990");
    }
}
