//! Fixed-layout Art-Net reply construction.
//!
//! Both builders are pure and deterministic given the device identity
//! and the configured universe; unused bytes are zero. Offsets are part
//! of the wire contract and live in `layout`.

use crate::device::{DeviceIdentity, PortAddress};

use super::layout;

/// Build the 207-byte poll reply announcing this node.
///
/// The node reports exactly one input-capable port. The node-report
/// field is formatted `#<4-hex-code> [<count>] <text>` where `count` is
/// the number of poll replies produced so far.
pub fn build_poll_reply(
    identity: &DeviceIdentity,
    universe: PortAddress,
    poll_count: u32,
) -> [u8; layout::POLL_REPLY_LEN] {
    let mut reply = [0u8; layout::POLL_REPLY_LEN];

    reply[..layout::ARTNET_ID.len()].copy_from_slice(layout::ARTNET_ID);
    reply[layout::OP_CODE_RANGE].copy_from_slice(&layout::OP_POLL_REPLY.to_le_bytes());

    reply[layout::REPLY_IP_RANGE].copy_from_slice(&identity.address.octets());
    reply[layout::REPLY_PORT_RANGE].copy_from_slice(&identity.port.to_le_bytes());
    reply[layout::REPLY_FW_RANGE].copy_from_slice(&identity.firmware_version.to_be_bytes());

    reply[layout::REPLY_NET_SWITCH_OFFSET] = universe.net();
    reply[layout::REPLY_SUB_SWITCH_OFFSET] = universe.sub();

    reply[layout::REPLY_OEM_RANGE].copy_from_slice(&identity.oem_code.to_be_bytes());
    reply[layout::REPLY_ESTA_RANGE].copy_from_slice(&identity.esta_code.to_le_bytes());

    write_padded(
        &mut reply[layout::REPLY_PORT_NAME_RANGE],
        identity.short_name.as_bytes(),
    );
    write_padded(
        &mut reply[layout::REPLY_LONG_NAME_RANGE],
        identity.long_name.as_bytes(),
    );

    let report = format!(
        "#{:04x} [{:04}] {}",
        layout::REPORT_CODE_POWER_OK,
        poll_count % 10000,
        identity.status_text
    );
    write_padded(&mut reply[layout::REPLY_NODE_REPORT_RANGE], report.as_bytes());

    // One input-capable port, remaining port slots unused.
    reply[layout::REPLY_NUM_PORTS_RANGE].copy_from_slice(&1u16.to_be_bytes());
    reply[layout::REPLY_PORT_TYPES_RANGE.start] = layout::PORT_TYPE_INPUT;

    reply
}

/// Build the 34-byte table-of-devices reply.
///
/// The node reports one managed UID derived from the ESTA code plus a
/// fixed serial; real deployments must assign a unique identifier per
/// device.
pub fn build_tod_data_reply(
    identity: &DeviceIdentity,
    universe: PortAddress,
) -> [u8; layout::TOD_DATA_LEN] {
    let mut reply = [0u8; layout::TOD_DATA_LEN];

    reply[..layout::ARTNET_ID.len()].copy_from_slice(layout::ARTNET_ID);
    reply[layout::OP_CODE_RANGE].copy_from_slice(&layout::OP_TOD_DATA.to_le_bytes());
    reply[layout::PROT_VER_RANGE].copy_from_slice(&layout::PROTOCOL_VERSION.to_be_bytes());

    reply[layout::TOD_RDM_VER_OFFSET] = layout::RDM_STANDARD_VERSION;
    reply[layout::TOD_PORT_OFFSET] = 1;
    reply[layout::TOD_BIND_INDEX_OFFSET] = 1;
    reply[layout::TOD_NET_OFFSET] = universe.net();
    reply[layout::TOD_COMMAND_OFFSET] = layout::TOD_COMMAND_TOD_FULL;
    reply[layout::TOD_ADDRESS_OFFSET] = universe.sub();

    reply[layout::TOD_UID_TOTAL_RANGE].copy_from_slice(&1u16.to_be_bytes());
    reply[layout::TOD_BLOCK_COUNT_OFFSET] = 0;
    reply[layout::TOD_UID_COUNT_OFFSET] = 1;

    let uid = &mut reply[layout::TOD_UID_RANGE];
    uid[..2].copy_from_slice(&identity.esta_code.to_be_bytes());
    uid[5] = 1;

    reply
}

/// Copy `value` into a fixed-width field, truncating as needed and
/// leaving at least one trailing NUL.
fn write_padded(field: &mut [u8], value: &[u8]) {
    let len = value.len().min(field.len().saturating_sub(1));
    field[..len].copy_from_slice(&value[..len]);
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::{build_poll_reply, build_tod_data_reply};
    use crate::device::{DeviceIdentity, PortAddress};
    use crate::protocols::artnet::layout;

    fn identity() -> DeviceIdentity {
        DeviceIdentity {
            address: Ipv4Addr::new(192, 168, 0, 17),
            port: 6454,
            firmware_version: 0x0102,
            short_name: "stagenode".to_string(),
            long_name: "stagenode lighting prop".to_string(),
            oem_code: 0x00ff,
            esta_code: 0x7ff0,
            status_text: "running".to_string(),
        }
    }

    #[test]
    fn poll_reply_header_and_size() {
        let reply = build_poll_reply(&identity(), PortAddress::new(0), 0);
        assert_eq!(reply.len(), layout::POLL_REPLY_LEN);
        assert_eq!(&reply[..8], layout::ARTNET_ID);
        assert_eq!(
            u16::from_le_bytes([reply[8], reply[9]]),
            layout::OP_POLL_REPLY
        );
    }

    #[test]
    fn poll_reply_identity_fields() {
        let reply = build_poll_reply(&identity(), PortAddress::new(0x1234), 7);
        assert_eq!(&reply[layout::REPLY_IP_RANGE], &[192, 168, 0, 17]);
        assert_eq!(
            u16::from_le_bytes([
                reply[layout::REPLY_PORT_RANGE.start],
                reply[layout::REPLY_PORT_RANGE.start + 1]
            ]),
            6454
        );
        assert_eq!(
            u16::from_be_bytes([
                reply[layout::REPLY_FW_RANGE.start],
                reply[layout::REPLY_FW_RANGE.start + 1]
            ]),
            0x0102
        );
        assert_eq!(reply[layout::REPLY_NET_SWITCH_OFFSET], 0x12);
        assert_eq!(reply[layout::REPLY_SUB_SWITCH_OFFSET], 0x34);
        assert_eq!(
            u16::from_le_bytes([
                reply[layout::REPLY_ESTA_RANGE.start],
                reply[layout::REPLY_ESTA_RANGE.start + 1]
            ]),
            0x7ff0
        );
    }

    #[test]
    fn poll_reply_names_are_nul_terminated() {
        let mut ident = identity();
        ident.short_name = "x".repeat(40);
        ident.long_name = "y".repeat(100);
        let reply = build_poll_reply(&ident, PortAddress::new(0), 0);

        let port_name = &reply[layout::REPLY_PORT_NAME_RANGE];
        assert_eq!(port_name[port_name.len() - 1], 0);
        let long_name = &reply[layout::REPLY_LONG_NAME_RANGE];
        assert_eq!(long_name[long_name.len() - 1], 0);
    }

    #[test]
    fn poll_reply_node_report_format() {
        let reply = build_poll_reply(&identity(), PortAddress::new(0), 42);
        let report = &reply[layout::REPLY_NODE_REPORT_RANGE];
        let text = std::str::from_utf8(report)
            .unwrap()
            .trim_end_matches('\0');
        assert_eq!(text, "#0001 [0042] running");
    }

    #[test]
    fn poll_reply_reports_one_input_port() {
        let reply = build_poll_reply(&identity(), PortAddress::new(0), 0);
        assert_eq!(
            u16::from_be_bytes([
                reply[layout::REPLY_NUM_PORTS_RANGE.start],
                reply[layout::REPLY_NUM_PORTS_RANGE.start + 1]
            ]),
            1
        );
        assert_eq!(
            reply[layout::REPLY_PORT_TYPES_RANGE.start],
            layout::PORT_TYPE_INPUT
        );
        assert_eq!(reply[layout::REPLY_PORT_TYPES_RANGE.start + 1], 0);
    }

    #[test]
    fn tod_reply_size_and_fields() {
        let reply = build_tod_data_reply(&identity(), PortAddress::new(0x0207));
        assert_eq!(reply.len(), layout::TOD_DATA_LEN);
        assert_eq!(&reply[..8], layout::ARTNET_ID);
        assert_eq!(
            u16::from_le_bytes([reply[8], reply[9]]),
            layout::OP_TOD_DATA
        );
        assert_eq!(reply[layout::TOD_NET_OFFSET], 0x02);
        assert_eq!(reply[layout::TOD_ADDRESS_OFFSET], 0x07);
        assert_eq!(reply[layout::TOD_UID_COUNT_OFFSET], 1);
        assert_eq!(&reply[layout::TOD_UID_RANGE][..2], &0x7ff0u16.to_be_bytes());
    }
}
