pub const ARTNET_ID: &[u8; 8] = b"Art-Net\0";
pub const PROTOCOL_VERSION: u16 = 14;

pub const OP_CODE_RANGE: std::ops::Range<usize> = 8..10;
pub const PROT_VER_RANGE: std::ops::Range<usize> = 10..12;
pub const SEQUENCE_OFFSET: usize = 12;
pub const PHYSICAL_OFFSET: usize = 13;
pub const UNIVERSE_RANGE: std::ops::Range<usize> = 14..16;
pub const LENGTH_RANGE: std::ops::Range<usize> = 16..18;
pub const DMX_DATA_OFFSET: usize = 18;
pub const DMX_MAX_SLOTS: usize = 512;

// Shortest accepted datagram: the 12-byte common header plus one byte
// of payload.
pub const MIN_PACKET_LEN: usize = 13;

pub const OP_POLL: u16 = 0x2000;
pub const OP_POLL_REPLY: u16 = 0x2100;
pub const OP_DMX: u16 = 0x5000;
pub const OP_TOD_REQUEST: u16 = 0x8000;
pub const OP_TOD_DATA: u16 = 0x8100;

// Only 15 bits of the universe field are address bits.
pub const UNIVERSE_MASK: u16 = 0x7fff;

// ArtPollReply layout. Unlisted bytes are reserved and zero.
pub const POLL_REPLY_LEN: usize = 207;
pub const REPLY_IP_RANGE: std::ops::Range<usize> = 10..14;
pub const REPLY_PORT_RANGE: std::ops::Range<usize> = 14..16;
pub const REPLY_FW_RANGE: std::ops::Range<usize> = 16..18;
pub const REPLY_NET_SWITCH_OFFSET: usize = 18;
pub const REPLY_SUB_SWITCH_OFFSET: usize = 19;
pub const REPLY_OEM_RANGE: std::ops::Range<usize> = 20..22;
pub const REPLY_UBEA_OFFSET: usize = 22;
pub const REPLY_STATUS1_OFFSET: usize = 23;
pub const REPLY_ESTA_RANGE: std::ops::Range<usize> = 24..26;
pub const REPLY_PORT_NAME_RANGE: std::ops::Range<usize> = 26..44;
pub const REPLY_LONG_NAME_RANGE: std::ops::Range<usize> = 44..108;
pub const REPLY_NODE_REPORT_RANGE: std::ops::Range<usize> = 108..172;
pub const REPLY_NUM_PORTS_RANGE: std::ops::Range<usize> = 172..174;
pub const REPLY_PORT_TYPES_RANGE: std::ops::Range<usize> = 174..178;

// PortTypes bit for a port that can input onto the network.
pub const PORT_TYPE_INPUT: u8 = 0x40;

// Node-report status code reported while running normally.
pub const REPORT_CODE_POWER_OK: u16 = 0x0001;

// ArtTodData layout for a reply carrying exactly one UID.
pub const TOD_DATA_LEN: usize = 34;
pub const TOD_RDM_VER_OFFSET: usize = 12;
pub const TOD_PORT_OFFSET: usize = 13;
pub const TOD_BIND_INDEX_OFFSET: usize = 20;
pub const TOD_NET_OFFSET: usize = 21;
pub const TOD_COMMAND_OFFSET: usize = 22;
pub const TOD_ADDRESS_OFFSET: usize = 23;
pub const TOD_UID_TOTAL_RANGE: std::ops::Range<usize> = 24..26;
pub const TOD_BLOCK_COUNT_OFFSET: usize = 26;
pub const TOD_UID_COUNT_OFFSET: usize = 27;
pub const TOD_UID_RANGE: std::ops::Range<usize> = 28..34;

pub const TOD_COMMAND_TOD_FULL: u8 = 0x00;
pub const RDM_STANDARD_VERSION: u8 = 0x01;
