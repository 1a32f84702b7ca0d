pub const TAG_DISCOVER: u8 = b'D';
pub const TAG_REPLY: u8 = b'R';
pub const TAG_BUTTON: u8 = b'B';
pub const TAG_VOLTAGE: u8 = b'V';

// MAC is ASCII, formatted as 01:23:45:67:89:AB.
pub const MAC_LEN: usize = 17;
pub const MAC_OFFSET: usize = 1;

pub const BEACON_LEN: usize = 1 + MAC_LEN;
pub const REPLY_LEN: usize = 1;
pub const BUTTON_LEN: usize = 1 + MAC_LEN + 1;
pub const VOLTAGE_LEN: usize = 1 + MAC_LEN + VOLTAGE_DIGITS;

pub const BUTTON_ID_OFFSET: usize = 1 + MAC_LEN;
pub const VOLTAGE_OFFSET: usize = 1 + MAC_LEN;
pub const VOLTAGE_DIGITS: usize = 4;
pub const VOLTAGE_MAX_MILLIVOLTS: i32 = 9990;
