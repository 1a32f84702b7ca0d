use thiserror::Error;

/// Errors returned by PropLink building and parsing.
#[derive(Debug, Error)]
pub enum PropLinkError {
    #[error("message too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("unknown message tag: {tag:#04x}")]
    UnknownTag { tag: u8 },
    #[error("malformed MAC address string")]
    InvalidMac,
    #[error("button id out of range: {value}")]
    InvalidButton { value: u8 },
    #[error("malformed voltage digits")]
    InvalidVoltage,
    #[error("unexpected message length: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
