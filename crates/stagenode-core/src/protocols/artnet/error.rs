use thiserror::Error;

/// Errors returned by Art-Net parsing and reading.
///
/// Every variant maps to a silent drop at the session level; the
/// protocol has no negative-acknowledgement path.
#[derive(Debug, Error)]
pub enum ArtNetError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("incorrect magic value")]
    BadMagic,
    #[error("unsupported protocol version: {version}")]
    VersionMismatch { version: u16 },
    #[error("invalid channel data length: {length}")]
    InvalidLength { length: u16 },
    #[error("declared length {declared} does not match {actual} payload bytes")]
    LengthMismatch { declared: usize, actual: usize },
}
