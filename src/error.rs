/// Failures are local to the accessor that hit them and always carry the name of the
/// field being decoded plus the absolute offset into the save.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{field}: {size} bytes at 0x{offset:04x} out of bounds for a {len} byte save")]
    OutOfBounds {
        field: &'static str,
        offset: usize,
        size: isize,
        len: usize,
    },

    #[error("{field}: no table entry for 0x{value:02x} at 0x{offset:04x}")]
    UnknownLookupValue {
        field: &'static str,
        offset: usize,
        value: u8,
    },

    #[error("{field}: count {count} at 0x{offset:04x} does not fit (capacity: {capacity})")]
    MalformedRecord {
        field: &'static str,
        offset: usize,
        count: u8,
        capacity: usize,
    },

    #[error("invalid offset: {0:?}")]
    InvalidOffset(String),

    #[error("unable to read save: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
