#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected end of data")]
    UnexpectedEof,

    #[error("unknown file extension: {0:?}")]
    UnknownExtension(String),

    #[error("unknown game version: {0}")]
    UnknownVersion(i32),

    #[error("could not decode park: {reason}")]
    DecodeFailed { reason: String },

    #[error("decoded park is {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("io error: {0}")]
    Io(String),

    #[error("invalid object manifest: {0}")]
    Manifest(String),

    #[error("invalid scenario patch: {0}")]
    Patch(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Manifest(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
