use thiserror::Error;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("no cipher suites in common")]
    ErrNoCipherSuites,
    #[error("no protocol priorities were set")]
    ErrNoPrioritiesWereSet,
    #[error("the cipher suite is unknown or not supported in this build")]
    ErrUnknownCipherSuite,
    #[error("the requested data are not available")]
    ErrRequestedDataNotAvailable,
    #[error("memory allocation failed")]
    ErrMemoryAllocation,
    #[error("invalid request")]
    ErrInvalidRequest,
    #[error("no cipher suite is named {0:?}")]
    ErrInvalidCipherSuiteName(String),
    #[error("no named group is called {0:?}")]
    ErrInvalidNamedGroup(String),
    #[error("no certificate is compatible with the cipher suite")]
    ErrNoCertificateForCipherSuite,
    #[error("packet length and declared length do not match")]
    ErrInvalidPacketLength,
    #[error("data length and declared length do not match")]
    ErrLengthMismatch,

    #[error("{0}")]
    Io(#[source] IoError),

    #[allow(non_camel_case_types)]
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
#[error("io error: {0}")]
pub struct IoError(#[from] pub io::Error);

// Workaround for wanting PartialEq for io::Error.
impl PartialEq for IoError {
    fn eq(&self, other: &Self) -> bool {
        self.0.kind() == other.0.kind()
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(IoError(e))
    }
}
