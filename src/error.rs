use thiserror::Error;

/// An error that can occur while acquiring an EDID block from a monitor.
///
/// Decoding itself never fails; see [`crate::decode`].
#[derive(Error, Debug)]
pub enum Error {
    /// The DDC device reported an error
    #[error("DDC/CI error: {0}")]
    Device(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Fewer bytes than a full EDID block were returned
    #[error("short EDID read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },
    /// The source holds no EDID (e.g. a disconnected connector)
    #[error("EDID is empty")]
    Empty,
    /// File or kernel I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Service not found
    #[error("Service not found")]
    ServiceNotFound,
}

impl Error {
    pub(crate) fn device<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Device(Box::new(error))
    }
}
