use std::fmt;
use std::io;
use std::path::PathBuf;

/// Represents an error encountered while emitting source text.
#[derive(Debug)]
pub enum Error {
    /// An element width other than 8, 16 or 32 bits.
    InvalidWidth(u32),

    /// The requested width does not match the element type of the array.
    WidthMismatch { width: u32, actual: u32 },

    /// More elements were requested than the array holds.
    LengthOutOfBounds { length: usize, available: usize },

    /// The output file could not be created.
    SinkUnavailable { path: PathBuf, source: io::Error },

    /// Writing to the sink failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidWidth(width) => write!(f, "unrecognized width {}", width),
            Error::WidthMismatch { width, actual } => write!(
                f,
                "width {} requested for an array of {}-bit elements",
                width, actual
            ),
            Error::LengthOutOfBounds { length, available } => write!(
                f,
                "length {} exceeds the {} available elements",
                length, available
            ),
            Error::SinkUnavailable { path, source } => {
                write!(f, "{}: unable to create file: {}", path.display(), source)
            }
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SinkUnavailable { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Log an error to the diagnostic channel and return it.
pub(crate) fn report<T>(context: &str, err: Error) -> Result<T, Error> {
    log::error!("{}: {}", context, err);
    Err(err)
}
