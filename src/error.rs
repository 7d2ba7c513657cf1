use std::fmt;
use std::io;

/// Errors that can be returned from filling or exporting frames
pub enum Error {
    /// Buffer length (in bytes) is not a multiple of 256
    UnalignedBuffer(usize),
    /// Pixel count of a frame is not a multiple of 64
    UnalignedFrame { width: usize, height: usize },
    /// Frame dimensions overflow the pixel buffer or the PNG header
    FrameTooLarge { width: usize, height: usize },
    /// Random source failed to produce a value
    Rng(rand_core::Error),
    /// PNG encoding failed
    Png(png::EncodingError),
    /// Unable to create an output file
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnalignedBuffer(len) => write!(
                formatter,
                "Buffer length {} is not a multiple of 256 bytes",
                len
            ),
            Error::UnalignedFrame { width, height } => write!(
                formatter,
                "Frame of {}x{} pixels is not a multiple of 64 pixels",
                width, height
            ),
            Error::FrameTooLarge { width, height } => {
                write!(formatter, "Frame of {}x{} pixels is too large", width, height)
            }
            Error::Rng(_) => write!(formatter, "Random source failed"),
            Error::Png(_) => write!(formatter, "Failed to encode PNG"),
            Error::Io(_) => write!(formatter, "Failed to write file"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnalignedBuffer(_)
            | Error::UnalignedFrame { .. }
            | Error::FrameTooLarge { .. } => write!(fmt, "{}", self),
            Error::Rng(ref e) => write!(fmt, "{}, {:?}", self, e),
            Error::Png(ref e) => write!(fmt, "{}, {:?}", self, e),
            Error::Io(ref e) => write!(fmt, "{}, {:?}", self, e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Rng(e) => Some(e),
            Error::Png(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        Error::Rng(err)
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        Error::Png(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
