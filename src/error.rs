use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Compression needs a square image with sides divisible by 4,
    /// decompression only the latter.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid data length, expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid file signature {0:#010X}")]
    BadSignature(u32),

    #[error("not enough data for BC5, got {len} bytes")]
    Truncated { len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn check_len(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength { expected, actual });
    }
    Ok(())
}
