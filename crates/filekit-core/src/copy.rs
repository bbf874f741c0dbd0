//! Buffered stream copy used to fill archive entries.
//!
//! One [`CopyBuffer`] is allocated per packaging run and reused for every
//! entry. Read and write failures are reported separately so callers can tell
//! a bad source file from a bad archive sink.

use std::io;
use std::io::Read;
use std::io::Write;

/// Buffer size for copy operations (64 KiB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable heap buffer for stream copies.
///
/// # Examples
///
/// ```
/// use filekit_core::copy::CopyBuffer;
/// use filekit_core::copy::copy_with_buffer;
///
/// let mut buffer = CopyBuffer::new();
/// let mut output = Vec::new();
/// let copied = copy_with_buffer(&mut &b"hello"[..], &mut output, &mut buffer, |_| {})?;
/// assert_eq!(copied, 5);
/// # Ok::<(), filekit_core::copy::CopyError>(())
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of a copy failed.
#[derive(Debug)]
pub enum CopyError {
    /// Reading from the source failed.
    Read(io::Error),
    /// Writing to the destination failed.
    Write(io::Error),
}

impl std::fmt::Display for CopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(e) => write!(f, "read failed: {e}"),
            Self::Write(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl std::error::Error for CopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) | Self::Write(e) => Some(e),
        }
    }
}

/// Copies `reader` into `writer` through `buffer`.
///
/// `on_chunk` is called with the size of every chunk after it has been
/// written. Interrupted reads are retried. Returns the total bytes copied.
///
/// # Errors
///
/// Returns [`CopyError::Read`] or [`CopyError::Write`] for the failing side.
pub fn copy_with_buffer<R, W, F>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
    mut on_chunk: F,
) -> Result<u64, CopyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
    F: FnMut(u64),
{
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(CopyError::Write)?;

        let chunk = bytes_read as u64;
        total = total.saturating_add(chunk);
        on_chunk(chunk);
    }

    Ok(total)
}
