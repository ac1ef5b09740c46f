//! Stream copy with a reusable buffer.
//!
//! Packing and extraction both move whole entries between two already-open
//! streams. Sharing one buffer across a run avoids a fresh allocation per
//! entry.

use std::io::Read;
use std::io::Write;
use std::io::{self};

/// Buffer size used for entry copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Heap buffer reused across every entry of one pack or extract call.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use treezip_core::copy::CopyBuffer;
/// use treezip_core::copy::copy_with_buffer;
///
/// let mut buffer = CopyBuffer::new();
/// let mut input = Cursor::new(b"hello".to_vec());
/// let mut output = Vec::new();
///
/// let copied = copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap();
/// assert_eq!(copied, 5);
/// assert_eq!(output, b"hello");
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Vec<u8>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE],
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

/// Copies everything from `reader` to `writer` and returns the byte count.
///
/// Interrupted reads are retried. The writer is not flushed.
///
/// # Errors
///
/// Returns the first read or write error, or `InvalidData` if the byte
/// count overflows `u64`.
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;

        total = total
            .checked_add(bytes_read as u64)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "byte count overflow"))?;
    }

    Ok(total)
}
