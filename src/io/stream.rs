//! Fixed-size reads from a blocking byte stream.
//!
//! The JPEG scanner only ever asks for exact byte counts. A stream that ends
//! early is a format problem (`Truncated`), while any other reader failure is
//! reported as `Io` so callers can tell the two apart.

use std::io::{self, ErrorKind, Read};

use crate::error::JpegError;

/// Fill `buf` completely or report how many bytes were missing.
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), JpegError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(JpegError::Truncated {
                    needed: buf.len() - filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Read exactly `N` bytes into an array.
pub fn read_array<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N], JpegError> {
    let mut buf = [0u8; N];
    read_fully(reader, &mut buf)?;
    Ok(buf)
}

/// Read exactly `len` bytes into a new vector.
pub fn read_vec<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>, JpegError> {
    let mut buf = vec![0u8; len];
    read_fully(reader, &mut buf)?;
    Ok(buf)
}

/// Consume and discard exactly `len` bytes.
pub fn skip<R: Read>(reader: &mut R, len: usize) -> Result<(), JpegError> {
    let copied = io::copy(&mut reader.by_ref().take(len as u64), &mut io::sink())?;
    if copied < len as u64 {
        return Err(JpegError::Truncated {
            needed: len - copied as usize,
        });
    }
    Ok(())
}
