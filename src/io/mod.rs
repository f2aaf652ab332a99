//! Low-level stream helpers.
//!
//! These read exact byte counts from a `std::io::Read`, turning a premature
//! end of stream into `JpegError::Truncated`. Integer decoding of in-memory
//! TIFF data lives on `ByteOrder`.

mod stream;

pub use stream::{read_array, read_vec, skip};
