//! Constants used throughout the core crate.

/// Default number of bytes read per chunk while digesting a stream.
pub const DEFAULT_READ_CHUNK_BYTES: usize = 4096;

/// Upper bound for a configured read chunk.
pub const MAX_READ_CHUNK_BYTES: usize = 1024 * 1024; // 1 MiB

/// Environment variable holding the read chunk size.
pub const READ_CHUNK_BYTES_ENV: &str = "CSV_READ_CHUNK_BYTES";

/// Environment variable holding the default prefix for the command line tool.
pub const PREFIX_ENV: &str = "CSV_PREFIX";
