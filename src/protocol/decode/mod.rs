//! Decoders for fetched column payloads.
//!
//! The fetch routine writes fixed-width numeric types in native byte order
//! at the start of the column slot. Variable-length types are written as
//! raw bytes with the true length reported separately.
//!
//! | Column type | Decoded as |
//! |-------------|------------|
//! | INT8 .. UINT64, FLOAT, DOUBLE | native-endian scalar |
//! | STRING | UTF-8 text |
//! | BLOB | `Bytes` |
//! | UNKNOWN | `Bytes` |

mod scalar;

pub use scalar::decode_column;
