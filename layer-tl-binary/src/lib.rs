//! Sequential reader/writer for Telegram's little-endian binary records.
//!
//! This is the small subset of TL binary serialization that persistent
//! records (file ids, unique ids) are built from:
//!
//! | TL type  | Rust type            | Wire form                                  |
//! |----------|----------------------|--------------------------------------------|
//! | `int`    | `i32` / `u32`        | 4 bytes, little-endian                     |
//! | `long`   | `i64`                | 8 bytes, little-endian                     |
//! | `bytes`  | `Vec<u8>` / `[u8]`   | length prefix, data, zero padding to 4     |
//! | `string` | `String` / `str`     | same framing as `bytes`, UTF-8 content     |
//!
//! ```rust
//! use layer_tl_binary::{Cursor, Deserializable, Serializable};
//!
//! let mut buf = Vec::new();
//! 7i32.serialize(&mut buf);
//! "hi".serialize(&mut buf);
//!
//! let mut cur = Cursor::from_slice(&buf);
//! assert_eq!(i32::deserialize(&mut cur).unwrap(), 7);
//! assert_eq!(String::deserialize(&mut cur).unwrap(), "hi");
//! assert_eq!(cur.remaining(), 0);
//! ```

#![deny(unsafe_code)]

pub mod deserialize;
pub mod serialize;

pub use deserialize::{Cursor, Deserializable, Error};
pub use serialize::Serializable;
