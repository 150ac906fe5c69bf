//! TDLib / Bot API compatible file ids.
//!
//! A file id is a base64url string naming a remote file together with
//! everything needed to download it: data center, access hash, file
//! reference and, for photos, which stored size to fetch. This crate decodes
//! every generation of the format TDLib has produced and writes ids that
//! TDLib and the Bot API accept.
//!
//! # Overview
//!
//! | Item                  | Contents                                              |
//! |-----------------------|-------------------------------------------------------|
//! | [`FileId`]            | The decoded descriptor; `decode` / `encode_with`      |
//! | [`RemoteLocation`]    | Web, photo-keyed or common location                   |
//! | [`PhotoSizeSource`]   | How a photo-keyed location is addressed               |
//! | [`FileType`]          | The platform's file type enumeration                  |
//! | [`FileIdVersion`]     | Legacy or persistent framing (+ subversion)           |
//! | [`rle`]               | The zero-run compression applied before base64        |
//!
//! # Example
//!
//! ```rust
//! use layer_file_id::{FileId, FileType, RemoteLocation};
//!
//! let doc = FileId {
//!     dc_id:          2,
//!     file_type:      FileType::Document,
//!     file_reference: Some(vec![1, 2, 3]),
//!     location:       RemoteLocation::Common { id: 5_123_456_789, access_hash: -42 },
//! };
//!
//! let text = doc.encode().unwrap();
//! assert_eq!(FileId::decode(&text).unwrap(), doc);
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod rle;
mod b64;
mod file_id;
mod file_type;
mod location;
mod size_source;
mod unique;

pub use error::{Error, Invalid, Result, Unsupported};
pub use file_id::{
    CURRENT_SUBVERSION, FILE_REFERENCE_FLAG, FileId, FileIdVersion, LEGACY_MARKER,
    MAX_SUBVERSION, PERSISTENT_MARKER, WEB_LOCATION_FLAG,
};
pub use file_type::FileType;
pub use location::{LEGACY_SOURCE_SUBVERSION, RemoteLocation, TAGGED_SOURCE_SUBVERSION};
pub use size_source::PhotoSizeSource;

/// Decode a file id string. Shorthand for [`FileId::decode`].
pub fn decode(file_id: &str) -> Result<FileId> {
    FileId::decode(file_id)
}

/// Encode a descriptor, using the current framing unless `version` says otherwise.
pub fn encode(file_id: &FileId, version: Option<FileIdVersion>) -> Result<String> {
    file_id.encode_with(version.unwrap_or_default())
}

/// Compute the unique id of a descriptor. Shorthand for [`FileId::unique_id`].
pub fn to_unique_file_id(file_id: &FileId) -> Result<String> {
    file_id.unique_id()
}
