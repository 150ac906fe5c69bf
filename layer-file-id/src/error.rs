//! Error types for layer-file-id.
//!
//! Every failure is one of two kinds:
//!
//! * [`Error::UnsupportedFormat`]: the input is well-formed as far as we can
//!   tell, but uses a version, enumeration value or tag this codec does not
//!   know. Only a newer codec can read it.
//! * [`Error::InvalidFileId`]: the input is in a known format but breaks one
//!   of its structural rules. It is corrupted or forged.

use std::fmt;

use crate::{FileType, b64};

// ─── Unsupported ──────────────────────────────────────────────────────────────

/// What exactly was not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unsupported {
    /// Nothing to decode, so there is no version marker at all.
    Empty,
    /// The trailing version marker byte.
    Version(u8),
    /// The subversion byte of a persistent id is newer than we know.
    Subversion(u8),
    /// The (flag-stripped) file type is outside the known enumeration.
    FileType(i32),
    /// Unknown photo size source tag.
    SizeSource(i32),
    /// A valid file type that has no remote location kind (e.g. `Temp`).
    LocationKind(FileType),
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty           => write!(f, "empty file id has no version marker"),
            Self::Version(v)      => write!(f, "unsupported file id version {v}"),
            Self::Subversion(v)   => write!(f, "unsupported file id subversion {v}"),
            Self::FileType(t)     => write!(f, "unsupported file type {t}"),
            Self::SizeSource(t)   => write!(f, "unsupported photo size source {t}"),
            Self::LocationKind(t) => write!(f, "file type {t:?} has no remote location"),
        }
    }
}

// ─── Invalid ──────────────────────────────────────────────────────────────────

/// Which structural rule the input broke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invalid {
    /// The string is not URL-safe base64.
    Base64(base64::DecodeError),
    /// A field could not be read (truncated buffer, bad UTF-8).
    Binary(layer_tl_binary::Error),
    /// A `local_id` was negative.
    LocalId(i32),
    /// A thumbnail type outside `0..=255`.
    ThumbnailType(i32),
    /// A `Thumbnail` source whose own file type disagrees with the outer one,
    /// or whose outer type cannot carry thumbnails.
    ThumbnailFileType { outer: FileType, inner: FileType },
    /// A dialog photo source on something other than `ProfilePhoto`.
    DialogPhotoFileType(FileType),
    /// A sticker set thumbnail source on something other than `Thumbnail`.
    StickerSetFileType(FileType),
    /// A legacy (subversion 22..32) photo location with a size source that
    /// has no legacy counterpart.
    LegacySource(&'static str),
    /// The location kind does not belong to the file type.
    LocationMismatch { file_type: FileType, location: &'static str },
    /// The size source cannot be written at the requested subversion.
    NotRepresentable { source: &'static str, subversion: u8 },
    /// A file reference equal to the `#` marker, which decodes as no reference.
    FileReferenceMarker,
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64(e)       => write!(f, "invalid base64: {e}"),
            Self::Binary(e)       => write!(f, "malformed record: {e}"),
            Self::LocalId(id)     => write!(f, "wrong local_id {id} (< 0)"),
            Self::ThumbnailType(t) => write!(f, "wrong thumbnail type {t}"),
            Self::ThumbnailFileType { outer, inner } => {
                write!(f, "thumbnail of type {inner:?} inside a {outer:?} photo location")
            }
            Self::DialogPhotoFileType(t) => {
                write!(f, "dialog photo source inside a {t:?} location")
            }
            Self::StickerSetFileType(t) => {
                write!(f, "sticker set thumbnail source inside a {t:?} location")
            }
            Self::LegacySource(s) => {
                write!(f, "size source {s} is invalid in a legacy photo location")
            }
            Self::LocationMismatch { file_type, location } => {
                write!(f, "{location} location cannot hold a {file_type:?}")
            }
            Self::NotRepresentable { source, subversion } => {
                write!(f, "size source {source} cannot be written at subversion {subversion}")
            }
            Self::FileReferenceMarker => {
                write!(f, "file reference \"#\" marks an invalid reference; use None")
            }
        }
    }
}

// ─── Error ────────────────────────────────────────────────────────────────────

/// The error type returned from every decode / encode operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Unknown version, enumeration value or tag. `raw` holds the bytes being
    /// decoded at the time (empty when encoding).
    UnsupportedFormat { reason: Unsupported, raw: Vec<u8> },
    /// A structural rule was broken.
    InvalidFileId(Invalid),
}

impl Error {
    pub(crate) fn unsupported(reason: Unsupported, raw: &[u8]) -> Self {
        Self::UnsupportedFormat { reason, raw: raw.to_vec() }
    }

    /// `true` for [`Error::UnsupportedFormat`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// `true` for [`Error::InvalidFileId`].
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidFileId(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { reason, raw } if raw.is_empty() => write!(f, "{reason}"),
            Self::UnsupportedFormat { reason, raw } => {
                write!(f, "{reason} ({})", b64::encode(raw))
            }
            Self::InvalidFileId(reason) => write!(f, "invalid file id: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFileId(Invalid::Base64(e)) => Some(e),
            Self::InvalidFileId(Invalid::Binary(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<Invalid> for Error {
    fn from(e: Invalid) -> Self { Self::InvalidFileId(e) }
}

impl From<layer_tl_binary::Error> for Error {
    fn from(e: layer_tl_binary::Error) -> Self { Self::InvalidFileId(Invalid::Binary(e)) }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self { Self::InvalidFileId(Invalid::Base64(e)) }
}

/// Specialized `Result` for this crate.
pub type Result<T> = std::result::Result<T, Error>;
