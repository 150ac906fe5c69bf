//! The file type enumeration shared with TDLib and the Bot API.

use crate::error::{Error, Unsupported};

/// Kind of file a persistent id points at.
///
/// The discriminants are part of the wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum FileType {
    Thumbnail          = 0,
    ProfilePhoto       = 1,
    Photo              = 2,
    VoiceNote          = 3,
    Video              = 4,
    Document           = 5,
    Encrypted          = 6,
    Temp               = 7,
    Sticker            = 8,
    Audio              = 9,
    Animation          = 10,
    EncryptedThumbnail = 11,
    Wallpaper          = 12,
    VideoNote          = 13,
    SecureRaw          = 14,
    Secure             = 15,
    Background         = 16,
    DocumentAsFile     = 17,
}

/// Which remote location layout a (non-web) file type is stored with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bucket {
    Photo,
    Common,
}

/// Coarse class written at the front of a unique file id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub(crate) enum UniqueClass {
    Web       = 0,
    Photo     = 1,
    Document  = 2,
    Secure    = 3,
    Encrypted = 4,
    Temp      = 5,
}

impl FileType {
    /// All known file types, in wire order.
    pub const ALL: [FileType; 18] = [
        Self::Thumbnail, Self::ProfilePhoto, Self::Photo, Self::VoiceNote,
        Self::Video, Self::Document, Self::Encrypted, Self::Temp,
        Self::Sticker, Self::Audio, Self::Animation, Self::EncryptedThumbnail,
        Self::Wallpaper, Self::VideoNote, Self::SecureRaw, Self::Secure,
        Self::Background, Self::DocumentAsFile,
    ];

    /// Number of known file types; every valid raw value is below this.
    pub const COUNT: i32 = Self::ALL.len() as i32;

    /// Look up a raw (flag-free) type value.
    pub fn from_raw(raw: i32) -> Option<Self> {
        usize::try_from(raw).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// The wire value.
    pub fn raw(self) -> i32 { self as i32 }

    /// `true` for types stored as a photo location (size source keyed).
    pub fn is_photo(self) -> bool {
        self.bucket() == Some(Bucket::Photo)
    }

    /// `true` for types stored as a common (document-like) location.
    pub fn is_common(self) -> bool {
        self.bucket() == Some(Bucket::Common)
    }

    pub(crate) fn bucket(self) -> Option<Bucket> {
        match self {
            Self::Photo
            | Self::ProfilePhoto
            | Self::Thumbnail
            | Self::EncryptedThumbnail
            | Self::Wallpaper => Some(Bucket::Photo),

            Self::Video
            | Self::VoiceNote
            | Self::Document
            | Self::Sticker
            | Self::Audio
            | Self::Animation
            | Self::Encrypted
            | Self::VideoNote
            | Self::SecureRaw
            | Self::Secure
            | Self::Background
            | Self::DocumentAsFile => Some(Bucket::Common),

            Self::Temp => None,
        }
    }

    pub(crate) fn unique_class(self) -> UniqueClass {
        match self {
            Self::Photo
            | Self::ProfilePhoto
            | Self::Thumbnail
            | Self::EncryptedThumbnail
            | Self::Wallpaper => UniqueClass::Photo,

            Self::Video
            | Self::VoiceNote
            | Self::Document
            | Self::Sticker
            | Self::Audio
            | Self::Animation
            | Self::VideoNote
            | Self::Background
            | Self::DocumentAsFile => UniqueClass::Document,

            Self::SecureRaw | Self::Secure => UniqueClass::Secure,
            Self::Encrypted => UniqueClass::Encrypted,
            Self::Temp => UniqueClass::Temp,
        }
    }
}

impl TryFrom<i32> for FileType {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Error> {
        Self::from_raw(raw).ok_or(Error::UnsupportedFormat {
            reason: Unsupported::FileType(raw),
            raw: Vec::new(),
        })
    }
}

impl From<FileType> for i32 {
    fn from(t: FileType) -> Self { t as i32 }
}
