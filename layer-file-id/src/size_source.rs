//! Photo size sources: how a photo-keyed location is addressed in storage.
//!
//! On the wire a source is an `int` tag followed by the variant's fields:
//!
//! | Tag | Variant                                 | Fields                                   |
//! |-----|-----------------------------------------|------------------------------------------|
//! | 0   | [`Legacy`](PhotoSizeSource::Legacy)     | `secret:long`                            |
//! | 1   | `Thumbnail`                             | `file_type:int thumbnail_type:int`       |
//! | 2/3 | `DialogPhoto` (small / big)             | `id:long access_hash:long`               |
//! | 4   | `StickerSetThumbnail`                   | `id:long access_hash:long`               |
//! | 5   | `FullLegacy`                            | `volume_id:long secret:long local_id:int`|
//! | 6/7 | `DialogPhotoLegacy` (small / big)       | `id access_hash volume_id local_id`      |
//! | 8   | `StickerSetThumbnailLegacy`             | `id access_hash volume_id local_id`      |
//! | 9   | `StickerSetThumbnailVersion`            | `id:long access_hash:long version:int`   |

use layer_tl_binary::deserialize::Buffer;
use layer_tl_binary::{Deserializable, Serializable};

use crate::FileType;
use crate::error::{Error, Invalid, Result, Unsupported};

const LEGACY: i32 = 0;
const THUMBNAIL: i32 = 1;
const DIALOG_PHOTO_SMALL: i32 = 2;
const DIALOG_PHOTO_BIG: i32 = 3;
const STICKER_SET_THUMBNAIL: i32 = 4;
const FULL_LEGACY: i32 = 5;
const DIALOG_PHOTO_SMALL_LEGACY: i32 = 6;
const DIALOG_PHOTO_BIG_LEGACY: i32 = 7;
const STICKER_SET_THUMBNAIL_LEGACY: i32 = 8;
const STICKER_SET_THUMBNAIL_VERSION: i32 = 9;

/// Where a photo-keyed file lives.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhotoSizeSource {
    /// Very old photos; only the secret survives.
    Legacy { secret: i64 },
    /// A sized thumbnail of a photo, sticker or document.
    ///
    /// `thumbnail_type` is the single-character size code (`b's'`, `b'm'`, `b'x'`, …).
    Thumbnail { file_type: FileType, thumbnail_type: u8 },
    /// A chat or user profile photo.
    DialogPhoto { big: bool, id: i64, access_hash: i64 },
    /// Thumbnail of a sticker set, addressed by the set.
    StickerSetThumbnail { id: i64, access_hash: i64 },
    /// Photo addressed by its storage volume.
    FullLegacy { volume_id: i64, secret: i64, local_id: i32 },
    /// A profile photo addressed by its storage volume.
    DialogPhotoLegacy { big: bool, id: i64, access_hash: i64, volume_id: i64, local_id: i32 },
    /// Sticker set thumbnail addressed by its storage volume.
    StickerSetThumbnailLegacy { id: i64, access_hash: i64, volume_id: i64, local_id: i32 },
    /// Sticker set thumbnail addressed by the set's thumbnail version.
    StickerSetThumbnailVersion { id: i64, access_hash: i64, version: i32 },
}

impl PhotoSizeSource {
    /// Short variant name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Legacy { .. }                     => "Legacy",
            Self::Thumbnail { .. }                  => "Thumbnail",
            Self::DialogPhoto { .. }                => "DialogPhoto",
            Self::StickerSetThumbnail { .. }        => "StickerSetThumbnail",
            Self::FullLegacy { .. }                 => "FullLegacy",
            Self::DialogPhotoLegacy { .. }          => "DialogPhotoLegacy",
            Self::StickerSetThumbnailLegacy { .. }  => "StickerSetThumbnailLegacy",
            Self::StickerSetThumbnailVersion { .. } => "StickerSetThumbnailVersion",
        }
    }

    /// The wire tag this source is written with.
    pub fn tag(&self) -> i32 {
        match self {
            Self::Legacy { .. }                        => LEGACY,
            Self::Thumbnail { .. }                     => THUMBNAIL,
            Self::DialogPhoto { big: false, .. }       => DIALOG_PHOTO_SMALL,
            Self::DialogPhoto { big: true, .. }        => DIALOG_PHOTO_BIG,
            Self::StickerSetThumbnail { .. }           => STICKER_SET_THUMBNAIL,
            Self::FullLegacy { .. }                    => FULL_LEGACY,
            Self::DialogPhotoLegacy { big: false, .. } => DIALOG_PHOTO_SMALL_LEGACY,
            Self::DialogPhotoLegacy { big: true, .. }  => DIALOG_PHOTO_BIG_LEGACY,
            Self::StickerSetThumbnailLegacy { .. }     => STICKER_SET_THUMBNAIL_LEGACY,
            Self::StickerSetThumbnailVersion { .. }    => STICKER_SET_THUMBNAIL_VERSION,
        }
    }

    /// The storage `local_id`, for the variants that carry one.
    pub fn local_id(&self) -> Option<i32> {
        match self {
            Self::FullLegacy { local_id, .. }
            | Self::DialogPhotoLegacy { local_id, .. }
            | Self::StickerSetThumbnailLegacy { local_id, .. } => Some(*local_id),
            _ => None,
        }
    }

    // ─── Decoding ─────────────────────────────────────────────────────────────

    /// Read a tagged source record.
    pub(crate) fn read(buf: Buffer) -> Result<Self> {
        let tag = i32::deserialize(buf)?;
        let source = match tag {
            LEGACY => Self::Legacy { secret: i64::deserialize(buf)? },
            THUMBNAIL => {
                let raw_type = i32::deserialize(buf)?;
                let file_type = FileType::from_raw(raw_type).ok_or_else(|| {
                    Error::unsupported(Unsupported::FileType(raw_type), buf.data())
                })?;
                let thumbnail_type = i32::deserialize(buf)?;
                let thumbnail_type = u8::try_from(thumbnail_type)
                    .map_err(|_| Invalid::ThumbnailType(thumbnail_type))?;
                Self::Thumbnail { file_type, thumbnail_type }
            }
            DIALOG_PHOTO_SMALL | DIALOG_PHOTO_BIG => Self::DialogPhoto {
                big:         tag == DIALOG_PHOTO_BIG,
                id:          i64::deserialize(buf)?,
                access_hash: i64::deserialize(buf)?,
            },
            STICKER_SET_THUMBNAIL => Self::StickerSetThumbnail {
                id:          i64::deserialize(buf)?,
                access_hash: i64::deserialize(buf)?,
            },
            FULL_LEGACY => Self::FullLegacy {
                volume_id: i64::deserialize(buf)?,
                secret:    i64::deserialize(buf)?,
                local_id:  read_local_id(buf)?,
            },
            DIALOG_PHOTO_SMALL_LEGACY | DIALOG_PHOTO_BIG_LEGACY => Self::DialogPhotoLegacy {
                big:         tag == DIALOG_PHOTO_BIG_LEGACY,
                id:          i64::deserialize(buf)?,
                access_hash: i64::deserialize(buf)?,
                volume_id:   i64::deserialize(buf)?,
                local_id:    read_local_id(buf)?,
            },
            STICKER_SET_THUMBNAIL_LEGACY => Self::StickerSetThumbnailLegacy {
                id:          i64::deserialize(buf)?,
                access_hash: i64::deserialize(buf)?,
                volume_id:   i64::deserialize(buf)?,
                local_id:    read_local_id(buf)?,
            },
            STICKER_SET_THUMBNAIL_VERSION => Self::StickerSetThumbnailVersion {
                id:          i64::deserialize(buf)?,
                access_hash: i64::deserialize(buf)?,
                version:     i32::deserialize(buf)?,
            },
            other => return Err(Error::unsupported(Unsupported::SizeSource(other), buf.data())),
        };
        Ok(source)
    }

    // ─── Encoding ─────────────────────────────────────────────────────────────

    /// Write the tag and fields. Call [`validate`](Self::validate) first.
    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        self.tag().serialize(out);
        match self {
            Self::Legacy { secret } => secret.serialize(out),
            Self::Thumbnail { file_type, thumbnail_type } => {
                file_type.raw().serialize(out);
                i32::from(*thumbnail_type).serialize(out);
            }
            Self::DialogPhoto { id, access_hash, .. }
            | Self::StickerSetThumbnail { id, access_hash } => {
                id.serialize(out);
                access_hash.serialize(out);
            }
            Self::FullLegacy { volume_id, secret, local_id } => {
                volume_id.serialize(out);
                secret.serialize(out);
                local_id.serialize(out);
            }
            Self::DialogPhotoLegacy { id, access_hash, volume_id, local_id, .. }
            | Self::StickerSetThumbnailLegacy { id, access_hash, volume_id, local_id } => {
                id.serialize(out);
                access_hash.serialize(out);
                volume_id.serialize(out);
                local_id.serialize(out);
            }
            Self::StickerSetThumbnailVersion { id, access_hash, version } => {
                id.serialize(out);
                access_hash.serialize(out);
                version.serialize(out);
            }
        }
    }

    // ─── Validation ───────────────────────────────────────────────────────────

    /// Field-level rules: every `local_id` is non-negative.
    pub fn validate(&self) -> Result<()> {
        if let Some(local_id) = self.local_id() {
            check_local_id(local_id)?;
        }
        Ok(())
    }

    /// Check that this source may appear in a photo location of type `outer`.
    pub fn check_file_type(&self, outer: FileType) -> Result<()> {
        match self {
            Self::Thumbnail { file_type, .. } => {
                let carries_thumbnails = matches!(
                    outer,
                    FileType::Photo | FileType::Thumbnail | FileType::EncryptedThumbnail
                );
                if *file_type != outer || !carries_thumbnails {
                    return Err(Invalid::ThumbnailFileType { outer, inner: *file_type }.into());
                }
            }
            Self::DialogPhoto { .. } | Self::DialogPhotoLegacy { .. } => {
                if outer != FileType::ProfilePhoto {
                    return Err(Invalid::DialogPhotoFileType(outer).into());
                }
            }
            Self::StickerSetThumbnail { .. }
            | Self::StickerSetThumbnailLegacy { .. }
            | Self::StickerSetThumbnailVersion { .. } => {
                if outer != FileType::Thumbnail {
                    return Err(Invalid::StickerSetFileType(outer).into());
                }
            }
            Self::Legacy { .. } | Self::FullLegacy { .. } => {}
        }
        Ok(())
    }
}

/// Reject a negative local id.
pub(crate) fn check_local_id(local_id: i32) -> Result<i32> {
    if local_id < 0 {
        return Err(Invalid::LocalId(local_id).into());
    }
    Ok(local_id)
}

/// Read an `int` local id, rejecting negative values.
pub(crate) fn read_local_id(buf: Buffer) -> Result<i32> {
    check_local_id(i32::deserialize(buf)?)
}
