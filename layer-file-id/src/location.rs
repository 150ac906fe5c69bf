//! Remote file locations: web, photo-keyed and common.
//!
//! Web and common locations have had the same layout in every format
//! generation. Photo locations changed twice:
//!
//! * subversion `< 22`: `id access_hash volume_id secret local_id`, always a
//!   [`PhotoSizeSource::FullLegacy`].
//! * subversion `22..32`: `id access_hash volume_id <source> local_id`, with
//!   the source remapped onto its volume-addressed counterpart.
//! * subversion `>= 32`: `id access_hash <source>`.

use layer_tl_binary::deserialize::Buffer;
use layer_tl_binary::{Deserializable, Serializable};

use crate::error::{Invalid, Result};
use crate::size_source::{check_local_id, read_local_id};
use crate::PhotoSizeSource;

/// First subversion that stores the size source on its own.
pub const TAGGED_SOURCE_SUBVERSION: u8 = 32;
/// First subversion that stores a size source at all.
pub const LEGACY_SOURCE_SUBVERSION: u8 = 22;

/// Where the server keeps the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemoteLocation {
    /// A file proxied from an external URL.
    Web { url: String, access_hash: i64 },
    /// A photo, profile photo or thumbnail.
    Photo { id: i64, access_hash: i64, source: PhotoSizeSource },
    /// A document-like file (video, audio, sticker, …).
    Common { id: i64, access_hash: i64 },
}

impl RemoteLocation {
    /// Short variant name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Web { .. }    => "Web",
            Self::Photo { .. }  => "Photo",
            Self::Common { .. } => "Common",
        }
    }

    /// Server-side object id. Web locations have none.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Web { .. } => None,
            Self::Photo { id, .. } | Self::Common { id, .. } => Some(*id),
        }
    }

    /// Access hash needed alongside the id.
    pub fn access_hash(&self) -> i64 {
        match self {
            Self::Web { access_hash, .. }
            | Self::Photo { access_hash, .. }
            | Self::Common { access_hash, .. } => *access_hash,
        }
    }

    // ─── Decoding ─────────────────────────────────────────────────────────────

    pub(crate) fn read_web(buf: Buffer) -> Result<Self> {
        Ok(Self::Web {
            url:         String::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
        })
    }

    pub(crate) fn read_common(buf: Buffer) -> Result<Self> {
        Ok(Self::Common {
            id:          i64::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
        })
    }

    /// Read a photo location in the layout used by `subversion`.
    ///
    /// Does not cross-check the source against the outer file type; the
    /// caller does that once the location is built.
    pub(crate) fn read_photo(buf: Buffer, subversion: u8) -> Result<Self> {
        let id = i64::deserialize(buf)?;
        let access_hash = i64::deserialize(buf)?;

        let source = if subversion >= TAGGED_SOURCE_SUBVERSION {
            PhotoSizeSource::read(buf)?
        } else if subversion >= LEGACY_SOURCE_SUBVERSION {
            let volume_id = i64::deserialize(buf)?;
            let source = PhotoSizeSource::read(buf)?;
            let local_id = i32::deserialize(buf)?;
            remap_legacy(buf, source, volume_id, local_id)?
        } else {
            PhotoSizeSource::FullLegacy {
                volume_id: i64::deserialize(buf)?,
                secret:    i64::deserialize(buf)?,
                local_id:  read_local_id(buf)?,
            }
        };

        Ok(Self::Photo { id, access_hash, source })
    }

    // ─── Encoding ─────────────────────────────────────────────────────────────

    /// Write this location in the layout used by `subversion`.
    pub(crate) fn write(&self, out: &mut Vec<u8>, subversion: u8) -> Result<()> {
        match self {
            Self::Web { url, access_hash } => {
                url.serialize(out);
                access_hash.serialize(out);
            }
            Self::Common { id, access_hash } => {
                id.serialize(out);
                access_hash.serialize(out);
            }
            Self::Photo { id, access_hash, source } => {
                id.serialize(out);
                access_hash.serialize(out);
                write_photo_source(out, source, subversion)?;
            }
        }
        Ok(())
    }
}

/// Map a source read from a subversion `22..32` record onto the variant that
/// carries the record's `volume_id` / `local_id`.
fn remap_legacy(
    buf:       Buffer,
    source:    PhotoSizeSource,
    volume_id: i64,
    local_id:  i32,
) -> Result<PhotoSizeSource> {
    let source = match source {
        // The secret and local id of these records follow the whole layout.
        PhotoSizeSource::Legacy { .. } => PhotoSizeSource::FullLegacy {
            volume_id,
            secret:   i64::deserialize(buf)?,
            local_id: read_local_id(buf)?,
        },
        PhotoSizeSource::FullLegacy { .. } | PhotoSizeSource::Thumbnail { .. } => source,
        PhotoSizeSource::DialogPhoto { big, id, access_hash } => {
            check_local_id(local_id)?;
            PhotoSizeSource::DialogPhotoLegacy { big, id, access_hash, volume_id, local_id }
        }
        PhotoSizeSource::StickerSetThumbnail { id, access_hash } => {
            check_local_id(local_id)?;
            PhotoSizeSource::StickerSetThumbnailLegacy { id, access_hash, volume_id, local_id }
        }
        other => return Err(Invalid::LegacySource(other.name()).into()),
    };
    Ok(source)
}

/// The inverse of the three read layouts.
fn write_photo_source(out: &mut Vec<u8>, source: &PhotoSizeSource, subversion: u8) -> Result<()> {
    if subversion >= TAGGED_SOURCE_SUBVERSION {
        source.write(out);
        return Ok(());
    }

    let not_representable = || Invalid::NotRepresentable { source: source.name(), subversion };

    if subversion < LEGACY_SOURCE_SUBVERSION {
        let PhotoSizeSource::FullLegacy { volume_id, secret, local_id } = source else {
            return Err(not_representable().into());
        };
        volume_id.serialize(out);
        secret.serialize(out);
        local_id.serialize(out);
        return Ok(());
    }

    // Each of these comes back unchanged through `remap_legacy`.
    let (volume_id, local_id, tagged) = match source {
        PhotoSizeSource::FullLegacy { volume_id, local_id, .. } => {
            (*volume_id, *local_id, source.clone())
        }
        PhotoSizeSource::Thumbnail { .. } => (0, 0, source.clone()),
        PhotoSizeSource::DialogPhotoLegacy { big, id, access_hash, volume_id, local_id } => (
            *volume_id,
            *local_id,
            PhotoSizeSource::DialogPhoto { big: *big, id: *id, access_hash: *access_hash },
        ),
        PhotoSizeSource::StickerSetThumbnailLegacy { id, access_hash, volume_id, local_id } => (
            *volume_id,
            *local_id,
            PhotoSizeSource::StickerSetThumbnail { id: *id, access_hash: *access_hash },
        ),
        _ => return Err(not_representable().into()),
    };

    volume_id.serialize(out);
    tagged.write(out);
    local_id.serialize(out);
    Ok(())
}
