//! Unique file ids (`file_unique_id` in the Bot API).
//!
//! A unique id names the file itself, not a way of downloading it: it leaves
//! out the dc id, access hash and file reference, so every file id ever
//! issued for the same file maps to the same unique id. It can't be decoded
//! back into a location.

use layer_tl_binary::Serializable;

use crate::error::Result;
use crate::file_type::UniqueClass;
use crate::{FileId, PhotoSizeSource, RemoteLocation, b64, rle};

/// Marker written before the secret of a [`PhotoSizeSource::Legacy`] source.
const LEGACY_SECRET_MARKER: i32 = 100;
/// Marker written before a [`PhotoSizeSource::StickerSetThumbnail`] source.
const STICKER_SET_MARKER: i32 = 150;
/// Marker byte written before a [`PhotoSizeSource::StickerSetThumbnailVersion`] source.
const STICKER_SET_VERSION_MARKER: u8 = 2;

impl FileId {
    /// Compute the unique id of this file.
    pub fn unique_id(&self) -> Result<String> {
        self.validate()?;

        let class = match self.location {
            RemoteLocation::Web { .. } => UniqueClass::Web,
            _ => self.file_type.unique_class(),
        };

        let mut data = Vec::new();
        (class as i32).serialize(&mut data);

        match &self.location {
            RemoteLocation::Web { url, .. } => url.serialize(&mut data),
            RemoteLocation::Common { id, .. } => id.serialize(&mut data),
            RemoteLocation::Photo { id, source, .. } => match source {
                PhotoSizeSource::Legacy { secret } => {
                    LEGACY_SECRET_MARKER.serialize(&mut data);
                    secret.serialize(&mut data);
                }
                PhotoSizeSource::StickerSetThumbnail { id, access_hash } => {
                    STICKER_SET_MARKER.serialize(&mut data);
                    id.serialize(&mut data);
                    access_hash.serialize(&mut data);
                }
                // Which chat the photo belongs to doesn't matter.
                PhotoSizeSource::DialogPhoto { big, .. } => {
                    id.serialize(&mut data);
                    data.push(u8::from(*big));
                }
                PhotoSizeSource::Thumbnail { thumbnail_type, .. } => {
                    id.serialize(&mut data);
                    data.push(unique_thumbnail_type(*thumbnail_type));
                }
                PhotoSizeSource::FullLegacy { volume_id, local_id, .. }
                | PhotoSizeSource::DialogPhotoLegacy { volume_id, local_id, .. }
                | PhotoSizeSource::StickerSetThumbnailLegacy { volume_id, local_id, .. } => {
                    volume_id.serialize(&mut data);
                    local_id.serialize(&mut data);
                }
                PhotoSizeSource::StickerSetThumbnailVersion { id, version, .. } => {
                    data.push(STICKER_SET_VERSION_MARKER);
                    id.serialize(&mut data);
                    version.serialize(&mut data);
                }
            },
        }

        Ok(b64::encode(&rle::encode(&data)))
    }
}

/// `'a'` and `'c'` (crops) get the two lowest codes; everything else is
/// shifted up by five.
fn unique_thumbnail_type(thumbnail_type: u8) -> u8 {
    match thumbnail_type {
        b'a' => 0,
        b'c' => 1,
        t => t.wrapping_add(5),
    }
}
