//! The top-level persistent file id: version framing, flags, file reference.
//!
//! ```text
//! base64url(
//!     rle(
//!         type|flags:int  dc_id:int  [file_reference:bytes]  <location>
//!     )
//!     [subversion:u8]  marker:u8
//! )
//! ```

use layer_tl_binary::{Cursor, Deserializable, Serializable};

use crate::error::{Error, Invalid, Result, Unsupported};
use crate::file_type::Bucket;
use crate::{FileType, RemoteLocation, b64, rle};

/// Set in the type field when the location is a [`RemoteLocation::Web`].
pub const WEB_LOCATION_FLAG: i32 = 1 << 24;
/// Set in the type field when a file reference follows the dc id.
pub const FILE_REFERENCE_FLAG: i32 = 1 << 25;

/// Trailing marker of the old generation (no subversion byte).
pub const LEGACY_MARKER: u8 = 2;
/// Trailing marker of the persistent generation (preceded by a subversion).
pub const PERSISTENT_MARKER: u8 = 4;

/// Newest subversion this codec understands.
pub const MAX_SUBVERSION: u8 = 54;
/// Subversion written by default.
pub const CURRENT_SUBVERSION: u8 = MAX_SUBVERSION;

/// File reference value TDLib stores for a reference known to be invalid.
const INVALID_FILE_REFERENCE: &[u8] = b"#";

// ─── FileIdVersion ────────────────────────────────────────────────────────────

/// Which framing a file id uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileIdVersion {
    /// Trailing marker `2`; photo locations use the oldest flat layout.
    Legacy,
    /// Trailing marker `4` preceded by a subversion byte.
    Persistent { subversion: u8 },
}

impl FileIdVersion {
    /// What [`FileId::encode`] writes.
    pub const CURRENT: Self = Self::Persistent { subversion: CURRENT_SUBVERSION };

    /// Subversion controlling the photo location layout (`0` for legacy ids).
    pub fn subversion(self) -> u8 {
        match self {
            Self::Legacy => 0,
            Self::Persistent { subversion } => subversion,
        }
    }

    /// Split the trailing version bytes off `binary`.
    fn detect(binary: &[u8]) -> Result<(Self, &[u8])> {
        match binary {
            [] => Err(Error::unsupported(Unsupported::Empty, binary)),
            [rest @ .., LEGACY_MARKER] => Ok((Self::Legacy, rest)),
            [rest @ .., subversion, PERSISTENT_MARKER] => {
                if *subversion > MAX_SUBVERSION {
                    return Err(Error::unsupported(Unsupported::Subversion(*subversion), binary));
                }
                Ok((Self::Persistent { subversion: *subversion }, rest))
            }
            [PERSISTENT_MARKER] => Err(layer_tl_binary::Error::UnexpectedEof.into()),
            [.., other] => Err(Error::unsupported(Unsupported::Version(*other), binary)),
        }
    }

    fn write_suffix(self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Self::Legacy => out.push(LEGACY_MARKER),
            Self::Persistent { subversion } if subversion > MAX_SUBVERSION => {
                return Err(Error::unsupported(Unsupported::Subversion(subversion), &[]));
            }
            Self::Persistent { subversion } => out.extend([subversion, PERSISTENT_MARKER]),
        }
        Ok(())
    }
}

impl Default for FileIdVersion {
    fn default() -> Self { Self::CURRENT }
}

// ─── FileId ───────────────────────────────────────────────────────────────────

/// A decoded file id.
///
/// Every value produced by [`FileId::decode`] has passed the same checks
/// [`FileId::validate`] runs, and [`FileId::encode`] refuses values that
/// do not.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId {
    /// Data center holding the file.
    pub dc_id: i32,
    /// What kind of file this is.
    pub file_type: FileType,
    /// Server-issued reference token, when present and not marked invalid.
    pub file_reference: Option<Vec<u8>>,
    /// Where the file lives.
    pub location: RemoteLocation,
}

impl FileId {
    // ─── Decoding ─────────────────────────────────────────────────────────────

    /// Decode a Bot API / TDLib file id string.
    pub fn decode(file_id: &str) -> Result<Self> {
        Self::decode_versioned(file_id).map(|(id, _)| id)
    }

    /// Like [`decode`](Self::decode), also reporting the framing that was used.
    pub fn decode_versioned(file_id: &str) -> Result<(Self, FileIdVersion)> {
        let binary = b64::decode(file_id)?;
        Self::from_bytes_versioned(&binary)
    }

    /// Decode an already base64-decoded file id.
    pub fn from_bytes(binary: &[u8]) -> Result<Self> {
        Self::from_bytes_versioned(binary).map(|(id, _)| id)
    }

    /// Like [`from_bytes`](Self::from_bytes), also reporting the framing.
    pub fn from_bytes_versioned(binary: &[u8]) -> Result<(Self, FileIdVersion)> {
        let (version, body) = FileIdVersion::detect(binary)?;
        let data = rle::decode(body);
        log::trace!("[file_id] {version:?}: {} bytes → {} bytes after RLE", body.len(), data.len());

        let file_id = Self::read(&mut Cursor::from_slice(&data), version.subversion())?;
        log::debug!(
            "[file_id] Decoded {:?} on DC{} ({:?}, {} location)",
            file_id.file_type, file_id.dc_id, version, file_id.location.name()
        );
        Ok((file_id, version))
    }

    fn read(buf: &mut Cursor<'_>, subversion: u8) -> Result<Self> {
        let raw_type = i32::deserialize(buf)?;
        let is_web = raw_type & WEB_LOCATION_FLAG != 0;
        let has_reference = raw_type & FILE_REFERENCE_FLAG != 0;

        let raw_type = raw_type & !WEB_LOCATION_FLAG & !FILE_REFERENCE_FLAG;
        let file_type = FileType::from_raw(raw_type)
            .ok_or_else(|| Error::unsupported(Unsupported::FileType(raw_type), buf.data()))?;

        let dc_id = i32::deserialize(buf)?;

        let file_reference = if has_reference {
            Some(Vec::<u8>::deserialize(buf)?).filter(|r| r != INVALID_FILE_REFERENCE)
        } else {
            None
        };

        let location = if is_web {
            RemoteLocation::read_web(buf)?
        } else {
            match file_type.bucket() {
                Some(Bucket::Photo) => {
                    let location = RemoteLocation::read_photo(buf, subversion)?;
                    if let RemoteLocation::Photo { source, .. } = &location {
                        source.check_file_type(file_type)?;
                    }
                    location
                }
                Some(Bucket::Common) => RemoteLocation::read_common(buf)?,
                None => {
                    return Err(Error::unsupported(Unsupported::LocationKind(file_type), buf.data()));
                }
            }
        };

        Ok(Self { dc_id, file_type, file_reference, location })
    }

    // ─── Validation ───────────────────────────────────────────────────────────

    /// Check the rules decoding enforces: the location kind matches the
    /// file type, a photo's size source is valid for it, and the file
    /// reference is not the `#` marker.
    pub fn validate(&self) -> Result<()> {
        if self.file_reference.as_deref() == Some(INVALID_FILE_REFERENCE) {
            return Err(Invalid::FileReferenceMarker.into());
        }

        let bucket = match &self.location {
            RemoteLocation::Web { .. } => return Ok(()),
            RemoteLocation::Photo { .. } => Bucket::Photo,
            RemoteLocation::Common { .. } => Bucket::Common,
        };

        match self.file_type.bucket() {
            None => {
                return Err(Error::unsupported(Unsupported::LocationKind(self.file_type), &[]));
            }
            Some(b) if b != bucket => {
                return Err(Invalid::LocationMismatch {
                    file_type: self.file_type,
                    location:  self.location.name(),
                }.into());
            }
            Some(_) => {}
        }

        if let RemoteLocation::Photo { source, .. } = &self.location {
            source.validate()?;
            source.check_file_type(self.file_type)?;
        }
        Ok(())
    }

    // ─── Encoding ─────────────────────────────────────────────────────────────

    /// Encode with the current framing.
    pub fn encode(&self) -> Result<String> {
        self.encode_with(FileIdVersion::CURRENT)
    }

    /// Encode with an explicit framing, e.g. to produce ids older clients read.
    pub fn encode_with(&self, version: FileIdVersion) -> Result<String> {
        self.to_bytes_with(version).map(|binary| b64::encode(&binary))
    }

    /// The raw (pre-base64) bytes of [`encode_with`](Self::encode_with).
    pub fn to_bytes_with(&self, version: FileIdVersion) -> Result<Vec<u8>> {
        self.validate()?;

        let mut raw_type = self.file_type.raw();
        if matches!(self.location, RemoteLocation::Web { .. }) {
            raw_type |= WEB_LOCATION_FLAG;
        }
        if self.file_reference.is_some() {
            raw_type |= FILE_REFERENCE_FLAG;
        }

        let mut data = Vec::new();
        raw_type.serialize(&mut data);
        self.dc_id.serialize(&mut data);
        if let Some(reference) = &self.file_reference {
            reference.serialize(&mut data);
        }
        self.location.write(&mut data, version.subversion())?;

        let mut binary = rle::encode(&data);
        version.write_suffix(&mut binary)?;
        log::debug!(
            "[file_id] Encoded {:?} on DC{} ({:?}, {} bytes)",
            self.file_type, self.dc_id, version, binary.len()
        );
        Ok(binary)
    }
}

impl std::str::FromStr for FileId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Self::decode(s) }
}
