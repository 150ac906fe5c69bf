use layer_file_id::{FileId, FileType, PhotoSizeSource, RemoteLocation, rle, to_unique_file_id};
use layer_tl_binary::Serializable;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn expected(fields: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut data = Vec::new();
    fields(&mut data);
    URL_SAFE_NO_PAD.encode(rle::encode(&data))
}

fn photo(file_type: FileType, source: PhotoSizeSource) -> FileId {
    FileId {
        dc_id: 2,
        file_type,
        file_reference: Some(vec![3, 3, 3]),
        location: RemoteLocation::Photo { id: 123_456_789, access_hash: 55, source },
    }
}

// ── Layouts ───────────────────────────────────────────────────────────────────

#[test]
fn common_location() {
    let doc = FileId {
        dc_id: 2,
        file_type: FileType::Sticker,
        file_reference: None,
        location: RemoteLocation::Common { id: 987_654_321, access_hash: 1 },
    };
    let unique = doc.unique_id().unwrap();
    assert_eq!(unique, expected(|d| {
        2i32.serialize(d);
        987_654_321i64.serialize(d);
    }));
    // Bot API document unique ids start with "AgAD"
    assert!(unique.starts_with("AgAD"));
}

#[test]
fn web_location_uses_web_class() {
    let web = FileId {
        dc_id: 4,
        file_type: FileType::Photo,
        file_reference: None,
        location: RemoteLocation::Web { url: "https://a.b/c".into(), access_hash: 9 },
    };
    assert_eq!(to_unique_file_id(&web).unwrap(), expected(|d| {
        0i32.serialize(d);
        "https://a.b/c".serialize(d);
    }));
}

#[test]
fn thumbnail_source() {
    let p = photo(FileType::Photo, PhotoSizeSource::Thumbnail { file_type: FileType::Photo, thumbnail_type: b'x' });
    let unique = p.unique_id().unwrap();
    assert_eq!(unique, expected(|d| {
        1i32.serialize(d);
        123_456_789i64.serialize(d);
        d.push(b'x' + 5);
    }));
    assert!(unique.starts_with("AQAD"));
}

#[test]
fn dialog_photo_source() {
    let p = photo(FileType::ProfilePhoto, PhotoSizeSource::DialogPhoto { big: true, id: -1, access_hash: -2 });
    assert_eq!(p.unique_id().unwrap(), expected(|d| {
        1i32.serialize(d);
        123_456_789i64.serialize(d);
        d.push(1);
    }));
}

#[test]
fn volume_addressed_sources() {
    let sources = [
        (FileType::Photo, PhotoSizeSource::FullLegacy { volume_id: 77, secret: 1, local_id: 8 }),
        (FileType::ProfilePhoto, PhotoSizeSource::DialogPhotoLegacy {
            big: false, id: 1, access_hash: 2, volume_id: 77, local_id: 8,
        }),
        (FileType::Thumbnail, PhotoSizeSource::StickerSetThumbnailLegacy {
            id: 1, access_hash: 2, volume_id: 77, local_id: 8,
        }),
    ];
    let want = expected(|d| {
        1i32.serialize(d);
        77i64.serialize(d);
        8i32.serialize(d);
    });
    for (file_type, source) in sources {
        assert_eq!(photo(file_type, source).unique_id().unwrap(), want);
    }
}

#[test]
fn sticker_set_sources() {
    let plain = photo(FileType::Thumbnail, PhotoSizeSource::StickerSetThumbnail { id: 4, access_hash: 5 });
    assert_eq!(plain.unique_id().unwrap(), expected(|d| {
        1i32.serialize(d);
        150i32.serialize(d);
        4i64.serialize(d);
        5i64.serialize(d);
    }));

    let versioned = photo(FileType::Thumbnail, PhotoSizeSource::StickerSetThumbnailVersion { id: 4, access_hash: 5, version: 6 });
    assert_eq!(versioned.unique_id().unwrap(), expected(|d| {
        1i32.serialize(d);
        d.push(2);
        4i64.serialize(d);
        6i32.serialize(d);
    }));
}

#[test]
fn legacy_source() {
    let p = photo(FileType::Photo, PhotoSizeSource::Legacy { secret: 31 });
    assert_eq!(p.unique_id().unwrap(), expected(|d| {
        1i32.serialize(d);
        100i32.serialize(d);
        31i64.serialize(d);
    }));
}

#[test]
fn file_type_classes() {
    let common = |file_type| FileId {
        dc_id: 1,
        file_type,
        file_reference: None,
        location: RemoteLocation::Common { id: 1, access_hash: 1 },
    };
    let class_of = |file_type| {
        let unique = common(file_type).unique_id().unwrap();
        let data = rle::decode(&URL_SAFE_NO_PAD.decode(unique).unwrap());
        i32::from_le_bytes(data[..4].try_into().unwrap())
    };
    assert_eq!(class_of(FileType::Video), 2);
    assert_eq!(class_of(FileType::Secure), 3);
    assert_eq!(class_of(FileType::SecureRaw), 3);
    assert_eq!(class_of(FileType::Encrypted), 4);
}

// ── Stability ─────────────────────────────────────────────────────────────────

#[test]
fn ignores_dc_reference_and_access_hash() {
    let a = photo(FileType::Photo, PhotoSizeSource::Thumbnail { file_type: FileType::Photo, thumbnail_type: b'm' });
    let mut b = a.clone();
    b.dc_id = 5;
    b.file_reference = None;
    if let RemoteLocation::Photo { access_hash, .. } = &mut b.location {
        *access_hash = -1;
    }
    assert_eq!(a.unique_id().unwrap(), b.unique_id().unwrap());
}

#[test]
fn invalid_descriptor_has_no_unique_id() {
    let bad = photo(FileType::Photo, PhotoSizeSource::DialogPhoto { big: true, id: 1, access_hash: 2 });
    assert!(bad.unique_id().unwrap_err().is_invalid());
}
