use layer_tl_binary::{Cursor, Deserializable, Error, Serializable};

// ── Integers ──────────────────────────────────────────────────────────────────

#[test]
fn i32_is_little_endian() {
    assert_eq!(0x0403_0201i32.to_bytes(), [1, 2, 3, 4]);
    assert_eq!(i32::from_bytes(&[0xff, 0xff, 0xff, 0xff]).unwrap(), -1);
}

#[test]
fn i64_keeps_full_precision() {
    // Values above 2^53 lose precision in a double; they must not here.
    for v in [i64::MAX, i64::MIN, (1i64 << 53) + 1, -8_070_450_532_247_928_832] {
        let bytes = v.to_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(i64::from_bytes(&bytes).unwrap(), v);
    }
}

// ── Bytes framing ─────────────────────────────────────────────────────────────

#[test]
fn short_bytes_are_padded_with_zeros() {
    let bytes = b"abcde"[..].to_bytes();
    // 1 length byte + 5 data bytes + 2 padding bytes
    assert_eq!(bytes, [5, b'a', b'b', b'c', b'd', b'e', 0, 0]);
}

#[test]
fn aligned_bytes_get_no_padding() {
    let bytes = b"abc"[..].to_bytes();
    assert_eq!(bytes, [3, b'a', b'b', b'c']);
}

#[test]
fn empty_bytes() {
    let bytes = Vec::<u8>::new().to_bytes();
    assert_eq!(bytes, [0, 0, 0, 0]);
    assert_eq!(Vec::<u8>::from_bytes(&bytes).unwrap(), Vec::<u8>::new());
}

#[test]
fn long_bytes_use_four_byte_header() {
    let data = vec![7u8; 300];
    let bytes = data.to_bytes();
    assert_eq!(&bytes[..4], &[0xfe, 0x2c, 0x01, 0x00]);
    assert_eq!(bytes.len() % 4, 0);
    assert_eq!(bytes.len(), 4 + 300);
    assert_eq!(Vec::<u8>::from_bytes(&bytes).unwrap(), data);
}

#[test]
fn boundary_length_253_and_254() {
    let short = vec![1u8; 253].to_bytes();
    assert_eq!(short[0], 253);
    assert_eq!(short.len(), 256);

    let long = vec![1u8; 254].to_bytes();
    assert_eq!(long[0], 0xfe);
    assert_eq!(long.len(), 4 + 254 + 2);
    assert_eq!(Vec::<u8>::from_bytes(&long).unwrap().len(), 254);
}

#[test]
fn string_roundtrip_consumes_padding() {
    let mut buf = Vec::new();
    "hello".serialize(&mut buf);
    42i32.serialize(&mut buf);

    let mut cur = Cursor::from_slice(&buf);
    assert_eq!(String::deserialize(&mut cur).unwrap(), "hello");
    assert_eq!(cur.pos() % 4, 0, "cursor must land on a 4-byte boundary");
    assert_eq!(i32::deserialize(&mut cur).unwrap(), 42);
    assert_eq!(cur.remaining(), 0);
}

#[test]
fn string_rejects_invalid_utf8() {
    let bytes = [2u8, 0xc3, 0x28, 0];
    assert_eq!(String::from_bytes(&bytes), Err(Error::InvalidUtf8));
}

// ── Cursor EOF detection ──────────────────────────────────────────────────────

#[test]
fn truncated_int_returns_eof() {
    assert_eq!(i32::from_bytes(&[0x01, 0x02]), Err(Error::UnexpectedEof));
    assert_eq!(i64::from_bytes(&[0; 7]), Err(Error::UnexpectedEof));
}

#[test]
fn truncated_bytes_body_returns_eof() {
    // claims 10 bytes, carries 3
    assert_eq!(Vec::<u8>::from_bytes(&[10, 1, 2, 3]), Err(Error::UnexpectedEof));
}

#[test]
fn missing_padding_returns_eof() {
    assert_eq!(Vec::<u8>::from_bytes(&[1, 9]), Err(Error::UnexpectedEof));
}

#[test]
fn failed_read_does_not_advance() {
    let mut cur = Cursor::from_slice(&[1, 2, 3]);
    assert!(i32::deserialize(&mut cur).is_err());
    assert_eq!(cur.pos(), 0);
    assert_eq!(cur.read_byte().unwrap(), 1);
}
