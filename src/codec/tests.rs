use bytes::Bytes;
use chrono::{TimeZone, Utc};
use num_bigint::BigInt;

use super::*;
use crate::error::ErrorKind;

#[test]
fn test_encode_integer() {
    assert_eq!(IntegerCodec.encode(&BigInt::from(42)).unwrap(), b"i42e");
    assert_eq!(IntegerCodec.encode(&BigInt::from(-42)).unwrap(), b"i-42e");
    assert_eq!(IntegerCodec.encode(&BigInt::from(0)).unwrap(), b"i0e");
}

#[test]
fn test_integer_beyond_i64() {
    let big: BigInt = "123456789012345678901234567890".parse().unwrap();
    let encoded = IntegerCodec.encode(&big).unwrap();
    assert_eq!(encoded, b"i123456789012345678901234567890e");
    assert_eq!(IntegerCodec.decode(&encoded).unwrap(), big);

    let negative = -big;
    let encoded = IntegerCodec.encode(&negative).unwrap();
    assert_eq!(IntegerCodec.decode(&encoded).unwrap(), negative);
}

#[test]
fn test_decode_integer() {
    assert_eq!(IntegerCodec.decode(b"i42e").unwrap(), BigInt::from(42));
    assert_eq!(IntegerCodec.decode(b"i-42e").unwrap(), BigInt::from(-42));
    assert_eq!(IntegerCodec.decode(b"i0e").unwrap(), BigInt::from(0));
}

#[test]
fn test_decode_integer_invalid() {
    let inputs: [&[u8]; 7] = [b"i-0e", b"i03e", b"ie", b"i-e", b"i+3e", b"i1x2e", b"i 1e"];
    for input in inputs {
        let err = IntegerCodec.decode(input).unwrap_err();
        assert!(
            matches!(err, BencodeError::InvalidInteger(_)),
            "{:?} gave {:?}",
            input,
            err
        );
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}

#[test]
fn test_decode_integer_bad_marker() {
    assert!(matches!(
        IntegerCodec.decode(b"l42e"),
        Err(BencodeError::UnexpectedChar { found: 'l', pos: 0, .. })
    ));
    assert!(matches!(
        IntegerCodec.decode(b""),
        Err(BencodeError::UnexpectedEof)
    ));
}

#[test]
fn test_decode_integer_unterminated() {
    assert!(matches!(
        IntegerCodec.decode(b"i42"),
        Err(BencodeError::UnexpectedEof)
    ));
}

#[test]
fn test_decode_from_returns_next_position() {
    let buf = b"i1ei22e4:spam";
    let (first, pos) = IntegerCodec.decode_from(buf, 0).unwrap();
    assert_eq!((first, pos), (BigInt::from(1), 3));
    let (second, pos) = IntegerCodec.decode_from(buf, pos).unwrap();
    assert_eq!((second, pos), (BigInt::from(22), 7));
    let (third, pos) = ByteStringCodec.decode_from(buf, pos).unwrap();
    assert_eq!(third, Bytes::from_static(b"spam"));
    assert_eq!(pos, buf.len());
}

#[test]
fn test_trailing_data_error() {
    assert!(matches!(
        IntegerCodec.decode(b"i42eextra"),
        Err(BencodeError::TrailingData)
    ));
}

#[test]
fn test_encode_bytes() {
    assert_eq!(
        ByteStringCodec.encode(&Bytes::from_static(b"spam")).unwrap(),
        b"4:spam"
    );
    assert_eq!(ByteStringCodec.encode(&Bytes::new()).unwrap(), b"0:");
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        ByteStringCodec.decode(b"4:spam").unwrap(),
        Bytes::from_static(b"spam")
    );
    assert_eq!(ByteStringCodec.decode(b"0:").unwrap(), Bytes::new());
    assert_eq!(
        ByteStringCodec.decode(b"3:\xff\x00e").unwrap(),
        Bytes::from_static(b"\xff\x00e")
    );
}

#[test]
fn test_decode_bytes_invalid() {
    assert!(matches!(
        ByteStringCodec.decode(b"10:short"),
        Err(BencodeError::UnexpectedEof)
    ));
    assert!(matches!(
        ByteStringCodec.decode(b"4spam"),
        Err(BencodeError::UnexpectedChar { found: 's', pos: 1, .. })
    ));
    assert!(matches!(
        ByteStringCodec.decode(b"42"),
        Err(BencodeError::UnexpectedEof)
    ));
    assert!(matches!(
        ByteStringCodec.decode(b"-1:a"),
        Err(BencodeError::UnexpectedChar { found: '-', .. })
    ));
    assert!(matches!(
        ByteStringCodec.decode(b"04:spam"),
        Err(BencodeError::InvalidStringLength)
    ));
    assert!(matches!(
        ByteStringCodec.decode(b"99999999999999999999999:a"),
        Err(BencodeError::InvalidStringLength)
    ));
}

#[test]
fn test_text_length_counts_bytes() {
    let encoded = TextStringCodec.encode(&"héllo".to_string()).unwrap();
    assert_eq!(encoded, "6:héllo".as_bytes());
    assert_eq!(TextStringCodec.decode(&encoded).unwrap(), "héllo");
}

#[test]
fn test_text_rejects_invalid_utf8() {
    let err = TextStringCodec.decode(b"2:\xc3\x28").unwrap_err();
    assert!(matches!(err, BencodeError::InvalidUtf8(_)));
    assert_eq!(err.kind(), ErrorKind::Encoding);
}

#[test]
fn test_timestamp_roundtrip() {
    let at = Utc
        .with_ymd_and_hms(2023, 11, 5, 8, 15, 30)
        .unwrap()
        .checked_add_signed(chrono::Duration::microseconds(123_456))
        .unwrap();

    let encoded = TimestampCodec.encode(&at).unwrap();
    let text = "2023-11-05T08:15:30.123456Z";
    assert_eq!(encoded, format!("{}:{}", text.len(), text).into_bytes());
    assert_eq!(TimestampCodec.decode(&encoded).unwrap(), at);
}

#[test]
fn test_timestamp_now_roundtrip() {
    let now = Utc::now();
    let encoded = TimestampCodec.encode(&now).unwrap();
    assert_eq!(TimestampCodec.decode(&encoded).unwrap(), now);
}

#[test]
fn test_timestamp_rejects_garbage() {
    let err = TimestampCodec.decode(b"9:yesterday").unwrap_err();
    assert!(matches!(err, BencodeError::InvalidValue { .. }));
    assert_eq!(err.kind(), ErrorKind::Format);
}
