use super::{peek, Codec};
use crate::error::BencodeError;
use bytes::Bytes;

/// Codec for `<length>:<data>` byte strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteStringCodec;

/// Codec for byte strings whose payload is UTF-8 text.
///
/// The length prefix counts encoded bytes, not characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStringCodec;

impl Codec for ByteStringCodec {
    type Value = Bytes;

    fn encode_into(&self, value: &Bytes, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        encode_payload(value, out);
        Ok(())
    }

    fn decode_from(&self, buf: &[u8], pos: usize) -> Result<(Bytes, usize), BencodeError> {
        let (payload, pos) = decode_payload(buf, pos)?;
        Ok((Bytes::copy_from_slice(payload), pos))
    }
}

impl Codec for TextStringCodec {
    type Value = String;

    fn encode_into(&self, value: &String, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        encode_payload(value.as_bytes(), out);
        Ok(())
    }

    fn decode_from(&self, buf: &[u8], pos: usize) -> Result<(String, usize), BencodeError> {
        let (payload, pos) = decode_payload(buf, pos)?;
        let text = std::str::from_utf8(payload)?;
        Ok((text.to_owned(), pos))
    }
}

pub(crate) fn encode_payload(payload: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(payload.len().to_string().as_bytes());
    out.push(b':');
    out.extend_from_slice(payload);
}

fn decode_payload(buf: &[u8], pos: usize) -> Result<(&[u8], usize), BencodeError> {
    let first = peek(buf, pos)?;
    if !first.is_ascii_digit() {
        return Err(BencodeError::unexpected("string length", first, pos));
    }

    let mut colon = pos;
    while colon < buf.len() && buf[colon].is_ascii_digit() {
        colon += 1;
    }
    match buf.get(colon) {
        None => return Err(BencodeError::UnexpectedEof),
        Some(b':') => {}
        Some(&b) => return Err(BencodeError::unexpected("':'", b, colon)),
    }

    let len_digits = &buf[pos..colon];
    if len_digits.len() > 1 && len_digits[0] == b'0' {
        return Err(BencodeError::InvalidStringLength);
    }
    // ASCII digits only, so the utf8 conversion cannot fail; parse catches overflow.
    let len: usize = std::str::from_utf8(len_digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(BencodeError::InvalidStringLength)?;

    let start = colon + 1;
    let end = start
        .checked_add(len)
        .filter(|&end| end <= buf.len())
        .ok_or(BencodeError::UnexpectedEof)?;

    Ok((&buf[start..end], end))
}
