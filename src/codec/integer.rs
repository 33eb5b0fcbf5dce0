use super::{expect_marker, Codec};
use crate::error::BencodeError;
use num_bigint::BigInt;

/// Codec for `i<number>e` integers of arbitrary size.
///
/// Decoding rejects leading zeros, `-0`, an empty body and a leading `+`,
/// so every integer has exactly one accepted encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerCodec;

impl Codec for IntegerCodec {
    type Value = BigInt;

    fn encode_into(&self, value: &BigInt, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        out.push(b'i');
        out.extend_from_slice(value.to_str_radix(10).as_bytes());
        out.push(b'e');
        Ok(())
    }

    fn decode_from(&self, buf: &[u8], pos: usize) -> Result<(BigInt, usize), BencodeError> {
        expect_marker(buf, pos, b'i', "'i'")?;

        let start = pos + 1;
        let end = buf[start..]
            .iter()
            .position(|&b| b == b'e')
            .map(|offset| start + offset)
            .ok_or(BencodeError::UnexpectedEof)?;

        let value = parse_integer(&buf[start..end])?;
        Ok((value, end + 1))
    }
}

fn parse_integer(body: &[u8]) -> Result<BigInt, BencodeError> {
    let int_str = std::str::from_utf8(body)
        .map_err(|_| BencodeError::InvalidInteger("invalid utf8".into()))?;

    let digits = int_str.strip_prefix('-').unwrap_or(int_str);
    if digits.is_empty() {
        return Err(BencodeError::InvalidInteger("empty".into()));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BencodeError::InvalidInteger(int_str.into()));
    }
    if int_str.starts_with("-0") || (digits.starts_with('0') && digits.len() > 1) {
        return Err(BencodeError::InvalidInteger("leading zeros".into()));
    }

    BigInt::parse_bytes(body, 10).ok_or_else(|| BencodeError::InvalidInteger(int_str.into()))
}
