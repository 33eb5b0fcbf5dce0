//! Scalar codecs and the [`Codec`] contract they share.
//!
//! Every codec converts between one native value and its bencode bytes:
//!
//! | Codec | Native value | Wire |
//! |-------|--------------|------|
//! | [`IntegerCodec`] | `BigInt` | `i<number>e` |
//! | [`ByteStringCodec`] | `Bytes` | `<length>:<data>` |
//! | [`TextStringCodec`] | `String` | `<length>:<utf-8 data>` |
//! | [`TimestampCodec`] | `DateTime<Utc>` | RFC 3339 text string |
//!
//! Decoding works on a whole buffer and an offset, returning the value and
//! the offset just past it, so codecs compose without copying the input.
//!
//! # Custom codecs
//!
//! A domain type can ride on an existing wire shape by delegating to one of
//! the built-in codecs. [`TimestampCodec`] is such a codec; wrap any codec in
//! [`TypeDescriptor::custom`](crate::TypeDescriptor::custom) to use it as a
//! dictionary field or list element.
//!
//! ```
//! use typed_bencode::{Codec, IntegerCodec};
//! use num_bigint::BigInt;
//!
//! let encoded = IntegerCodec.encode(&BigInt::from(-42)).unwrap();
//! assert_eq!(encoded, b"i-42e");
//!
//! let (value, pos) = IntegerCodec.decode_from(b"i7ei8e", 3).unwrap();
//! assert_eq!(value, BigInt::from(8));
//! assert_eq!(pos, 6);
//! ```

mod custom;
mod integer;
mod string;
mod timestamp;

pub use custom::{CustomCodec, DynCodec};
pub use integer::IntegerCodec;
pub use string::{ByteStringCodec, TextStringCodec};
pub use timestamp::TimestampCodec;

pub(crate) use string::encode_payload;

use crate::error::BencodeError;

/// Converts a native value to and from bencode bytes.
pub trait Codec {
    type Value;

    /// Appends the encoding of `value` to `out`.
    fn encode_into(&self, value: &Self::Value, out: &mut Vec<u8>) -> Result<(), BencodeError>;

    /// Decodes one value starting at `pos`, returning it together with the
    /// offset of the first byte after it.
    fn decode_from(&self, buf: &[u8], pos: usize) -> Result<(Self::Value, usize), BencodeError>;

    /// Encodes `value` into a freshly allocated buffer.
    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>, BencodeError> {
        let mut out = Vec::new();
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    /// Decodes a buffer holding exactly one value.
    ///
    /// # Errors
    ///
    /// Returns [`BencodeError::TrailingData`] if bytes remain after the value.
    fn decode(&self, buf: &[u8]) -> Result<Self::Value, BencodeError> {
        let (value, pos) = self.decode_from(buf, 0)?;
        if pos != buf.len() {
            return Err(BencodeError::TrailingData);
        }
        Ok(value)
    }
}

pub(crate) fn peek(buf: &[u8], pos: usize) -> Result<u8, BencodeError> {
    buf.get(pos).copied().ok_or(BencodeError::UnexpectedEof)
}

pub(crate) fn expect_marker(
    buf: &[u8],
    pos: usize,
    marker: u8,
    expected: &'static str,
) -> Result<(), BencodeError> {
    match peek(buf, pos)? {
        b if b == marker => Ok(()),
        b => Err(BencodeError::unexpected(expected, b, pos)),
    }
}

#[cfg(test)]
mod tests;
