//! Type descriptors: the schema tree that drives encoding and decoding.
//!
//! A [`TypeDescriptor`] describes one value shape. Scalars map straight to
//! their codec; lists and dictionaries hold child descriptors and recurse
//! into them. Descriptors are immutable once built and hold no per-call
//! state, so one tree can serve any number of concurrent callers.
//!
//! # Examples
//!
//! ```
//! use typed_bencode::{Codec, TypeDescriptor, Value};
//!
//! let names = TypeDescriptor::list(TypeDescriptor::text());
//! let value = Value::List(vec!["hey".into(), "there".into()]);
//!
//! let encoded = names.encode(&value).unwrap();
//! assert_eq!(encoded, b"l3:hey5:theree");
//! assert_eq!(names.decode(&encoded).unwrap(), value);
//! ```

mod dict;
mod list;

pub use dict::DictionaryDescriptor;

use crate::codec::{
    ByteStringCodec, Codec, CustomCodec, DynCodec, IntegerCodec, TextStringCodec,
};
use crate::config::DecodeConfig;
use crate::error::BencodeError;
use crate::fingerprint::Fingerprint;
use crate::value::{CustomValue, Value};
use std::fmt;
use std::sync::Arc;

/// A node of a schema tree.
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    Integer,
    ByteString,
    TextString,
    /// A list whose elements all share the inner descriptor.
    List(Box<TypeDescriptor>),
    Dictionary(DictionaryDescriptor),
    /// A user-supplied scalar codec.
    Custom(Arc<dyn DynCodec>),
}

impl TypeDescriptor {
    pub fn integer() -> Self {
        TypeDescriptor::Integer
    }

    pub fn bytes() -> Self {
        TypeDescriptor::ByteString
    }

    pub fn text() -> Self {
        TypeDescriptor::TextString
    }

    pub fn list(element: impl Into<TypeDescriptor>) -> Self {
        TypeDescriptor::List(Box::new(element.into()))
    }

    /// Wraps a typed codec so it can sit anywhere in a descriptor tree.
    ///
    /// Values for this node are [`Value::Custom`] holding `C::Value`.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use typed_bencode::{Codec, TimestampCodec, TypeDescriptor, Value};
    ///
    /// let stamps = TypeDescriptor::list(TypeDescriptor::custom("timestamp", TimestampCodec));
    /// let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    ///
    /// let encoded = stamps.encode(&Value::List(vec![Value::custom(at)])).unwrap();
    /// let decoded = stamps.decode(&encoded).unwrap();
    /// assert_eq!(decoded.as_list().unwrap()[0].downcast_ref(), Some(&at));
    /// ```
    pub fn custom<C>(name: impl Into<String>, codec: C) -> Self
    where
        C: Codec + fmt::Debug + Send + Sync + 'static,
        C::Value: CustomValue,
    {
        TypeDescriptor::Custom(Arc::new(CustomCodec::new(name, codec)))
    }

    /// Human-readable name of the described shape, e.g. `list<str>`.
    pub fn type_name(&self) -> String {
        match self {
            TypeDescriptor::Integer => "int".into(),
            TypeDescriptor::ByteString => "bytes".into(),
            TypeDescriptor::TextString => "str".into(),
            TypeDescriptor::List(element) => format!("list<{}>", element.type_name()),
            TypeDescriptor::Dictionary(_) => "dict".into(),
            TypeDescriptor::Custom(codec) => codec.type_name().into(),
        }
    }

    /// Decodes a buffer holding exactly one value, using `config`.
    pub fn decode_with(&self, config: &DecodeConfig, buf: &[u8]) -> Result<Value, BencodeError> {
        let result = self.decode_value(buf, 0, config, 0)?;
        finish(config, buf, result)
    }

    /// SHA-1 of the canonical encoding of `value`.
    pub fn fingerprint(&self, value: &Value) -> Result<Fingerprint, BencodeError> {
        Ok(Fingerprint::sha1(&self.encode(value)?))
    }

    /// SHA-256 of the canonical encoding of `value`.
    pub fn fingerprint_v2(&self, value: &Value) -> Result<Fingerprint, BencodeError> {
        Ok(Fingerprint::sha256(&self.encode(value)?))
    }

    pub(crate) fn encode_value(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        match (self, value) {
            (TypeDescriptor::Integer, Value::Integer(i)) => IntegerCodec.encode_into(i, out),
            (TypeDescriptor::ByteString, Value::Bytes(b)) => ByteStringCodec.encode_into(b, out),
            (TypeDescriptor::TextString, Value::Text(s)) => TextStringCodec.encode_into(s, out),
            (TypeDescriptor::List(element), value) => list::encode_list(element, value, out),
            (TypeDescriptor::Dictionary(dict), value) => dict.encode_fields(value, out),
            (TypeDescriptor::Custom(codec), value) => codec.encode_value(value, out),
            (descriptor, value) => Err(mismatch(descriptor.type_name(), value)),
        }
    }

    pub(crate) fn decode_value(
        &self,
        buf: &[u8],
        pos: usize,
        config: &DecodeConfig,
        depth: usize,
    ) -> Result<(Value, usize), BencodeError> {
        match self {
            TypeDescriptor::Integer => {
                let (i, pos) = IntegerCodec.decode_from(buf, pos)?;
                Ok((Value::Integer(i), pos))
            }
            TypeDescriptor::ByteString => {
                let (b, pos) = ByteStringCodec.decode_from(buf, pos)?;
                Ok((Value::Bytes(b), pos))
            }
            TypeDescriptor::TextString => {
                let (s, pos) = TextStringCodec.decode_from(buf, pos)?;
                Ok((Value::Text(s), pos))
            }
            TypeDescriptor::List(element) => {
                let depth = nested(config, depth)?;
                list::decode_list(element, buf, pos, config, depth)
            }
            TypeDescriptor::Dictionary(dict) => {
                let depth = nested(config, depth)?;
                dict.decode_fields(buf, pos, config, depth)
            }
            TypeDescriptor::Custom(codec) => codec.decode_value(buf, pos),
        }
    }
}

impl Codec for TypeDescriptor {
    type Value = Value;

    fn encode_into(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        self.encode_value(value, out)
    }

    fn decode_from(&self, buf: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
        self.decode_value(buf, pos, &DecodeConfig::default(), 0)
    }

    fn decode(&self, buf: &[u8]) -> Result<Value, BencodeError> {
        self.decode_with(&DecodeConfig::default(), buf)
    }
}

impl From<DictionaryDescriptor> for TypeDescriptor {
    fn from(dict: DictionaryDescriptor) -> Self {
        TypeDescriptor::Dictionary(dict)
    }
}

fn nested(config: &DecodeConfig, depth: usize) -> Result<usize, BencodeError> {
    let depth = depth + 1;
    if depth > config.max_depth {
        tracing::debug!(depth, max_depth = config.max_depth, "rejecting nested container");
        return Err(BencodeError::NestingTooDeep);
    }
    Ok(depth)
}

fn finish(
    config: &DecodeConfig,
    buf: &[u8],
    (value, pos): (Value, usize),
) -> Result<Value, BencodeError> {
    if pos != buf.len() && !config.allow_trailing_data {
        return Err(BencodeError::TrailingData);
    }
    Ok(value)
}

fn mismatch(expected: impl Into<String>, found: &Value) -> BencodeError {
    BencodeError::TypeMismatch {
        expected: expected.into(),
        found: found.kind_name(),
    }
}
