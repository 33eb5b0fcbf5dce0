use super::{finish, mismatch, nested, TypeDescriptor};
use crate::codec::{encode_payload, expect_marker, Codec, TextStringCodec};
use crate::config::{DecodeConfig, KeyOrder};
use crate::error::BencodeError;
use crate::value::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A dictionary with a fixed set of named, typed fields.
///
/// Fields are kept in ascending byte order of their names, whatever order
/// they were declared in, and are always encoded in that order. A field may
/// carry a default that is written when the input value leaves it out.
///
/// Decoding accepts keys in any order unless [`KeyOrder::Strict`] is
/// configured, but rejects keys the schema does not declare.
///
/// # Examples
///
/// ```
/// use typed_bencode::{for_schema, Codec, Value};
///
/// let schema = for_schema([("name", "str"), ("port", "int")])
///     .unwrap()
///     .with_default("port", 6881)
///     .unwrap();
///
/// let encoded = schema.encode(&Value::dict([("name", Value::from("seed"))])).unwrap();
/// assert_eq!(encoded, b"d4:name4:seed4:porti6881ee");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DictionaryDescriptor {
    fields: Arc<BTreeMap<String, TypeDescriptor>>,
    defaults: BTreeMap<String, Value>,
}

impl DictionaryDescriptor {
    /// Builds a descriptor from `(name, descriptor)` pairs with no defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BencodeError::DuplicateField`] if a name is declared twice.
    pub fn new<K, I>(fields: I) -> Result<Self, BencodeError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypeDescriptor)>,
    {
        let mut table = BTreeMap::new();
        for (name, descriptor) in fields {
            let name = name.into();
            if table.contains_key(&name) {
                return Err(BencodeError::DuplicateField(name));
            }
            table.insert(name, descriptor);
        }

        Ok(Self {
            fields: Arc::new(table),
            defaults: BTreeMap::new(),
        })
    }

    /// Returns a descriptor with the same fields and `value` as the default
    /// for `name`, replacing any earlier default.
    ///
    /// # Errors
    ///
    /// Fails with [`BencodeError::UnknownField`] if `name` is not declared,
    /// or with the field's encode error if `value` does not fit its type.
    pub fn with_default(mut self, name: &str, value: impl Into<Value>) -> Result<Self, BencodeError> {
        let value = value.into();
        let descriptor = self
            .fields
            .get(name)
            .ok_or_else(|| BencodeError::UnknownField(name.to_owned()))?;
        descriptor.encode(&value)?;

        self.defaults.insert(name.to_owned(), value);
        Ok(self)
    }

    /// Field names in canonical (encoding) order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&TypeDescriptor> {
        self.fields.get(name)
    }

    pub fn default_value(&self, name: &str) -> Option<&Value> {
        self.defaults.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decodes a buffer holding exactly one dictionary, using `config`.
    pub fn decode_with(&self, config: &DecodeConfig, buf: &[u8]) -> Result<Value, BencodeError> {
        let depth = nested(config, 0)?;
        let result = self.decode_fields(buf, 0, config, depth)?;
        finish(config, buf, result)
    }

    pub(super) fn encode_fields(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        let input = value.as_dict().ok_or_else(|| mismatch("dict", value))?;

        if tracing::enabled!(tracing::Level::TRACE) {
            for name in input.keys().filter(|name| !self.fields.contains_key(*name)) {
                tracing::trace!(field = %name, "ignoring undeclared field");
            }
        }

        out.push(b'd');
        for (name, descriptor) in self.fields.iter() {
            let field_value = match (input.get(name), self.defaults.get(name)) {
                (Some(v), _) => v,
                (None, Some(default)) => {
                    tracing::trace!(field = %name, "substituting default");
                    default
                }
                (None, None) => return Err(BencodeError::MissingField(name.clone())),
            };

            encode_payload(name.as_bytes(), out);
            descriptor.encode_value(field_value, out)?;
        }
        out.push(b'e');
        Ok(())
    }

    pub(super) fn decode_fields(
        &self,
        buf: &[u8],
        pos: usize,
        config: &DecodeConfig,
        depth: usize,
    ) -> Result<(Value, usize), BencodeError> {
        expect_marker(buf, pos, b'd', "'d'")?;

        let mut pos = pos + 1;
        let mut dict = BTreeMap::new();
        let mut previous: Option<String> = None;

        while pos < buf.len() && buf[pos] != b'e' {
            let (key, next) = TextStringCodec.decode_from(buf, pos)?;

            if config.key_order == KeyOrder::Strict {
                if let Some(prev) = &previous {
                    if key <= *prev {
                        return Err(BencodeError::UnsortedKeys(key));
                    }
                }
            }
            if dict.contains_key(&key) {
                return Err(BencodeError::DuplicateKey(key));
            }

            let Some(descriptor) = self.fields.get(&key) else {
                tracing::trace!(field = %key, "rejecting undeclared key");
                return Err(BencodeError::UnknownField(key));
            };

            let (value, next) = descriptor.decode_value(buf, next, config, depth)?;
            pos = next;

            if config.key_order == KeyOrder::Strict {
                previous = Some(key.clone());
            }
            dict.insert(key, value);
        }

        if pos >= buf.len() {
            return Err(BencodeError::UnexpectedEof);
        }

        Ok((Value::Dict(dict), pos + 1))
    }
}

impl Codec for DictionaryDescriptor {
    type Value = Value;

    fn encode_into(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        self.encode_fields(value, out)
    }

    fn decode_from(&self, buf: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
        let config = DecodeConfig::default();
        let depth = nested(&config, 0)?;
        self.decode_fields(buf, pos, &config, depth)
    }

    fn decode(&self, buf: &[u8]) -> Result<Value, BencodeError> {
        self.decode_with(&DecodeConfig::default(), buf)
    }
}
