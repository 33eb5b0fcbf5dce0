//! Building descriptor trees from schema declarations.
//!
//! A schema names each field's type either with an existing
//! [`TypeDescriptor`] or with a type name that a [`Registry`] resolves:
//!
//! | Name | Descriptor |
//! |------|------------|
//! | `int`, `integer` | [`TypeDescriptor::Integer`] |
//! | `bytes` | [`TypeDescriptor::ByteString`] |
//! | `str`, `text` | [`TypeDescriptor::TextString`] |
//! | `list<X>` | [`TypeDescriptor::List`] of `X` |
//! | registered name | whatever was registered |
//!
//! # Examples
//!
//! ```
//! use typed_bencode::{for_schema, Codec, TypeSpec, Value};
//!
//! let peer = for_schema([("ip", "str"), ("port", "int")]).unwrap();
//! let reply = for_schema([
//!     ("interval", TypeSpec::from("int")),
//!     ("peers", TypeSpec::from(typed_bencode::TypeDescriptor::list(peer))),
//! ])
//! .unwrap();
//!
//! let value = reply
//!     .decode(b"d8:intervali1800e5:peersld2:ip9:127.0.0.14:porti6881eeee")
//!     .unwrap();
//! assert_eq!(value.get("interval").and_then(Value::as_i64), Some(1800));
//! ```

use crate::codec::TimestampCodec;
use crate::descriptor::{DictionaryDescriptor, TypeDescriptor};
use crate::error::BencodeError;
use std::collections::HashMap;

/// A field type in a schema declaration.
#[derive(Debug, Clone)]
pub enum TypeSpec {
    /// Used as is.
    Descriptor(TypeDescriptor),
    /// Resolved by name through a [`Registry`].
    Named(String),
}

impl From<TypeDescriptor> for TypeSpec {
    fn from(descriptor: TypeDescriptor) -> Self {
        TypeSpec::Descriptor(descriptor)
    }
}

impl From<DictionaryDescriptor> for TypeSpec {
    fn from(dict: DictionaryDescriptor) -> Self {
        TypeSpec::Descriptor(dict.into())
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::Named(name.to_owned())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        TypeSpec::Named(name)
    }
}

/// Resolves type names to descriptors.
///
/// The built-in names are always available; custom descriptors can be added
/// under their own names with [`Registry::register`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    named: HashMap<String, TypeDescriptor>,
}

impl Registry {
    /// A registry with only the built-in names.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that also knows the bundled extension types (`timestamp`).
    pub fn with_extensions() -> Self {
        let mut registry = Self::new();
        registry.register("timestamp", TypeDescriptor::custom("timestamp", TimestampCodec));
        registry
    }

    /// Registers `descriptor` under `name`, returning any descriptor it
    /// replaces. Built-in names cannot be shadowed.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: TypeDescriptor,
    ) -> Option<TypeDescriptor> {
        self.named.insert(name.into(), descriptor)
    }

    /// Maps a type spec to a descriptor. Descriptors pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BencodeError::UnsupportedType`] naming the first type name
    /// that cannot be resolved.
    pub fn wrap(&self, spec: impl Into<TypeSpec>) -> Result<TypeDescriptor, BencodeError> {
        match spec.into() {
            TypeSpec::Descriptor(descriptor) => Ok(descriptor),
            TypeSpec::Named(name) => self.resolve(&name),
        }
    }

    /// Builds a dictionary descriptor from `(field name, type)` pairs.
    pub fn for_schema<K, T, I>(&self, fields: I) -> Result<DictionaryDescriptor, BencodeError>
    where
        K: Into<String>,
        T: Into<TypeSpec>,
        I: IntoIterator<Item = (K, T)>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, spec)| Ok((name.into(), self.wrap(spec)?)))
            .collect::<Result<Vec<(String, TypeDescriptor)>, BencodeError>>()?;
        DictionaryDescriptor::new(fields)
    }

    fn resolve(&self, name: &str) -> Result<TypeDescriptor, BencodeError> {
        let name = name.trim();
        match name {
            "int" | "integer" => Ok(TypeDescriptor::integer()),
            "bytes" => Ok(TypeDescriptor::bytes()),
            "str" | "text" => Ok(TypeDescriptor::text()),
            _ => {
                if let Some(element) = name.strip_prefix("list<").and_then(|n| n.strip_suffix('>')) {
                    return Ok(TypeDescriptor::list(self.resolve(element)?));
                }
                self.named
                    .get(name)
                    .cloned()
                    .ok_or_else(|| BencodeError::UnsupportedType(name.to_owned()))
            }
        }
    }
}

/// Maps a type spec to a descriptor using the built-in names.
pub fn wrap(spec: impl Into<TypeSpec>) -> Result<TypeDescriptor, BencodeError> {
    Registry::new().wrap(spec)
}

/// Builds a dictionary descriptor from `(field name, type)` pairs using the
/// built-in names.
///
/// ```
/// use typed_bencode::{for_schema, Codec, Value};
///
/// let schema = for_schema([("a", "str"), ("b", "int"), ("c", "bytes"), ("d", "list<str>")]).unwrap();
/// let value = Value::dict([
///     ("a", Value::from("hello")),
///     ("b", Value::from(123)),
///     ("c", Value::bytes(b"asd")),
///     ("d", Value::List(vec!["hey".into(), "there".into()])),
/// ]);
///
/// assert_eq!(
///     schema.encode(&value).unwrap(),
///     b"d1:a5:hello1:bi123e1:c3:asd1:dl3:hey5:thereee"
/// );
/// ```
pub fn for_schema<K, T, I>(fields: I) -> Result<DictionaryDescriptor, BencodeError>
where
    K: Into<String>,
    T: Into<TypeSpec>,
    I: IntoIterator<Item = (K, T)>,
{
    Registry::new().for_schema(fields)
}
