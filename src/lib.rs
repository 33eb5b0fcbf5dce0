//! typed-bencode - Schema-typed bencode encoding and decoding
//!
//! Bencode ([BEP-3]) is the serialization format used throughout BitTorrent.
//! This crate encodes and decodes it against an explicit schema: every value
//! is described by a [`TypeDescriptor`], and decoding always requires one.
//!
//! # Modules
//!
//! - [`codec`] - Scalar codecs (integer, byte string, text string, timestamp)
//! - [`descriptor`] - Descriptor tree with list and dictionary codecs
//! - [`schema`] - Building dictionary schemas from named types
//! - [`config`] - Decoder limits and key order policy
//!
//! # Examples
//!
//! ```
//! use typed_bencode::{for_schema, Codec, TypeSpec, Value};
//!
//! let point = for_schema([("a", "str"), ("b", "int")]).unwrap();
//! let schema = for_schema([
//!     ("a", TypeSpec::from("str")),
//!     ("b", TypeSpec::from("int")),
//!     ("c", TypeSpec::from("bytes")),
//!     ("d", TypeSpec::from(point)),
//! ])
//! .unwrap();
//!
//! let value = Value::dict([
//!     ("a", Value::from("hello")),
//!     ("b", Value::from(123)),
//!     ("c", Value::bytes(b"asd")),
//!     ("d", Value::dict([("a", Value::from("asd")), ("b", Value::from(321))])),
//! ]);
//!
//! let encoded = schema.encode(&value).unwrap();
//! assert_eq!(encoded, b"d1:a5:hello1:bi123e1:c3:asd1:dd1:a3:asd1:bi321eee");
//! assert_eq!(schema.decode(&encoded).unwrap(), value);
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod codec;
pub mod config;
pub mod descriptor;
pub mod schema;

mod error;
mod fingerprint;
mod value;

pub use codec::{
    ByteStringCodec, Codec, CustomCodec, DynCodec, IntegerCodec, TextStringCodec, TimestampCodec,
};
pub use config::{DecodeConfig, KeyOrder, DEFAULT_MAX_DEPTH};
pub use descriptor::{DictionaryDescriptor, TypeDescriptor};
pub use error::{BencodeError, ErrorKind};
pub use fingerprint::Fingerprint;
pub use num_bigint::BigInt;
pub use schema::{for_schema, wrap, Registry, TypeSpec};
pub use value::{CustomValue, Value};
