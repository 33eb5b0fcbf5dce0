use bytes::Bytes;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A domain value carried through a descriptor tree by a custom codec.
///
/// Implemented for every `Debug + PartialEq + Send + Sync + 'static` type, so
/// codecs never implement it by hand.
pub trait CustomValue: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn CustomValue) -> bool;
}

impl<T> CustomValue for T
where
    T: Any + fmt::Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn CustomValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }
}

/// A native value that a [`TypeDescriptor`](crate::TypeDescriptor) encodes
/// from or decodes into.
///
/// Unlike an untyped bencode tree, byte strings and text strings are distinct
/// here: which one a payload becomes is decided by the descriptor, not the
/// wire.
///
/// # Examples
///
/// ```
/// use typed_bencode::Value;
///
/// let int: Value = 42i64.into();
/// let text: Value = "hello".into();
/// let raw = Value::bytes(b"asd");
///
/// assert_eq!(int.as_i64(), Some(42));
/// assert_eq!(text.as_str(), Some("hello"));
/// assert_eq!(raw.as_bytes().map(|b| b.as_ref()), Some(b"asd".as_slice()));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// An arbitrary-precision signed integer.
    Integer(BigInt),
    /// An opaque byte string.
    Bytes(Bytes),
    /// A UTF-8 string.
    Text(String),
    /// An ordered list of values of one element type.
    List(Vec<Value>),
    /// A dictionary keyed by field name.
    Dict(BTreeMap<String, Value>),
    /// A value produced by a custom scalar codec.
    Custom(Arc<dyn CustomValue>),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b.as_ref()))
    }

    pub fn custom<T: CustomValue>(value: T) -> Self {
        Value::Custom(Arc::new(value))
    }

    /// Builds a dictionary value from `(name, value)` pairs.
    ///
    /// ```
    /// use typed_bencode::Value;
    ///
    /// let dict = Value::dict([("a", Value::from("hello")), ("b", Value::from(123))]);
    /// assert_eq!(dict.get("b").and_then(Value::as_i64), Some(123));
    /// ```
    pub fn dict<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Dict(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short name of the value's shape, used in type-mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Custom(_) => "custom",
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the integer if it is one and fits in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer()?.to_i64()
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    pub fn into_dict(self) -> Option<BTreeMap<String, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a field if this value is a dictionary.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_dict()?.get(name)
    }

    /// Returns the custom value as `T`, if it is a custom value of that type.
    ///
    /// ```
    /// use typed_bencode::Value;
    ///
    /// let value = Value::custom(7u8);
    /// assert_eq!(value.downcast_ref::<u8>(), Some(&7));
    /// assert_eq!(value.downcast_ref::<u16>(), None);
    /// ```
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(c) => c.as_ref().as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a.as_ref().dyn_eq(b.as_ref()),
            _ => false,
        }
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Value::Integer(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<u64> for Value {
    fn from(i: u64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(b))
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(d: BTreeMap<String, Value>) -> Self {
        Value::Dict(d)
    }
}
