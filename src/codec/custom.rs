use super::Codec;
use crate::error::BencodeError;
use crate::value::{CustomValue, Value};
use std::fmt;

/// Object-safe view of a codec, used to place custom codecs inside a
/// [`TypeDescriptor`](crate::TypeDescriptor) tree.
pub trait DynCodec: fmt::Debug + Send + Sync {
    /// Name reported in type-mismatch errors and by
    /// [`TypeDescriptor::type_name`](crate::TypeDescriptor::type_name).
    fn type_name(&self) -> &str;

    fn encode_value(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), BencodeError>;

    fn decode_value(&self, buf: &[u8], pos: usize) -> Result<(Value, usize), BencodeError>;
}

/// Adapts a typed [`Codec`] to [`DynCodec`], carrying its native values as
/// [`Value::Custom`].
#[derive(Debug, Clone)]
pub struct CustomCodec<C> {
    name: String,
    codec: C,
}

impl<C> CustomCodec<C> {
    pub fn new(name: impl Into<String>, codec: C) -> Self {
        Self {
            name: name.into(),
            codec,
        }
    }

    pub fn inner(&self) -> &C {
        &self.codec
    }
}

impl<C> DynCodec for CustomCodec<C>
where
    C: Codec + fmt::Debug + Send + Sync,
    C::Value: CustomValue,
{
    fn type_name(&self) -> &str {
        &self.name
    }

    fn encode_value(&self, value: &Value, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        let native =
            value
                .downcast_ref::<C::Value>()
                .ok_or_else(|| BencodeError::TypeMismatch {
                    expected: self.name.clone(),
                    found: value.kind_name(),
                })?;
        self.codec.encode_into(native, out)
    }

    fn decode_value(&self, buf: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
        let (native, pos) = self.codec.decode_from(buf, pos)?;
        Ok((Value::custom(native), pos))
    }
}
