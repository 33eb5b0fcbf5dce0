use super::{mismatch, TypeDescriptor};
use crate::codec::expect_marker;
use crate::config::DecodeConfig;
use crate::error::BencodeError;
use crate::value::Value;

pub(super) fn encode_list(
    element: &TypeDescriptor,
    value: &Value,
    out: &mut Vec<u8>,
) -> Result<(), BencodeError> {
    let items = value
        .as_list()
        .ok_or_else(|| mismatch(format!("list<{}>", element.type_name()), value))?;

    out.push(b'l');
    for item in items {
        element.encode_value(item, out)?;
    }
    out.push(b'e');
    Ok(())
}

pub(super) fn decode_list(
    element: &TypeDescriptor,
    buf: &[u8],
    pos: usize,
    config: &DecodeConfig,
    depth: usize,
) -> Result<(Value, usize), BencodeError> {
    expect_marker(buf, pos, b'l', "'l'")?;

    let mut pos = pos + 1;
    let mut items = Vec::new();
    while pos < buf.len() && buf[pos] != b'e' {
        let (item, next) = element.decode_value(buf, pos, config, depth)?;
        items.push(item);
        pos = next;
    }

    if pos >= buf.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    Ok((Value::List(items), pos + 1))
}
