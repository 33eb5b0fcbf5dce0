use super::{Codec, TextStringCodec};
use crate::error::BencodeError;
use chrono::{DateTime, SecondsFormat, Utc};

/// Encodes a UTC timestamp as an RFC 3339 text string.
///
/// Sub-second precision is written only as far as the value needs it, so a
/// decoded timestamp compares equal to the one that was encoded.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use typed_bencode::{Codec, TimestampCodec};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
/// let encoded = TimestampCodec.encode(&at).unwrap();
/// assert_eq!(encoded, b"20:2024-03-01T12:30:00Z");
/// assert_eq!(TimestampCodec.decode(&encoded).unwrap(), at);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampCodec;

impl Codec for TimestampCodec {
    type Value = DateTime<Utc>;

    fn encode_into(&self, value: &DateTime<Utc>, out: &mut Vec<u8>) -> Result<(), BencodeError> {
        let text = value.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        TextStringCodec.encode_into(&text, out)
    }

    fn decode_from(
        &self,
        buf: &[u8],
        pos: usize,
    ) -> Result<(DateTime<Utc>, usize), BencodeError> {
        let (text, pos) = TextStringCodec.decode_from(buf, pos)?;
        let parsed =
            DateTime::parse_from_rfc3339(&text).map_err(|e| BencodeError::InvalidValue {
                type_name: "timestamp".into(),
                reason: e.to_string(),
            })?;
        Ok((parsed.with_timezone(&Utc), pos))
    }
}
