use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::fmt;

/// Digest of a value's canonical encoding.
///
/// Because dictionaries are always written in canonical key order, two equal
/// values under the same descriptor always produce the same fingerprint. This
/// is how a torrent's info hash is derived from its info dictionary.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    Sha1([u8; 20]),
    Sha256([u8; 32]),
}

impl Fingerprint {
    pub fn sha1(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        Fingerprint::Sha1(hasher.finalize().into())
    }

    pub fn sha256(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Fingerprint::Sha256(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Fingerprint::Sha1(arr) => arr,
            Fingerprint::Sha256(arr) => arr,
        }
    }

    pub fn to_hex(&self) -> String {
        hex_encode(self.as_bytes())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", b);
        s
    })
}
