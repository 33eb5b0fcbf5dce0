//! Decoder limits and policies.
//!
//! Encoding has no knobs: it always writes canonical bencode. Decoding is
//! lenient by default (dictionary keys in any order) and can be tightened.

/// Maximum container nesting accepted while decoding.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How dictionary key order on the wire is checked during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Accept keys in any order. Duplicate keys are still rejected.
    #[default]
    Lenient,
    /// Require strictly ascending byte order, as a canonical encoder writes.
    Strict,
}

/// Settings for a decode call.
///
/// # Examples
///
/// ```
/// use typed_bencode::{DecodeConfig, KeyOrder};
///
/// let config = DecodeConfig::builder()
///     .max_depth(8)
///     .key_order(KeyOrder::Strict)
///     .build();
/// assert_eq!(config.max_depth, 8);
/// assert!(!config.allow_trailing_data);
/// ```
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Deepest list/dictionary nesting allowed before failing with
    /// `NestingTooDeep`.
    pub max_depth: usize,

    /// Wire key order policy for dictionaries.
    pub key_order: KeyOrder,

    /// Accept bytes after the top-level value instead of failing with
    /// `TrailingData`.
    pub allow_trailing_data: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            key_order: KeyOrder::Lenient,
            allow_trailing_data: false,
        }
    }
}

impl DecodeConfig {
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

/// Builder for [`DecodeConfig`]
#[derive(Debug, Default)]
pub struct DecodeConfigBuilder {
    config: DecodeConfig,
}

impl DecodeConfigBuilder {
    /// Set the maximum container nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Set the dictionary key order policy
    pub fn key_order(mut self, order: KeyOrder) -> Self {
        self.config.key_order = order;
        self
    }

    /// Allow or reject bytes after the top-level value
    pub fn allow_trailing_data(mut self, allow: bool) -> Self {
        self.config.allow_trailing_data = allow;
        self
    }

    pub fn build(self) -> DecodeConfig {
        self.config
    }
}
