use thiserror::Error;

/// Broad classification of a [`BencodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed wire bytes.
    Format,
    /// A required dictionary field was absent on encode with no default.
    MissingField,
    /// A wire key that the dictionary schema does not declare.
    UnknownField,
    /// A type name that cannot be mapped to a descriptor.
    UnsupportedType,
    /// A text payload that is not valid UTF-8.
    Encoding,
    /// A value whose shape does not match its descriptor.
    TypeMismatch,
    /// A schema declaration that cannot be built.
    InvalidSchema,
}

#[derive(Debug, Error)]
pub enum BencodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unexpected character {found:?} at offset {pos}, expected {expected}")]
    UnexpectedChar {
        expected: &'static str,
        found: char,
        pos: usize,
    },

    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    #[error("invalid string length")]
    InvalidStringLength,

    #[error("trailing data after value")]
    TrailingData,

    #[error("nesting too deep")]
    NestingTooDeep,

    #[error("dictionary key {0:?} is out of order")]
    UnsortedKeys(String),

    #[error("dictionary key {0:?} appears more than once")]
    DuplicateKey(String),

    #[error("invalid {type_name} value: {reason}")]
    InvalidValue { type_name: String, reason: String },

    #[error("invalid utf-8 in text string: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("attempt to encode a dict, missing {0:?}, and not present in defaults")]
    MissingField(String),

    #[error("unknown dictionary field {0:?}")]
    UnknownField(String),

    #[error("could not construct a type for {0}")]
    UnsupportedType(String),

    #[error("field {0:?} is declared more than once")]
    DuplicateField(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: &'static str },
}

impl BencodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BencodeError::UnexpectedEof
            | BencodeError::UnexpectedChar { .. }
            | BencodeError::InvalidInteger(_)
            | BencodeError::InvalidStringLength
            | BencodeError::TrailingData
            | BencodeError::NestingTooDeep
            | BencodeError::UnsortedKeys(_)
            | BencodeError::DuplicateKey(_)
            | BencodeError::InvalidValue { .. } => ErrorKind::Format,
            BencodeError::InvalidUtf8(_) => ErrorKind::Encoding,
            BencodeError::MissingField(_) => ErrorKind::MissingField,
            BencodeError::UnknownField(_) => ErrorKind::UnknownField,
            BencodeError::UnsupportedType(_) => ErrorKind::UnsupportedType,
            BencodeError::DuplicateField(_) => ErrorKind::InvalidSchema,
            BencodeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    pub(crate) fn unexpected(expected: &'static str, found: u8, pos: usize) -> Self {
        BencodeError::UnexpectedChar {
            expected,
            found: found as char,
            pos,
        }
    }
}
