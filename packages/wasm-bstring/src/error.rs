use core::fmt;

/// Failure kinds shared by the Base58, Bech32 and CashAddr codecs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A symbol outside the alphabet of the format (or a non-ASCII char).
    InvalidCharacter(char),
    /// The string mixes upper and lower case letters.
    MixedCase,
    /// Bech32 string without a `1` separator.
    MissingSeparator,
    /// CashAddr prefix containing a digit.
    NumbersInPrefix,
    /// Empty human-readable part or prefix.
    PrefixTooShort,
    /// The recomputed checksum residue does not match.
    InvalidChecksum,
    /// Nonzero leftover bits, or too many leftover bits, after regrouping.
    InvalidPadding,
    /// Hash length is not one of the lengths the format can describe.
    UnsupportedLength(usize),
    /// Decoded hash length disagrees with the length announced in the header.
    LengthMismatch { expected: usize, actual: usize },
    /// Type or version field outside its valid range.
    UnsupportedType(u8),
    /// String length outside the bounds of the grammar.
    InvalidLength(usize),
    /// Base58Check payload too short to carry a checksum.
    TooShort(usize),
    /// Any other failure reported by the base58 library.
    Base58(String),
    /// Any other failure reported by the bech32 library.
    Bech32(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter(c) => write!(f, "Invalid character: {:?}", c),
            Error::MixedCase => write!(f, "Mixed case string"),
            Error::MissingSeparator => write!(f, "Missing separator"),
            Error::NumbersInPrefix => write!(f, "Numbers are not allowed in prefix"),
            Error::PrefixTooShort => write!(f, "Prefix is empty"),
            Error::InvalidChecksum => write!(f, "Invalid checksum"),
            Error::InvalidPadding => write!(f, "Invalid padding in data"),
            Error::UnsupportedLength(len) => write!(f, "Unsupported hash length: {}", len),
            Error::LengthMismatch { expected, actual } => write!(
                f,
                "Hash length mismatch: expected {}, got {}",
                expected, actual
            ),
            Error::UnsupportedType(t) => write!(f, "Unsupported type or version: {}", t),
            Error::InvalidLength(len) => write!(f, "Invalid string length: {}", len),
            Error::TooShort(len) => write!(f, "Payload too short for checksum: {} bytes", len),
            Error::Base58(msg) => write!(f, "Base58 error: {}", msg),
            Error::Bech32(msg) => write!(f, "Bech32 error: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidCharacter('b').to_string(),
            "Invalid character: 'b'"
        );
        assert_eq!(
            Error::LengthMismatch {
                expected: 20,
                actual: 19
            }
            .to_string(),
            "Hash length mismatch: expected 20, got 19"
        );
    }
}
