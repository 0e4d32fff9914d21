//! CashAddr encoding/decoding for Bitcoin Cash and eCash.
//!
//! Implements the cashaddr format as defined in:
//! - Spec: https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
//! - Reference implementation: https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/cashaddr.cpp
//!
//! # CashAddr vs Bech32
//!
//! Both use 5-bit symbols over the same 32-character alphabet with a BCH
//! checksum, but they are **not compatible**:
//!
//! | Feature | Bech32/Bech32m | CashAddr |
//! |---------|----------------|----------|
//! | **Separator** | `1` | `:` (optional) |
//! | **Example** | `bc1qw508...` | `bitcoincash:qpm2q...` |
//! | **Checksum Length** | 6 characters (30 bits) | 8 characters (40 bits) |
//! | **Prefix Expansion** | `[b>>5...] + [0] + [b&31...]` | `[b&31...] + [0]` |
//! | **Version Encoding** | First symbol = witness version | First byte = type + size |
//!
//! # Version byte
//!
//! The payload starts with one header byte followed by the hash:
//! - Bit 7: reserved, must be zero
//! - Bits 3-6: type (0 = P2PKH, 1 = P2SH by convention)
//! - Bits 0-2: size code, an index into `[20, 24, 28, 32, 40, 48, 56, 64]`

use crate::checksum::{self, CashAddr, Checksum, Engine};
use crate::convert::{bytes_to_fes, fes_to_bytes};
use crate::error::{Error, Result};
use bech32::Fe32;

const SEPARATOR: char = ':';
const MIN_LENGTH: usize = 8;
const MAX_TYPE: u8 = 0x0f;
const RESERVED_BIT: u8 = 0x80;

/// Hash lengths a header can describe, indexed by size code.
const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// Result of decoding a cashaddr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// Lower-case prefix, either read from the address or the default.
    pub prefix: String,
    /// Address type from the header byte, 0-15.
    pub kind: u8,
    pub hash: Vec<u8>,
}

/// Checks a prefix for serialization. Prefixes are letters only.
fn check_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::PrefixTooShort);
    }

    let mut has_lower = false;
    let mut has_upper = false;
    for c in prefix.chars() {
        if c.is_ascii_digit() {
            return Err(Error::NumbersInPrefix);
        }
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidCharacter(c));
        }
        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
    }

    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }

    Ok(())
}

/// Feed the prefix: the lower 5 bits of each character, then a zero.
///
/// Only the low 5 bits are used, so upper and lower case prefixes fold to the
/// same checksum.
fn fold_prefix(engine: &mut Engine<CashAddr>, prefix: &str) {
    for b in prefix.bytes() {
        checksum::input_value(engine, b);
    }
    checksum::input_value(engine, 0);
}

/// Serialize raw 5-bit data under `prefix`, appending the 8-symbol checksum.
pub fn serialize(prefix: &str, data: &[Fe32]) -> Result<String> {
    check_prefix(prefix)?;
    let prefix = prefix.to_ascii_lowercase();

    let mut engine = Engine::<CashAddr>::new();
    fold_prefix(&mut engine, &prefix);
    for &fe in data {
        engine.input_fe(fe);
    }

    let len = prefix.len() + 1 + data.len() + CashAddr::CHECKSUM_LENGTH;
    let mut result = String::with_capacity(len);
    result.push_str(&prefix);
    result.push(SEPARATOR);
    result.extend(data.iter().map(|fe| fe.to_char()));
    result.extend(checksum::finalize(engine).iter().map(|fe| fe.to_char()));
    Ok(result)
}

/// Split a cashaddr string into its prefix and 5-bit data, verifying the
/// checksum. Without a `:` the whole string is data and `default_prefix`
/// is used for the checksum.
///
/// The returned prefix is lower case; the checksum symbols are removed from
/// the returned data.
pub fn deserialize(s: &str, default_prefix: &str) -> Result<(String, Vec<Fe32>)> {
    if s.len() < MIN_LENGTH {
        return Err(Error::InvalidLength(s.len()));
    }

    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_number = false;
    let mut prefix_size = None;

    for (i, c) in s.char_indices() {
        if c == SEPARATOR && prefix_size.is_none() {
            if has_number {
                return Err(Error::NumbersInPrefix);
            }
            if i == 0 {
                return Err(Error::PrefixTooShort);
            }
            prefix_size = Some(i);
            continue;
        }

        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
        if prefix_size.is_none() {
            has_number |= c.is_ascii_digit();
        }
    }

    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }

    let (prefix, payload) = match prefix_size {
        Some(i) => (s[..i].to_ascii_lowercase(), &s[i + 1..]),
        None => (default_prefix.to_ascii_lowercase(), s),
    };

    if let Some(c) = prefix.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(Error::InvalidCharacter(c));
    }

    let mut data = payload
        .chars()
        .map(|c| Fe32::from_char(c.to_ascii_lowercase()).map_err(|_| Error::InvalidCharacter(c)))
        .collect::<Result<Vec<_>>>()?;

    if data.len() < CashAddr::CHECKSUM_LENGTH {
        return Err(Error::InvalidLength(s.len()));
    }

    let mut engine = Engine::<CashAddr>::new();
    fold_prefix(&mut engine, &prefix);
    for &fe in &data {
        engine.input_fe(fe);
    }
    if !checksum::is_valid(&engine) {
        return Err(Error::InvalidChecksum);
    }

    data.truncate(data.len() - CashAddr::CHECKSUM_LENGTH);
    Ok((prefix, data))
}

/// Encode a hash as a cashaddr.
///
/// `kind` must fit in 4 bits and `hash` must have one of the lengths in
/// `[20, 24, 28, 32, 40, 48, 56, 64]`.
pub fn encode(prefix: &str, kind: u8, hash: &[u8]) -> Result<String> {
    if kind > MAX_TYPE {
        return Err(Error::UnsupportedType(kind));
    }

    let size_code = HASH_SIZES
        .iter()
        .position(|&size| size == hash.len())
        .ok_or(Error::UnsupportedLength(hash.len()))?;

    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push((kind << 3) | size_code as u8);
    payload.extend_from_slice(hash);

    serialize(prefix, &bytes_to_fes(&payload))
}

/// Expected hash length for a header byte.
fn hash_size(header: u8) -> usize {
    let size = 20 + 4 * usize::from(header & 0x03);
    if header & 0x04 != 0 {
        size * 2
    } else {
        size
    }
}

/// Decode a cashaddr. `default_prefix` applies when the string has no prefix.
pub fn decode(s: &str, default_prefix: &str) -> Result<AddressRecord> {
    let (prefix, data) = deserialize(s, default_prefix)?;
    let payload = fes_to_bytes(&data)?;

    let (&header, hash) = payload
        .split_first()
        .ok_or(Error::InvalidLength(s.len()))?;

    if header & RESERVED_BIT != 0 {
        return Err(Error::UnsupportedType(header >> 3));
    }

    let expected = hash_size(header);
    if hash.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: hash.len(),
        });
    }

    Ok(AddressRecord {
        prefix,
        kind: header >> 3,
        hash: hash.to_vec(),
    })
}

/// Whether `s` decodes as a cashaddr.
pub fn test(s: &str, default_prefix: &str) -> bool {
    decode(s, default_prefix).is_ok()
}
