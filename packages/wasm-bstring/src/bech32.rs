//! Bech32 (BIP-173) and Bech32m (BIP-350) encoding/decoding.
//!
//! A string is `hrp "1" data checksum`: a human-readable part, the separator,
//! 5-bit data symbols and 6 checksum symbols. For witness addresses the first
//! data symbol is the witness version and the rest is the 8-bit program
//! regrouped into 5-bit symbols.
//!
//! The checksum covers the HRP through its two-pass expansion
//! `[c >> 5 for c in hrp] + [0] + [c & 31 for c in hrp]`, which is specific to
//! Bech32 and not shared with CashAddr.

use crate::checksum::{self, Bech32, Bech32m, Checksum, Engine};
use crate::convert::{bytes_to_fes, fes_to_bytes};
use crate::error::{Error, Result};
use bech32::primitives::decode::{
    CharError, ChecksumError, UncheckedHrpstring, UncheckedHrpstringError,
};
use bech32::primitives::hrp;
use bech32::{Fe32, Hrp};

const SEPARATOR: char = '1';
const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 90;
const MAX_VERSION: u8 = 31;

/// Result of decoding a witness address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWitness {
    /// Human-readable part, in the case it was written in.
    pub hrp: String,
    /// Witness version, 0-31.
    pub version: u8,
    /// Witness program.
    pub program: Vec<u8>,
}

fn hrp_error(e: hrp::Error) -> Error {
    match e {
        hrp::Error::Empty => Error::PrefixTooShort,
        hrp::Error::TooLong(len) => Error::InvalidLength(len),
        hrp::Error::NonAsciiChar(c) => Error::InvalidCharacter(c),
        hrp::Error::InvalidAsciiByte(b) => Error::InvalidCharacter(char::from(b)),
        hrp::Error::MixedCase => Error::MixedCase,
        e => Error::Bech32(e.to_string()),
    }
}

fn parse_error(e: UncheckedHrpstringError) -> Error {
    match e {
        UncheckedHrpstringError::Char(CharError::MissingSeparator) => Error::MissingSeparator,
        UncheckedHrpstringError::Char(CharError::InvalidChar(c)) => Error::InvalidCharacter(c),
        UncheckedHrpstringError::Char(CharError::MixedCase) => Error::MixedCase,
        UncheckedHrpstringError::Hrp(e) => hrp_error(e),
        e => Error::Bech32(e.to_string()),
    }
}

fn checksum_error(e: ChecksumError, len: usize) -> Error {
    match e {
        ChecksumError::InvalidResidue => Error::InvalidChecksum,
        ChecksumError::InvalidLength | ChecksumError::CodeLength(_) => Error::InvalidLength(len),
        e => Error::Bech32(e.to_string()),
    }
}

/// Feed the HRP in its two-pass expansion: the high 3 bits of each
/// character, a zero, then the low 5 bits.
fn expand_hrp<Ck: Checksum>(engine: &mut Engine<Ck>, hrp: Hrp) {
    engine.input_hrp(hrp);
}

/// Encode raw 5-bit data under `hrp`, appending the `Ck` checksum.
pub fn serialize<Ck: Checksum>(hrp: &str, data: &[Fe32]) -> Result<String> {
    let hrp = Hrp::parse(hrp).map_err(hrp_error)?;

    let len = hrp.len() + 1 + data.len() + Ck::CHECKSUM_LENGTH;
    if len > MAX_LENGTH {
        return Err(Error::InvalidLength(len));
    }

    let mut engine = Engine::<Ck>::new();
    expand_hrp(&mut engine, hrp);
    for &fe in data {
        engine.input_fe(fe);
    }

    let mut result = String::with_capacity(len);
    result.extend(hrp.lowercase_char_iter());
    result.push(SEPARATOR);
    result.extend(data.iter().map(|fe| fe.to_char()));
    result.extend(checksum::finalize(engine).iter().map(|fe| fe.to_char()));
    Ok(result)
}

/// Split a string into its HRP and 5-bit data, verifying the `Ck` checksum.
///
/// The returned HRP keeps the input's case; the checksum symbols are removed
/// from the returned data.
pub fn deserialize<Ck: Checksum>(s: &str) -> Result<(String, Vec<Fe32>)> {
    if s.len() < MIN_LENGTH || s.len() > MAX_LENGTH {
        return Err(Error::InvalidLength(s.len()));
    }

    let unchecked = UncheckedHrpstring::new(s).map_err(parse_error)?;
    unchecked
        .validate_checksum::<Ck>()
        .map_err(|e| checksum_error(e, s.len()))?;

    let hrp = unchecked.hrp().as_str().to_string();
    let checked = unchecked.remove_checksum::<Ck>();
    let data = checked
        .data_part_ascii_no_checksum()
        .iter()
        .map(|&b| Fe32::from_char_unchecked(b))
        .collect();

    Ok((hrp, data))
}

fn encode_with<Ck: Checksum>(hrp: &str, program: &[u8], version: u8) -> Result<String> {
    if version > MAX_VERSION {
        return Err(Error::UnsupportedType(version));
    }

    let mut data = Vec::with_capacity(1 + (program.len() * 8 + 4) / 5);
    data.push(Fe32::try_from(version).map_err(|_| Error::UnsupportedType(version))?);
    data.extend(bytes_to_fes(program));

    serialize::<Ck>(hrp, &data)
}

fn decode_with<Ck: Checksum>(s: &str) -> Result<DecodedWitness> {
    let (hrp, data) = deserialize::<Ck>(s)?;

    let (version, program) = data
        .split_first()
        .ok_or(Error::InvalidLength(s.len()))?;

    Ok(DecodedWitness {
        hrp,
        version: version.to_u8(),
        program: fes_to_bytes(program)?,
    })
}

/// Encode a witness program as a Bech32 string.
pub fn encode(hrp: &str, program: &[u8], version: u8) -> Result<String> {
    encode_with::<Bech32>(hrp, program, version)
}

/// Decode a Bech32 witness string.
pub fn decode(s: &str) -> Result<DecodedWitness> {
    decode_with::<Bech32>(s)
}

/// Whether `s` decodes as a Bech32 witness string.
pub fn test(s: &str) -> bool {
    decode(s).is_ok()
}

/// Encode a witness program as a Bech32m string.
pub fn encode_m(hrp: &str, program: &[u8], version: u8) -> Result<String> {
    encode_with::<Bech32m>(hrp, program, version)
}

/// Decode a Bech32m witness string.
pub fn decode_m(s: &str) -> Result<DecodedWitness> {
    decode_with::<Bech32m>(s)
}

/// Whether `s` decodes as a Bech32m witness string.
pub fn test_m(s: &str) -> bool {
    decode_m(s).is_ok()
}
