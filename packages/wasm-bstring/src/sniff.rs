//! Cheap, best-effort string sniffing.
//!
//! These checks only look at the shape of a string. They accept strings that
//! fail to decode (a hex string looks like base58, a bech32-shaped string may
//! carry a bad checksum) and are meant for routing input to the right decoder.
//! Call `decode` or `test` on the codec before trusting the result.

const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Whether `s` only uses characters in `[1-9A-Za-z]`.
///
/// This is wider than the base58 alphabet: `I`, `O` and `l` pass.
pub fn looks_like_base58(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| matches!(c, '1'..='9') || c.is_ascii_alphabetic())
}

/// Whether `s` has the shape of a bech32 address: a 1-3 letter HRP, the
/// separator and at least one data character, 8-90 characters in total,
/// in a single case.
pub fn looks_like_bech32(s: &str) -> bool {
    if s.len() < 8 || s.len() > 90 {
        return false;
    }

    let lower = s.to_ascii_lowercase();
    if lower != s && s.to_ascii_uppercase() != s {
        return false;
    }

    let Some((hrp, data)) = lower.split_once('1') else {
        return false;
    };

    (1..=3).contains(&hrp.len())
        && hrp.chars().all(|c| c.is_ascii_lowercase())
        && !data.is_empty()
        && data.chars().all(|c| BECH32_CHARSET.contains(c))
}
