//! Base58 and Base58Check encoding/decoding.
//!
//! The payload is treated as a big-endian unsigned integer and converted to
//! base 58, so there is no upper bound on its length. Leading zero bytes carry
//! no magnitude and would vanish in a plain base conversion; each of them is
//! written as a leading `1` (the zero digit) instead, and read back the same
//! way.
//!
//! The conversion and the sha256d checksum are `bitcoin::base58`; this module
//! maps its errors onto [`Error`].

use crate::error::{Error, Result};
use miniscript::bitcoin::base58;

/// The character `base58` stopped at. It reports the offending byte, which for
/// a non-ASCII character is the first byte of its UTF-8 encoding.
fn invalid_character(s: &str, byte: u8) -> Error {
    let c = if byte.is_ascii() {
        char::from(byte)
    } else {
        s.chars()
            .find(|c| !c.is_ascii())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    };
    Error::InvalidCharacter(c)
}

/// Encodes `data` as a base58 string.
pub fn encode(data: &[u8]) -> String {
    base58::encode(data)
}

/// Decodes a base58 string into bytes.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    base58::decode(s).map_err(|e| invalid_character(s, e.invalid_base58_character()))
}

/// Whether `s` decodes as base58.
pub fn test(s: &str) -> bool {
    decode(s).is_ok()
}

/// Encodes `data` followed by the first four bytes of its sha256d.
pub fn encode_check(data: &[u8]) -> String {
    base58::encode_check(data)
}

/// Decodes a base58check string, verifying and stripping the checksum.
pub fn decode_check(s: &str) -> Result<Vec<u8>> {
    base58::decode_check(s).map_err(|e| match e {
        base58::Error::Decode(e) => invalid_character(s, e.invalid_base58_character()),
        base58::Error::IncorrectChecksum(_) => Error::InvalidChecksum,
        base58::Error::TooShort(e) => Error::TooShort(e.invalid_base58_length()),
        e => Error::Base58(e.to_string()),
    })
}

/// Whether `s` decodes as base58check.
pub fn test_check(s: &str) -> bool {
    decode_check(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    const BASE58_CHARS: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[test]
    fn test_alphabet() {
        for (i, &c) in BASE58_CHARS.iter().enumerate() {
            assert_eq!(decode(&char::from(c).to_string()), Ok(vec![i as u8]));
        }
        for c in ['0', 'O', 'I', 'l', '+', '/', ' '] {
            assert_eq!(decode(&c.to_string()), Err(Error::InvalidCharacter(c)));
        }
    }

    #[test]
    fn test_base58_encode() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0]), "1");
        assert_eq!(encode(&[1]), "2");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(&[13, 36]), "211");
        // Leading zeroes
        assert_eq!(encode(&[0, 13, 36]), "1211");
        assert_eq!(encode(&[0, 0, 0, 0, 13, 36]), "1111211");

        let res = encode(
            "BitcoinBitcoinBitcoinBitcoinBitcoinBitcoinBitcoinBitcoinBitcoinBit\
        coinBitcoinBitcoinBitcoinBitcoinBitcoinBitcoinBitcoinBitcoinBitcoinBitcoin"
                .as_bytes(),
        );
        let exp =
            "ZqC5ZdfpZRi7fjA8hbhX5pEE96MdH9hEaC1YouxscPtbJF16qVWksHWR4wwvx7MotFcs2ChbJqK8KJ9X\
        wZznwWn1JFDhhTmGo9v6GjAVikzCsBWZehu7bm22xL8b5zBR5AsBygYRwbFJsNwNkjpyFuDKwmsUTKvkULCvucPJrN5\
        QUdxpGakhqkZFL7RU4yT";
        assert_eq!(res, exp);
    }

    #[test]
    fn test_base58_decode() {
        assert_eq!(decode(""), Ok(vec![]));
        assert_eq!(decode("1"), Ok(vec![0u8]));
        assert_eq!(decode("2"), Ok(vec![1u8]));
        assert_eq!(decode("21"), Ok(vec![58u8]));
        assert_eq!(decode("211"), Ok(vec![13u8, 36]));
        // Leading zeroes
        assert_eq!(decode("1211"), Ok(vec![0u8, 13, 36]));
        assert_eq!(decode("111211"), Ok(vec![0u8, 0, 0, 13, 36]));
        // Non Base58 char.
        assert_eq!(decode("¢"), Err(Error::InvalidCharacter('¢')));
        assert_eq!(decode("12l"), Err(Error::InvalidCharacter('l')));
    }

    #[test]
    fn test_leading_zeros_preserved() {
        for len in 0..10 {
            let zeros = vec![0u8; len];
            let encoded = encode(&zeros);
            assert_eq!(encoded, "1".repeat(len));
            assert_eq!(decode(&encoded).unwrap(), zeros);

            let mut data = zeros.clone();
            data.extend_from_slice(&[0xff, 0x00, 0x01]);
            assert_eq!(decode(&encode(&data)).unwrap(), data);
        }
    }

    #[test]
    fn test_matches_bigint_conversion() {
        let mut seed: u32 = 0x1234_5678;
        for len in 0..400usize {
            let data: Vec<u8> = (0..len)
                .map(|i| {
                    seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
                    // sprinkle leading zeros into some inputs
                    if i < len % 4 {
                        0
                    } else {
                        (seed >> 16) as u8
                    }
                })
                .collect();

            let zeros = data.iter().take_while(|&&b| b == 0).count();
            let mut expected = "1".repeat(zeros);
            if zeros < data.len() {
                let n = BigUint::from_bytes_be(&data[zeros..]);
                expected.extend(
                    n.to_radix_be(58)
                        .iter()
                        .map(|&d| char::from(BASE58_CHARS[usize::from(d)])),
                );
            }

            assert_eq!(encode(&data), expected, "length {}", len);
            assert_eq!(decode(&expected).unwrap(), data, "length {}", len);
        }
    }

    #[test]
    fn test_base58_check() {
        let addr = hex::decode("00f8917303bfa8ef24f292e8fa1419b20460ba064d").unwrap();
        assert_eq!(encode_check(&addr), "1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH");
        assert_eq!(decode_check("1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH"), Ok(addr));

        // Extended keys are 78 bytes plus checksum.
        let s = "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs";
        let v = decode_check(s).unwrap();
        assert_eq!(v.len(), 78);
        assert_eq!(encode_check(&v), s);

        // Check that empty slice passes roundtrip.
        assert_eq!(decode_check(&encode_check(&[])), Ok(vec![]));
        // Check that `len > 4` is enforced.
        assert_eq!(decode_check(&encode(&[1, 2, 3])), Err(Error::TooShort(3)));
    }

    #[test]
    fn test_base58_check_corruption() {
        let s = "1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH";
        let bytes = s.as_bytes();
        for i in 0..bytes.len() {
            for &c in BASE58_CHARS.iter() {
                if c == bytes[i] {
                    continue;
                }
                let mut mutated = bytes.to_vec();
                mutated[i] = c;
                let mutated = String::from_utf8(mutated).unwrap();
                assert!(!test_check(&mutated), "{} should not validate", mutated);
            }
        }
    }

    #[test]
    fn test_predicate_matches_decode() {
        for s in ["", "1", "11", "0", "O", "I", "l", "abc", "¢", "1 1", "zzzzzzzzzzzzzzzzzzzz"] {
            assert_eq!(test(s), decode(s).is_ok(), "{:?}", s);
        }
        assert!(test_check("1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH"));
        assert!(!test_check("1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHh"));
    }

    #[test]
    fn test_fixtures() {
        for case in crate::test_utils::fixture_cases("base58/valid.json") {
            let data = hex::decode(case["hex"].as_str().unwrap()).unwrap();
            let plain = case["base58"].as_str().unwrap();
            let check = case["base58check"].as_str().unwrap();

            assert_eq!(encode(&data), plain);
            assert_eq!(decode(plain).unwrap(), data);
            assert_eq!(encode_check(&data), check);
            assert_eq!(decode_check(check).unwrap(), data);
        }
    }
}
