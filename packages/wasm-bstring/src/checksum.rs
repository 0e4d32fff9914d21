//! BCH checksums over GF(32) shared by Bech32, Bech32m and CashAddr.
//!
//! Bech32 and Bech32m are the `bech32` crate's own checksums. CashAddr is one
//! more implementation of [`Checksum`]: a 40-bit residue, 8 symbols and its
//! own generator, so all three formats run through the crate's [`Engine`].
//!
//! Prefix folding is left to the callers. Bech32 expands its HRP in two passes
//! (high 3 bits, a zero, then low 5 bits) while CashAddr folds the low 5 bits
//! of each prefix character once.

use crate::convert::u5;
use bech32::Fe32;

pub use bech32::primitives::checksum::{Engine, PackedFe32};
pub use bech32::{Bech32, Bech32m, Checksum};

/// The CashAddr checksum.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum CashAddr {}

impl Checksum for CashAddr {
    type MidstateRepr = u64;
    const CHECKSUM_LENGTH: usize = 8;
    const GENERATOR_SH: [u64; 5] = [
        0x98_f2bc_8e61,
        0x79_b76d_99e2,
        0xf3_3e5f_b3c4,
        0xae_2eab_e2a8,
        0x1e_4f43_e470,
    ];
    const TARGET_RESIDUE: u64 = 1;

    const CODE_LENGTH: usize = 1023;
}

/// Feed the low 5 bits of `value`.
pub fn input_value<Ck: Checksum>(engine: &mut Engine<Ck>, value: u8) {
    engine.input_fe(u5(value));
}

/// Whether everything fed so far, checksum included, is a valid codeword.
pub fn is_valid<Ck: Checksum>(engine: &Engine<Ck>) -> bool {
    *engine.residue() == Ck::TARGET_RESIDUE
}

/// Checksum symbols for everything fed so far, most significant first.
pub fn finalize<Ck: Checksum>(mut engine: Engine<Ck>) -> Vec<Fe32> {
    engine.input_target_residue();
    let residue = *engine.residue();

    (0..Ck::CHECKSUM_LENGTH)
        .rev()
        .map(|i| u5(residue.unpack(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_chars<Ck: Checksum>(engine: &mut Engine<Ck>, data: &str) {
        for c in data.chars() {
            engine.input_fe(Fe32::from_char(c).unwrap());
        }
    }

    fn to_string(fes: &[Fe32]) -> String {
        fes.iter().map(|fe| fe.to_char()).collect()
    }

    #[test]
    fn test_cashaddr_generator() {
        CashAddr::sanity_check();
    }

    #[test]
    fn test_empty_cashaddr_checksum() {
        // "prefix:x64nx6hz"
        let mut engine = Engine::<CashAddr>::new();
        for b in "prefix".bytes() {
            input_value(&mut engine, b);
        }
        input_value(&mut engine, 0);

        assert_eq!(to_string(&finalize(engine)), "x64nx6hz");

        feed_chars(&mut engine, "x64nx6hz");
        assert!(is_valid(&engine));
        assert_eq!(*engine.residue(), 1);
    }

    #[test]
    fn test_bech32_residue() {
        // BIP-173 vector "a12uel5l": hrp "a", no data
        let mut engine = Engine::<Bech32>::new();
        engine.input_hrp(bech32::Hrp::parse("a").unwrap());

        assert_eq!(to_string(&finalize(engine)), "2uel5l");

        feed_chars(&mut engine, "2uel5l");
        assert!(is_valid(&engine));
        assert!(!is_valid(&Engine::<Bech32m>::new()));
    }

    #[test]
    fn test_bech32m_target() {
        // BIP-350 vector "a1lqfn3a": hrp "a", no data
        let mut engine = Engine::<Bech32m>::new();
        engine.input_hrp(bech32::Hrp::parse("a").unwrap());

        assert_eq!(to_string(&finalize(engine)), "lqfn3a");

        feed_chars(&mut engine, "lqfn3a");
        assert!(is_valid(&engine));
        assert_eq!(*engine.residue(), Bech32m::TARGET_RESIDUE);
    }

    #[test]
    fn test_residue_stays_in_width() {
        let mut engine = Engine::<CashAddr>::new();
        for i in 0..200u8 {
            input_value(&mut engine, i);
            assert!(*engine.residue() < (1u64 << 40));
        }
    }
}
