//! Regrouping between 8-bit bytes and 5-bit field elements.
//!
//! Shared by Bech32 and CashAddr. Both directions use the same accumulator
//! walk; only the unpacking direction can fail, and it is strict about padding:
//! leftover bits must be fewer than 5 and all zero. This rules out two
//! encodings of the same payload that differ only in their padding bits.

use crate::error::{Error, Result};
use bech32::Fe32;

/// Field elements in value order.
const FE32: [Fe32; 32] = [
    Fe32::Q, Fe32::P, Fe32::Z, Fe32::R, Fe32::Y, Fe32::_9, Fe32::X, Fe32::_8,
    Fe32::G, Fe32::F, Fe32::_2, Fe32::T, Fe32::V, Fe32::D, Fe32::W, Fe32::_0,
    Fe32::S, Fe32::_3, Fe32::J, Fe32::N, Fe32::_5, Fe32::_4, Fe32::K, Fe32::H,
    Fe32::C, Fe32::E, Fe32::_6, Fe32::M, Fe32::U, Fe32::A, Fe32::_7, Fe32::L,
];

/// The field element for the low 5 bits of `value`.
pub(crate) fn u5(value: u8) -> Fe32 {
    FE32[usize::from(value & 0x1f)]
}

/// Convert 8-bit bytes to 5-bit field elements.
///
/// A trailing partial group is padded with zero bits on the right, so the
/// number of pad bits is always below 5.
///
/// # Example
/// Input: `[0xFF, 0x01]` (16 bits)
/// - `11111` = 31
/// - `11100` = 28
/// - `00000` = 0
/// - remaining `1` padded to `10000` = 16
pub fn bytes_to_fes(data: &[u8]) -> Vec<Fe32> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity((data.len() * 8 + 4) / 5);

    for &byte in data {
        acc = ((acc << 8) | u32::from(byte)) & 0xfff;
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            result.push(u5((acc >> bits) as u8));
        }
    }

    if bits > 0 {
        result.push(u5((acc << (5 - bits)) as u8));
    }

    result
}

/// Convert 5-bit field elements back to 8-bit bytes.
///
/// Fails with [`Error::InvalidPadding`] if 5 or more bits are left over, or
/// if the 1-4 leftover bits are not all zero.
pub fn fes_to_bytes(fes: &[Fe32]) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity(fes.len() * 5 / 8);

    for &fe in fes {
        acc = ((acc << 5) | u32::from(fe.to_u8())) & 0xfff;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            result.push((acc >> bits) as u8);
        }
    }

    if bits >= 5 || (acc & ((1 << bits) - 1)) != 0 {
        return Err(Error::InvalidPadding);
    }

    Ok(result)
}
