pub mod base58;
pub mod bech32;
pub mod cashaddr;
pub mod checksum;
pub mod convert;
mod error;
pub mod sniff;
#[cfg(test)]
mod test_utils;
pub mod wasm;

pub use ::bech32::Fe32;

pub use self::bech32::DecodedWitness;
pub use cashaddr::AddressRecord;
pub use error::{Error, Result};
pub use wasm::{Base58Namespace, Bech32Namespace, CashAddrNamespace, StringSniffNamespace};
