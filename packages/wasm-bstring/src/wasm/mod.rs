mod codecs;
mod try_into_js_value;

pub use codecs::{Base58Namespace, Bech32Namespace, CashAddrNamespace, StringSniffNamespace};
