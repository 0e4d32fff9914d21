use super::try_into_js_value::TryIntoJsValue;
use crate::{base58, bech32, cashaddr, sniff};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
pub struct Base58Namespace;

#[wasm_bindgen]
impl Base58Namespace {
    #[wasm_bindgen]
    pub fn encode(data: &[u8]) -> String {
        base58::encode(data)
    }

    #[wasm_bindgen]
    pub fn decode(s: &str) -> std::result::Result<Vec<u8>, JsValue> {
        base58::decode(s).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn test(s: &str) -> bool {
        base58::test(s)
    }

    #[wasm_bindgen]
    pub fn encode_check(data: &[u8]) -> String {
        base58::encode_check(data)
    }

    #[wasm_bindgen]
    pub fn decode_check(s: &str) -> std::result::Result<Vec<u8>, JsValue> {
        base58::decode_check(s).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn test_check(s: &str) -> bool {
        base58::test_check(s)
    }
}

#[wasm_bindgen]
pub struct Bech32Namespace;

#[wasm_bindgen]
impl Bech32Namespace {
    /// Encode a witness program. Pass `bech32m` for the BIP-350 checksum.
    #[wasm_bindgen]
    pub fn encode(
        hrp: &str,
        version: u8,
        hash: &[u8],
        bech32m: Option<bool>,
    ) -> std::result::Result<String, JsValue> {
        let result = if bech32m.unwrap_or(false) {
            bech32::encode_m(hrp, hash, version)
        } else {
            bech32::encode(hrp, hash, version)
        };
        result.map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode to `{ hrp, version, hash }`.
    #[wasm_bindgen]
    pub fn decode(s: &str, bech32m: Option<bool>) -> std::result::Result<JsValue, JsValue> {
        let decoded = if bech32m.unwrap_or(false) {
            bech32::decode_m(s)
        } else {
            bech32::decode(s)
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        decoded.try_to_js_value().map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn test(s: &str, bech32m: Option<bool>) -> bool {
        if bech32m.unwrap_or(false) {
            bech32::test_m(s)
        } else {
            bech32::test(s)
        }
    }
}

#[wasm_bindgen]
pub struct CashAddrNamespace;

#[wasm_bindgen]
impl CashAddrNamespace {
    #[wasm_bindgen]
    pub fn encode(prefix: &str, kind: u8, hash: &[u8]) -> std::result::Result<String, JsValue> {
        cashaddr::encode(prefix, kind, hash).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode to `{ prefix, type, hash }`. `default_prefix` is used when the
    /// string carries none.
    #[wasm_bindgen]
    pub fn decode(s: &str, default_prefix: &str) -> std::result::Result<JsValue, JsValue> {
        let record =
            cashaddr::decode(s, default_prefix).map_err(|e| JsValue::from_str(&e.to_string()))?;
        record.try_to_js_value().map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn test(s: &str, default_prefix: &str) -> bool {
        cashaddr::test(s, default_prefix)
    }
}

#[wasm_bindgen]
pub struct StringSniffNamespace;

#[wasm_bindgen]
impl StringSniffNamespace {
    #[wasm_bindgen]
    pub fn is_base58(s: &str) -> bool {
        sniff::looks_like_base58(s)
    }

    #[wasm_bindgen]
    pub fn is_bech32(s: &str) -> bool {
        sniff::looks_like_bech32(s)
    }
}
