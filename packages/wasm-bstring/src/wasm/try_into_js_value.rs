use crate::bech32::DecodedWitness;
use crate::cashaddr::AddressRecord;
use js_sys::Uint8Array;
use wasm_bindgen::{JsError, JsValue};

pub(crate) trait TryIntoJsValue {
    fn try_to_js_value(&self) -> Result<JsValue, JsError>;
}

macro_rules! js_obj {
    ( $( $key:expr => $value:expr ),* ) => {{
        let obj = js_sys::Object::new();
        $(
            js_sys::Reflect::set(&obj, &$key.into(), &$value.try_to_js_value()?.into())
                .map_err(|_| JsError::new("Failed to set object property"))?;
        )*
        Ok(Into::<JsValue>::into(obj)) as Result<JsValue, JsError>
    }};
}

impl TryIntoJsValue for JsValue {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(self.clone())
    }
}

impl TryIntoJsValue for String {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_str(self))
    }
}

impl TryIntoJsValue for u8 {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from(*self))
    }
}

// bytes become a Uint8Array, not an array of numbers
impl TryIntoJsValue for Vec<u8> {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(Uint8Array::from(self.as_slice()).into())
    }
}

impl TryIntoJsValue for DecodedWitness {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        js_obj!(
            "hrp" => self.hrp,
            "version" => self.version,
            "hash" => self.program
        )
    }
}

impl TryIntoJsValue for AddressRecord {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        js_obj!(
            "prefix" => self.prefix,
            "type" => self.kind,
            "hash" => self.hash
        )
    }
}
