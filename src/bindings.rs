//! JavaScript entry points, exported under the names the wallet UI calls.

use crate::config::Config;
use crate::error::Error;
use crate::{codec, utils};
use lazy_static::lazy_static;
use parking_lot::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

#[wasm_bindgen(start)]
pub fn start() {
    utils::set_panic_hook();
    utils::init_logging(CONFIG.read().log_level);
}

/// Replaces the binding configuration with the supplied JSON object.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsError> {
    let config = Config::from_json(json)?;
    log::info!(
        "Codec configured: log level {}, input limit {:?}",
        config.log_level,
        config.max_input_length
    );
    utils::set_log_level(config.log_level);
    *CONFIG.write() = config;
    Ok(())
}

fn convert<F, T, E>(config: &Config, input: &str, operation: F) -> Result<String, Error>
where
    F: FnOnce(&str) -> Result<T, E>,
    T: Into<String>,
    Error: From<E>,
{
    config.check_input(input)?;
    let output = operation(input)?;
    Ok(output.into())
}

fn run<F, T, E>(input: &str, operation: F) -> Result<String, JsError>
where
    F: FnOnce(&str) -> Result<T, E>,
    T: Into<String>,
    Error: From<E>,
{
    let config = CONFIG.read().clone();
    let output = convert(&config, input, operation)?;
    Ok(output)
}

fn infallible<T>(value: T) -> Result<T, Error> {
    Ok(value)
}

#[wasm_bindgen(js_name = "encodeStringToBase64")]
pub fn encode_string_to_base64(text: &str) -> Result<String, JsError> {
    run(text, |text| infallible(codec::encode_to_base64(text)))
}

#[wasm_bindgen(js_name = "decodeBase64ToString")]
pub fn decode_base64_to_string(base64: &str) -> Result<String, JsError> {
    run(base64, codec::decode_from_base64)
}

#[wasm_bindgen(js_name = "utf8ToHexString")]
pub fn utf8_to_hex_string(text: &str) -> Result<String, JsError> {
    run(text, |text| infallible(codec::text_to_hex(text)))
}

#[wasm_bindgen(js_name = "hexToUtf8String")]
pub fn hex_to_utf8_string(hex: &str) -> Result<String, JsError> {
    run(hex, codec::hex_to_text)
}

#[wasm_bindgen(js_name = "base64ToHex")]
pub fn base64_to_hex(base64: &str) -> Result<String, JsError> {
    run(base64, codec::base64_to_hex)
}

#[wasm_bindgen(js_name = "hexToBase64")]
pub fn hex_to_base64(hex: &str) -> Result<String, JsError> {
    run(hex, codec::hex_to_base64)
}

#[wasm_bindgen(js_name = "base64UrlToHex")]
pub fn base64_url_to_hex(base64url: &str) -> Result<String, JsError> {
    run(base64url, codec::base64url_to_hex)
}

#[wasm_bindgen(js_name = "hexToBase64Url")]
pub fn hex_to_base64_url(hex: &str) -> Result<String, JsError> {
    run(hex, codec::hex_to_base64url)
}
