mod alphabet;
pub mod bindings;
pub mod codec;
pub mod config;
mod encoding;
pub mod error;
mod hex_encoding;
mod safe_encoding;
mod standard_encoding;
mod utils;

pub use codec::{
    base64_to_hex, base64url_to_hex, decode_from_base64, encode_to_base64, hex_to_base64, hex_to_base64url,
    hex_to_text, text_to_hex,
};
pub use config::{Config, LogLevel};
pub use encoding::Encoding;
pub use error::{DecodeError, Error, ErrorKind, FormatError};
pub use hex_encoding::HexString;
pub use safe_encoding::Base64UrlString;
pub use standard_encoding::Base64String;
