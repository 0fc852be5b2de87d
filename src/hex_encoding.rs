use crate::encoding::{string_value, Encoding};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};

/// A hex string with two lowercase digits per byte and no separators.
///
/// Upper-case digits are accepted on parse and folded to lower case.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexString(String);

impl HexString {
    pub fn encode<I: AsRef<[u8]>>(input: I) -> HexString {
        HexString(hex::encode(input))
    }

    pub fn parse(input: &str) -> Result<HexString, FormatError> {
        if let Some((offset, character)) = input.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(FormatError::InvalidCharacter {
                encoding: Encoding::Hex,
                character,
                offset,
            });
        }
        if input.len() % 2 != 0 {
            return Err(FormatError::InvalidLength {
                encoding: Encoding::Hex,
                length: input.len(),
            });
        }
        Ok(HexString(input.to_ascii_lowercase()))
    }

    pub fn decode(&self) -> Result<Vec<u8>, FormatError> {
        let result = hex::decode(&self.0).map_err(|error| from_hex_error(error, self.0.len()))?;
        Ok(result)
    }
}

string_value!(HexString);

fn from_hex_error(error: hex::FromHexError, length: usize) -> FormatError {
    match error {
        hex::FromHexError::InvalidHexCharacter { c, index } => FormatError::InvalidCharacter {
            encoding: Encoding::Hex,
            character: c,
            offset: index,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => FormatError::InvalidLength {
            encoding: Encoding::Hex,
            length,
        },
    }
}
