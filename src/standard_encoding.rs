use crate::alphabet::{self, Alphabet, PADDING};
use crate::encoding::string_value;
use crate::error::FormatError;
use base64::engine::general_purpose::GeneralPurpose;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

fn build_engine() -> GeneralPurpose {
    let config = base64::engine::general_purpose::PAD;
    let alphabet = &base64::alphabet::STANDARD;
    GeneralPurpose::new(alphabet, config)
}

/// A standard-alphabet Base64 string, always held in its padded form.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Base64String(String);

impl Base64String {
    pub fn encode<I: AsRef<[u8]>>(input: I) -> Base64String {
        let engine = build_engine();
        Base64String(engine.encode(input.as_ref()))
    }

    /// Validates `input`, restoring any padding the producer left off.
    pub fn parse(input: &str) -> Result<Base64String, FormatError> {
        let layout = alphabet::scan(input, Alphabet::Standard)?;
        let symbols = input.trim_end_matches(PADDING);
        let mut padded = String::with_capacity(layout.symbols + layout.padding);
        padded.push_str(symbols);
        padded.extend(std::iter::repeat(PADDING).take(layout.padding));
        Ok(Base64String(padded))
    }

    pub fn decode(&self) -> Result<Vec<u8>, FormatError> {
        let engine = build_engine();
        let result = engine.decode(&self.0)?;
        Ok(result)
    }
}

string_value!(Base64String);
