use crate::alphabet::{self, Alphabet, PADDING};
use crate::encoding::{string_value, Encoding};
use crate::error::FormatError;
use crate::standard_encoding::Base64String;
use base64::engine::general_purpose::GeneralPurpose;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

fn build_engine() -> GeneralPurpose {
    let config = base64::engine::general_purpose::NO_PAD;
    let alphabet = &base64::alphabet::URL_SAFE;
    GeneralPurpose::new(alphabet, config)
}

/// A URL-safe Base64 string, such as a macaroon as issued by a node.
///
/// Producers conventionally omit padding and it is stripped on parse, but
/// input carrying correct trailing padding is accepted too. Decoding always
/// goes through [`Base64UrlString::to_standard`] so that the bytes come out
/// of the same routine used for standard Base64.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Base64UrlString(String);

impl Base64UrlString {
    pub fn encode<I: AsRef<[u8]>>(input: I) -> Base64UrlString {
        let engine = build_engine();
        Base64UrlString(engine.encode(input.as_ref()))
    }

    pub fn parse(input: &str) -> Result<Base64UrlString, FormatError> {
        alphabet::scan(input, Alphabet::UrlSafe)?;
        let unpadded = input.trim_end_matches(PADDING);
        Ok(Base64UrlString(unpadded.to_string()))
    }

    /// Maps onto the standard alphabet and restores padding from the length.
    pub fn to_standard(&self) -> Result<Base64String, FormatError> {
        let translated: String = self
            .0
            .chars()
            .map(|character| match character {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect();
        let padding = match translated.len() % 4 {
            0 => "",
            2 => "==",
            3 => "=",
            _ => {
                return Err(FormatError::InvalidLength {
                    encoding: Encoding::Base64Url,
                    length: self.0.len(),
                })
            }
        };
        Base64String::parse(&(translated + padding))
    }

    pub fn decode(&self) -> Result<Vec<u8>, FormatError> {
        self.to_standard()?.decode()
    }
}

string_value!(Base64UrlString);
