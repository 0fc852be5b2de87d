use crate::encoding::Encoding;
use crate::error::FormatError;

pub const PADDING: char = '=';

const SYMBOLS_PER_QUANTUM: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alphabet {
    Standard,
    UrlSafe,
}

impl Alphabet {
    pub fn encoding(self) -> Encoding {
        match self {
            Alphabet::Standard => Encoding::Base64,
            Alphabet::UrlSafe => Encoding::Base64Url,
        }
    }

    fn symbol_value(self, character: char) -> Option<u8> {
        let value = match character {
            'A'..='Z' => character as u8 - b'A',
            'a'..='z' => character as u8 - b'a' + 26,
            '0'..='9' => character as u8 - b'0' + 52,
            _ => match (self, character) {
                (Alphabet::Standard, '+') | (Alphabet::UrlSafe, '-') => 62,
                (Alphabet::Standard, '/') | (Alphabet::UrlSafe, '_') => 63,
                _ => return None,
            },
        };
        Some(value)
    }
}

/// Shape of a lexically valid Base64-family string: the number of data
/// symbols and the number of `=` characters its canonical form ends with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Layout {
    pub symbols: usize,
    pub padding: usize,
}

/// Number of `=` characters needed to complete a final quantum of `symbols`
/// data symbols. No valid encoding leaves a single symbol in its final
/// quantum, so that case is a length error.
pub fn required_padding(encoding: Encoding, symbols: usize, length: usize) -> Result<usize, FormatError> {
    match symbols % SYMBOLS_PER_QUANTUM {
        0 => Ok(0),
        2 => Ok(2),
        3 => Ok(1),
        _ => Err(FormatError::InvalidLength { encoding, length }),
    }
}

/// Checks `input` against `alphabet` without decoding it.
///
/// Padding is optional, but when present it must be trailing and complete
/// the final quantum exactly. The final symbol of a partial quantum must not
/// carry bits beyond the end of the data.
pub fn scan(input: &str, alphabet: Alphabet) -> Result<Layout, FormatError> {
    let encoding = alphabet.encoding();
    let mut symbols = 0;
    let mut padding = 0;
    let mut padding_offset = None;
    let mut last_value = 0u8;

    for (offset, character) in input.char_indices() {
        if character == PADDING {
            padding_offset.get_or_insert(offset);
            padding += 1;
            continue;
        }
        if let Some(offset) = padding_offset {
            return Err(FormatError::MisplacedPadding { encoding, offset });
        }
        match alphabet.symbol_value(character) {
            Some(value) => {
                last_value = value;
                symbols += 1;
            }
            None => {
                return Err(FormatError::InvalidCharacter {
                    encoding,
                    character,
                    offset,
                })
            }
        }
    }

    let required = required_padding(encoding, symbols, input.len())?;
    if padding != 0 && padding != required {
        return Err(FormatError::InvalidLength {
            encoding,
            length: input.len(),
        });
    }

    let unused_bits_mask = match symbols % SYMBOLS_PER_QUANTUM {
        2 => 0x0f,
        3 => 0x03,
        _ => 0x00,
    };
    if last_value & unused_bits_mask != 0 {
        // Every data symbol is ASCII, so the symbol count is also a byte offset.
        return Err(FormatError::NonCanonicalTrailingBits {
            encoding,
            offset: symbols - 1,
        });
    }

    Ok(Layout {
        symbols,
        padding: required,
    })
}
