/// The textual byte representations understood by the codec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::IntoStaticStr)]
pub enum Encoding {
    #[strum(serialize = "base64")]
    Base64,

    #[strum(serialize = "base64url")]
    Base64Url,

    #[strum(serialize = "hex")]
    Hex,
}

/// Implements the string plumbing shared by the validated representation
/// types. The type must be a newtype over `String` with a
/// `parse(&str) -> Result<Self, FormatError>` constructor.
macro_rules! string_value {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                formatter.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::FormatError;

            fn from_str(string: &str) -> Result<$name, crate::error::FormatError> {
                $name::parse(string)
            }
        }

        impl TryFrom<String> for $name {
            type Error = crate::error::FormatError;

            fn try_from(value: String) -> Result<$name, crate::error::FormatError> {
                $name::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

pub(crate) use string_value;
