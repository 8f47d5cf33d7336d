use core::fmt;

/// Errors raised while converting runtime values into [`JsonValue`](crate::JsonValue).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The value has a type the dynamic converter does not recognise.
    UnsupportedValue {
        type_name: &'static str,
        value: String,
    },
}

impl Error {
    pub(crate) fn unsupported_value(type_name: &'static str, value: String) -> Error {
        Error::UnsupportedValue { type_name, value }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedValue { type_name, value } => {
                write!(f, "Unsupported value of type `{type_name}`: {value}")
            }
        }
    }
}

impl std::error::Error for Error {}
