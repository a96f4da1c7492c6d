use std::fmt;

#[derive(Debug)]
pub enum Error {
    JsonParseError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::JsonParseError(msg) => write!(f, "JSON Parse Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonParseError(err.to_string())
    }
}
