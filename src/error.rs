//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Url(url::ParseError),
    Http(reqwest::Error),
    FastText(String),
    /// The detector refused the text (too short, no clear signal).
    NotEnoughSignal(String),
    /// Malformed seed list (missing or empty `url`, unparseable url).
    Seed(String),
    /// A classified word could not be turned into a corpus item.
    InvalidWord(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Url(e) => write!(f, "url error: {e}"),
            Error::Http(e) => write!(f, "http error: {e}"),
            Error::FastText(e) => write!(f, "fasttext error: {e}"),
            Error::NotEnoughSignal(e) => write!(f, "not enough signal: {e}"),
            Error::Seed(e) => write!(f, "invalid seed: {e}"),
            Error::InvalidWord(e) => write!(f, "invalid word: {e}"),
            Error::Custom(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
