use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherLabError {
    #[error("Invalid key: key must not be empty")]
    EmptyKey,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid input: text must not be empty")]
    EmptyText,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Non-alphabetic character {0:?}: only ascii letters a-z are supported")]
    NonAlphabetic(char),

    #[error("Text length {len} is not a multiple of {columns} columns")]
    LengthNotMultiple { len: usize, columns: usize },

    #[error("Unsupported option: {0}")]
    UnsupportedOption(String),
}

pub type Result<T> = std::result::Result<T, CipherLabError>;
