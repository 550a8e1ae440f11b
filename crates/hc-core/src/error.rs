use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Parse,
    MissingInput,
    EmptyCollection,
    UnknownEnumValue,
    UnknownFunction,
    InvalidCode,
    InvalidShape,
    DuplicateName,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Parse => "PARSE_ERROR",
            Self::MissingInput => "MISSING_INPUT",
            Self::EmptyCollection => "EMPTY_COLLECTION",
            Self::UnknownEnumValue => "UNKNOWN_ENUM_VALUE",
            Self::UnknownFunction => "UNKNOWN_FUNCTION",
            Self::InvalidCode => "INVALID_CODE",
            Self::InvalidShape => "INVALID_SHAPE",
            Self::DuplicateName => "DUPLICATE_NAME",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}: {}", .kind.code(), .message)]
pub struct CatalogError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CatalogError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingInput, message)
    }

    pub fn empty_collection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyCollection, message)
    }

    pub fn unknown_enum_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEnumValue, message)
    }

    pub fn invalid_code(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCode, message)
    }
}
