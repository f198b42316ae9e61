use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    Message(String),
    /// The input string was empty
    Empty,
    /// A sign or a `0x` prefix was not followed by any digit
    MissingDigits,
    /// A character outside of the accepted digit set was found
    InvalidDigit {
        /// Byte offset of the character in the input
        index: usize,
        character: char,
    },
}

#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(message: String) -> Self {
        Self::from(ErrorKind::Message(message))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ErrorKind::Message(msg) => {
                write!(f, "{msg}")
            }
            ErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            ErrorKind::MissingDigits => write!(f, "no digits found after sign or prefix"),
            ErrorKind::InvalidDigit { index, character } => {
                write!(f, "invalid digit {character:?} found at byte {index}")
            }
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl<'a> From<&'a str> for Error {
    fn from(message: &'a str) -> Self {
        Self::new(message.to_string())
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl std::error::Error for Error {}
