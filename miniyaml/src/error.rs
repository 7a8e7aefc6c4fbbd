//! Error types for YAML-subset serialization and deserialization.
//!
//! This module provides strongly-typed error handling with location
//! information to aid in debugging malformed settings documents.

use std::fmt;

/// A specialized `Result` type for serialization and deserialization.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for encoding and decoding operations.
///
/// Errors include a specific kind, a descriptive message, and optional
/// line/column location information for decode errors.
///
/// # Examples
///
/// ```
/// use miniyaml::load;
///
/// let result = load("this line is neither a key nor a sequence item");
///
/// if let Err(err) = result {
///     println!("Error: {}", err);
///     // Error messages include location when available
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

/// Specific kinds of errors that can occur while encoding or decoding.
///
/// Each variant represents a distinct error condition with semantic meaning.
#[derive(Debug, Clone)]
pub enum ErrorKind {
    /// The encoder was handed a tree the format cannot express, such as a
    /// non-mapping root or a sequence element that is not a scalar.
    InvalidInput,
    /// A line is neither blank, a comment, a key line, nor a sequence item.
    UnexpectedLine,
    /// Indentation doesn't match any open scope or is inconsistent.
    IndentationError,
    /// A quoted scalar was opened but not properly closed.
    UnterminatedString,
    /// An invalid escape sequence was found in a double-quoted scalar.
    InvalidEscape,
    /// A key was re-declared within the same mapping block.
    ///
    /// Only reported when decoding with [`DuplicateKeys::Error`];
    /// the default behavior keeps the last value.
    ///
    /// [`DuplicateKeys::Error`]: crate::DuplicateKeys::Error
    DuplicateKey,
    /// A scalar contains a character that cannot be represented even via
    /// double-quote escaping.
    Encoding,
    /// An I/O error occurred during reading or writing.
    Io(String),
    /// A custom error message.
    Custom(String),
}

impl Error {
    /// Creates a new error with the specified kind and message.
    ///
    /// # Examples
    ///
    /// ```
    /// use miniyaml::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::UnexpectedLine, "unrecognized line");
    /// // Can access the kind
    /// let _ = err.kind();
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Adds location information to this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use miniyaml::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::IndentationError, "bad indentation")
    ///     .with_location(5, 1);
    ///
    /// let msg = format!("{}", err);
    /// assert!(msg.contains("line 5"));
    /// assert!(msg.contains("column 1"));
    /// ```
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Creates a custom error with a free-form message.
    ///
    /// # Examples
    ///
    /// ```
    /// use miniyaml::error::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// println!("{}", err);
    /// ```
    pub fn custom(msg: impl Into<String>) -> Self {
        let message = msg.into();
        Error::new(ErrorKind::Custom(message.clone()), message)
    }

    /// Returns the kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use miniyaml::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::DuplicateKey, "duplicate key: foo");
    /// match err.kind() {
    ///     ErrorKind::DuplicateKey => println!("duplicate detected"),
    ///     _ => {}
    /// }
    /// ```
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{} at line {}, column {}", self.message, line, col)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for Error {}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Io(err.to_string()), err.to_string())
    }
}
