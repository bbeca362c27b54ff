use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::{atomic, Atomic};

/// Error kinds for bsonlite operations
///
/// This enum represents all possible error types that can occur during bsonlite
/// database operations. Each error kind describes a specific category of failure,
/// enabling precise error handling.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::errors::{BsonliteError, ErrorKind, BsonliteResult};
///
/// fn example() -> BsonliteResult<()> {
///     Err(BsonliteError::new("Collection not found", ErrorKind::CollectionNotFound))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    // Validation Errors - actively used in field/value validation
    /// Generic validation error
    ValidationError,
    /// Invalid data type for operation
    InvalidDataType,
    /// Invalid field name
    InvalidFieldName,
    /// The provided ID is invalid
    InvalidId,

    // Operation Errors - actively used for invalid/unsupported operations
    /// The operation is not valid in the current context
    InvalidOperation,

    // Data Encoding Errors - actively used in base64/hex/decimal parsing
    /// Error encoding or decoding data
    EncodingError,

    // Collection Errors - actively used in collection lifecycle management
    /// Collection does not exist
    CollectionNotFound,
    /// Collection already exists with the given name
    CollectionAlreadyExists,
    /// Collection has been dropped; stale handle used
    CollectionDropped,

    // Store Errors - actively used in store state management
    /// Store has already been closed
    StoreAlreadyClosed,

    // Generic/Internal Errors - used as fallback
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::InvalidDataType => write!(f, "Invalid data type"),
            ErrorKind::InvalidFieldName => write!(f, "Invalid field name"),
            ErrorKind::InvalidId => write!(f, "Invalid ID"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::CollectionNotFound => write!(f, "Collection not found"),
            ErrorKind::CollectionAlreadyExists => write!(f, "Collection already exists"),
            ErrorKind::CollectionDropped => write!(f, "Collection dropped"),
            ErrorKind::StoreAlreadyClosed => write!(f, "Store already closed"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom bsonlite error type.
///
/// `BsonliteError` encapsulates error information including the error message, kind,
/// and optional cause. It supports error chaining and backtraces for debugging.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::errors::{BsonliteError, ErrorKind};
///
/// // Create a simple error
/// let err = BsonliteError::new("Collection not found", ErrorKind::CollectionNotFound);
///
/// // Create an error with a cause
/// let cause = BsonliteError::new("Decode failed", ErrorKind::EncodingError);
/// let err = BsonliteError::new_with_cause("Insert failed", ErrorKind::InvalidOperation, cause);
/// ```
///
/// # Type alias
///
/// The `BsonliteResult<T>` type alias is equivalent to `Result<T, BsonliteError>` and is
/// used throughout the codebase for operations that can fail.
#[derive(Clone)]
pub struct BsonliteError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<BsonliteError>>,
    backtrace: Atomic<Backtrace>,
}

impl BsonliteError {
    /// Creates a new `BsonliteError` with the specified message and error kind.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_kind` - The category of error
    ///
    /// # Returns
    ///
    /// A new `BsonliteError` instance.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        BsonliteError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `BsonliteError` with a cause error.
    ///
    /// This creates an error chain where the cause error is preserved for debugging.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_type` - The category of error
    /// * `cause` - The underlying error that caused this error
    ///
    /// # Returns
    ///
    /// A new `BsonliteError` instance with the cause error attached.
    pub fn new_with_cause(message: &str, error_type: ErrorKind, cause: BsonliteError) -> Self {
        BsonliteError {
            message: message.to_string(),
            error_kind: error_type,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&Box<BsonliteError>> {
        self.cause.as_ref()
    }
}

impl Display for BsonliteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for BsonliteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for BsonliteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for bsonlite operations.
///
/// `BsonliteResult<T>` is shorthand for `Result<T, BsonliteError>`.
/// All fallible bsonlite operations return this type.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::errors::BsonliteResult;
///
/// fn find_collection(name: &str) -> BsonliteResult<String> {
///     // Return success
///     Ok(name.to_string())
///     // Or return error
///     // Err(BsonliteError::new("Collection not found", ErrorKind::CollectionNotFound))
/// }
/// ```
pub type BsonliteResult<T> = Result<T, BsonliteError>;

// From trait implementations for automatic error conversion
impl From<std::string::FromUtf8Error> for BsonliteError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        BsonliteError::new(
            &format!("UTF-8 encoding error: {}", err),
            ErrorKind::EncodingError,
        )
    }
}

impl From<std::fmt::Error> for BsonliteError {
    fn from(err: std::fmt::Error) -> Self {
        BsonliteError::new(
            &format!("Formatting error: {}", err),
            ErrorKind::InternalError,
        )
    }
}

impl From<std::num::ParseIntError> for BsonliteError {
    fn from(err: std::num::ParseIntError) -> Self {
        BsonliteError::new(
            &format!("Integer parsing error: {}", err),
            ErrorKind::InvalidDataType,
        )
    }
}

impl From<base64::DecodeError> for BsonliteError {
    fn from(err: base64::DecodeError) -> Self {
        BsonliteError::new(
            &format!("Base64 decoding error: {}", err),
            ErrorKind::EncodingError,
        )
    }
}

impl From<String> for BsonliteError {
    fn from(msg: String) -> Self {
        BsonliteError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for BsonliteError {
    fn from(msg: &str) -> Self {
        BsonliteError::new(msg, ErrorKind::InternalError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bsonlite_error_new_creates_error() {
        let error = BsonliteError::new("An error occurred", ErrorKind::EncodingError);
        assert_eq!(error.message, "An error occurred");
        assert_eq!(error.error_kind, ErrorKind::EncodingError);
        assert!(error.cause.is_none());
    }

    #[test]
    fn bsonlite_error_new_with_cause_creates_error() {
        let cause = BsonliteError::new("Decode failed", ErrorKind::EncodingError);
        let error =
            BsonliteError::new_with_cause("An error occurred", ErrorKind::InvalidOperation, cause);
        assert_eq!(error.message, "An error occurred");
        assert_eq!(error.error_kind, ErrorKind::InvalidOperation);
        assert!(error.cause.is_some());
    }

    #[test]
    fn bsonlite_error_message_returns_message() {
        let error = BsonliteError::new("An error occurred", ErrorKind::ValidationError);
        assert_eq!(error.message(), "An error occurred");
    }

    #[test]
    fn bsonlite_error_kind_returns_kind() {
        let error = BsonliteError::new("An error occurred", ErrorKind::ValidationError);
        assert_eq!(error.kind(), &ErrorKind::ValidationError);
    }

    #[test]
    fn bsonlite_error_cause_returns_none_when_no_cause() {
        let error = BsonliteError::new("An error occurred", ErrorKind::ValidationError);
        assert!(error.cause().is_none());
    }

    #[test]
    fn bsonlite_error_display_formats_correctly() {
        let error = BsonliteError::new("An error occurred", ErrorKind::ValidationError);
        let formatted = format!("{}", error);
        assert_eq!(formatted, "An error occurred");
    }

    #[test]
    fn bsonlite_error_debug_formats_with_cause() {
        let cause = BsonliteError::new("Decode failed", ErrorKind::EncodingError);
        let error =
            BsonliteError::new_with_cause("An error occurred", ErrorKind::InvalidOperation, cause);
        let formatted = format!("{:?}", error);
        assert!(formatted.contains("An error occurred"));
        assert!(formatted.contains("Caused by:"));
    }

    #[test]
    fn bsonlite_error_source_returns_cause() {
        let cause = BsonliteError::new("Decode failed", ErrorKind::EncodingError);
        let error =
            BsonliteError::new_with_cause("An error occurred", ErrorKind::InvalidOperation, cause);
        assert!(error.source().is_some());
    }

    #[test]
    fn error_kind_display_is_human_readable() {
        assert_eq!(
            format!("{}", ErrorKind::CollectionNotFound),
            "Collection not found"
        );
        assert_eq!(
            format!("{}", ErrorKind::StoreAlreadyClosed),
            "Store already closed"
        );
        assert_eq!(format!("{}", ErrorKind::CollectionDropped), "Collection dropped");
    }

    #[test]
    fn from_utf8_error_maps_to_encoding_error() {
        let bytes = vec![0xff, 0xfe];
        let err: BsonliteError = String::from_utf8(bytes).unwrap_err().into();
        assert_eq!(err.kind(), &ErrorKind::EncodingError);
    }

    #[test]
    fn from_parse_int_error_maps_to_invalid_data_type() {
        let err: BsonliteError = "abc".parse::<i64>().unwrap_err().into();
        assert_eq!(err.kind(), &ErrorKind::InvalidDataType);
    }
}
