use crate::common::{
    BINARY_SUBTYPE_FUNCTION, BINARY_SUBTYPE_GENERIC, BINARY_SUBTYPE_MD5, BINARY_SUBTYPE_UUID,
    BINARY_SUBTYPE_USER_DEFINED,
};
use crate::errors::{BsonliteError, BsonliteResult, ErrorKind};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fmt::{Debug, Display, Formatter};

/// The subtype tag carried by a [`Binary`] value.
///
/// Subtype 0 (generic) is the default for opaque application data; the other
/// well-known tags are kept for round-trip fidelity with existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum BinarySubtype {
    /// Generic binary data (tag 0x00).
    Generic,
    /// A function payload (tag 0x01).
    Function,
    /// A UUID (tag 0x04).
    Uuid,
    /// An MD5 digest (tag 0x05).
    Md5,
    /// Application-defined subtype (tags 0x80 and above).
    UserDefined(u8),
}

impl BinarySubtype {
    /// Gets the numeric wire tag of this subtype.
    pub fn tag(&self) -> u8 {
        match self {
            BinarySubtype::Generic => BINARY_SUBTYPE_GENERIC,
            BinarySubtype::Function => BINARY_SUBTYPE_FUNCTION,
            BinarySubtype::Uuid => BINARY_SUBTYPE_UUID,
            BinarySubtype::Md5 => BINARY_SUBTYPE_MD5,
            BinarySubtype::UserDefined(tag) => *tag,
        }
    }

    /// Resolves a numeric wire tag to a subtype.
    ///
    /// # Returns
    ///
    /// `Ok(BinarySubtype)` for known or user-defined tags, or an
    /// `ErrorKind::InvalidDataType` error for unassigned tags.
    pub fn from_tag(tag: u8) -> BsonliteResult<BinarySubtype> {
        match tag {
            BINARY_SUBTYPE_GENERIC => Ok(BinarySubtype::Generic),
            BINARY_SUBTYPE_FUNCTION => Ok(BinarySubtype::Function),
            BINARY_SUBTYPE_UUID => Ok(BinarySubtype::Uuid),
            BINARY_SUBTYPE_MD5 => Ok(BinarySubtype::Md5),
            tag if tag >= BINARY_SUBTYPE_USER_DEFINED => Ok(BinarySubtype::UserDefined(tag)),
            tag => Err(BsonliteError::new(
                &format!("Unknown binary subtype tag: 0x{:02x}", tag),
                ErrorKind::InvalidDataType,
            )),
        }
    }
}

/// An opaque byte sequence tagged with a [`BinarySubtype`].
///
/// Binary values are stored as raw bytes. Base64 is only a source-literal
/// convenience: [`Binary::from_base64`] decodes at construction time, so what
/// reaches a collection is always the raw payload.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::types::{Binary, BinarySubtype};
///
/// let binary = Binary::from_base64(BinarySubtype::Generic, "SGVsbG8gV29ybGQ=")?;
/// assert_eq!(binary.bytes(), b"Hello World");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Binary {
    subtype: BinarySubtype,
    bytes: Vec<u8>,
}

impl Binary {
    /// Creates a binary value from raw bytes.
    pub fn new(subtype: BinarySubtype, bytes: Vec<u8>) -> Self {
        Binary { subtype, bytes }
    }

    /// Creates a binary value by decoding a base64 literal.
    ///
    /// # Arguments
    ///
    /// * `subtype` - The subtype tag to attach
    /// * `encoded` - Standard base64 text
    ///
    /// # Returns
    ///
    /// `Ok(Binary)` holding the decoded bytes, or an `ErrorKind::EncodingError`
    /// error if the text is not valid base64.
    pub fn from_base64(subtype: BinarySubtype, encoded: &str) -> BsonliteResult<Binary> {
        let bytes = BASE64.decode(encoded)?;
        Ok(Binary { subtype, bytes })
    }

    /// Gets the subtype tag.
    pub fn subtype(&self) -> BinarySubtype {
        self.subtype
    }

    /// Gets the raw payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Gets the payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Checks whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Renders the payload as standard base64 text.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BinData({}, \"{}\")",
            self.subtype.tag(),
            self.to_base64()
        )
    }
}

impl Debug for Binary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
