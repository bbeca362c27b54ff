use crate::common::{get_current_seconds_or_zero, OBJECT_ID_HEX_LENGTH, OBJECT_ID_LENGTH};
use crate::errors::{BsonliteError, BsonliteResult, ErrorKind};
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use rand::Rng;
use std::fmt::{Debug, Display, Formatter, Write as FmtWrite};
use std::sync::atomic::{AtomicU32, Ordering};

/// Process-unique middle component of every generated id.
///
/// Derived once per process from uuid v4 bytes mixed with OS randomness, so two
/// processes generating ids in the same second still diverge.
static PROCESS_UNIQUE: Lazy<[u8; 5]> = Lazy::new(|| {
    let uuid = uuid::Uuid::new_v4();
    let uid = uuid.as_bytes();
    let mut bytes = [0u8; 5];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = uid[i] ^ OsRng.gen::<u8>();
    }
    bytes
});

/// Monotonic 3-byte counter, randomly seeded, wrapping at 2^24.
static ID_COUNTER: Lazy<AtomicU32> = Lazy::new(|| AtomicU32::new(OsRng.gen_range(0..=0xFF_FFFF)));

/// A globally-unique 12-byte document identifier.
///
/// The byte layout embeds the creation time and guarantees uniqueness across a
/// deployment without central coordination:
///
/// * 4 bytes - big-endian seconds since the UNIX epoch
/// * 5 bytes - random value unique to this process
/// * 3 bytes - big-endian counter, starting at a random value
///
/// Because the timestamp leads the layout, ids generated later in wall-clock
/// time sort after earlier ones under the derived byte-wise ordering.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::types::ObjectId;
///
/// // Generate a fresh id
/// let id = ObjectId::new();
///
/// // Round-trip through the 24-character hex form
/// let parsed = ObjectId::parse_str(&id.to_hex())?;
/// assert_eq!(id, parsed);
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ObjectId {
    bytes: [u8; OBJECT_ID_LENGTH],
}

impl ObjectId {
    /// Generates a new unique `ObjectId` stamped with the current time.
    pub fn new() -> Self {
        let seconds = get_current_seconds_or_zero() as u32;
        let counter = ID_COUNTER.fetch_add(1, Ordering::SeqCst) & 0xFF_FFFF;

        let mut bytes = [0u8; OBJECT_ID_LENGTH];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..12].copy_from_slice(&counter.to_be_bytes()[1..4]);

        ObjectId { bytes }
    }

    /// Creates an `ObjectId` from a raw 12-byte array.
    pub fn from_bytes(bytes: [u8; OBJECT_ID_LENGTH]) -> Self {
        ObjectId { bytes }
    }

    /// Parses an `ObjectId` from its 24-character lowercase hex form.
    ///
    /// # Arguments
    ///
    /// * `hex` - The hex string, as produced by [`ObjectId::to_hex`]
    ///
    /// # Returns
    ///
    /// `Ok(ObjectId)` if the string is exactly 24 hex digits, or an
    /// `ErrorKind::InvalidId` error otherwise.
    pub fn parse_str(hex: &str) -> BsonliteResult<ObjectId> {
        if hex.len() != OBJECT_ID_HEX_LENGTH || !hex.is_ascii() {
            log::error!("Invalid ObjectId hex length: {}", hex.len());
            return Err(BsonliteError::new(
                &format!(
                    "ObjectId validation error: hex string must be {} characters, got {}",
                    OBJECT_ID_HEX_LENGTH,
                    hex.len()
                ),
                ErrorKind::InvalidId,
            ));
        }

        // from_str_radix is too lenient here: it accepts '+' signs and
        // uppercase digits, and the contract is lowercase hex only
        if !hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
            return Err(BsonliteError::new(
                &format!("ObjectId validation error: invalid hex digits '{}'", hex),
                ErrorKind::InvalidId,
            ));
        }

        let mut bytes = [0u8; OBJECT_ID_LENGTH];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let chunk = &hex[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(chunk, 16).map_err(|_| {
                BsonliteError::new(
                    &format!("ObjectId validation error: invalid hex digits '{}'", chunk),
                    ErrorKind::InvalidId,
                )
            })?;
        }
        Ok(ObjectId { bytes })
    }

    /// Gets the raw bytes of this id.
    pub fn bytes(&self) -> &[u8; OBJECT_ID_LENGTH] {
        &self.bytes
    }

    /// Gets the creation time embedded in this id, as seconds since the UNIX epoch.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }

    /// Renders this id as a 24-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(OBJECT_ID_HEX_LENGTH);
        for byte in self.bytes.iter() {
            // writing to a String cannot fail
            let _ = write!(hex, "{:02x}", byte);
        }
        hex
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        ObjectId::new()
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Debug for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObjectId(\"{}\")", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_unique_ids() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ObjectId::new()));
        }
    }

    #[test]
    fn embeds_creation_timestamp() {
        let before = get_current_seconds_or_zero() as u32;
        let id = ObjectId::new();
        let after = get_current_seconds_or_zero() as u32;
        assert!(id.timestamp() >= before);
        assert!(id.timestamp() <= after);
    }

    #[test]
    fn hex_round_trip() {
        let id = ObjectId::new();
        let hex = id.to_hex();
        assert_eq!(hex.len(), OBJECT_ID_HEX_LENGTH);
        let parsed = ObjectId::parse_str(&hex).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let result = ObjectId::parse_str("abc123");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::InvalidId);
    }

    #[test]
    fn parse_rejects_non_hex_characters() {
        let result = ObjectId::parse_str("zzzzzzzzzzzzzzzzzzzzzzzz");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::InvalidId);
    }

    #[test]
    fn parse_rejects_uppercase_and_signs() {
        // right length, but not lowercase hex
        for bad in [
            "507F1F77BCF86CD799439011",
            "+1+2+3+4+5+6+7+8+9+0+1+2",
            "507f1f77bcf86cd79943901é",
        ] {
            let result = ObjectId::parse_str(bad);
            assert!(result.is_err(), "expected '{}' to be rejected", bad);
            assert_eq!(result.unwrap_err().kind(), &ErrorKind::InvalidId);
        }
    }

    #[test]
    fn parse_known_bytes() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.bytes()[0], 0x50);
        assert_eq!(id.bytes()[11], 0x11);
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn ids_from_same_process_share_middle_bytes() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        assert_eq!(a.bytes()[4..9], b.bytes()[4..9]);
    }

    #[test]
    fn counter_increments_between_consecutive_ids() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        let counter = |id: &ObjectId| {
            u32::from_be_bytes([0, id.bytes()[9], id.bytes()[10], id.bytes()[11]])
        };
        let delta = (counter(&b) as i64 - counter(&a) as i64).rem_euclid(0x100_0000);
        // other tests may generate ids concurrently, so only require forward movement
        assert!(delta >= 1);
    }
}
