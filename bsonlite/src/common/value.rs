use crate::collection::Document;
use crate::types::{Binary, Code, DateTime, Decimal128, ObjectId, Regex, Timestamp};
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// Compare two floats with proper NaN and total ordering.
/// NaN sorts below every other number and equal to itself.
#[inline]
fn num_cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Canonical bit pattern for hashing a numeric value through its lossy double
/// form. Equal numbers must hash equal, so negative zero and every NaN are
/// collapsed to one representative each.
#[inline]
fn num_hash_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Represents a [Document] value covering the full set of supported kinds.
///
/// # Purpose
/// Provides a unified representation for every value type that can be stored
/// in a bsonlite document: the native scalars (double, string, boolean, 32/64
/// bit integers), the composite kinds (nested documents, arrays), and the
/// extended kinds (binary payloads, object ids, exact decimals, regular
/// expressions, code blobs, the two time flavours, and the ordering
/// sentinels).
///
/// # Ordering
/// `Value` implements a total order following the store's canonical type
/// ranking:
///
/// MinKey < Undefined < Null < numbers < String < Document < Array < Binary
/// < ObjectId < Bool < DateTime < Timestamp < Regex < JavaScript < MaxKey
///
/// The four numeric kinds compare against each other by numeric value, and
/// `MinKey`/`MaxKey` sort strictly below/above everything else. `Undefined`
/// and `Null` are distinct kinds that never compare equal.
///
/// # Usage
/// Create values using the From trait or the `val!` macro:
/// ```text
/// let v1: Value = 42.into();           // From i32 -> Value::Int32
/// let v2 = Value::from("hello");       // From &str
/// let v3 = val!(true);                 // Using macro
/// let doc = doc! { "age": 42, "name": "Alice" };
/// ```
///
/// Access values using as_* methods (returns Option if the kind matches):
/// ```text
/// if let Some(name) = doc.get("name")?.as_string() {
///     println!("Name: {}", name);
/// }
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Value {
    /// Sentinel sorting below every other value.
    MinKey,
    /// Explicit "undefined" marker; deprecated upstream but still round-trips.
    Undefined,
    /// Represents a null value.
    #[default]
    Null,
    /// Represents a 64-bit floating point value.
    Double(f64),
    /// Represents a UTF-8 string value.
    String(String),
    /// Represents a nested document value.
    Document(Document),
    /// Represents an ordered, heterogeneous array value.
    Array(Vec<Value>),
    /// Represents an opaque byte payload with a subtype tag.
    Binary(Binary),
    /// Represents a 12-byte globally-unique identifier.
    ObjectId(ObjectId),
    /// Represents a boolean value.
    Bool(bool),
    /// Represents a millisecond-precision wall-clock timestamp.
    DateTime(DateTime),
    /// Represents a regular expression pattern with options.
    Regex(Regex),
    /// Represents JavaScript source stored as data, never evaluated.
    JavaScript(Code),
    /// Represents a 32-bit signed integer value.
    Int32(i32),
    /// Represents an internal (seconds, ordinal) replication timestamp.
    Timestamp(Timestamp),
    /// Represents a 64-bit signed integer value.
    Int64(i64),
    /// Represents a 128-bit exact base-10 decimal value.
    Decimal128(Decimal128),
    /// Sentinel sorting above every other value.
    MaxKey,
}

impl Value {
    /// Creates a new [Value] from the given value that implements [`Into<Value>`].
    ///
    /// # Arguments
    /// * `value` - Any type implementing `Into<Value>`.
    ///
    /// # Returns
    /// A new `Value` converted from the input.
    pub fn from<T: Into<Value>>(value: T) -> Value {
        value.into()
    }

    /// Creates a new [Value] from the given [Option] value. If the value is
    /// [Some], it will be converted to [Value]. If the value is [None], it
    /// will be converted to [Value::Null].
    pub fn from_option<T: Into<Value>>(value: Option<T>) -> Value {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }

    /// Gets the canonical type name of this value.
    ///
    /// The names follow the target store's type aliases (`"long"` for 64-bit
    /// integers, `"binData"` for binary payloads, and so on).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::MinKey => "minKey",
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Document(_) => "object",
            Value::Array(_) => "array",
            Value::Binary(_) => "binData",
            Value::ObjectId(_) => "objectId",
            Value::Bool(_) => "bool",
            Value::DateTime(_) => "date",
            Value::Regex(_) => "regex",
            Value::JavaScript(_) => "javascript",
            Value::Int32(_) => "int",
            Value::Timestamp(_) => "timestamp",
            Value::Int64(_) => "long",
            Value::Decimal128(_) => "decimal",
            Value::MaxKey => "maxKey",
        }
    }

    /// Canonical rank of the value's kind in the total order.
    /// Numeric kinds share one rank so they compare by numeric value.
    fn type_rank(&self) -> u8 {
        match self {
            Value::MinKey => 0,
            Value::Undefined => 1,
            Value::Null => 2,
            Value::Double(_) | Value::Int32(_) | Value::Int64(_) | Value::Decimal128(_) => 3,
            Value::String(_) => 4,
            Value::Document(_) => 5,
            Value::Array(_) => 6,
            Value::Binary(_) => 7,
            Value::ObjectId(_) => 8,
            Value::Bool(_) => 9,
            Value::DateTime(_) => 10,
            Value::Timestamp(_) => 11,
            Value::Regex(_) => 12,
            Value::JavaScript(_) => 13,
            Value::MaxKey => 14,
        }
    }

    /// Checks whether this value is one of the four numeric kinds.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Double(_) | Value::Int32(_) | Value::Int64(_) | Value::Decimal128(_)
        )
    }

    /// Checks whether this value is [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Checks whether this value is [Value::Undefined].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Checks whether this value is [Value::MinKey].
    pub fn is_min_key(&self) -> bool {
        matches!(self, Value::MinKey)
    }

    /// Checks whether this value is [Value::MaxKey].
    pub fn is_max_key(&self) -> bool {
        matches!(self, Value::MaxKey)
    }

    /// Gets the inner `f64` if this is a double value.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Gets the inner string if this is a string value.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Gets the inner document if this is a nested document value.
    pub fn as_document(&self) -> Option<Document> {
        match self {
            Value::Document(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Gets the inner array if this is an array value.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the inner binary payload if this is a binary value.
    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            Value::Binary(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the inner id if this is an object-id value.
    pub fn as_object_id(&self) -> Option<ObjectId> {
        match self {
            Value::ObjectId(v) => Some(*v),
            _ => None,
        }
    }

    /// Gets the inner `bool` if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Gets the inner datetime if this is a date value.
    pub fn as_date_time(&self) -> Option<DateTime> {
        match self {
            Value::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    /// Gets the inner regex if this is a regular-expression value.
    pub fn as_regex(&self) -> Option<&Regex> {
        match self {
            Value::Regex(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the inner code blob if this is a javascript value.
    pub fn as_javascript(&self) -> Option<&Code> {
        match self {
            Value::JavaScript(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the inner `i32` if this is a 32-bit integer value.
    pub fn as_int32(&self) -> Option<i32> {
        match self {
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Gets the inner timestamp if this is an internal-timestamp value.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    /// Gets the inner `i64` if this is a 64-bit integer value.
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Gets the inner decimal if this is a decimal value.
    pub fn as_decimal128(&self) -> Option<Decimal128> {
        match self {
            Value::Decimal128(v) => Some(*v),
            _ => None,
        }
    }

    /// Lossy double view of a numeric value, used only when a comparison
    /// involves a double on either side.
    fn as_f64_lossy(&self) -> f64 {
        match self {
            Value::Double(v) => *v,
            Value::Int32(v) => *v as f64,
            Value::Int64(v) => *v as f64,
            Value::Decimal128(v) => v.to_f64(),
            _ => f64::NAN,
        }
    }

    /// Compares two numeric values. Integer and decimal pairs take the exact
    /// path; a double on either side falls back to float comparison.
    fn num_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int32(a), Value::Int32(b)) => a.cmp(b),
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Int32(a), Value::Int64(b)) => (*a as i64).cmp(b),
            (Value::Int64(a), Value::Int32(b)) => a.cmp(&(*b as i64)),
            (Value::Decimal128(a), Value::Decimal128(b)) => a.cmp(b),
            (Value::Decimal128(a), Value::Int32(b)) => a.cmp(&Decimal128::from(*b)),
            (Value::Decimal128(a), Value::Int64(b)) => a.cmp(&Decimal128::from(*b)),
            (Value::Int32(a), Value::Decimal128(b)) => Decimal128::from(*a).cmp(b),
            (Value::Int64(a), Value::Decimal128(b)) => Decimal128::from(*a).cmp(b),
            _ => num_cmp_float(self.as_f64_lossy(), other.as_f64_lossy()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_number() && other.is_number() {
            return self.num_cmp(other);
        }

        let rank = self.type_rank().cmp(&other.type_rank());
        if rank != Ordering::Equal {
            return rank;
        }

        match (self, other) {
            (Value::MinKey, Value::MinKey) => Ordering::Equal,
            (Value::Undefined, Value::Undefined) => Ordering::Equal,
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Document(a), Value::Document(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Binary(a), Value::Binary(b)) => a.cmp(b),
            (Value::ObjectId(a), Value::ObjectId(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            (Value::Regex(a), Value::Regex(b)) => a.cmp(b),
            (Value::JavaScript(a), Value::JavaScript(b)) => a.cmp(b),
            (Value::MaxKey, Value::MaxKey) => Ordering::Equal,
            // equal ranks always land in one of the arms above
            _ => Ordering::Equal,
        }
    }
}

impl Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Value::MinKey => (&"min_key_value").hash(state),
            Value::Undefined => (&"undefined_value").hash(state),
            Value::Null => (&"null_value").hash(state),
            // all numeric kinds hash through one canonical form so that
            // cross-type numeric equality stays consistent with Hash
            Value::Double(_) | Value::Int32(_) | Value::Int64(_) | Value::Decimal128(_) => {
                num_hash_bits(self.as_f64_lossy()).hash(state)
            }
            Value::String(v) => v.hash(state),
            Value::Document(v) => v.hash(state),
            Value::Array(v) => v.hash(state),
            Value::Binary(v) => v.hash(state),
            Value::ObjectId(v) => v.hash(state),
            Value::Bool(v) => v.hash(state),
            Value::DateTime(v) => v.hash(state),
            Value::Timestamp(v) => v.hash(state),
            Value::Regex(v) => v.hash(state),
            Value::JavaScript(v) => v.hash(state),
            Value::MaxKey => (&"max_key_value").hash(state),
        }
    }
}

impl Display for Value {
    /// Renders the value in an extended-JSON-flavoured single-line form.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::MinKey => write!(f, "{{\"$minKey\": 1}}"),
            Value::Undefined => write!(f, "{{\"$undefined\": true}}"),
            Value::Null => write!(f, "null"),
            Value::Double(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{:?}", v),
            Value::Document(v) => write!(f, "{}", v),
            Value::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Value::Binary(v) => write!(
                f,
                "{{\"$binary\": {{\"base64\": \"{}\", \"subType\": \"{:02x}\"}}}}",
                v.to_base64(),
                v.subtype().tag()
            ),
            Value::ObjectId(v) => write!(f, "{{\"$oid\": \"{}\"}}", v.to_hex()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::DateTime(v) => {
                write!(f, "{{\"$date\": {}}}", v.timestamp_millis())
            }
            Value::Regex(v) => write!(
                f,
                "{{\"$regularExpression\": {{\"pattern\": {:?}, \"options\": \"{}\"}}}}",
                v.pattern(),
                v.options()
            ),
            Value::JavaScript(v) => write!(f, "{{\"$code\": {:?}}}", v.code()),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Timestamp(v) => write!(
                f,
                "{{\"$timestamp\": {{\"t\": {}, \"i\": {}}}}}",
                v.time, v.increment
            ),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Decimal128(v) => write!(f, "{{\"$numberDecimal\": \"{}\"}}", v),
            Value::MaxKey => write!(f, "{{\"$maxKey\": 1}}"),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Document(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Binary> for Value {
    fn from(value: Binary) -> Self {
        Value::Binary(value)
    }
}

impl From<ObjectId> for Value {
    fn from(value: ObjectId) -> Self {
        Value::ObjectId(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<DateTime> for Value {
    fn from(value: DateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<Regex> for Value {
    fn from(value: Regex) -> Self {
        Value::Regex(value)
    }
}

impl From<Code> for Value {
    fn from(value: Code) -> Self {
        Value::JavaScript(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Value::Timestamp(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<Decimal128> for Value {
    fn from(value: Decimal128) -> Self {
        Value::Decimal128(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

/// A macro to create a `Value` from a given expression.
///
/// This macro simplifies the creation of `Value` instances by automatically
/// converting the provided expression into a `Value` using the `From` trait.
///
/// # Examples
///
/// ```rust
/// use bsonlite::common::Value;
/// use bsonlite::val;
///
/// let int_value = val!(42);
/// assert_eq!(int_value, Value::Int32(42));
///
/// let string_value = val!("hello");
/// assert_eq!(string_value, Value::String("hello".to_string()));
///
/// let bool_value = val!(true);
/// assert_eq!(bool_value, Value::Bool(true));
/// ```
#[macro_export]
macro_rules! val {
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    fn all_kinds() -> Vec<Value> {
        vec![
            Value::MinKey,
            Value::Undefined,
            Value::Null,
            Value::Double(123.45),
            Value::String("Hello".to_string()),
            Value::Document(doc! { nested_key: "nested_value" }),
            Value::Array(vec![val!(1), val!("four")]),
            Value::Binary(Binary::new(
                crate::types::BinarySubtype::Generic,
                b"Hello World".to_vec(),
            )),
            Value::ObjectId(ObjectId::new()),
            Value::Bool(true),
            Value::DateTime(DateTime::now()),
            Value::Regex(Regex::new("pattern", "i").unwrap()),
            Value::JavaScript(Code::new("function() { return true; }")),
            Value::Int32(100),
            Value::Timestamp(Timestamp::next()),
            Value::Int64(i64::MAX),
            Value::Decimal128("12345.6789".parse().unwrap()),
            Value::MaxKey,
        ]
    }

    #[test]
    fn covers_all_eighteen_kinds() {
        let kinds = all_kinds();
        assert_eq!(kinds.len(), 18);
        let mut names: Vec<&str> = kinds.iter().map(|v| v.type_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn min_key_sorts_below_everything() {
        for value in all_kinds() {
            if !value.is_min_key() {
                assert!(Value::MinKey < value, "MinKey not below {:?}", value);
            }
        }
    }

    #[test]
    fn max_key_sorts_above_everything() {
        for value in all_kinds() {
            if !value.is_max_key() {
                assert!(Value::MaxKey > value, "MaxKey not above {:?}", value);
            }
        }
    }

    #[test]
    fn undefined_and_null_are_distinct() {
        assert_ne!(Value::Undefined, Value::Null);
        assert!(Value::Undefined < Value::Null);
        assert!(Value::Undefined.is_undefined());
        assert!(!Value::Undefined.is_null());
    }

    #[test]
    fn numbers_compare_across_kinds() {
        assert_eq!(Value::Int32(1), Value::Int64(1));
        assert!(Value::Int32(1) < Value::Int64(2));
        assert!(Value::Double(1.5) > Value::Int32(1));
        assert!(Value::Decimal128("1.5".parse().unwrap()) > Value::Int64(1));
        assert_eq!(
            Value::Decimal128("100".parse().unwrap()),
            Value::Int32(100)
        );
        assert!(Value::Int64(i64::MAX) > Value::Int32(i32::MAX));
    }

    #[test]
    fn nan_sorts_below_other_numbers() {
        assert!(Value::Double(f64::NAN) < Value::Double(0.0));
        assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
    }

    #[test]
    fn numbers_sort_between_null_and_strings() {
        assert!(Value::Null < Value::Int32(0));
        assert!(Value::Int64(i64::MAX) < Value::String("".to_string()));
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert!(Value::from("apple") < Value::from("banana"));
        assert_eq!(Value::from("same"), Value::from("same".to_string()));
    }

    #[test]
    fn cross_kind_numeric_hash_is_consistent() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher;

        let hash = |value: &Value| {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&Value::Int32(7)), hash(&Value::Int64(7)));
        assert_eq!(hash(&Value::Double(7.0)), hash(&Value::Int32(7)));
        assert_eq!(hash(&Value::Double(0.0)), hash(&Value::Double(-0.0)));
    }

    #[test]
    fn type_names_use_store_aliases() {
        assert_eq!(Value::Int32(1).type_name(), "int");
        assert_eq!(Value::Int64(1).type_name(), "long");
        assert_eq!(Value::Double(1.0).type_name(), "double");
        assert_eq!(val!("x").type_name(), "string");
        assert_eq!(Value::MinKey.type_name(), "minKey");
        assert_eq!(Value::MaxKey.type_name(), "maxKey");
        assert_eq!(Value::Undefined.type_name(), "undefined");
    }

    #[test]
    fn from_option_maps_none_to_null() {
        assert_eq!(Value::from_option(Some(3)), Value::Int32(3));
        assert_eq!(Value::from_option::<i32>(None), Value::Null);
    }

    #[test]
    fn display_uses_extended_json_forms() {
        assert_eq!(format!("{}", Value::Null), "null");
        assert_eq!(format!("{}", Value::MinKey), "{\"$minKey\": 1}");
        assert_eq!(format!("{}", Value::MaxKey), "{\"$maxKey\": 1}");
        assert_eq!(format!("{}", Value::Undefined), "{\"$undefined\": true}");
        let decimal: Decimal128 = "12345.6789".parse().unwrap();
        assert_eq!(
            format!("{}", Value::Decimal128(decimal)),
            "{\"$numberDecimal\": \"12345.6789\"}"
        );
        assert_eq!(
            format!("{}", Value::Timestamp(Timestamp::new(5, 1))),
            "{\"$timestamp\": {\"t\": 5, \"i\": 1}}"
        );
    }

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn as_accessors_match_kinds() {
        assert_eq!(Value::Int32(100).as_int32(), Some(100));
        assert_eq!(Value::Int64(1).as_int32(), None);
        assert_eq!(Value::Int64(9).as_int64(), Some(9));
        assert_eq!(Value::Double(1.5).as_double(), Some(1.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(val!("abc").as_string(), Some("abc".to_string()));
        let array = Value::Array(vec![val!(1)]);
        assert_eq!(array.as_array().map(|a| a.len()), Some(1));
    }

    #[test]
    fn sorted_kinds_follow_canonical_ranking() {
        let mut values = all_kinds();
        values.reverse();
        values.sort();
        let names: Vec<&str> = values.iter().map(|v| v.type_name()).collect();
        assert_eq!(names.first(), Some(&"minKey"));
        assert_eq!(names.last(), Some(&"maxKey"));
        let null_pos = names.iter().position(|n| *n == "null").unwrap();
        let undefined_pos = names.iter().position(|n| *n == "undefined").unwrap();
        assert!(undefined_pos < null_pos);
    }
}
