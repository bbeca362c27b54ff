use crate::common::REGEX_VALID_OPTIONS;
use crate::errors::{BsonliteError, BsonliteResult, ErrorKind};
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};

/// A regular-expression value: a pattern plus matching options.
///
/// The store treats the pattern as data; it is carried verbatim and never
/// compiled or executed here. Options are single-character flags out of
/// `i l m s u x`, stored sorted and deduplicated so `"li"` and `"il"` compare
/// equal.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::types::Regex;
///
/// // The equivalent of the shell literal /pattern/i
/// let regex = Regex::new("pattern", "i")?;
/// assert_eq!(regex.pattern(), "pattern");
/// assert_eq!(regex.options(), "i");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Regex {
    pattern: String,
    options: String,
}

impl Regex {
    /// Creates a regular-expression value.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern source text, stored verbatim
    /// * `options` - Flag characters out of `i l m s u x`, in any order
    ///
    /// # Returns
    ///
    /// `Ok(Regex)` with normalized options, or an `ErrorKind::ValidationError`
    /// error if an unknown flag is present.
    pub fn new(pattern: &str, options: &str) -> BsonliteResult<Regex> {
        for flag in options.chars() {
            if !REGEX_VALID_OPTIONS.contains(flag) {
                log::error!("Invalid regex option '{}'", flag);
                return Err(BsonliteError::new(
                    &format!(
                        "Regex validation error: unknown option '{}' (valid options: {})",
                        flag, REGEX_VALID_OPTIONS
                    ),
                    ErrorKind::ValidationError,
                ));
            }
        }
        let options: String = options.chars().sorted().dedup().collect();
        Ok(Regex {
            pattern: pattern.to_string(),
            options,
        })
    }

    /// Gets the pattern source text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Gets the normalized option flags.
    pub fn options(&self) -> &str {
        &self.options
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.options)
    }
}

impl Debug for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
