use std::fmt::{Debug, Display, Formatter};

/// JavaScript source code stored as a value.
///
/// The text is tagged as executable code but is never evaluated by the store;
/// it is an opaque blob carried for round-trip fidelity. The kind is
/// deprecated in the originating ecosystem yet still supported here.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Code {
    code: String,
}

impl Code {
    /// Creates a code value from source text.
    pub fn new(code: &str) -> Self {
        Code {
            code: code.to_string(),
        }
    }

    /// Gets the source text.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Code(\"{}\")", self.code)
    }
}

impl Debug for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Code::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_source_verbatim() {
        let code = Code::new("function() { return true; }");
        assert_eq!(code.code(), "function() { return true; }");
    }

    #[test]
    fn equality_is_textual() {
        assert_eq!(Code::new("f()"), Code::new("f()"));
        assert_ne!(Code::new("f()"), Code::new("f( )"));
    }

    #[test]
    fn display_wraps_source() {
        let code = Code::new("f()");
        assert_eq!(format!("{}", code), "Code(\"f()\")");
    }
}
