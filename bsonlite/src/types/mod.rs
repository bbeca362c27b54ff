//! Payload types for the non-native value kinds.
//!
//! Each type in this module backs one [`Value`](crate::common::Value) variant
//! that has no direct Rust primitive: identifiers, exact decimals, tagged
//! byte payloads, patterns, code blobs, and the two flavours of time.

mod binary;
mod code;
mod datetime;
mod decimal128;
mod object_id;
mod regex;
mod timestamp;

pub use binary::*;
pub use code::*;
pub use datetime::*;
pub use decimal128::*;
pub use object_id::*;
pub use regex::*;
pub use timestamp::*;
