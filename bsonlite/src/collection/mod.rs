//! Document collections and document operations.

#[allow(clippy::module_inception)]
mod collection;
mod document;
mod write_result;

pub use collection::*;
pub use document::*;
pub use write_result::*;
