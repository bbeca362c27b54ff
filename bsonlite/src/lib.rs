#![allow(
    dead_code,
    unused_imports,
    clippy::approx_constant,
)]
//! # Bsonlite - Embedded BSON Document Store
//!
//! Bsonlite is a lightweight, embedded document store written in Rust. It
//! models the full range of BSON value kinds with a canonical total order and
//! provides in-memory databases and collections for storing documents built
//! from them.
//!
//! ## Key Features
//!
//! - **Embedded**: No separate server process required
//! - **All Value Kinds**: Every BSON value kind, from MinKey to MaxKey,
//!   including Decimal128 with exact textual semantics
//! - **Canonical Ordering**: A total order over all value kinds, with
//!   cross-kind numeric comparison
//! - **Databases and Collections**: Implicit database creation, explicit or
//!   implicit collection creation, destructive drops
//! - **Seeding**: A one-call seeder that populates a sample database with a
//!   document exercising every value kind exactly once
//! - **Clean API**: PIMPL pattern provides stable, encapsulated interface
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bsonlite::bsonlite::Bsonlite;
//! use bsonlite::collection::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an engine
//! let engine = Bsonlite::new();
//!
//! // Get or create a database and a collection
//! let db = engine.database("sample_db")?;
//! let collection = db.collection("users")?;
//!
//! // Create a document
//! let mut doc = Document::new();
//! doc.put("name", "John Doe")?;
//! doc.put("age", 30i64)?;
//!
//! // Insert the document
//! collection.insert(doc)?;
//!
//! // Close the engine
//! engine.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Pattern
//!
//! Bsonlite uses the **PIMPL (Pointer To IMPLementation)** design pattern:
//! all handles are cheap clones sharing the same underlying state through an
//! `Arc<Inner>`, and implementation details stay hidden behind a stable
//! public interface.
//!
//! ## Module Organization
//!
//! - [`bsonlite`] - Core engine interface
//! - [`collection`] - Documents, collections, and write results
//! - [`common`] - Value model, constants, and utilities
//! - [`database`] - Named databases holding collections
//! - [`errors`] - Error types and result definitions
//! - [`seed`] - Sample-data seeding
//! - [`types`] - Payload types (ObjectId, Decimal128, Binary, ...)

use crate::common::*;
use std::sync::LazyLock;


pub mod bsonlite;
pub mod collection;
pub mod common;
pub mod database;
pub mod errors;
pub mod seed;
pub mod types;


pub(crate) static FIELD_SEPARATOR: LazyLock<Atomic<String>> = LazyLock::new(|| atomic(".".to_string()));
