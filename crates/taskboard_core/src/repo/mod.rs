//! Persistence adapter for whole entity collections.
//!
//! # Responsibility
//! - Serialize/deserialize collections under fixed keys.
//! - Seed the fixed sample dataset once.
//!
//! # Invariants
//! - Writes are full-collection overwrites; there are no partial or merge writes.
//! - No business rules live here.

pub mod collection_repo;
pub mod seed;
