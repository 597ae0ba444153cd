//! Board engine services.
//!
//! # Responsibility
//! - Own the in-memory entity collections and their mutation rules.
//! - Provide the position bookkeeping and filtering used by board views.

pub mod board_store;
pub mod filter;
pub mod ordering;
