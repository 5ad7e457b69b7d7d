//! # Command Layer
//!
//! Todo business logic. Each command loads the full collection from a
//! [`TodoStore`](crate::store::TodoStore), works on the in-memory vector and, when it
//! mutates anything, writes the full collection back.
//!
//! Commands take and return plain Rust types. They know nothing about HTTP status
//! codes or JSON bodies; that mapping lives in `server/`.

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;
