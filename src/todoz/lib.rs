//! # Todoz Architecture
//!
//! Todoz is two small programs sharing one library: a todo store served over HTTP, and
//! a terminal client for a paginated remote user directory. They never talk to each
//! other at runtime; they share only the error taxonomy, the configuration and the
//! binary.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, cli/)                                     │
//! │  - Parses arguments, initialises tracing, renders tables    │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!              │                                   │
//!              ▼                                   ▼
//! ┌───────────────────────────────┐   ┌─────────────────────────┐
//! │  Service (server/)            │   │  Directory (directory/) │
//! │  - axum router + middleware   │   │  - page client          │
//! │  - HTTP <-> API translation   │   │  - pure view pipeline   │
//! └───────────────────────────────┘   │  - session state        │
//!              │                      └─────────────────────────┘
//!              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, normalizes raw path ids       │
//! └─────────────────────────────────────────────────────────────┘
//!              │
//!              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Todo business logic over a TodoStore                     │
//! └─────────────────────────────────────────────────────────────┘
//!              │
//!              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TodoStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns `Result<T>` and
//! never writes to stdout. The server layer is just one client of that core.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **directory::view**: unit tests of the business rules, using
//!    `InMemoryStore` and hand-built users.
//! 2. **API**: dispatch and id normalization.
//! 3. **Integration** (`tests/`): the real router bound on a loopback port, the
//!    directory client against a local fake user API, and the binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade over the todo commands
//! - [`commands`]: Todo business logic
//! - [`store`]: Storage abstraction and implementations
//! - [`server`]: HTTP service
//! - [`directory`]: User directory client and view pipeline
//! - [`model`]: Core data types (`Todo`, `User`, `UserPage`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod server;
pub mod store;
