//! Binary-only pieces: argument parsing, tracing setup, and terminal output for the
//! user directory. Nothing here is part of the library API.

pub mod args;
pub mod browse;
pub mod logging;
pub mod render;
