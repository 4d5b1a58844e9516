//! Testris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the runner, the
//! integration tests and the benchmarks share a single import path:
//! `testris::{core, input, term, types}`.

pub use testris_core as core;
pub use testris_input as input;
pub use testris_term as term;
pub use testris_types as types;
