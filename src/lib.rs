//! Pentris (workspace facade crate).
//!
//! This package keeps a single `pentris::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use pentris_core as core;
pub use pentris_types as types;
