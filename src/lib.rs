//! Mystery Number (workspace facade crate).
//!
//! This package exposes the `mystery_number::{core,engine,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use mystery_number_core as core;
pub use mystery_number_engine as engine;
pub use mystery_number_input as input;
pub use mystery_number_term as term;
pub use mystery_number_types as types;
