//! The upload–configure–submit–render workflow core.
//!
//! Everything in here is target-independent: the state machine that owns the
//! shared state, the upload validator, the CSV header parser, the response
//! interpreter, and the export renderer. The frontend crate wires these to
//! the browser (file handles, fetch, DOM) but contains no workflow decisions
//! of its own.

pub mod columns;
pub mod error;
pub mod export;
pub mod interpret;
pub mod machine;
pub mod validate;
