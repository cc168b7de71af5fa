//! Truth-value evaluation of molecules against the atom collection.
//!
//! # Invariants
//! - Evaluation is pure and reads atoms only; molecule references to other
//!   molecules resolve like missing atoms.
//! - A missing reference reads as `false`.

pub mod evaluator;
