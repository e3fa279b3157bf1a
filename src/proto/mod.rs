//! Protocol message definitions and helpers.
//!
//! [`generation`] holds the wire schema; [`ext`] adds typed accessors over
//! the raw prost representation (enum fields are `i32` on the wire) and
//! [`validation`] checks cross-field invariants the encoding cannot express.

pub mod ext;
pub mod generation;
pub mod tensors;
pub mod validation;

pub use generation::*;
pub use tensors::{Dtype, Tensor};
