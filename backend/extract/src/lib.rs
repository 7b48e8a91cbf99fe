//! The scan pipeline's trusted boundary: turn an arbitrary text blob from a
//! vision model into a well-typed record, or a precisely classified failure.
//!
//! Two stages, both pure and stateless:
//! - [`extract`] strips at most one wrapping Markdown fence and parses the
//!   remainder as strict JSON.
//! - [`validate`] checks a parsed document against a [`DocKind`] shape and
//!   either maps it into a typed record or reports every violation found.

pub mod extract;
pub mod validate;

pub use extract::extract;
pub use validate::validate;

pub use harvest_core::DocKind;
