//! Core helpers implemented as pure functions
//!
//! Everything in this module is synchronous and free of I/O. Following the
//! "functional core, imperative shell" pattern, all functions here:
//! - Take inputs and return new outputs
//! - Never mutate their arguments
//! - Are easily testable without a runtime

pub mod kinds;
pub mod partial;
pub mod predicates;
pub mod records;
pub mod reduce;
