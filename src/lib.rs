//! # Flames
//!
//! Small functional helpers for everyday Rust code.
//!
//! ## Modules
//!
//! - `core` - Pure helpers: predicates, runtime type tags, record transforms, folds, partial application
//! - `concurrent` - Sequential and concurrent mapping over futures
//! - `timing` - Timer-based `wait` and `delay`
//! - `config` - Concurrency settings
//! - `error` - Error type for the helpers themselves
//! - `logging` - Opt-in `tracing` subscriber setup
pub mod concurrent;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod timing;

#[cfg(test)]
mod property_tests;

pub use concurrent::{
    apply_async, map_async, map_async_limited, map_to_sequential, promise_all, then, then_async,
    then_async_with, then_with, wait_all, SequentialHandle,
};
pub use config::Parallelism;
pub use crate::core::kinds::{
    is_array, is_function, is_map, is_number, is_string, kind_of, Dynamic, Kind, Typed,
};
pub use crate::core::partial::{curry2, curry3, partial2, partial3};
pub use crate::core::predicates::{
    all_equal, all_equal_to, all_true, compact, not_empty, not_nil, Emptiness, Nil, Truthy,
};
pub use crate::core::records::{
    assoc_trans, assoc_trans_with, rename_prop, rename_prop_with, Record,
};
pub use crate::core::reduce::{seedless_reduce, seedless_reduce_with};
pub use error::{FlamesError, Result};
pub use timing::{delay, delay_async, delay_with, wait};
