//! Settings for the concurrent combinators

use crate::error::{FlamesError, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// How many calls a concurrent mapping may keep in flight
///
/// Deserializes from `true` (unbounded), `false` (one at a time) or a
/// positive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Start every call at once
    #[default]
    Unbounded,
    /// One call at a time, in input order
    Sequential,
    /// At most `n` calls in flight
    Limited(NonZeroUsize),
}

impl Parallelism {
    /// Build a bounded setting, rejecting zero
    pub fn limited(n: usize) -> Result<Self> {
        NonZeroUsize::new(n)
            .map(Self::Limited)
            .ok_or_else(|| FlamesError::invalid_parallelism(n))
    }

    /// Maximum number of calls in flight, `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Sequential => Some(1),
            Self::Limited(n) => Some(n.get()),
        }
    }
}

impl Serialize for Parallelism {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Unbounded => serializer.serialize_bool(true),
            Self::Sequential => serializer.serialize_bool(false),
            Self::Limited(n) => serializer.serialize_u64(n.get() as u64),
        }
    }
}

impl<'de> Deserialize<'de> for Parallelism {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ParallelismValue {
            Flag(bool),
            Count(usize),
        }

        match ParallelismValue::deserialize(deserializer)? {
            ParallelismValue::Flag(true) => Ok(Self::Unbounded),
            ParallelismValue::Flag(false) => Ok(Self::Sequential),
            ParallelismValue::Count(n) => Self::limited(n).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(Parallelism::default(), Parallelism::Unbounded);
        assert_eq!(Parallelism::default().limit(), None);
    }

    #[test]
    fn test_limited_rejects_zero() {
        let err = Parallelism::limited(0).unwrap_err();
        assert_eq!(err, FlamesError::invalid_parallelism(0));
        assert_eq!(Parallelism::limited(4).unwrap().limit(), Some(4));
        assert_eq!(Parallelism::Sequential.limit(), Some(1));
    }

    #[test]
    fn test_deserialize_flags_and_counts() {
        let unbounded: Parallelism = serde_json::from_value(json!(true)).unwrap();
        let sequential: Parallelism = serde_json::from_value(json!(false)).unwrap();
        let limited: Parallelism = serde_json::from_value(json!(3)).unwrap();

        assert_eq!(unbounded, Parallelism::Unbounded);
        assert_eq!(sequential, Parallelism::Sequential);
        assert_eq!(limited, Parallelism::limited(3).unwrap());
    }

    #[test]
    fn test_deserialize_zero_fails() {
        let err = serde_json::from_value::<Parallelism>(json!(0)).unwrap_err();
        assert!(err.to_string().contains("Invalid parallelism"));
    }

    #[test]
    fn test_serialize_round_trips_through_json() {
        let setting = Parallelism::limited(8).unwrap();
        let json = serde_json::to_value(setting).unwrap();
        assert_eq!(json, json!(8));
        assert_eq!(serde_json::to_value(Parallelism::Sequential).unwrap(), json!(false));
    }
}
