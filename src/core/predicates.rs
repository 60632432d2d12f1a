//! Predicate complements and list checks
//!
//! Emptiness, nil-ness and truthiness are expressed as traits so that the
//! same predicate works over plain Rust collections and over dynamic
//! `serde_json::Value` data.
//!
//! # Examples
//!
//! ```
//! use flames::core::predicates::{all_equal, compact, not_empty, not_nil};
//! use serde_json::{json, Value};
//!
//! assert!(not_empty(&vec![1, 2, 3]));
//! assert!(!not_empty(""));
//! assert!(not_empty(&Value::Null));
//! assert!(!not_nil(&None::<u8>));
//! assert!(all_equal(&1, &[1, 1, 1]));
//!
//! let items = vec![json!(0), json!(1), json!(false), json!(2), json!(""), json!(3), json!([]), json!({})];
//! assert_eq!(compact(&items), vec![json!(1), json!(2), json!(3)]);
//! ```

use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Types that have a canonical empty form
pub trait Emptiness {
    /// Returns `true` if the value is its type's empty value
    fn is_empty_value(&self) -> bool;
}

/// Types that can represent "no value"
pub trait Nil {
    fn is_nil(&self) -> bool;
}

/// Truthiness following the usual dynamic-language rules
///
/// `false`, zero, `NaN`, the empty string and nil values are falsy;
/// everything else, including empty arrays and objects, is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Nil + ?Sized> Nil for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Emptiness for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for Map<String, Value> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Null | Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

/// `None` has no empty form, so it counts as non-empty
impl<T: Emptiness> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_some_and(Emptiness::is_empty_value)
    }
}

impl<T> Nil for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl Nil for Value {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

macro_rules! scalar_predicates {
    (int: $($int:ty),*; float: $($float:ty),*) => {
        $(
            impl Emptiness for $int {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }

            impl Truthy for $int {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
        $(
            impl Emptiness for $float {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }

            impl Truthy for $float {
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

scalar_predicates!(
    int: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize;
    float: f32, f64
);

impl Emptiness for bool {
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl Emptiness for char {
    fn is_empty_value(&self) -> bool {
        false
    }
}

/// Complement of emptiness: `false` only for the type's empty value
pub fn not_empty<T: Emptiness + ?Sized>(value: &T) -> bool {
    !value.is_empty_value()
}

/// Complement of nil-ness: `false` only for `None` / `null`
pub fn not_nil<T: Nil + ?Sized>(value: &T) -> bool {
    !value.is_nil()
}

/// Returns `true` if every item equals `target`; vacuously true when empty
pub fn all_equal<'a, T>(target: &T, items: impl IntoIterator<Item = &'a T>) -> bool
where
    T: PartialEq + 'a,
{
    items.into_iter().all(|item| item == target)
}

/// Partially applied [`all_equal`]
pub fn all_equal_to<T: PartialEq>(target: T) -> impl Fn(&[T]) -> bool {
    move |items: &[T]| all_equal(&target, items)
}

/// Returns `true` if every item equals `true`
///
/// Works for `bool` as well as `serde_json::Value`, where only
/// `Value::Bool(true)` counts.
pub fn all_true<'a, T>(items: impl IntoIterator<Item = &'a T>) -> bool
where
    T: PartialEq<bool> + 'a,
{
    items.into_iter().all(|item| PartialEq::<bool>::eq(item, &true))
}

/// Copy of `items` keeping only the elements that are truthy and not empty
pub fn compact<T>(items: &[T]) -> Vec<T>
where
    T: Truthy + Emptiness + Clone,
{
    items
        .iter()
        .filter(|item| item.is_truthy() && not_empty(*item))
        .cloned()
        .collect()
}
