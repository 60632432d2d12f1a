//! Shallow-copy transforms over keyed records
//!
//! Both helpers borrow their input and return a new record. The copy is
//! shallow in the Rust sense: each value is duplicated with `Clone`, so
//! values held behind `Arc` or `Rc` stay shared between the old and new
//! record. Only the record's own entries exist; there is no inherited
//! layer to flatten.
//!
//! # Examples
//!
//! ```
//! use flames::core::records::{assoc_trans, rename_prop};
//! use serde_json::{json, Map, Value};
//!
//! let record: Map<String, Value> = json!({"tree": "sunflower"})
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//! let renamed = rename_prop("tree", "plant", &record);
//! assert_eq!(Value::Object(renamed), json!({"plant": "sunflower"}));
//! assert_eq!(Value::Object(record.clone()), json!({"tree": "sunflower"}));
//!
//! let tagged = assoc_trans("size", |r: &Map<String, Value>| json!(r.len()), &record);
//! assert_eq!(tagged["size"], json!(1));
//! ```

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A keyed mapping that can be copied and edited entry by entry
pub trait Record: Clone {
    type Key: PartialEq;
    type Value: Clone;

    fn get_field(&self, key: &Self::Key) -> Option<&Self::Value>;
    fn set_field(&mut self, key: Self::Key, value: Self::Value);
    fn take_field(&mut self, key: &Self::Key) -> Option<Self::Value>;
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = V;

    fn get_field(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn set_field(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn take_field(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn get_field(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn set_field(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn take_field(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

impl Record for Map<String, Value> {
    type Key = String;
    type Value = Value;

    fn get_field(&self, key: &String) -> Option<&Value> {
        self.get(key)
    }

    fn set_field(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }

    fn take_field(&mut self, key: &String) -> Option<Value> {
        self.remove(key)
    }
}

/// Copy `record`, setting `key` to `transform(record)`
pub fn assoc_trans<R, F>(key: impl Into<R::Key>, transform: F, record: &R) -> R
where
    R: Record,
    F: FnOnce(&R) -> R::Value,
{
    let value = transform(record);
    let mut next = record.clone();
    next.set_field(key.into(), value);
    next
}

/// Partially applied [`assoc_trans`]
pub fn assoc_trans_with<R, F>(key: R::Key, transform: F) -> impl Fn(&R) -> R
where
    R: Record,
    R::Key: Clone,
    F: Fn(&R) -> R::Value,
{
    move |record: &R| assoc_trans(key.clone(), &transform, record)
}

/// Copy `record` with the value at `old_key` moved to `new_key`
///
/// An existing entry at `new_key` is overwritten. When `old_key` is absent
/// the copy is returned unchanged: no entry is created for `new_key` and an
/// existing one is left alone.
pub fn rename_prop<R>(old_key: impl Into<R::Key>, new_key: impl Into<R::Key>, record: &R) -> R
where
    R: Record,
{
    let old_key = old_key.into();
    let new_key = new_key.into();

    if old_key == new_key {
        return record.clone();
    }

    match record.get_field(&old_key) {
        Some(value) => {
            let value = value.clone();
            let mut renamed = assoc_trans(new_key, |_| value, record);
            renamed.take_field(&old_key);
            renamed
        }
        None => record.clone(),
    }
}

/// Partially applied [`rename_prop`]
pub fn rename_prop_with<R>(old_key: R::Key, new_key: R::Key) -> impl Fn(&R) -> R
where
    R: Record,
    R::Key: Clone,
{
    move |record: &R| rename_prop(old_key.clone(), new_key.clone(), record)
}
