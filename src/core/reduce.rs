//! Folding without an explicit seed

use crate::error::{FlamesError, Result};

/// Fold `items` using the first element as the initial accumulator
///
/// Fails with [`FlamesError::EmptyInput`] when there is nothing to fold.
pub fn seedless_reduce<T, I, F>(f: F, items: I) -> Result<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    items
        .into_iter()
        .reduce(f)
        .ok_or_else(|| FlamesError::empty_input("seedless_reduce"))
}

/// Partially applied [`seedless_reduce`]
pub fn seedless_reduce_with<T, I, F>(f: F) -> impl Fn(I) -> Result<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(T, T) -> T,
{
    move |items: I| seedless_reduce(&f, items)
}
