//! Partial application for user functions
//!
//! The helpers in this crate ship their own `*_with` builders. The functions
//! here cover arbitrary two- and three-argument functions: fix the leading
//! arguments now, supply the rest later.
//!
//! # Examples
//!
//! ```
//! use flames::core::partial::{curry2, partial2};
//!
//! let add = |a: i32, b: i32| a + b;
//! let add_ten = partial2(add, 10);
//! assert_eq!(add_ten(5), 15);
//!
//! let curried = curry2(add);
//! assert_eq!(curried(1)(2), 3);
//! ```

/// Fix the first argument of a two-argument function
pub fn partial2<A, B, R, F>(f: F, a: A) -> impl Fn(B) -> R
where
    A: Clone,
    F: Fn(A, B) -> R,
{
    move |b: B| f(a.clone(), b)
}

/// Fix the first two arguments of a three-argument function
pub fn partial3<A, B, C, R, F>(f: F, a: A, b: B) -> impl Fn(C) -> R
where
    A: Clone,
    B: Clone,
    F: Fn(A, B, C) -> R,
{
    move |c: C| f(a.clone(), b.clone(), c)
}

/// Turn `f(a, b)` into `f(a)(b)`
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    A: Clone + 'static,
    B: 'static,
    R: 'static,
    F: Fn(A, B) -> R + Clone + 'static,
{
    move |a: A| Box::new(partial2(f.clone(), a)) as Box<dyn Fn(B) -> R>
}

/// Turn `f(a, b, c)` into `f(a)(b)(c)`
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
    F: Fn(A, B, C) -> R + Clone + 'static,
{
    move |a: A| {
        let f = f.clone();
        Box::new(move |b: B| {
            Box::new(partial3(f.clone(), a.clone(), b)) as Box<dyn Fn(C) -> R>
        }) as Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
    }
}
