//! Sequential and concurrent mapping over futures
//!
//! Most combinators here are lazy: nothing runs until the returned future is
//! awaited. "Concurrent" means every call is started within the same poll
//! loop without waiting on the others; there is no parallel execution unless
//! the caller spawns. [`map_to_sequential`] is the exception: it spawns its
//! steps on the Tokio runtime so the chain makes progress on its own.
//!
//! Errors produced by the mapped function are forwarded untouched. The
//! aggregates fail with the first error they observe.
//!
//! # Examples
//!
//! ```
//! use flames::concurrent::{map_async, map_to_sequential, wait_all};
//!
//! # tokio_test::block_on(async {
//! let doubled = map_async(|n: u32| async move { Ok::<_, String>(n * 2) }, vec![1, 2, 3]).await;
//! assert_eq!(doubled, Ok(vec![2, 4, 6]));
//!
//! let handles = map_to_sequential(|n: u32| async move { Ok::<_, String>(n + 1) }, vec![1, 2]);
//! assert_eq!(wait_all(handles).await, Ok(vec![2, 3]));
//! # });
//! ```

use crate::config::Parallelism;
use futures::future::{
    try_join_all, AndThen, BoxFuture, FutureExt, MapOk, Shared, TryFuture, TryFutureExt,
    TryJoinAll,
};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;
use std::panic;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// A cloneable handle to one step of a sequential chain
///
/// Awaiting a handle any number of times yields a clone of the step's
/// result. The mapped function runs at most once per step.
pub type SequentialHandle<T, E> = Shared<BoxFuture<'static, Result<T, E>>>;

/// Map `f` over `items` so that each call starts only after the previous one settled
///
/// Returns one handle per element, in input order. Every step is spawned on
/// the current Tokio runtime right away and waits for the settlement of the
/// step before it, so the chain runs whether or not the handles are awaited.
/// When a step fails, every later handle fails with that same error without
/// calling `f`.
///
/// Awaiting any handle only waits on that one step's task, so chains of any
/// length can be awaited from the last handle.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime. A panic inside `f` resurfaces
/// wherever the affected handles are awaited.
pub fn map_to_sequential<I, F, Fut, T, E>(f: F, items: I) -> Vec<SequentialHandle<T, E>>
where
    I: IntoIterator,
    I::Item: Send + 'static,
    F: Fn(I::Item) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    let f = Arc::new(f);

    items
        .into_iter()
        .enumerate()
        .fold(Vec::new(), |mut handles, (index, item)| {
            let previous: Option<SequentialHandle<T, E>> = handles.last().cloned();
            let f = Arc::clone(&f);

            let step = tokio::spawn(async move {
                if let Some(previous) = previous {
                    if let Err(err) = previous.await {
                        trace!(index, "Skipping sequential step after upstream failure");
                        return Err(err);
                    }
                }
                trace!(index, "Running sequential step");
                f(item).await
            });

            handles.push(settled(step).boxed().shared());
            handles
        })
}

async fn settled<T>(step: JoinHandle<T>) -> T {
    match step.await {
        Ok(outcome) => outcome,
        Err(err) => panic::resume_unwind(err.into_panic()),
    }
}

/// Apply `f` to every item concurrently and collect the results in input order
///
/// Fails fast with the first error.
pub fn map_async<I, F, Fut, T, E>(f: F, items: I) -> impl Future<Output = Result<Vec<T>, E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    try_join_all(items.into_iter().map(f))
}

/// Partially applied [`map_async`]
pub fn apply_async<I, F, Fut, T, E>(f: F) -> impl Fn(I) -> TryJoinAll<Fut>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut + Clone,
    Fut: Future<Output = Result<T, E>>,
{
    move |items: I| try_join_all(items.into_iter().map(f.clone()))
}

/// Like [`map_async`] with a bound on how many calls are in flight
///
/// Results keep input order. Fails fast: the first error is returned as soon
/// as it is produced, and calls still in flight are dropped.
pub async fn map_async_limited<I, F, Fut, T, E>(
    mut f: F,
    items: I,
    parallelism: Parallelism,
) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match parallelism.limit() {
        None => map_async(f, items).await,
        Some(limit) => {
            debug!(limit, "Mapping with bounded concurrency");
            let mut indexed: Vec<(usize, T)> = stream::iter(items.into_iter().enumerate())
                .map(|(index, item)| f(item).map_ok(move |value| (index, value)))
                .buffer_unordered(limit)
                .try_collect()
                .await?;

            indexed.sort_unstable_by_key(|(index, _)| *index);
            Ok(indexed.into_iter().map(|(_, value)| value).collect())
        }
    }
}

/// Wait for every future, failing fast with the first error
pub fn wait_all<I>(handles: I) -> TryJoinAll<I::Item>
where
    I: IntoIterator,
    I::Item: TryFuture,
{
    try_join_all(handles)
}

/// Alias of [`wait_all`]
pub fn promise_all<I>(handles: I) -> TryJoinAll<I::Item>
where
    I: IntoIterator,
    I::Item: TryFuture,
{
    wait_all(handles)
}

/// Map the success value of `handle` with `f`; errors pass through untouched
pub fn then<Fut, F, U>(f: F, handle: Fut) -> MapOk<Fut, F>
where
    Fut: TryFuture,
    F: FnOnce(Fut::Ok) -> U,
{
    handle.map_ok(f)
}

/// Partially applied [`then`]
pub fn then_with<Fut, F, U>(f: F) -> impl Fn(Fut) -> MapOk<Fut, F>
where
    Fut: TryFuture,
    F: FnOnce(Fut::Ok) -> U + Clone,
{
    move |handle: Fut| then(f.clone(), handle)
}

/// Chain an asynchronous step after `handle`; errors pass through untouched
///
/// `f` only runs when `handle` succeeds, and its future's outcome becomes the
/// outcome of the chain.
pub fn then_async<Fut, F, Next>(f: F, handle: Fut) -> AndThen<Fut, Next, F>
where
    Fut: TryFuture,
    F: FnOnce(Fut::Ok) -> Next,
    Next: TryFuture<Error = Fut::Error>,
{
    handle.and_then(f)
}

/// Partially applied [`then_async`]
pub fn then_async_with<Fut, F, Next>(f: F) -> impl Fn(Fut) -> AndThen<Fut, Next, F>
where
    Fut: TryFuture,
    F: FnOnce(Fut::Ok) -> Next + Clone,
    Next: TryFuture<Error = Fut::Error>,
{
    move |handle: Fut| then_async(f.clone(), handle)
}
