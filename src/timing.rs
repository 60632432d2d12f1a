//! Timer-based helpers
//!
//! Both helpers use the tokio timer and therefore need to be awaited inside a
//! tokio runtime with the time driver enabled.

use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Sleep};

/// Resolve with `()` after at least `ms` milliseconds
pub fn wait(ms: u64) -> Sleep {
    sleep(Duration::from_millis(ms))
}

/// After `ms` milliseconds, call `f(data)` and resolve with its result
pub fn delay<F, A, T>(ms: u64, f: F, data: A) -> impl Future<Output = T>
where
    F: FnOnce(A) -> T,
{
    async move {
        wait(ms).await;
        f(data)
    }
}

/// Like [`delay`] for a function that itself returns a future
pub fn delay_async<F, A, Fut>(ms: u64, f: F, data: A) -> impl Future<Output = Fut::Output>
where
    F: FnOnce(A) -> Fut,
    Fut: Future,
{
    async move {
        wait(ms).await;
        f(data).await
    }
}

/// Partially applied [`delay`]
pub fn delay_with<F, A, T>(ms: u64, f: F) -> impl Fn(A) -> BoxFuture<'static, T>
where
    F: Fn(A) -> T + Clone + Send + 'static,
    A: Send + 'static,
    T: Send + 'static,
{
    move |data: A| delay(ms, f.clone(), data).boxed()
}
