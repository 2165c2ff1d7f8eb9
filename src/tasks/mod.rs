//! Async mapping combinators
//!
//! Two ways to run an async operation over a list of inputs: strictly one
//! after another ([`queue`]), or all at once ([`parallel`]).

use futures::future::join_all;
use log::debug;
use std::future::Future;
use std::time::Duration;

/// Run `f` over `items` one at a time, in order.
///
/// Each call is awaited before the next one is created, so a failure stops
/// every later item from starting.
pub async fn queue<I, T, R, E, F, Fut>(items: I, mut f: F) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let mut results = Vec::new();
    for (position, item) in items.into_iter().enumerate() {
        match f(item).await {
            Ok(value) => results.push(value),
            Err(err) => {
                debug!("queue stopped at item {}", position);
                return Err(err);
            }
        }
    }
    Ok(results)
}

/// Run `f` over every item concurrently.
///
/// All calls are created up front and polled to completion; one failure does
/// not cancel the others. Results come back in input order, or the error of
/// the lowest-index failure.
pub async fn parallel<I, T, R, E, F, Fut>(items: I, f: F) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let outcomes = join_all(items.into_iter().map(f)).await;
    let failures = outcomes.iter().filter(|o| o.is_err()).count();
    if failures > 0 {
        debug!("parallel run finished with {} of {} failed", failures, outcomes.len());
    }
    outcomes.into_iter().collect()
}

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
