//! The workflow steps of a seeding run.
//!
//! Each step consumes the accumulated successes of the previous ones and
//! isolates failures per item: a failed collaborator call becomes one
//! recorded error and the step moves on. Steps dispatch their items with
//! bounded concurrency; outcomes carry their attempt slot so the merged
//! success lists keep attempt order regardless of completion order.

pub mod accounts;
pub mod deletion;
pub mod follows;
pub mod tweets;

use flocknet_client::ClientError;
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Outcome of one attempted item within a step.
pub(crate) struct ItemOutcome<T> {
    /// Position in the step's attempt list.
    pub slot: usize,
    /// `None` when the run was cancelled before the item was issued.
    pub result: Option<Result<T, String>>,
    /// Time spent in the collaborator call.
    pub latency: Duration,
}

/// Run `op` over `items` with bounded concurrency.
///
/// Cancellation is checked as each item is pulled from the queue; items
/// not yet issued when the token fires come back with no result. Outcomes
/// are sorted back into attempt order before returning, and every item
/// appears exactly once.
pub(crate) async fn dispatch<I, T, F, Fut>(
    items: Vec<I>,
    concurrency: usize,
    cancel: &CancellationToken,
    op: F,
) -> Vec<ItemOutcome<T>>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut outcomes: Vec<ItemOutcome<T>> = stream::iter(items.into_iter().enumerate())
        .map(|(slot, item)| {
            let fut = (!cancel.is_cancelled()).then(|| op(item));
            async move {
                let Some(fut) = fut else {
                    return ItemOutcome {
                        slot,
                        result: None,
                        latency: Duration::ZERO,
                    };
                };
                let started = Instant::now();
                let result = fut.await;
                ItemOutcome {
                    slot,
                    result: Some(result.map_err(|error| error.to_string())),
                    latency: started.elapsed(),
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    outcomes.sort_by_key(|outcome| outcome.slot);
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dispatch_preserves_attempt_order() {
        let cancel = CancellationToken::new();
        let outcomes = dispatch(vec![10u32, 20, 30, 40], 4, &cancel, |n| async move {
            // Later items finish first; slots must still come back sorted.
            tokio::time::sleep(Duration::from_millis(u64::from(50 - n))).await;
            Ok::<_, ClientError>(n)
        })
        .await;

        let values: Vec<u32> = outcomes
            .iter()
            .map(|outcome| outcome.result.as_ref().unwrap().as_ref().unwrap())
            .copied()
            .collect();
        assert_eq!(values, vec![10, 20, 30, 40]);
    }

    #[tokio::test]
    async fn test_dispatch_records_failures_per_item() {
        let cancel = CancellationToken::new();
        let outcomes = dispatch(vec![1u32, 2, 3], 1, &cancel, |n| async move {
            if n == 2 {
                Err(ClientError::rejected(503, "boom"))
            } else {
                Ok(n)
            }
        })
        .await;

        assert!(matches!(outcomes[0].result, Some(Ok(1))));
        assert!(matches!(outcomes[1].result, Some(Err(_))));
        assert!(matches!(outcomes[2].result, Some(Ok(3))));
    }

    #[tokio::test]
    async fn test_dispatch_skips_items_after_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let outcomes = dispatch(vec![1u32, 2], 2, &cancel, |n| async move {
            Ok::<_, ClientError>(n)
        })
        .await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|outcome| outcome.result.is_none()));
    }
}
