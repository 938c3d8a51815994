//! Follow graph construction.
//!
//! The split is positional and deterministic: same account ordering, same
//! edges. Randomness lives only in the deletion sampler.

use crate::stats::RunRecorder;
use crate::workflow::dispatch;
use flocknet_client::SocialApi;
use flocknet_types::{AccountId, FollowEdge, FollowId};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Derive the follow edges for a batch of created accounts.
///
/// The first account is the hub. Of the remaining accounts, the first
/// `floor(n/2)` become targets the hub follows and the rest follow the hub;
/// an odd remainder puts the extra account in the followers-of-hub group.
/// Fewer than two accounts yields no edges, which is not a failure.
pub fn hub_follow_edges(accounts: &[AccountId]) -> Vec<FollowEdge> {
    if accounts.len() < 2 {
        return Vec::new();
    }

    let hub = &accounts[0];
    let rest = &accounts[1..];
    let hub_follows = rest.len() / 2;

    let mut edges = Vec::with_capacity(rest.len());
    for target in &rest[..hub_follows] {
        edges.push(FollowEdge {
            follower: hub.clone(),
            following: target.clone(),
        });
    }
    for follower in &rest[hub_follows..] {
        edges.push(FollowEdge {
            follower: follower.clone(),
            following: hub.clone(),
        });
    }
    edges
}

/// Create the derived follow edges, isolating failures per edge.
///
/// Returns the successfully created follow identifiers in attempt order.
pub async fn create_follows(
    api: &Arc<dyn SocialApi>,
    edges: Vec<FollowEdge>,
    concurrency: usize,
    cancel: &CancellationToken,
    recorder: &mut RunRecorder,
) -> Vec<FollowId> {
    let labels: Vec<String> = edges.iter().map(ToString::to_string).collect();

    let outcomes = dispatch(edges, concurrency, cancel, |edge| {
        let api = Arc::clone(api);
        async move { api.create_follow(&edge.follower, &edge.following).await }
    })
    .await;

    let mut created = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Some(Ok(id)) => {
                recorder.record_latency(outcome.latency);
                debug!(follow = %id, edge = %labels[outcome.slot], "follow created");
                created.push(id);
            }
            Some(Err(error)) => {
                recorder.record_latency(outcome.latency);
                recorder.record_error(format!(
                    "follow creation failed for {}: {}",
                    labels[outcome.slot], error
                ));
            }
            None => {}
        }
    }
    created
}
