//! End-to-end workflow tests against the scripted collaborator.

use flocknet_client::mock::ScriptedApi;
use flocknet_client::SocialApi;
use flocknet_seeder::{Seeder, SeederConfig};
use flocknet_types::{SeedReport, SeedRequest};
use std::collections::HashSet;
use std::sync::Arc;

fn seeder_for(api: &Arc<ScriptedApi>, seed: u64) -> Seeder {
    let api: Arc<dyn SocialApi> = Arc::clone(api) as Arc<dyn SocialApi>;
    Seeder::new(api, SeederConfig::default().with_seed(seed))
}

async fn run(api: &Arc<ScriptedApi>, seed: u64, request: SeedRequest) -> SeedReport {
    seeder_for(api, seed).run(&request).await
}

#[tokio::test]
async fn test_happy_path_small_batch() {
    let api = Arc::new(ScriptedApi::succeeding());
    let report = run(&api, 42, SeedRequest::new(4, 1, 0)).await;

    assert_eq!(report.stats.users_created, 4);
    assert_eq!(report.stats.follows_created, 3);
    assert_eq!(report.stats.tweets_created, 4);
    assert_eq!(report.stats.tweets_deleted, 0);
    assert_eq!(report.stats.users_with_tweets, 4);
    assert_eq!(report.stats.users_without_tweets, 0);
    assert!(report.stats.errors.is_empty());

    // Hub split for 4 accounts: the hub follows one, two follow the hub.
    let hub = report.created_accounts[0].clone();
    let follows = api.calls();
    let hub_follows = follows
        .iter()
        .filter(|call| {
            matches!(call, flocknet_client::mock::RecordedCall::CreateFollow { follower, .. } if *follower == hub)
        })
        .count();
    let follows_hub = follows
        .iter()
        .filter(|call| {
            matches!(call, flocknet_client::mock::RecordedCall::CreateFollow { following, .. } if *following == hub)
        })
        .count();
    assert_eq!(hub_follows, 1);
    assert_eq!(follows_hub, 2);
}

#[tokio::test]
async fn test_quota_violation_degrades_instead_of_aborting() {
    let api = Arc::new(ScriptedApi::succeeding());
    let report = run(&api, 42, SeedRequest::new(3, 2, 5)).await;

    // Everything built in the earlier steps survives.
    assert_eq!(report.stats.users_created, 3);
    assert_eq!(report.created_tweets.len(), 6);
    assert_eq!(report.stats.users_with_tweets, 3);

    // Deletion is skipped with exactly one error naming both operands.
    assert_eq!(report.stats.tweets_deleted, 0);
    assert!(report.deleted_tweets.is_empty());
    assert_eq!(report.stats.errors.len(), 1);
    assert!(report.stats.errors[0].contains('5'));
    assert!(report.stats.errors[0].contains('3'));
}

#[tokio::test]
async fn test_deletion_removes_one_tweet_from_distinct_accounts() {
    let api = Arc::new(ScriptedApi::succeeding());
    let report = run(&api, 42, SeedRequest::new(6, 2, 3)).await;

    assert_eq!(report.stats.tweets_deleted, 3);
    assert_eq!(report.deleted_tweets.len(), 3);

    // Each deletion hit a different account.
    let authors: HashSet<_> = api
        .calls()
        .iter()
        .filter_map(|call| match call {
            flocknet_client::mock::RecordedCall::DeleteTweet { author, ok: true, .. } => {
                Some(author.clone())
            }
            _ => None,
        })
        .collect();
    assert_eq!(authors.len(), 3);

    // Deleted ids come from this run's created set.
    let created: HashSet<_> = report.created_tweets.iter().collect();
    for tweet in &report.deleted_tweets {
        assert!(created.contains(tweet));
    }
}

#[tokio::test]
async fn test_attempt_counts_are_fixed_under_failures() {
    let api = Arc::new(ScriptedApi::failing_every(3));
    let report = run(&api, 42, SeedRequest::new(9, 1, 0)).await;

    // Nine creation attempts regardless of failures.
    let account_attempts = api
        .calls()
        .iter()
        .filter(|call| {
            matches!(call, flocknet_client::mock::RecordedCall::CreateAccount { .. })
        })
        .count();
    assert_eq!(account_attempts, 9);
    assert!(report.stats.users_created < 9);
    assert_eq!(
        report.stats.users_with_tweets + report.stats.users_without_tweets,
        report.stats.users_created
    );
}

#[tokio::test]
async fn test_failure_pattern_is_stable_for_a_seed() {
    let first = run(
        &Arc::new(ScriptedApi::failing_every(3)),
        7,
        SeedRequest::new(6, 2, 0),
    )
    .await;
    let second = run(
        &Arc::new(ScriptedApi::failing_every(3)),
        7,
        SeedRequest::new(6, 2, 0),
    )
    .await;

    assert_eq!(first.stats.errors, second.stats.errors);
    assert_eq!(first.stats.users_created, second.stats.users_created);
    assert_eq!(first.stats.tweets_created, second.stats.tweets_created);
}

#[tokio::test]
async fn test_all_failures_still_produce_a_report() {
    let api = Arc::new(ScriptedApi::always_failing());
    let report = run(&api, 42, SeedRequest::new(3, 2, 0)).await;

    assert!(report.created_accounts.is_empty());
    assert!(report.created_follows.is_empty());
    assert!(report.created_tweets.is_empty());
    assert!(report.deleted_tweets.is_empty());
    // One error per account attempt; no accounts means no later attempts.
    assert_eq!(report.stats.errors.len(), 3);
    assert_eq!(report.stats.users_with_tweets, 0);
    assert_eq!(report.stats.users_without_tweets, 0);
}

#[tokio::test]
async fn test_every_reported_id_traces_to_a_recorded_call() {
    let api = Arc::new(ScriptedApi::failing_every(4));
    let report = run(&api, 42, SeedRequest::new(8, 2, 3)).await;

    let accounts: HashSet<_> = api.issued_accounts().into_iter().collect();
    let follows: HashSet<_> = api.issued_follows().into_iter().collect();
    let tweets: HashSet<_> = api.issued_tweets().into_iter().collect();
    let deleted: HashSet<_> = api.deleted_tweets().into_iter().collect();

    assert!(report.created_accounts.iter().all(|id| accounts.contains(id)));
    assert!(report.created_follows.iter().all(|id| follows.contains(id)));
    assert!(report.created_tweets.iter().all(|id| tweets.contains(id)));
    assert!(report.deleted_tweets.iter().all(|id| deleted.contains(id)));
}

#[tokio::test]
async fn test_concurrent_dispatch_matches_sequential_counts() {
    let sequential_api = Arc::new(ScriptedApi::succeeding());
    let sequential = run(&sequential_api, 42, SeedRequest::new(8, 3, 2)).await;

    let concurrent_api = Arc::new(ScriptedApi::succeeding());
    let api: Arc<dyn SocialApi> = Arc::clone(&concurrent_api) as Arc<dyn SocialApi>;
    let mut seeder = Seeder::new(
        api,
        SeederConfig::default().with_seed(42).with_concurrency(4),
    );
    let concurrent = seeder.run(&SeedRequest::new(8, 3, 2)).await;

    assert_eq!(sequential.stats.users_created, concurrent.stats.users_created);
    assert_eq!(sequential.stats.follows_created, concurrent.stats.follows_created);
    assert_eq!(sequential.stats.tweets_created, concurrent.stats.tweets_created);
    assert_eq!(sequential.stats.tweets_deleted, concurrent.stats.tweets_deleted);
    assert!(concurrent.stats.errors.is_empty());
}

#[tokio::test]
async fn test_cancelled_run_returns_partial_report() {
    let api = Arc::new(ScriptedApi::succeeding());
    let mut seeder = seeder_for(&api, 42);
    seeder.cancellation_token().cancel();

    let report = seeder.run(&SeedRequest::new(10, 5, 0)).await;

    assert!(report.created_accounts.is_empty());
    assert!(report.created_tweets.is_empty());
    assert_eq!(api.call_count(), 0);
    assert_eq!(report.stats.errors.len(), 1);
    assert!(report.stats.errors[0].contains("cancelled"));
}

#[tokio::test]
async fn test_failed_deletions_are_recorded_not_fatal() {
    let api = Arc::new(ScriptedApi::failing_deletes());
    let report = run(&api, 42, SeedRequest::new(4, 1, 2)).await;

    assert_eq!(report.stats.users_created, 4);
    assert_eq!(report.stats.tweets_created, 4);
    assert_eq!(report.stats.tweets_deleted, 0);
    // Two planned deletions, both failed and recorded.
    assert_eq!(report.stats.errors.len(), 2);
    assert!(report.stats.errors.iter().all(|e| e.contains("deletion failed")));
}
