//! Deletion-quota validation and the random deletion step.
//!
//! Unlike the positional follow split, the deletion sample is genuinely
//! random: quota-many distinct accounts drawn uniformly from those holding
//! at least one tweet. A seeded RNG makes the sample reproducible in tests.

use crate::stats::RunRecorder;
use crate::workflow::dispatch;
use flocknet_client::SocialApi;
use flocknet_types::{AccountId, AccountTweetIndex, TweetId};
use rand::Rng;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Check the deletion quota against the accounts holding tweets.
///
/// A zero quota passes trivially. A violation is returned as the single
/// error message to record; it does not abort the run, it only skips the
/// deletion step.
pub fn check_deletion_quota(quota: u32, users_with_tweets: usize) -> Result<(), String> {
    if quota as usize <= users_with_tweets {
        Ok(())
    } else {
        Err(format!(
            "deletion quota {quota} exceeds the {users_with_tweets} accounts holding tweets; \
             skipping deletion"
        ))
    }
}

/// One planned deletion: a sampled account and the tweet to remove.
#[derive(Debug, Clone)]
pub struct DeletionPlan {
    pub account: AccountId,
    pub tweet: TweetId,
}

/// Sample `quota` distinct eligible accounts uniformly, without
/// replacement, and pick one tweet from each.
///
/// If fewer eligible accounts exist than requested the sample covers the
/// accounts actually available.
pub fn plan_deletions(
    index: &AccountTweetIndex,
    quota: usize,
    rng: &mut impl Rng,
) -> Vec<DeletionPlan> {
    let eligible = index.eligible_accounts();
    let take = quota.min(eligible.len());

    rand::seq::index::sample(&mut *rng, eligible.len(), take)
        .into_iter()
        .map(|position| {
            let account = eligible[position].clone();
            let tweets = index.tweets_for(&account);
            let tweet = tweets[rng.gen_range(0..tweets.len())].clone();
            DeletionPlan { account, tweet }
        })
        .collect()
}

/// Delete one tweet from each planned account, isolating failures.
///
/// Successful deletions are removed from the index and returned in attempt
/// order.
pub async fn delete_tweets(
    api: &Arc<dyn SocialApi>,
    plans: Vec<DeletionPlan>,
    concurrency: usize,
    cancel: &CancellationToken,
    recorder: &mut RunRecorder,
    index: &mut AccountTweetIndex,
) -> Vec<TweetId> {
    let planned: Vec<(AccountId, TweetId)> = plans
        .iter()
        .map(|plan| (plan.account.clone(), plan.tweet.clone()))
        .collect();

    let outcomes = dispatch(plans, concurrency, cancel, |plan| {
        let api = Arc::clone(api);
        async move { api.delete_tweet(&plan.tweet, &plan.account).await }
    })
    .await;

    let mut deleted = Vec::new();
    for outcome in outcomes {
        let (account, tweet) = &planned[outcome.slot];
        match outcome.result {
            Some(Ok(())) => {
                recorder.record_latency(outcome.latency);
                debug!(tweet = %tweet, account = %account, "tweet deleted");
                index.remove_tweet(account, tweet);
                deleted.push(tweet.clone());
            }
            Some(Err(error)) => {
                recorder.record_latency(outcome.latency);
                recorder.record_error(format!(
                    "tweet deletion failed for {tweet} (account {account}): {error}"
                ));
            }
            None => {}
        }
    }
    deleted
}
