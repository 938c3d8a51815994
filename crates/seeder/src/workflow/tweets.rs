//! Content population step.

use crate::stats::RunRecorder;
use crate::workflow::dispatch;
use flocknet_client::SocialApi;
use flocknet_types::{AccountId, AccountTweetIndex, TweetId};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One planned tweet creation.
#[derive(Debug, Clone)]
pub struct TweetPlan {
    /// Author the tweet is created under.
    pub author: AccountId,
    /// Generated body, already within the service's length limits.
    pub content: String,
}

/// Attempt every planned tweet, isolating failures per tweet.
///
/// Returns the populated index and the flat list of created tweet ids in
/// attempt order. Every account in `accounts` gets an index entry, so
/// accounts whose creations all failed still count toward the
/// without-tweets statistic.
pub async fn populate_tweets(
    api: &Arc<dyn SocialApi>,
    accounts: &[AccountId],
    plans: Vec<TweetPlan>,
    concurrency: usize,
    cancel: &CancellationToken,
    recorder: &mut RunRecorder,
) -> (AccountTweetIndex, Vec<TweetId>) {
    let mut index = AccountTweetIndex::new();
    for account in accounts {
        index.ensure_account(account);
    }

    let authors: Vec<AccountId> = plans.iter().map(|plan| plan.author.clone()).collect();

    let outcomes = dispatch(plans, concurrency, cancel, |plan| {
        let api = Arc::clone(api);
        async move { api.create_tweet(&plan.author, &plan.content).await }
    })
    .await;

    let mut created = Vec::new();
    for outcome in outcomes {
        let author = &authors[outcome.slot];
        match outcome.result {
            Some(Ok(id)) => {
                recorder.record_latency(outcome.latency);
                debug!(tweet = %id, author = %author, "tweet created");
                index.record_tweet(author, id.clone());
                created.push(id);
            }
            Some(Err(error)) => {
                recorder.record_latency(outcome.latency);
                recorder.record_error(format!(
                    "tweet creation failed for account {author}: {error}"
                ));
            }
            None => {}
        }
    }
    (index, created)
}
