//! Seeding run orchestration.

use crate::config::SeederConfig;
use crate::content;
use crate::stats::RunRecorder;
use crate::workflow::tweets::TweetPlan;
use crate::workflow::{accounts, deletion, follows, tweets};
use flocknet_client::SocialApi;
use flocknet_types::{AccountFields, ExecutionStatistics, SeedReport, SeedRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Forward-only progress marker for one seeding run.
///
/// There is no retry and no rollback transition: a failed or skipped stage
/// still moves the run toward `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CreatingAccounts,
    BuildingFollows,
    PopulatingTweets,
    ValidatingDeletionQuota,
    DeletingTweets,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::CreatingAccounts => "creating_accounts",
            Phase::BuildingFollows => "building_follows",
            Phase::PopulatingTweets => "populating_tweets",
            Phase::ValidatingDeletionQuota => "validating_deletion_quota",
            Phase::DeletingTweets => "deleting_tweets",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Orchestrates one bulk-generation run against the platform services.
///
/// Steps execute strictly in sequence because each consumes the success
/// set of the previous one; within a step, items run with the configured
/// concurrency. The RNG is consumed sequentially before items are
/// dispatched, so a fixed seed fixes the generated content and the
/// deletion sample regardless of the concurrency setting.
pub struct Seeder {
    api: Arc<dyn SocialApi>,
    config: SeederConfig,
    rng: ChaCha8Rng,
    cancel: CancellationToken,
}

impl Seeder {
    /// Create a seeder for the given collaborator and configuration.
    pub fn new(api: Arc<dyn SocialApi>, config: SeederConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            api,
            config,
            rng,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that stops the run at the next item boundary when cancelled.
    ///
    /// A cancelled run still returns its partial report; nothing recorded
    /// up to that point is discarded.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Execute the full workflow for `request`.
    ///
    /// Never fails: every item-level and business-rule failure ends up in
    /// the returned report's error list instead of propagating. Callers
    /// are expected to have validated the request shape beforehand.
    pub async fn run(&mut self, request: &SeedRequest) -> SeedReport {
        let concurrency = self.config.concurrency;
        let mut recorder = RunRecorder::start();

        let mut phase = Phase::CreatingAccounts;
        info!(phase = %phase, attempts = request.account_count, "starting seeding run");
        let field_sets: Vec<AccountFields> = (0..request.account_count)
            .map(|_| content::account_fields(&mut self.rng))
            .collect();
        let created_accounts = accounts::create_accounts(
            &self.api,
            field_sets,
            concurrency,
            &self.cancel,
            &mut recorder,
        )
        .await;

        phase = Phase::BuildingFollows;
        let edges = follows::hub_follow_edges(&created_accounts);
        info!(phase = %phase, edges = edges.len(), "building follow graph");
        let created_follows =
            follows::create_follows(&self.api, edges, concurrency, &self.cancel, &mut recorder)
                .await;

        phase = Phase::PopulatingTweets;
        let mut plans =
            Vec::with_capacity(created_accounts.len() * request.tweets_per_account as usize);
        for account in &created_accounts {
            for _ in 0..request.tweets_per_account {
                plans.push(TweetPlan {
                    author: account.clone(),
                    content: content::tweet_body(&mut self.rng),
                });
            }
        }
        info!(phase = %phase, attempts = plans.len(), "populating tweets");
        let (mut index, created_tweets) = tweets::populate_tweets(
            &self.api,
            &created_accounts,
            plans,
            concurrency,
            &self.cancel,
            &mut recorder,
        )
        .await;

        phase = Phase::ValidatingDeletionQuota;
        let users_with_tweets = index.users_with_tweets();
        let users_without_tweets = index.users_without_tweets();
        info!(
            phase = %phase,
            quota = request.deletion_quota,
            users_with_tweets,
            "validating deletion quota"
        );

        let mut deleted_tweets = Vec::new();
        match deletion::check_deletion_quota(request.deletion_quota, users_with_tweets) {
            Ok(()) if request.deletion_quota > 0 && !self.cancel.is_cancelled() => {
                phase = Phase::DeletingTweets;
                let plans = deletion::plan_deletions(
                    &index,
                    request.deletion_quota as usize,
                    &mut self.rng,
                );
                info!(phase = %phase, planned = plans.len(), "deleting tweets");
                deleted_tweets = deletion::delete_tweets(
                    &self.api,
                    plans,
                    concurrency,
                    &self.cancel,
                    &mut recorder,
                    &mut index,
                )
                .await;
            }
            Ok(()) => {}
            Err(violation) => recorder.record_error(violation),
        }

        if self.cancel.is_cancelled() {
            recorder.record_error("run cancelled; remaining attempts were skipped");
        }

        phase = Phase::Done;
        let (elapsed_millis, errors) = recorder.finish();
        info!(
            phase = %phase,
            elapsed_millis,
            errors = errors.len(),
            "seeding run complete"
        );

        let stats = ExecutionStatistics {
            users_created: created_accounts.len(),
            follows_created: created_follows.len(),
            tweets_created: created_tweets.len(),
            tweets_deleted: deleted_tweets.len(),
            users_with_tweets,
            users_without_tweets,
            elapsed_millis,
            errors,
        };

        SeedReport {
            created_accounts,
            created_follows,
            created_tweets,
            deleted_tweets,
            stats,
        }
    }
}
