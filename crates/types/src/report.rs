//! Run statistics and the final seeding report.

use crate::{AccountId, FollowId, TweetId};
use serde::Serialize;

/// Counts and errors accumulated over one seeding run.
///
/// Append-only while the run executes, read-only once the report is
/// assembled. `errors` keeps the item-level and business-rule failures in
/// the order the steps recorded them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionStatistics {
    /// Accounts successfully created.
    pub users_created: usize,
    /// Follow relationships successfully created.
    pub follows_created: usize,
    /// Tweets successfully created.
    pub tweets_created: usize,
    /// Tweets successfully deleted.
    pub tweets_deleted: usize,
    /// Created accounts that ended the run with at least one tweet.
    pub users_with_tweets: usize,
    /// Created accounts that ended the run with no tweets.
    pub users_without_tweets: usize,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_millis: u64,
    /// Human-readable failure descriptions, in step order.
    pub errors: Vec<String>,
}

/// Final result of one seeding run.
///
/// Success lists hold every identifier returned by a collaborator call that
/// succeeded during the run; nothing is discarded when a later step fails
/// or is skipped.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    /// Accounts created, in attempt order.
    pub created_accounts: Vec<AccountId>,
    /// Follow relationships created, in attempt order.
    pub created_follows: Vec<FollowId>,
    /// Tweets created, in attempt order.
    pub created_tweets: Vec<TweetId>,
    /// Tweets deleted by the random-deletion step.
    pub deleted_tweets: Vec<TweetId>,
    /// Aggregated counts, timing, and errors.
    pub stats: ExecutionStatistics,
}

impl SeedReport {
    /// Print a human-readable summary to stdout.
    pub fn print(&self) {
        println!("=== Seeding Report ===");
        println!("accounts created:     {}", self.stats.users_created);
        println!("follows created:      {}", self.stats.follows_created);
        println!("tweets created:       {}", self.stats.tweets_created);
        println!("tweets deleted:       {}", self.stats.tweets_deleted);
        println!("users with tweets:    {}", self.stats.users_with_tweets);
        println!("users without tweets: {}", self.stats.users_without_tweets);
        println!("elapsed:              {} ms", self.stats.elapsed_millis);
        if self.stats.errors.is_empty() {
            println!("errors:               none");
        } else {
            println!("errors:               {}", self.stats.errors.len());
            for error in &self.stats.errors {
                println!("  - {error}");
            }
        }
    }
}
