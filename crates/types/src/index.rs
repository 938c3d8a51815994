//! Per-run index of tweets created for each account.

use crate::{AccountId, TweetId};
use indexmap::IndexMap;

/// Maps each account created during a run to the tweets successfully
/// created for it, in creation order.
///
/// The index is built incrementally during content population and read by
/// the deletion-quota check and the deletion step. Accounts whose tweet
/// creations all failed still get an empty entry so the run statistics can
/// count them. Entries keep insertion order, which keeps eligible-account
/// sampling reproducible for a fixed RNG seed.
#[derive(Debug, Clone, Default)]
pub struct AccountTweetIndex {
    entries: IndexMap<AccountId, Vec<TweetId>>,
}

impl AccountTweetIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `account` has an entry, creating an empty one if needed.
    pub fn ensure_account(&mut self, account: &AccountId) {
        self.entries.entry(account.clone()).or_default();
    }

    /// Record a successfully created tweet for `account`.
    pub fn record_tweet(&mut self, account: &AccountId, tweet: TweetId) {
        self.entries.entry(account.clone()).or_default().push(tweet);
    }

    /// Tweets currently held by `account`, in creation order.
    pub fn tweets_for(&self, account: &AccountId) -> &[TweetId] {
        self.entries.get(account).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove one tweet from `account`'s entry.
    ///
    /// Returns false when the account or tweet is unknown.
    pub fn remove_tweet(&mut self, account: &AccountId, tweet: &TweetId) -> bool {
        let Some(tweets) = self.entries.get_mut(account) else {
            return false;
        };
        let Some(pos) = tweets.iter().position(|t| t == tweet) else {
            return false;
        };
        tweets.remove(pos);
        true
    }

    /// Accounts holding at least one tweet, in insertion order.
    pub fn eligible_accounts(&self) -> Vec<AccountId> {
        self.entries
            .iter()
            .filter(|(_, tweets)| !tweets.is_empty())
            .map(|(account, _)| account.clone())
            .collect()
    }

    /// Number of accounts with at least one tweet.
    pub fn users_with_tweets(&self) -> usize {
        self.entries
            .values()
            .filter(|tweets| !tweets.is_empty())
            .count()
    }

    /// Number of accounts with an entry but no tweets.
    pub fn users_without_tweets(&self) -> usize {
        self.entries.len() - self.users_with_tweets()
    }

    /// Number of accounts tracked.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total tweets held across all accounts.
    pub fn total_tweets(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(n: u32) -> AccountId {
        AccountId::new(format!("user-{n}"))
    }

    fn tweet(n: u32) -> TweetId {
        TweetId::new(format!("tweet-{n}"))
    }

    #[test]
    fn test_empty_entries_count_as_users_without_tweets() {
        let mut index = AccountTweetIndex::new();
        index.ensure_account(&account(1));
        index.ensure_account(&account(2));
        index.record_tweet(&account(2), tweet(1));

        assert_eq!(index.len(), 2);
        assert_eq!(index.users_with_tweets(), 1);
        assert_eq!(index.users_without_tweets(), 1);
        assert_eq!(index.eligible_accounts(), vec![account(2)]);
    }

    #[test]
    fn test_accounting_splits_sum_to_len() {
        let mut index = AccountTweetIndex::new();
        for n in 0..10 {
            index.ensure_account(&account(n));
            if n % 3 != 0 {
                index.record_tweet(&account(n), tweet(n));
            }
        }
        assert_eq!(
            index.users_with_tweets() + index.users_without_tweets(),
            index.len()
        );
    }

    #[test]
    fn test_record_keeps_creation_order() {
        let mut index = AccountTweetIndex::new();
        index.record_tweet(&account(1), tweet(10));
        index.record_tweet(&account(1), tweet(11));
        index.record_tweet(&account(1), tweet(12));

        assert_eq!(
            index.tweets_for(&account(1)),
            &[tweet(10), tweet(11), tweet(12)]
        );
    }

    #[test]
    fn test_remove_tweet() {
        let mut index = AccountTweetIndex::new();
        index.record_tweet(&account(1), tweet(10));
        index.record_tweet(&account(1), tweet(11));

        assert!(index.remove_tweet(&account(1), &tweet(10)));
        assert_eq!(index.tweets_for(&account(1)), &[tweet(11)]);

        // Unknown tweet or account is a no-op.
        assert!(!index.remove_tweet(&account(1), &tweet(10)));
        assert!(!index.remove_tweet(&account(9), &tweet(11)));
    }

    #[test]
    fn test_eligible_accounts_keep_insertion_order() {
        let mut index = AccountTweetIndex::new();
        for n in [3, 1, 2] {
            index.record_tweet(&account(n), tweet(n));
        }
        assert_eq!(
            index.eligible_accounts(),
            vec![account(3), account(1), account(2)]
        );
    }
}
