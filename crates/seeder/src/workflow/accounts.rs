//! Account creation step.

use crate::stats::RunRecorder;
use crate::workflow::dispatch;
use flocknet_client::SocialApi;
use flocknet_types::{AccountFields, AccountId};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Attempt one account creation per field set, isolating failures per slot.
///
/// Returns the successfully created identifiers in attempt order; this
/// list is the universe every later step draws from. The number of
/// attempts always equals the number of field sets handed in.
pub async fn create_accounts(
    api: &Arc<dyn SocialApi>,
    field_sets: Vec<AccountFields>,
    concurrency: usize,
    cancel: &CancellationToken,
    recorder: &mut RunRecorder,
) -> Vec<AccountId> {
    let usernames: Vec<String> = field_sets
        .iter()
        .map(|fields| fields.username.clone())
        .collect();

    let outcomes = dispatch(field_sets, concurrency, cancel, |fields| {
        let api = Arc::clone(api);
        async move { api.create_account(&fields).await }
    })
    .await;

    let mut created = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Some(Ok(id)) => {
                recorder.record_latency(outcome.latency);
                debug!(account = %id, username = %usernames[outcome.slot], "account created");
                created.push(id);
            }
            Some(Err(error)) => {
                recorder.record_latency(outcome.latency);
                recorder.record_error(format!(
                    "account creation failed for '{}': {}",
                    usernames[outcome.slot], error
                ));
            }
            None => {}
        }
    }
    created
}
