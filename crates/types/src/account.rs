//! Account field values handed to the account service.

use serde::{Deserialize, Serialize};

/// Field values for one account-creation attempt.
///
/// Produced by the content generator; every field already satisfies the
/// account service's length and format constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFields {
    /// Unique handle, lowercase alphanumeric.
    pub username: String,
    /// Contact address derived from the handle.
    pub email: String,
    /// Human-readable profile name.
    pub display_name: String,
    /// Plaintext password; hashing is the account service's concern.
    pub password: String,
}
