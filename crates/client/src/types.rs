//! Wire types for the Flocknet service APIs.

use serde::{Deserialize, Serialize};

/// Request to create an account.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountRequest {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub password: String,
}

/// Response from account creation.
#[derive(Debug, Deserialize)]
pub struct CreateAccountResponse {
    pub id: String,
}

/// Request to create a follow relationship.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFollowRequest {
    pub follower_id: String,
    pub following_id: String,
}

/// Response from follow creation.
#[derive(Debug, Deserialize)]
pub struct CreateFollowResponse {
    pub id: String,
}

/// Request to create a tweet.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTweetRequest {
    pub content: String,
}

/// Response from tweet creation.
#[derive(Debug, Deserialize)]
pub struct CreateTweetResponse {
    pub id: String,
}

/// Error body the services attach to rejections.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_request_shape() {
        let request = CreateAccountRequest {
            username: "wiredfinch0042".into(),
            email: "wiredfinch0042@flock.dev".into(),
            display_name: "Wired Finch".into(),
            password: "hunter2hunter222".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "wiredfinch0042");
        assert_eq!(json["display_name"], "Wired Finch");
    }

    #[test]
    fn test_responses_decode_from_id_body() {
        let account: CreateAccountResponse = serde_json::from_str(r#"{"id":"u-1"}"#).unwrap();
        assert_eq!(account.id, "u-1");

        let tweet: CreateTweetResponse = serde_json::from_str(r#"{"id":"t-9"}"#).unwrap();
        assert_eq!(tweet.id, "t-9");
    }

    #[test]
    fn test_error_response_decodes() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error":"username already taken"}"#).unwrap();
        assert_eq!(body.error, "username already taken");
    }
}
