use serde::{Deserialize, Serialize};

/// Credentials sent for both sign-in and sign-up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Sign-in response body.
///
/// The server may answer 200 without a token; that is a sign-in failure on
/// the client side, not a malformed response, so the field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigninResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signin_response_with_token() {
        let response: SigninResponse =
            serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(response.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_signin_response_without_token() {
        // A 200 body lacking the token must still decode
        let response: SigninResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.token, None);
    }

    #[test]
    fn test_credentials_wire_shape() {
        let request = Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"username":"alice","password":"secret"}"#);
    }
}
