//! # Remote API Client
//!
//! One async function per remote operation, over the browser fetch API.
//!
//! Every post operation attaches the session token as a bearer credential.
//! Requests are one-shot: no retry, no queueing, no timeout. Failures are
//! tagged by kind so callers can tell a dead connection from a rejected
//! request.

use gloo_net::http::{Request, Response};
use shared::{Credentials, Post, PostDraft, SigninResponse};
use thiserror::Error;

use crate::utils::constants::API_BASE;

/// Failure kinds for a remote call.
///
/// `Network` is a transport-level failure (no connection, CORS, DNS);
/// `Status` is the server answering with a non-success code; `Body` is a
/// success status whose payload did not decode.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Body(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Reject non-success responses, carrying the status code
fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// POST /api/auth/signin
pub async fn sign_in(credentials: &Credentials) -> ApiResult<SigninResponse> {
    let response = Request::post(&format!("{API_BASE}/api/auth/signin"))
        .json(credentials)
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_success(response)?
        .json::<SigninResponse>()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}

/// POST /api/auth/signup
///
/// The API promises exactly 201 on success and no meaningful body.
pub async fn sign_up(credentials: &Credentials) -> ApiResult<()> {
    let response = Request::post(&format!("{API_BASE}/api/auth/signup"))
        .json(credentials)
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.status() == 201 {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// GET /api/health
///
/// Connectivity probe used after a transport failure; never authenticated.
pub async fn health_check() -> ApiResult<()> {
    let response = Request::get(&format!("{API_BASE}/api/health"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_success(response).map(|_| ())
}

/// POST /api/post
pub async fn create_post(token: &str, draft: &PostDraft) -> ApiResult<Post> {
    let response = Request::post(&format!("{API_BASE}/api/post"))
        .header("Authorization", &bearer(token))
        .json(draft)
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_success(response)?
        .json::<Post>()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}

/// GET /api/post
pub async fn list_posts(token: &str) -> ApiResult<Vec<Post>> {
    let response = Request::get(&format!("{API_BASE}/api/post"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_success(response)?
        .json::<Vec<Post>>()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}

/// GET /api/post/{id}
pub async fn get_post(token: &str, id: &str) -> ApiResult<Post> {
    let response = Request::get(&format!("{API_BASE}/api/post/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_success(response)?
        .json::<Post>()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}

/// PUT /api/post/{id}
pub async fn update_post(token: &str, post: &Post) -> ApiResult<Post> {
    let response = Request::put(&format!("{API_BASE}/api/post/{}", post.id))
        .header("Authorization", &bearer(token))
        .json(post)
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_success(response)?
        .json::<Post>()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}

/// DELETE /api/post/{id}
pub async fn delete_post(token: &str, id: &str) -> ApiResult<()> {
    let response = Request::delete(&format!("{API_BASE}/api/post/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_success(response).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let network = ApiError::Network("connection refused".to_string());
        let rejected = ApiError::Status(401);

        // The two user-facing messages must never read the same
        assert_eq!(network.to_string(), "network error: connection refused");
        assert_eq!(rejected.to_string(), "request failed with status 401");
        assert_ne!(network.to_string(), rejected.to_string());
    }

    #[test]
    fn test_status_error_embeds_code() {
        assert!(ApiError::Status(404).to_string().contains("404"));
    }

    #[test]
    fn test_bearer_header_shape() {
        assert_eq!(bearer("tok"), "Bearer tok");
    }
}
