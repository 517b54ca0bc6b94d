//! REST adapter for the complaint service.
//!
//! | Operation | Route |
//! |-----------|-------|
//! | fetch_complaint | `GET complaints/{id}` |
//! | fetch_candidates | `GET complaints/{id}/replies` |
//! | fetch_review_points | `GET complaints/{id}/reply-summary` |
//! | save_review_points | `POST complaints/{id}/reply-summary` |
//! | generate | `POST complaints/{id}/generate-reply` |
//! | regenerate | `POST complaints/{id}/generate-reply-again` |
//! | persist_reply | `PUT complaints/{id}/reply` |
//! | set_status | `PUT complaints/{id}/reply-status` |
//! | fetch_similar_history | `GET complaints/{id}/history-similar` |

use crate::config::FileBackendConfig;
use async_trait::async_trait;
use minwon_application::{BackendError, ComplaintBackend};
use minwon_domain::{
    Complaint, ComplaintId, QualityRating, ReplyStatus, ReviewPoints, SimilarReply, WireReply,
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

/// Longest error body echoed into a [`BackendError::Status`]
const MAX_ERROR_BODY: usize = 512;

/// HTTP implementation of the complaint backend.
///
/// The bearer token is baked into the client's default headers at
/// construction; requests never look it up again.
#[derive(Debug, Clone)]
pub struct HttpComplaintBackend {
    client: Client,
    base_url: Url,
}

impl HttpComplaintBackend {
    pub fn new(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|e| BackendError::Transport(format!("Invalid token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        } else {
            warn!("No backend token configured; requests are unauthenticated");
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &FileBackendConfig) -> Result<Self, BackendError> {
        let token = config.resolve_token();
        Self::new(&config.base_url, token.as_deref(), config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, id: ComplaintId, route: &str) -> Result<Url, BackendError> {
        complaint_url(&self.base_url, id, route)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            message: error_message(&body, status.canonical_reason()),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        let response = self.send(self.client.get(url)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ComplaintBackend for HttpComplaintBackend {
    async fn fetch_complaint(&self, id: ComplaintId) -> Result<Complaint, BackendError> {
        self.get_json(self.url(id, "")?).await
    }

    async fn fetch_candidates(&self, id: ComplaintId) -> Result<Vec<Value>, BackendError> {
        let body: Value = self.get_json(self.url(id, "replies")?).await?;
        unwrap_candidates(body)
    }

    async fn fetch_review_points(&self, id: ComplaintId) -> Result<Value, BackendError> {
        let body: Value = self.get_json(self.url(id, "reply-summary")?).await?;
        Ok(review_summary(body))
    }

    async fn save_review_points(
        &self,
        id: ComplaintId,
        points: &ReviewPoints,
    ) -> Result<(), BackendError> {
        let url = self.url(id, "reply-summary")?;
        self.send(self.client.post(url).json(&points.to_payload()))
            .await?;
        Ok(())
    }

    async fn generate(&self, id: ComplaintId) -> Result<(), BackendError> {
        self.send(self.client.post(self.url(id, "generate-reply")?))
            .await?;
        Ok(())
    }

    async fn regenerate(&self, id: ComplaintId) -> Result<(), BackendError> {
        self.send(self.client.post(self.url(id, "generate-reply-again")?))
            .await?;
        Ok(())
    }

    async fn persist_reply(&self, id: ComplaintId, reply: &WireReply) -> Result<(), BackendError> {
        let url = self.url(id, "reply")?;
        self.send(self.client.put(url).json(reply)).await?;
        Ok(())
    }

    async fn set_status(
        &self,
        id: ComplaintId,
        status: ReplyStatus,
        rating: Option<QualityRating>,
    ) -> Result<(), BackendError> {
        let url = self.url(id, "reply-status")?;
        self.send(self.client.put(url).json(&status_body(status, rating)))
            .await?;
        Ok(())
    }

    async fn fetch_similar_history(
        &self,
        id: ComplaintId,
    ) -> Result<Vec<SimilarReply>, BackendError> {
        self.get_json(self.url(id, "history-similar")?).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, BackendError> {
    let raw = raw.trim();
    // Without a trailing slash `join` would replace the last path segment.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| BackendError::Transport(format!("Invalid base URL '{}': {}", raw, e)))
}

fn complaint_url(base: &Url, id: ComplaintId, route: &str) -> Result<Url, BackendError> {
    let path = if route.is_empty() {
        format!("complaints/{}", id)
    } else {
        format!("complaints/{}/{}", id, route)
    };
    base.join(&path)
        .map_err(|e| BackendError::Transport(format!("Invalid route '{}': {}", path, e)))
}

fn transport_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::Transport(format!("Request timed out: {}", error))
    } else {
        BackendError::Transport(error.to_string())
    }
}

/// Prefer the service's `detail` field, else the raw body, else the reason phrase
fn error_message(body: &str, reason: Option<&str>) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned())
        .map(|d| match d {
            Value::String(s) => s,
            other => other.to_string(),
        });
    let message = detail.unwrap_or_else(|| body.trim().to_string());
    if message.is_empty() {
        return reason.unwrap_or("Unknown").to_string();
    }
    match message.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message,
    }
}

/// Candidate rows may wrap the reply in a `content` field.
fn unwrap_candidates(body: Value) -> Result<Vec<Value>, BackendError> {
    let Value::Array(rows) = body else {
        return Err(BackendError::Decode(
            "expected an array of replies".to_string(),
        ));
    };
    Ok(rows
        .into_iter()
        .map(|row| match row {
            Value::Object(mut map) if !map.contains_key("body") && map.contains_key("content") => {
                map.remove("content").unwrap_or(Value::Null)
            }
            other => other,
        })
        .collect())
}

fn review_summary(body: Value) -> Value {
    match body {
        Value::Object(mut map) => map.remove("summary").unwrap_or(Value::Null),
        other => other,
    }
}

fn status_body(status: ReplyStatus, rating: Option<QualityRating>) -> Value {
    let mut body = json!({ "status": status });
    if let Some(rating) = rating {
        body["rating"] = json!(rating);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let base = parse_base_url("https://minwon.test/api").unwrap();
        let url = complaint_url(&base, ComplaintId(4), "replies").unwrap();
        assert_eq!(url.as_str(), "https://minwon.test/api/complaints/4/replies");
    }

    #[test]
    fn test_complaint_url_without_route() {
        let base = parse_base_url("http://127.0.0.1:8000/").unwrap();
        let url = complaint_url(&base, ComplaintId(12), "").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/complaints/12");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(BackendError::Transport(_))
        ));
    }

    #[test]
    fn test_unwrap_candidates() {
        let body = json!([
            { "id": 1, "content": { "header": "a", "body": [] } },
            { "header": "b", "body": [] },
            "raw"
        ]);
        let candidates = unwrap_candidates(body).unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0]["header"], "a");
        assert_eq!(candidates[1]["header"], "b");
        assert_eq!(candidates[2], json!("raw"));
    }

    #[test]
    fn test_unwrap_candidates_rejects_non_array() {
        assert!(matches!(
            unwrap_candidates(json!({ "detail": "oops" })),
            Err(BackendError::Decode(_))
        ));
    }

    #[test]
    fn test_review_summary() {
        assert_eq!(review_summary(json!({ "summary": "[]" })), json!("[]"));
        assert_eq!(review_summary(json!({})), Value::Null);
        assert_eq!(review_summary(json!([1])), json!([1]));
    }

    #[test]
    fn test_status_body() {
        assert_eq!(
            status_body(ReplyStatus::Editing, None),
            json!({ "status": "수정중" })
        );
        assert_eq!(
            status_body(ReplyStatus::Completed, QualityRating::new(2).ok()),
            json!({ "status": "답변완료", "rating": 2 })
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"detail":"Complaint not found"}"#, Some("Not Found")),
            "Complaint not found"
        );
        assert_eq!(error_message("", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message("plain failure", None), "plain failure");
        assert!(error_message(&"x".repeat(2000), None).ends_with("..."));
    }

    #[test]
    fn test_new_with_token() {
        let backend =
            HttpComplaintBackend::new("http://localhost:8000", Some("secret"), Duration::from_secs(5))
                .unwrap();
        assert_eq!(backend.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_from_config() {
        let config = FileBackendConfig {
            token: Some("abc".to_string()),
            ..Default::default()
        };
        let backend = HttpComplaintBackend::from_config(&config).unwrap();
        assert_eq!(backend.base_url().as_str(), "http://127.0.0.1:8000/");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let backend =
            HttpComplaintBackend::new("http://127.0.0.1:9/", None, Duration::from_secs(2)).unwrap();
        let result = backend.fetch_complaint(ComplaintId(1)).await;
        assert!(matches!(result, Err(BackendError::Transport(_))));
    }
}
