//! HTTP client for the resume generator endpoint

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::resume::Resume;

/// Default generator endpoint
pub const DEFAULT_ENDPOINT: &str = "https://expressjs-api-resume-random.onrender.com/resume";

/// Client for fetching generated resumes.
///
/// One GET per call, no retries and no request timeout: a request that the
/// network never answers stays pending until the connection drops.
#[derive(Debug, Clone)]
pub struct ResumeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ResumeClient {
    /// Create a client against the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The full request URL for a given name
    pub fn request_url(&self, name: &str) -> Result<reqwest::Url> {
        reqwest::Url::parse_with_params(&self.endpoint, [("name", name)])
            .map_err(|e| Error::Config(format!("invalid endpoint {:?}: {}", self.endpoint, e)))
    }

    /// Fetch a generated resume for `name`.
    ///
    /// Transport errors, non-2xx statuses and undecodable bodies each map to
    /// their own error variant; the caller decides how much of that detail
    /// to surface.
    pub async fn fetch_resume(&self, name: &str) -> Result<Resume> {
        let url = self.request_url(name)?;
        debug!(%url, "requesting resume");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "resume endpoint returned error status");
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let resume: Resume = serde_json::from_str(&body)?;
        debug!(
            skills = resume.skills.len(),
            projects = resume.projects.len(),
            "resume decoded"
        );
        Ok(resume)
    }
}

impl Default for ResumeClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_carries_name() {
        let client = ResumeClient::new("https://example.com/resume");
        let url = client.request_url("alice").unwrap();
        assert_eq!(url.as_str(), "https://example.com/resume?name=alice");
    }

    #[test]
    fn test_request_url_encodes_reserved_characters() {
        let client = ResumeClient::new("https://example.com/resume");
        let url = client.request_url("a b&c").unwrap();
        assert_eq!(url.query(), Some("name=a+b%26c"));
    }

    #[test]
    fn test_default_endpoint() {
        let client = ResumeClient::default();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint_is_config_error() {
        let client = ResumeClient::new("not a url");
        assert!(matches!(client.request_url("x"), Err(Error::Config(_))));
    }
}
