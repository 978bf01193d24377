use std::time::Duration;

use clone_core::CloneProtocol;
use log::{debug, warn};
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

const DEFAULT_CONTROL_REPO: &str = "root";

/// GitHub REST API client scoped to one organization
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    org: String,
    token: String,
    control_repo: String,
    protocol: CloneProtocol,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new(org: &str, token: &str) -> Self {
        Self::with_base_url("https://api.github.com", org, token)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str, org: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            org: org.to_string(),
            token: token.to_string(),
            control_repo: DEFAULT_CONTROL_REPO.to_string(),
            protocol: CloneProtocol::default(),
        }
    }

    /// Name of the repository that is never cloned
    pub fn control_repo(mut self, name: &str) -> Self {
        self.control_repo = name.to_string();
        self
    }

    /// Which clone locator the descriptors carry
    pub fn protocol(mut self, protocol: CloneProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Get the organization for this client
    pub fn org(&self) -> &str {
        &self.org
    }

    pub(crate) fn control_repo_name(&self) -> &str {
        &self.control_repo
    }

    pub(crate) fn clone_protocol(&self) -> CloneProtocol {
        self.protocol
    }

    /// Build an org-scoped URL
    fn org_url(&self, path: &str) -> String {
        format!(
            "{}/orgs/{}{}",
            self.base_url,
            urlencoding::encode(&self.org),
            path
        )
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Detect rate limiting: 403 with x-ratelimit-remaining: 0
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }

        // Try to read error body
        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Try to parse as GitHub error response
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        match status {
            401 | 403 => Err(GitHubError::Unauthorized),
            404 => Err(GitHubError::OrgNotFound(self.org.clone())),
            _ => Err(GitHubError::Api { status, message }),
        }
    }

    // ==================== Repository Operations ====================

    /// List the organization's repositories
    ///
    /// Only the first page the API returns is read; a `Link: rel="next"`
    /// header is logged as a truncated listing.
    pub fn list_org_repos(&self) -> Result<Vec<GitHubRepo>> {
        let url = self.org_url("/repos");
        debug!("GET {}", url);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;

        if has_next_page(&response) {
            warn!(
                "{} has more repositories than one page; only the first page is cloned",
                self.org
            );
        }

        let body = response.body_mut().read_to_string()?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;
        debug!("{} repositories listed for {}", repos.len(), self.org);
        Ok(repos)
    }
}

fn has_next_page(response: &ureq::http::Response<ureq::Body>) -> bool {
    response
        .headers()
        .get("link")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|link| link.contains("rel=\"next\""))
}
