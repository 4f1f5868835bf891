//! GitHub adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, ClientBuilder,
};
use reviewbot_config::Config;
use reviewbot_ghapi_interface::{
    types::{GhIssueComment, GhPullRequestFile},
    ApiService, Result,
};
use serde::{Deserialize, Serialize};

use crate::errors::GitHubError;

const GITHUB_MEDIA_TYPE_JSON: &str = "application/vnd.github+json";
const GITHUB_MEDIA_TYPE_DIFF: &str = "application/vnd.github.v3.diff";

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates a new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(GITHUB_MEDIA_TYPE_JSON),
        );

        let token = &self.config.api.github.token;
        if !token.is_empty() {
            headers.insert(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| GitHubError::InvalidToken)?,
            );
        }

        ClientBuilder::new()
            .timeout(Duration::from_millis(self.config.api.github.request_timeout))
            .user_agent(format!("{}/{}", self.config.name, self.config.version))
            .default_headers(headers)
            .build()
            .map_err(Into::into)
    }

    fn build_url(&self, path: String) -> String {
        format!("{}{}", self.config.api.github.root_url, path)
    }
}

#[async_trait(?Send)]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn pulls_get_diff(&self, owner: &str, name: &str, number: u64) -> Result<String> {
        Ok(self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/pulls/{number}")))
            .header(header::ACCEPT, GITHUB_MEDIA_TYPE_DIFF)
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .text()
            .await
            .map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self))]
    async fn pulls_files_list(
        &self,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<Vec<GhPullRequestFile>> {
        Ok(self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/pulls/{number}/files")))
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json::<Vec<GhPullRequestFile>>()
            .await
            .map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self, body), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        Ok(self
            .get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/comments"
            )))
            .json(&Request { body })
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json::<Response>()
            .await
            .map_err(GitHubError::from)?
            .id)
    }

    #[tracing::instrument(skip(self, body), ret)]
    async fn comments_update(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        Ok(self
            .get_client()?
            .patch(self.build_url(format!(
                "/repos/{owner}/{name}/issues/comments/{comment_id}"
            )))
            .json(&Request { body })
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json::<Response>()
            .await
            .map_err(GitHubError::from)?
            .id)
    }

    #[tracing::instrument(skip(self))]
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhIssueComment>> {
        Ok(self
            .get_client()?
            .get(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/comments"
            )))
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json::<Vec<GhIssueComment>>()
            .await
            .map_err(GitHubError::from)?)
    }
}
