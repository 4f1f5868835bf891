//! Null driver for the GitHub API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use reviewbot_ghapi_interface::{
    types::{GhIssueComment, GhPullRequestFile},
    ApiService, Result,
};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait(?Send)]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self))]
    async fn pulls_get_diff(&self, _owner: &str, _name: &str, _number: u64) -> Result<String> {
        Ok(String::new())
    }

    #[tracing::instrument(skip(self))]
    async fn pulls_files_list(
        &self,
        _owner: &str,
        _name: &str,
        _number: u64,
    ) -> Result<Vec<GhPullRequestFile>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self, _body), ret)]
    async fn comments_post(
        &self,
        _owner: &str,
        _name: &str,
        _issue_number: u64,
        _body: &str,
    ) -> Result<u64> {
        Ok(0)
    }

    #[tracing::instrument(skip(self, _body), ret)]
    async fn comments_update(
        &self,
        _owner: &str,
        _name: &str,
        comment_id: u64,
        _body: &str,
    ) -> Result<u64> {
        Ok(comment_id)
    }

    #[tracing::instrument(skip(self))]
    async fn comments_list(
        &self,
        _owner: &str,
        _name: &str,
        _issue_number: u64,
    ) -> Result<Vec<GhIssueComment>> {
        Ok(vec![])
    }
}
