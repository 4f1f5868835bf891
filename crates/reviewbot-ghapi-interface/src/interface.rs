use async_trait::async_trait;

use crate::{
    types::{GhIssueComment, GhPullRequestFile},
    Result,
};

/// GitHub API adapter interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait(?Send)]
pub trait ApiService: Send + Sync {
    /// Get a pull request diff.
    async fn pulls_get_diff(&self, owner: &str, name: &str, number: u64) -> Result<String>;
    /// List changed files from a pull request.
    async fn pulls_files_list(
        &self,
        owner: &str,
        name: &str,
        number: u64,
    ) -> Result<Vec<GhPullRequestFile>>;
    /// Post a comment on an issue or pull request.
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64>;
    /// Update a comment on an issue or pull request.
    async fn comments_update(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64>;
    /// List comments from an issue or pull request.
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhIssueComment>>;
    /// Find the first comment authored by `username` whose body contains
    /// `marker`, both matched case-insensitively.
    ///
    /// Scans a single `comments_list` page: a target with more comments than
    /// one listing page returns may hide the marked comment on a later page.
    async fn comments_find_by_marker(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        username: &str,
        marker: &str,
    ) -> Result<Option<GhIssueComment>> {
        let comments = self.comments_list(owner, name, issue_number).await?;
        let username = username.to_lowercase();
        let marker = marker.to_lowercase();

        Ok(comments.into_iter().find(|comment| {
            comment.user.login.to_lowercase() == username
                && comment.body.to_lowercase().contains(&marker)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GhUser;

    struct FixedComments(Vec<GhIssueComment>);

    #[async_trait(?Send)]
    impl ApiService for FixedComments {
        async fn pulls_get_diff(&self, _owner: &str, _name: &str, _number: u64) -> Result<String> {
            Ok(String::new())
        }

        async fn pulls_files_list(
            &self,
            _owner: &str,
            _name: &str,
            _number: u64,
        ) -> Result<Vec<GhPullRequestFile>> {
            Ok(vec![])
        }

        async fn comments_post(
            &self,
            _owner: &str,
            _name: &str,
            _issue_number: u64,
            _body: &str,
        ) -> Result<u64> {
            Ok(1)
        }

        async fn comments_update(
            &self,
            _owner: &str,
            _name: &str,
            comment_id: u64,
            _body: &str,
        ) -> Result<u64> {
            Ok(comment_id)
        }

        async fn comments_list(
            &self,
            _owner: &str,
            _name: &str,
            _issue_number: u64,
        ) -> Result<Vec<GhIssueComment>> {
            Ok(self.0.clone())
        }
    }

    fn comment(id: u64, login: &str, body: &str) -> GhIssueComment {
        GhIssueComment {
            id,
            user: GhUser {
                login: login.into(),
            },
            body: body.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn find_by_marker_matches_author_and_marker_case_insensitively() {
        let service = FixedComments(vec![
            comment(1, "someone", "🤖 **Review** marker present, wrong author"),
            comment(2, "MyBot", "🤖 **REVIEW** here"),
            comment(3, "mybot", "🤖 **Review** later match"),
        ]);

        let found = service
            .comments_find_by_marker("me", "repo", 1, "mybot", "🤖 **Review**")
            .await
            .unwrap();

        assert_eq!(found.map(|c| c.id), Some(2));
    }

    #[tokio::test]
    async fn find_by_marker_returns_none_without_match() {
        let service = FixedComments(vec![comment(1, "mybot", "unrelated body")]);

        let found = service
            .comments_find_by_marker("me", "repo", 1, "mybot", "🤖 **Review**")
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
