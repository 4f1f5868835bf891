//! GitHub API adapter crate.
//!
//! Contains functions to communicate with the GitHub REST API.

#![warn(clippy::all)]

mod errors;
mod github;

pub use errors::GitHubError;
pub use github::GithubApiService;
