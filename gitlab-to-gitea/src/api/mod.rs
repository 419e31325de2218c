//! Shared HTTP plumbing for the GitLab and Gitea clients.

mod error;
mod rest;

pub use error::ApiError;
pub(crate) use rest::RestClient;
