//! Common error type shared across the page builder crates
//!
//! Serializable so the API server can return it as a JSON body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all portfolio operations
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PortfolioError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    #[error("Profile not found: {username}")]
    ProfileNotFound { username: String },

    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    #[error("Invalid username: {message}")]
    InvalidUsername { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
