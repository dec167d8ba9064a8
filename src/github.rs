mod auth;
mod client;
mod client_builder;
mod comments;
mod error;
mod models;
mod rate_limit;
mod request;
mod result;

pub use auth::Auth;
pub use client::Client;
pub use client_builder::ClientBuilder;
pub use comments::CommentTarget;
pub use error::Error;
pub use models::{Comment, JsonObject};
pub use rate_limit::RateLimitUsage;
pub use request::{append_query_params, FetchRequest};
pub use result::Result;

/// The media type requested by the JSON convenience wrappers.
pub const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// The environment variable an optional personal access token is read from.
pub const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
