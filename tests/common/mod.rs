//! Integration Test Utilities and Common Code

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

pub use assert_cmd::prelude::*;
pub use mockito::{Matcher, Server, ServerGuard};
pub use pretty_assertions::{assert_eq, assert_ne};
pub use std::process::Command;

use ghcomment::github::{Auth, Client, ClientBuilder};

/// The token used by tests that need an authenticated client.
pub const TEST_TOKEN: &str = "ghp_testtoken";

/// A REST API comment object, as returned when creating a comment.
pub const REST_COMMENT_JSON: &str = r#"{
    "id": 1,
    "node_id": "MDEyOklzc3VlQ29tbWVudDE=",
    "url": "https://api.github.com/repos/octocat/Hello-World/issues/comments/1",
    "html_url": "https://github.com/octocat/Hello-World/issues/1347#issuecomment-1",
    "body": "hello",
    "user": { "login": "octocat", "id": 1 },
    "created_at": "2011-04-14T16:00:49Z",
    "updated_at": "2011-04-14T16:00:49Z",
    "author_association": "COLLABORATOR"
}"#;

/// Build a client for the given mock server, authenticated with `TEST_TOKEN`.
pub fn authenticated_client(server: &ServerGuard) -> Client {
    ClientBuilder::new()
        .base_url(server.url().as_str())
        .expect("mock server URL should be a valid base URL")
        .auth(Auth::PersonalAccessToken(secrecy::SecretString::new(TEST_TOKEN.to_string())))
        .build()
        .expect("client should build")
}

/// Build an unauthenticated client for the given mock server.
pub fn unauthenticated_client(server: &ServerGuard) -> Client {
    ClientBuilder::new()
        .base_url(server.url().as_str())
        .expect("mock server URL should be a valid base URL")
        .build()
        .expect("client should build")
}

/// Build a `Command` for the `ghcomment` crate binary, isolated from the ambient environment.
pub fn ghcomment_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ghcomment").expect("ghcomment should be executable");
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_API_URL")
        .env_remove("GHCOMMENT_LOG")
        .env("NO_COLOR", "1");
    cmd
}

// -------------------------------------------------------------------------------------------------
// log capture
// -------------------------------------------------------------------------------------------------
/// An in-memory `tracing` writer.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut inner = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber that records WARN and above, returning the result of
/// `f` and everything that was logged.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.contents())
}

/// Find a local port with nothing listening on it.
pub fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("should bind an ephemeral port");
    let addr = listener.local_addr().expect("listener should have an address");
    drop(listener);
    format!("http://{addr}")
}
