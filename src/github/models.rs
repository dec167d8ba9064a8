use serde::{Deserialize, Serialize};

/// A decoded JSON object, as returned by most GitHub REST API endpoints.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// -------------------------------------------------------------------------------------------------
// Comment
// -------------------------------------------------------------------------------------------------
/// A comment on a pull request, issue, or commit.
///
/// Comments can be deserialized from either a REST API comment object or a GraphQL comment node,
/// as well as from the flat form they serialize to.
/// REST comment objects do not carry an editor, so `editor_login` is always `None` for those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CommentRepr")]
pub struct Comment {
    body_text: String,
    created_at: String,
    author_login: String,
    author_association: String,
    editor_login: Option<String>,
    database_id: i64,
}

impl Comment {
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// The creation timestamp, in ISO 8601 format as reported by GitHub.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn author_login(&self) -> &str {
        &self.author_login
    }

    /// The author's relationship to the repository, e.g. `OWNER`, `MEMBER`, or `CONTRIBUTOR`.
    pub fn author_association(&self) -> &str {
        &self.author_association
    }

    pub fn editor_login(&self) -> Option<&str> {
        self.editor_login.as_deref()
    }

    /// The numeric identifier used by the REST API, e.g. for deletion.
    pub fn database_id(&self) -> i64 {
        self.database_id
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommentRepr {
    Rest(RestComment),
    GraphQl(GraphQlComment),
    Flat(FlatComment),
}

impl From<CommentRepr> for Comment {
    fn from(repr: CommentRepr) -> Self {
        match repr {
            CommentRepr::Rest(c) => Comment {
                body_text: c.body,
                created_at: c.created_at,
                author_login: c.user.login,
                author_association: c.author_association,
                editor_login: None,
                database_id: c.id,
            },
            CommentRepr::GraphQl(c) => Comment {
                body_text: c.body_text,
                created_at: c.created_at,
                author_login: c.author.login,
                author_association: c.author_association,
                editor_login: c.editor.map(|e| e.login),
                database_id: c.database_id,
            },
            CommentRepr::Flat(c) => Comment {
                body_text: c.body_text,
                created_at: c.created_at,
                author_login: c.author_login,
                author_association: c.author_association,
                editor_login: c.editor_login,
                database_id: c.database_id,
            },
        }
    }
}

// -------------------------------------------------------------------------------------------------
// RestComment
// Defined as in: https://docs.github.com/en/rest/issues/comments?apiVersion=2022-11-28
// -------------------------------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
struct RestComment {
    id: i64,
    body: String,
    user: Actor,
    created_at: String,
    author_association: String,
}

// -------------------------------------------------------------------------------------------------
// GraphQlComment
// -------------------------------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlComment {
    body_text: String,
    created_at: String,
    author: Actor,
    author_association: String,
    editor: Option<Actor>,
    database_id: i64,
}

// -------------------------------------------------------------------------------------------------
// FlatComment
// -------------------------------------------------------------------------------------------------
/// The shape `Comment` itself serializes to
#[derive(Debug, Deserialize)]
struct FlatComment {
    body_text: String,
    created_at: String,
    author_login: String,
    author_association: String,
    #[serde(default)]
    editor_login: Option<String>,
    database_id: i64,
}

#[derive(Debug, Deserialize)]
struct Actor {
    login: String,
}
