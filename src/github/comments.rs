use reqwest::Method;
use tracing::{debug, info};

use super::{Client, Comment, FetchRequest, Result};

// -------------------------------------------------------------------------------------------------
// CommentTarget
// -------------------------------------------------------------------------------------------------
/// Something that can be commented on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    /// A pull request or issue, by number
    PullRequest(u64),

    /// A commit, by SHA
    Commit(String),
}

impl std::fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentTarget::PullRequest(num) => write!(f, "#{num}"),
            CommentTarget::Commit(sha) => write!(f, "commit {sha}"),
        }
    }
}

impl Client {
    /// Post a comment on a pull request, issue, or commit.
    ///
    /// When `dry_run` is true, the comment text is printed to stdout instead, no request is made,
    /// and `None` is returned.
    pub fn post_comment(
        &self,
        org: &str,
        project: &str,
        target: &CommentTarget,
        comment: &str,
        dry_run: bool,
    ) -> Result<Option<Comment>> {
        let url = match target {
            CommentTarget::PullRequest(num) => {
                let num = num.to_string();
                self.make_url(&["repos", org, project, "issues", num.as_str(), "comments"])?
            }
            CommentTarget::Commit(sha) => {
                self.make_url(&["repos", org, project, "commits", sha.as_str(), "comments"])?
            }
        };

        if dry_run {
            debug!("Dry run: not posting comment to {url}");
            println!("{comment}");
            return Ok(None);
        }

        let body = serde_json::json!({ "body": comment });
        let comment: Comment = self.fetch_json_as(url.as_str(), &[], Some(body))?;
        info!("Posted comment {} on {org}/{project} {target}", comment.database_id());
        Ok(Some(comment))
    }

    /// Post a comment on a pull request or issue.
    pub fn post_pr_comment(
        &self,
        org: &str,
        project: &str,
        pr_num: u64,
        comment: &str,
        dry_run: bool,
    ) -> Result<Option<Comment>> {
        self.post_comment(org, project, &CommentTarget::PullRequest(pr_num), comment, dry_run)
    }

    /// Post a comment on a commit.
    pub fn post_commit_comment(
        &self,
        org: &str,
        project: &str,
        sha: &str,
        comment: &str,
        dry_run: bool,
    ) -> Result<Option<Comment>> {
        let target = CommentTarget::Commit(sha.to_string());
        self.post_comment(org, project, &target, comment, dry_run)
    }

    /// Delete a pull request or issue comment by its numeric identifier.
    pub fn delete_comment(&self, org: &str, project: &str, comment_id: u64) -> Result<()> {
        let comment_id = comment_id.to_string();
        let url = self.make_url(&["repos", org, project, "issues", "comments", comment_id.as_str()])?;
        self.fetch_url(FetchRequest::new(url).method(Method::DELETE))?;
        info!("Deleted comment {comment_id} on {org}/{project}");
        Ok(())
    }
}
