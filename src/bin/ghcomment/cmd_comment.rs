use anyhow::{Context, Result};
use tracing::warn;

use crate::args::{CommentCommand, GlobalArgs, OutputFormat, PostArgs, RepoArgs};
use ghcomment::github::{self, CommentTarget};

pub fn run(global_args: &GlobalArgs, args: &CommentCommand) -> Result<()> {
    let client = make_client(global_args)?;
    match args {
        CommentCommand::Pr(args) => post(
            &client,
            &args.repo,
            CommentTarget::PullRequest(args.number),
            &args.post_args,
        ),
        CommentCommand::Commit(args) => post(
            &client,
            &args.repo,
            CommentTarget::Commit(args.sha.clone()),
            &args.post_args,
        ),
        CommentCommand::Delete(args) => {
            let RepoArgs { org, project } = &args.repo;
            client
                .delete_comment(org, project, args.comment_id)
                .map_err(|e| suggest_token(&client, e))
                .with_context(|| format!("Failed to delete comment {}", args.comment_id))?;
            println!("Deleted comment {}", args.comment_id);
            Ok(())
        }
    }
}

fn make_client(global_args: &GlobalArgs) -> Result<github::Client> {
    github::ClientBuilder::new()
        .base_url(global_args.github_api_url.clone())
        .context("Failed to set base URL")?
        .personal_access_token_from_env()
        .context("Failed to get GitHub access token from environment")?
        .ignore_certs(global_args.ignore_certs)
        .build()
        .context("Failed to initialize GitHub client")
}

fn post(
    client: &github::Client,
    repo: &RepoArgs,
    target: CommentTarget,
    args: &PostArgs,
) -> Result<()> {
    let RepoArgs { org, project } = repo;
    let comment = client
        .post_comment(org, project, &target, &args.text, args.dry_run)
        .map_err(|e| suggest_token(client, e))
        .with_context(|| format!("Failed to post comment on {org}/{project} {target}"))?;

    // dry runs have already printed the comment text
    let Some(comment) = comment else {
        return Ok(());
    };

    match args.format {
        OutputFormat::Human => {
            println!(
                "Created comment {} on {org}/{project} {target} as {}",
                console::style(comment.database_id()).bold(),
                comment.author_login(),
            );
        }
        OutputFormat::Json => {
            let out = serde_json::to_string_pretty(&comment)?;
            println!("{out}");
        }
    }
    Ok(())
}

/// Log a hint about authentication when a request failed while running without a token.
fn suggest_token(client: &github::Client, err: github::Error) -> github::Error {
    if !client.is_authenticated() && err.status().is_some() {
        warn!(
            "No GitHub access token was used; consider supplying one through the {} environment variable",
            github::GITHUB_TOKEN_ENV_VAR
        );
    }
    err
}
