use clap::{crate_description, crate_version, ArgAction, Args, Parser, Subcommand, ValueEnum};
use url::Url;

// -----------------------------------------------------------------------------
// command-line args
// -----------------------------------------------------------------------------
#[derive(Parser, Debug)]
#[command(
    version,  // retrieved from Cargo.toml `version`
    about,    // retrieved from Cargo.toml `description`

    long_version = concat!(
        crate_version!(),
    ),

    long_about = concat!(
        crate_description!(),
    ),
)]
#[deny(missing_docs)]
/// Post and delete comments on GitHub pull requests and commits
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let mut s = Self::parse();

        // If `NO_COLOR` is set in the environment, disable colored output
        //
        // https://no-color.org/
        if std::env::var("NO_COLOR").is_ok() {
            s.global_args.color = Mode::Never
        }

        s
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Post and delete comments
    ///
    /// By default, unauthenticated access is used, which GitHub refuses for posting and deleting.
    /// A personal access token can be specified using the `GITHUB_TOKEN` environment variable.
    /// The token is only ever sent to the GitHub API URL.
    #[command(display_order = 1, subcommand)]
    Comment(CommentCommand),
}

// -----------------------------------------------------------------------------
// global options
// -----------------------------------------------------------------------------
#[derive(Args, Debug)]
#[command(next_help_heading = "Global Options")]
pub struct GlobalArgs {
    /// Enable verbose output
    ///
    /// This can be repeated up to 3 times to enable successively more output.
    #[arg(global=true, long, short, action=ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error feedback messages
    ///
    /// This silences WARNING, INFO, DEBUG, and TRACE messages.
    /// This takes precedence over the verbose setting.
    #[arg(global=true, long, short)]
    pub quiet: bool,

    /// Enable or disable colored output
    ///
    /// When this is "auto", colors are enabled when stderr is a tty.
    ///
    /// If the `NO_COLOR` environment variable is set, it takes precedence and is equivalent to `--color=never`.
    #[arg(global=true, long, default_value_t=Mode::Auto, value_name="MODE")]
    pub color: Mode,

    /// Use the specified URL for the GitHub API
    ///
    /// The URL should point to the root of the REST API, e.g. `https://github.example.com/api/v3` for GitHub Enterprise Server.
    #[arg(
        global=true,
        long,
        value_name="URL",
        env="GITHUB_API_URL",
        default_value="https://api.github.com",
    )]
    pub github_api_url: Url,

    /// Ignore validation of TLS certificates
    #[arg(global=true, long)]
    pub ignore_certs: bool,
}

impl GlobalArgs {
    pub fn use_color(&self) -> bool {
        match self.color {
            Mode::Never => false,
            Mode::Always => true,
            Mode::Auto => atty::is(atty::Stream::Stderr),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Mode {
    Auto,
    Never,
    Always,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Auto => "auto",
            Mode::Never => "never",
            Mode::Always => "always",
        };
        write!(f, "{s}")
    }
}

// -----------------------------------------------------------------------------
// `comment` command
// -----------------------------------------------------------------------------
#[derive(Subcommand, Debug)]
pub enum CommentCommand {
    /// Post a comment on a pull request or issue
    #[command(display_order = 1)]
    Pr(CommentPrArgs),

    /// Post a comment on a commit
    #[command(display_order = 2)]
    Commit(CommentCommitArgs),

    /// Delete a pull request or issue comment
    #[command(display_order = 3)]
    Delete(CommentDeleteArgs),
}

#[derive(Args, Debug)]
pub struct RepoArgs {
    /// The organization or user that owns the repository
    pub org: String,

    /// The repository name
    pub project: String,
}

#[derive(Args, Debug)]
pub struct PostArgs {
    /// The comment text
    pub text: String,

    /// Print the comment instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Write output in the specified format
    #[arg(long, short, default_value_t=OutputFormat::Human, value_name="FORMAT")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct CommentPrArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// The pull request or issue number
    pub number: u64,

    #[command(flatten)]
    pub post_args: PostArgs,
}

#[derive(Args, Debug)]
pub struct CommentCommitArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// The commit SHA
    pub sha: String,

    #[command(flatten)]
    pub post_args: PostArgs,
}

#[derive(Args, Debug)]
pub struct CommentDeleteArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// The numeric identifier of the comment
    pub comment_id: u64,
}

// -----------------------------------------------------------------------------
// output options
// -----------------------------------------------------------------------------
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// A text-based format designed for humans
    Human,

    /// Pretty-printed JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        CommandLineArgs::command().debug_assert();
    }
}
