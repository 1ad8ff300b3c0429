use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::prompt::InquirePrompter;
use crate::taxonomy::Taxonomy;
use crate::workflow::{ComposeError, Outcome, Workflow};

#[derive(Parser, Debug)]
#[command(
    name = "commit-compose",
    about = "Compose a conventional commit message interactively",
    version,
    after_help = "Meant to run as a git commit-msg or prepare-commit-msg hook: \
                  `commit-compose \"$1\"`. Any extra hook arguments are ignored."
)]
pub struct Cli {
    /// Commit message file to read and rewrite (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "FILE")]
    pub message_file: Option<PathBuf>,

    /// Extra arguments passed by git hooks (commit source, SHA)
    #[arg(value_name = "HOOK_ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub hook_args: Vec<String>,

    /// Print the available commit types and exit
    #[arg(long)]
    pub list_types: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

/// Run one hook invocation against the terminal.
pub fn run(cli: &Cli) -> Outcome {
    // No file means nothing to do; bail before touching config or disk.
    let Some(path) = cli.message_file.as_deref() else {
        return Outcome::Failed(ComposeError::MissingArgument);
    };

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(err) => return Outcome::Failed(ComposeError::Config(err)),
    };

    let mut prompter = InquirePrompter::new(cfg.page_size, cfg.body_editor);
    Workflow::new(&mut prompter, Taxonomy::builtin())
        .with_icon_format(cfg.icon_format)
        .run(Some(path))
}
