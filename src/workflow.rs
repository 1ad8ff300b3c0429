//! The commit-message workflow: read the draft, maybe keep it, otherwise ask,
//! validate, format, and write it back.
//!
//! The file is written at most once, and only after the answers validate.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::collector::{collect, Collected, ValidationError};
use crate::format::{format_message, IconFormat};
use crate::prompt::{Answer, Prompter};
use crate::question::{commit_questions, keep_or_replace_question, KEEP};
use crate::taxonomy::Taxonomy;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("no commit message file given")]
    MissingArgument,
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid commit message: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to load configuration: {0:#}")]
    Config(anyhow::Error),
    #[error("prompt error: {0:#}")]
    Prompt(anyhow::Error),
}

/// Terminal state of one invocation.
#[derive(Debug)]
pub enum Outcome {
    /// Existing message left untouched
    Kept,
    /// New message written to the file
    Written,
    /// User cancelled a prompt
    Aborted,
    Failed(ComposeError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Kept | Self::Written => 0,
            Self::Aborted | Self::Failed(_) => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

pub struct Workflow<'p> {
    prompter: &'p mut dyn Prompter,
    taxonomy: Taxonomy,
    icon_format: IconFormat,
}

impl<'p> Workflow<'p> {
    pub fn new(prompter: &'p mut dyn Prompter, taxonomy: Taxonomy) -> Self {
        Self {
            prompter,
            taxonomy,
            icon_format: IconFormat::default(),
        }
    }

    pub fn with_icon_format(mut self, icon_format: IconFormat) -> Self {
        self.icon_format = icon_format;
        self
    }

    pub fn run(&mut self, path: Option<&Path>) -> Outcome {
        let outcome = match self.try_run(path) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failed(err),
        };
        debug!("workflow finished: {outcome:?}");
        outcome
    }

    fn try_run(&mut self, path: Option<&Path>) -> Result<Outcome, ComposeError> {
        let path = path.ok_or(ComposeError::MissingArgument)?;

        debug!("reading {}", path.display());
        let existing = std::fs::read_to_string(path).map_err(|source| ComposeError::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        })?;

        if !existing.trim().is_empty() {
            debug!("existing message found, asking whether to keep it");
            let question = keep_or_replace_question(&existing);
            match self.prompter.ask(&question).map_err(ComposeError::Prompt)? {
                Answer::Cancelled => return Ok(Outcome::Aborted),
                Answer::Answered(choice) if choice == KEEP => return Ok(Outcome::Kept),
                Answer::Answered(_) => debug!("replacing existing message"),
            }
        }

        let questions = commit_questions(&self.taxonomy, self.icon_format);
        let record = match collect(&mut *self.prompter, &questions).map_err(ComposeError::Prompt)? {
            Collected::Complete(record) => record,
            Collected::Cancelled => return Ok(Outcome::Aborted),
        };

        let draft = record.validate(&self.taxonomy)?;
        let message = format_message(&draft, self.icon_format);

        debug!("writing {} bytes to {}", message.len(), path.display());
        std::fs::write(path, message).map_err(|source| ComposeError::Io {
            action: "write",
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Outcome::Written)
    }
}
