use std::fmt;

use anyhow::{Context, Result};
use colored::Colorize;
use inquire::error::InquireResult;
use inquire::{InquireError, Select, Text};
use log::debug;

use crate::question::{Choice, QuestionKind, QuestionSpec};

const EDITOR_TEMPLATE: &str = "\n\
# Write the commit body above. Lines starting with '#' are ignored.\n\
# Leave it empty for no body.\n";

/// Result of asking a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// For selects this is the chosen `Choice::value`
    Answered(String),
    Cancelled,
}

/// Asks one question and blocks until the user answers or cancels.
///
/// Cancellation (Esc / Ctrl-C) is reported as [`Answer::Cancelled`], never as `Err`.
/// `Err` means the terminal itself failed (no TTY, I/O error, ...).
pub trait Prompter {
    fn ask(&mut self, question: &QuestionSpec) -> Result<Answer>;
}

/// Terminal prompter backed by `inquire`.
pub struct InquirePrompter {
    page_size: usize,
    body_editor: bool,
}

impl InquirePrompter {
    pub fn new(page_size: usize, body_editor: bool) -> Self {
        Self {
            page_size,
            body_editor,
        }
    }

    fn select(&self, question: &QuestionSpec) -> Result<Answer> {
        question.validate()?;
        let width = question
            .choices
            .iter()
            .map(|c| c.title.chars().count())
            .max()
            .unwrap_or(0);
        let items: Vec<ChoiceItem> = question
            .choices
            .iter()
            .map(|choice| ChoiceItem { choice, width })
            .collect();

        let picked = Select::new(&question.message, items)
            .with_starting_cursor(question.initial)
            .with_page_size(self.page_size.max(1))
            .raw_prompt();

        Ok(match interrupted(picked)? {
            Some(option) => Answer::Answered(question.choices[option.index].value.clone()),
            None => Answer::Cancelled,
        })
    }

    fn text(&self, question: &QuestionSpec) -> Result<Answer> {
        Ok(match interrupted(Text::new(&question.message).prompt())? {
            Some(value) => Answer::Answered(value),
            None => Answer::Cancelled,
        })
    }

    /// One `Text` prompt per line; an empty line ends the input.
    fn multiline(&self, question: &QuestionSpec) -> Result<Answer> {
        let mut lines: Vec<String> = Vec::new();
        loop {
            let label = if lines.is_empty() {
                question.message.as_str()
            } else {
                "..."
            };
            match interrupted(Text::new(label).prompt())? {
                Some(line) if line.is_empty() => break,
                Some(line) => lines.push(line),
                None => return Ok(Answer::Cancelled),
            }
        }
        Ok(Answer::Answered(lines.join("\n")))
    }

    fn editor(&self, question: &QuestionSpec) -> Result<Answer> {
        println!("{} {}", "?".green(), question.message.bold());
        let edited = edit::edit(EDITOR_TEMPLATE).context("Failed to run external editor")?;
        Ok(Answer::Answered(strip_comment_lines(&edited)))
    }
}

impl Prompter for InquirePrompter {
    fn ask(&mut self, question: &QuestionSpec) -> Result<Answer> {
        debug!("asking '{}' ({:?})", question.name, question.kind);
        match question.kind {
            QuestionKind::Select => self.select(question),
            QuestionKind::Text => self.text(question),
            QuestionKind::MultilineText if self.body_editor => self.editor(question),
            QuestionKind::MultilineText => self.multiline(question),
        }
    }
}

struct ChoiceItem<'a> {
    choice: &'a Choice,
    width: usize,
}

impl fmt::Display for ChoiceItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.choice.description {
            Some(description) => write!(
                f,
                "{:<width$}  {}",
                self.choice.title,
                description.dimmed(),
                width = self.width
            ),
            None => write!(f, "{}", self.choice.title),
        }
    }
}

/// `Ok(None)` when the user pressed Esc or Ctrl-C.
fn interrupted<T>(result: InquireResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(anyhow::Error::new(err).context("Prompt failed")),
    }
}

/// Drop `#` comment lines and surrounding blank lines from editor output.
///
/// Indentation of the remaining lines is preserved.
pub fn strip_comment_lines(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect();
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end.max(start)]
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
