use anyhow::{bail, Result};

use crate::format::IconFormat;
use crate::taxonomy::Taxonomy;

pub const TYPE: &str = "type";
pub const SCOPE: &str = "scope";
pub const SUBJECT: &str = "subject";
pub const BODY: &str = "body";
pub const KEEP_OR_REPLACE: &str = "shouldCreate";

pub const KEEP: &str = "keep";
pub const CREATE: &str = "create";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Select,
    Text,
    MultilineText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub title: String,
    pub value: String,
    pub description: Option<String>,
}

/// One prompt handed to a [`crate::prompt::Prompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSpec {
    pub name: &'static str,
    pub kind: QuestionKind,
    pub message: String,
    pub choices: Vec<Choice>,
    /// Starting cursor for selects
    pub initial: usize,
}

impl QuestionSpec {
    pub fn select(name: &'static str, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            name,
            kind: QuestionKind::Select,
            message: message.into(),
            choices,
            initial: 0,
        }
    }

    pub fn text(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            kind: QuestionKind::Text,
            message: message.into(),
            choices: Vec::new(),
            initial: 0,
        }
    }

    pub fn multiline(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: QuestionKind::MultilineText,
            ..Self::text(name, message)
        }
    }

    pub fn with_initial(mut self, initial: usize) -> Self {
        self.initial = initial;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.kind == QuestionKind::Select {
            if self.choices.is_empty() {
                bail!("select question '{}' has no choices", self.name);
            }
            if self.initial >= self.choices.len() {
                bail!(
                    "select question '{}' starts at {} but has only {} choices",
                    self.name,
                    self.initial,
                    self.choices.len()
                );
            }
        }
        Ok(())
    }
}

/// type -> scope -> subject -> body
pub fn commit_questions(taxonomy: &Taxonomy, icon_format: IconFormat) -> Vec<QuestionSpec> {
    let choices = taxonomy
        .iter()
        .map(|entry| Choice {
            title: match icon_format.icon_for(entry) {
                Some(icon) => format!("{} {}", icon, entry.id),
                None => entry.id.to_string(),
            },
            value: entry.id.to_string(),
            description: Some(entry.description.to_string()),
        })
        .collect();

    vec![
        QuestionSpec::select(TYPE, "Select a commit type:", choices).with_initial(0),
        QuestionSpec::text(
            SCOPE,
            "Enter commit scope (optional, leave blank if none):",
        ),
        QuestionSpec::text(SUBJECT, "Enter commit subject (short description):"),
        QuestionSpec::multiline(
            BODY,
            "Enter commit body (optional, press Enter twice to finish):",
        ),
    ]
}

pub fn keep_or_replace_question(existing: &str) -> QuestionSpec {
    let choices = vec![
        Choice {
            title: "Keep".into(),
            value: KEEP.into(),
            description: None,
        },
        Choice {
            title: "Create new".into(),
            value: CREATE.into(),
            description: None,
        },
    ];
    QuestionSpec::select(
        KEEP_OR_REPLACE,
        format!(
            "Current commit message:\n\n\"{existing}\"\n\nWould you like to keep this message or provide a new one?"
        ),
        choices,
    )
}
