use anyhow::Result;
use log::debug;
use thiserror::Error;

use crate::format::CommitDraft;
use crate::prompt::{Answer, Prompter};
use crate::question::{self, QuestionSpec};
use crate::taxonomy::Taxonomy;

/// Raw answers from the commit question sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    pub commit_type: Option<String>,
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    Complete(AnswerRecord),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no commit type selected")]
    MissingType,
    #[error("unknown commit type '{0}'")]
    UnknownType(String),
    #[error("commit subject is empty")]
    EmptySubject,
}

/// Ask every question in order, stopping at the first cancellation.
pub fn collect(prompter: &mut dyn Prompter, questions: &[QuestionSpec]) -> Result<Collected> {
    let mut record = AnswerRecord::default();

    for q in questions {
        let value = match prompter.ask(q)? {
            Answer::Answered(value) => value,
            Answer::Cancelled => {
                debug!("question '{}' cancelled", q.name);
                return Ok(Collected::Cancelled);
            }
        };

        match q.name {
            question::TYPE => record.commit_type = Some(value),
            question::SCOPE => record.scope = Some(value),
            question::SUBJECT => record.subject = Some(value),
            question::BODY => record.body = Some(value),
            other => debug!("ignoring answer for unknown question '{other}'"),
        }
    }

    Ok(Collected::Complete(record))
}

impl AnswerRecord {
    /// Checks the record once the whole sequence has been answered.
    pub fn validate(&self, taxonomy: &Taxonomy) -> Result<CommitDraft, ValidationError> {
        let type_id = non_empty(self.commit_type.as_deref()).ok_or(ValidationError::MissingType)?;
        let kind = taxonomy
            .get(type_id)
            .ok_or_else(|| ValidationError::UnknownType(type_id.to_string()))?;
        let subject = as_entered(self.subject.as_deref()).ok_or(ValidationError::EmptySubject)?;

        Ok(CommitDraft {
            kind,
            scope: as_entered(self.scope.as_deref()).map(String::from),
            subject: subject.to_string(),
            body: as_entered(self.body.as_deref())
                .map(|body| body.trim_end_matches(['\n', '\r']).to_string()),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Like [`non_empty`] but keeps the text exactly as typed.
fn as_entered(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
