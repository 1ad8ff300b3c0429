#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Result};
use commit_composer::prompt::{Answer, Prompter};
use commit_composer::question::QuestionSpec;
use tempfile::TempDir;

/// One scripted reply, consumed in order.
pub enum Step {
    Answer(&'static str),
    Cancel,
    Fail(&'static str),
}

/// Prompter that replays a fixed script and records what was asked.
pub struct ScriptedPrompter {
    steps: VecDeque<Step>,
    pub asked: Vec<QuestionSpec>,
}

impl ScriptedPrompter {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            asked: Vec::new(),
        }
    }

    pub fn asked_names(&self) -> Vec<&'static str> {
        self.asked.iter().map(|q| q.name).collect()
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &QuestionSpec) -> Result<Answer> {
        self.asked.push(question.clone());
        match self.steps.pop_front() {
            Some(Step::Answer(value)) => Ok(Answer::Answered(value.to_string())),
            Some(Step::Cancel) => Ok(Answer::Cancelled),
            Some(Step::Fail(msg)) => Err(anyhow!(msg)),
            None => panic!("unexpected question '{}'", question.name),
        }
    }
}

/// Temp dir holding a commit message file with the given content.
pub fn message_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&path, content).expect("failed to write message file");
    (dir, path)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("failed to read message file")
}

pub struct DirGuard {
    original: PathBuf,
}

impl DirGuard {
    pub fn enter(path: &Path) -> Self {
        let original = std::env::current_dir().expect("failed to read current directory");
        std::env::set_current_dir(path).expect("failed to change current directory");
        Self { original }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub struct EnvGuard {
    previous: HashMap<String, Option<String>>,
}

impl EnvGuard {
    pub fn set(pairs: &[(&str, &str)]) -> Self {
        let mut previous = HashMap::new();
        for (key, value) in pairs {
            previous.insert((*key).to_string(), std::env::var(key).ok());
            std::env::set_var(key, value);
        }
        Self { previous }
    }

    pub fn clear(keys: &[&str]) -> Self {
        let mut previous = HashMap::new();
        for key in keys {
            previous.insert((*key).to_string(), std::env::var(key).ok());
            std::env::remove_var(key);
        }
        Self { previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            if let Some(value) = value {
                std::env::set_var(key, value);
            } else {
                std::env::remove_var(key);
            }
        }
    }
}

pub fn init_git_repo() -> TempDir {
    let repo = TempDir::new().expect("failed to create temp dir");
    let output = Command::new("git")
        .arg("init")
        .current_dir(repo.path())
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    repo
}
