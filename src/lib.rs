pub mod cli;
pub mod collector;
pub mod config;
pub mod format;
pub mod git;
pub mod prompt;
pub mod question;
pub mod taxonomy;
pub mod ui;
pub mod workflow;
