use colored::Colorize;

use crate::format::IconFormat;
use crate::taxonomy::Taxonomy;
use crate::workflow::{ComposeError, Outcome};

/// Console diagnostic for a finished run.
///
/// Success paths and a missing argument stay silent.
pub fn diagnostic(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Kept | Outcome::Written => None,
        Outcome::Aborted => Some("Commit aborted by user.".yellow().to_string()),
        Outcome::Failed(ComposeError::MissingArgument) => None,
        Outcome::Failed(err) => Some(format!("{} {}", "error:".red().bold(), err)),
    }
}

/// Aborts go to stdout, failures to stderr.
pub fn report(outcome: &Outcome) {
    let Some(line) = diagnostic(outcome) else {
        return;
    };
    if matches!(outcome, Outcome::Aborted) {
        println!("{line}");
    } else {
        eprintln!("{line}");
    }
}

/// One line per commit type, in taxonomy order.
pub fn type_listing(taxonomy: &Taxonomy, icon_format: IconFormat) -> Vec<String> {
    let width = taxonomy.iter().map(|e| e.id.len()).max().unwrap_or(0);
    taxonomy
        .iter()
        .map(|entry| {
            let label = format!("{:<width$}", entry.id, width = width);
            match icon_format.icon_for(entry) {
                Some(icon) => format!("{} {}  {}", icon, label, entry.description),
                None => format!("{}  {}", label, entry.description),
            }
        })
        .collect()
}

pub fn print_types(taxonomy: &Taxonomy, icon_format: IconFormat) {
    for line in type_listing(taxonomy, icon_format) {
        println!("{line}");
    }
}
