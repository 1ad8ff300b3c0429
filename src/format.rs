use serde::{Deserialize, Serialize};

use crate::taxonomy::CommitTypeEntry;

/// How the commit type's icon is rendered in the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
    #[default]
    Unicode,
    Shortcode,
    None,
}

impl IconFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unicode" => Some(Self::Unicode),
            "shortcode" => Some(Self::Shortcode),
            "none" | "off" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Shortcode => "shortcode",
            Self::None => "none",
        }
    }

    pub fn icon_for(self, entry: &CommitTypeEntry) -> Option<&'static str> {
        match self {
            Self::Unicode => Some(entry.icon),
            Self::Shortcode => Some(entry.shortcode),
            Self::None => None,
        }
    }
}

/// Validated answers, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDraft {
    pub kind: &'static CommitTypeEntry,
    pub scope: Option<String>,
    pub subject: String,
    pub body: Option<String>,
}

/// Render `<icon> <type>[(<scope>)]: <subject>[\n\n<body>]\n`
pub fn format_message(draft: &CommitDraft, icon_format: IconFormat) -> String {
    let mut message = String::new();

    if let Some(icon) = icon_format.icon_for(draft.kind) {
        message.push_str(icon);
        message.push(' ');
    }
    message.push_str(draft.kind.id);

    if let Some(scope) = draft.scope.as_deref().filter(|s| !s.is_empty()) {
        message.push('(');
        message.push_str(scope);
        message.push(')');
    }

    message.push_str(": ");
    message.push_str(&draft.subject);

    if let Some(body) = draft.body.as_deref().filter(|b| !b.is_empty()) {
        message.push_str("\n\n");
        message.push_str(body);
    }

    message.push('\n');
    message
}
