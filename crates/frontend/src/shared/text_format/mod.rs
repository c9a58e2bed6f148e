//! Answer text → HTML.
//!
//! The server annotates answers with a small markup vocabulary. Two
//! incompatible vocabularies exist, so the active one is chosen by
//! configuration and applied to the whole session:
//!
//! - [`AnswerFormat::Emphasis`]: `**bold**`, `*italic*`, newlines
//! - [`AnswerFormat::Annotated`]: risk alert banner, `- Clause X:` blocks,
//!   `Recommendation:` lines, newlines
//!
//! Input is HTML-escaped before any marker is interpreted, so everything
//! except the recognised markers is rendered as literal text.

mod annotated;
mod emphasis;

use serde::{Deserialize, Serialize};

pub(crate) const LINE_BREAK: &str = "<br>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFormat {
    #[default]
    Emphasis,
    Annotated,
}

impl AnswerFormat {
    pub fn render(self, text: &str) -> String {
        let escaped = html_escape(text);
        match self {
            AnswerFormat::Emphasis => emphasis::render(&escaped),
            AnswerFormat::Annotated => annotated::render(&escaped),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerFormat::Emphasis => "emphasis",
            AnswerFormat::Annotated => "annotated",
        }
    }
}

/// Simple HTML escape
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
