//! Agent commands - Strongly typed representations of user intents

use serde::{Deserialize, Serialize};

/// Commands the scheduling agent can execute
///
/// Each variant represents a distinct user intent with its required
/// parameters. Commands are parsed from natural-language chat input or
/// explicit API calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentCommand {
    /// List free slots for a day ("show availability", "free slots")
    ShowAvailability {
        /// The raw text carrying the date expression ("tomorrow",
        /// "Friday", "2025-06-29", ...)
        date_text: String,
    },

    /// Book a meeting in the window described by the text
    ///
    /// Any message that is not an availability query is treated as a
    /// booking request; the resolver always produces a best-guess window.
    BookMeeting {
        /// The full request text
        text: String,
    },
}

impl AgentCommand {
    /// Get a human-readable description of the command
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::ShowAvailability { date_text } => {
                format!("Show availability for '{date_text}'")
            },
            Self::BookMeeting { text } => {
                let preview: String = text.chars().take(50).collect();
                format!("Book meeting: {preview}")
            },
        }
    }
}
