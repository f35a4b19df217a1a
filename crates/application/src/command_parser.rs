//! Command parser - Route chat text to typed commands
//!
//! A small ordered table of quick patterns decides whether a message is an
//! availability query; everything else is treated as a booking request,
//! because the resolver can always produce a best-guess window for it.

use std::fmt;

use domain::AgentCommand;
use tracing::debug;

/// Parser for converting natural language into an [`AgentCommand`]
pub struct CommandParser {
    /// Patterns for quick command matching, evaluated top to bottom
    quick_patterns: Vec<QuickPattern>,
}

impl fmt::Debug for CommandParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandParser")
            .field("quick_patterns_count", &self.quick_patterns.len())
            .finish()
    }
}

/// A pattern for quick matching
struct QuickPattern {
    /// Keywords that trigger this pattern
    keywords: Vec<&'static str>,
    /// Function to build the command
    builder: fn(&str) -> Option<AgentCommand>,
}

impl CommandParser {
    /// Create a new command parser
    #[must_use]
    pub fn new() -> Self {
        Self {
            quick_patterns: Self::build_quick_patterns(),
        }
    }

    /// Build the list of quick-match patterns
    fn build_quick_patterns() -> Vec<QuickPattern> {
        vec![
            // Availability query
            QuickPattern {
                keywords: vec![
                    "show availability",
                    "available slots",
                    "free times",
                    "free slots",
                ],
                builder: |input| {
                    Some(AgentCommand::ShowAvailability {
                        date_text: input.to_string(),
                    })
                },
            },
        ]
    }

    /// Parse chat input into a command
    ///
    /// Unmatched input becomes a booking request rather than an error.
    #[must_use]
    pub fn parse(&self, input: &str) -> AgentCommand {
        let lower = input.to_lowercase();

        for pattern in &self.quick_patterns {
            if pattern.keywords.iter().any(|kw| lower.contains(kw)) {
                if let Some(cmd) = (pattern.builder)(input) {
                    debug!(command = %cmd.description(), "Quick-parsed command");
                    return cmd;
                }
            }
        }

        AgentCommand::BookMeeting {
            text: input.to_string(),
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
