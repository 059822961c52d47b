//! Parser error types
//!
//! The grammar recovers every internal alternative failure by backtracking,
//! so only one syntax error kind exists: the deepest position the parser
//! reached, the terminals it would have accepted there, and a short snippet
//! of what it found instead. Rewrite hooks surface their own failure kind.

use rowan::TextSize;
use thiserror::Error;

/// A syntax error at the deepest failing position
///
/// `expected` is deduplicated and in first-recorded order; `found` is a
/// short lexeme snippet (empty at end of input).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at byte {position:?}: expected {}, found {found:?}", .expected.join(" | "))]
pub struct SyntaxError {
    /// Byte offset into the input
    pub position: TextSize,
    /// Terminals/productions acceptable at that offset
    pub expected: Vec<&'static str>,
    /// Short snippet of the offending lexeme, empty at end of input
    pub found: String,
}

impl SyntaxError {
    pub fn new(position: TextSize, expected: Vec<&'static str>, found: impl Into<String>) -> Self {
        Self {
            position,
            expected,
            found: found.into(),
        }
    }
}

/// A rewrite hook failure
///
/// Aborts the parse; the parser makes no attempt to continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rewrite hook on {rule} failed: {cause}")]
pub struct ActionError {
    /// Display name of the production the hook was attached to
    pub rule: &'static str,
    /// Hook-supplied failure description
    pub cause: String,
}

/// Any failure surfaced by a parse call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl ParseError {
    /// The syntax error, if this is one
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Action(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::new(TextSize::new(14), vec!["'('", "identifier"], "-");
        let msg = err.to_string();
        assert!(msg.contains("14"), "message: {}", msg);
        assert!(msg.contains("'('"), "message: {}", msg);
        assert!(msg.contains("identifier"), "message: {}", msg);
    }

    #[test]
    fn test_action_error_display() {
        let err = ActionError {
            rule: "node pattern",
            cause: "label not allowed here".into(),
        };
        assert!(err.to_string().contains("node pattern"));
    }
}
