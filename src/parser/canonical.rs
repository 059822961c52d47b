//! Canonical re-emission of a subtree
//!
//! Joins the non-trivia tokens of a subtree with single spaces. Whitespace
//! is legal between any two tokens of the grammar and mandatory after most
//! keywords, so the canonical form of any accepted input is itself accepted
//! and parses to an equivalent tree (modulo whitespace spans).

use super::SyntaxNode;

/// Re-emit a subtree with canonical whitespace
pub fn canonical_text(node: &SyntaxNode) -> String {
    let mut out = String::new();
    for element in node.descendants_with_tokens() {
        if let Some(token) = element.into_token() {
            if token.kind().is_trivia() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token.text());
        }
    }
    out
}
