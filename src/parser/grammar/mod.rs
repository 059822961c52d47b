//! Grammar productions for the read-only Cypher subset
//!
//! One function per production, grouped by layer:
//! - `expressions` — property access, value expressions, lists, function calls
//! - `patterns` — labels, property maps, nodes, edges, traversals
//! - `predicates` — comparisons and boolean connective trees
//! - `clauses` — MATCH/WHERE/WITH/ORDER BY/SKIP/LIMIT/RETURN and the query
//!
//! Every function anchors at the current token, never consumes input on
//! failure paths it owns (callers rewind through [`Parser::try_parse`] or
//! explicit checkpoints), and records what it expected for diagnostics.

pub(crate) mod clauses;
pub(crate) mod expressions;
pub(crate) mod patterns;
pub(crate) mod predicates;

// Shared imports — submodules get them via `use super::*;`
pub(super) use super::parser::{ParseResult, Parser};
pub(super) use super::syntax_kind::SyntaxKind;

/// Run `body` inside a fresh `kind` node. Leading trivia is eaten before the
/// node opens so spans start tight; the node is closed on both outcomes and
/// a failing body is rolled back by the caller's checkpoint.
pub(super) fn with_node(
    p: &mut Parser,
    kind: SyntaxKind,
    body: impl FnOnce(&mut Parser) -> ParseResult,
) -> ParseResult {
    p.eat_trivia();
    p.start_node(kind);
    let result = body(p);
    p.finish_node();
    result
}

/// `item (',' item)*` — at least one item. A trailing `,` that is not
/// followed by an item is rolled back and left for the caller to reject.
pub(super) fn comma_separated(
    p: &mut Parser,
    item: fn(&mut Parser) -> ParseResult,
) -> ParseResult {
    item(p)?;
    loop {
        let checkpoint = p.checkpoint();
        if p.expect(SyntaxKind::COMMA).is_err() {
            p.rewind(checkpoint);
            break;
        }
        if item(p).is_err() {
            p.rewind(checkpoint);
            break;
        }
    }
    Ok(())
}
