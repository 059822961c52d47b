//! # cyro-base
//!
//! Core library for parsing a read-only subset of the Cypher graph-query
//! language.
//!
//! The grammar deliberately has no write clause — `CREATE`, `MERGE`, `SET`,
//! `DELETE`, `REMOVE`, `FOREACH` simply do not exist in it — so acceptance
//! by this parser is the read-only guarantee callers rely on. A successful
//! parse yields a lossless CST with byte spans, a typed AST layer on top,
//! and a rewrite-hook mechanism for tooling that transforms subtrees
//! (relabeling, traversal extraction, translation to other engines).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! rewrite   → QueryParser driver, action registry, subtree rewriting
//!   ↓
//! parser    → Logos lexer, backtracking grammar, rowan CST, typed AST
//! ```
//!
//! ## Quick start
//!
//! ```
//! use cyro::parser::{AstNode, ast, parse_query};
//!
//! let parse = parse_query("MATCH (n:Person) WHERE n.age > 30 RETURN n.name").unwrap();
//! let query = ast::Query::cast(parse.rule_node()).unwrap();
//! assert_eq!(query.clauses().len(), 3);
//! ```

// ============================================================================
// MODULES (dependency order: parser → rewrite)
// ============================================================================

/// Parser: Logos lexer, backtracking grammar, CST and typed AST
pub mod parser;

/// Rewrite hooks and the `QueryParser` driver
pub mod rewrite;

// Re-export the items nearly every embedder needs
pub use parser::{
    AstNode, Parse, ParseError, RuleKind, SyntaxError, SyntaxKind, SyntaxNode, parse_query,
    parse_rule,
};
pub use rewrite::{ActionHandle, NamedRule, QueryParser};
