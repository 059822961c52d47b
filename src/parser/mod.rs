//! Rowan-based parser for the read-only Cypher subset
//!
//! This module provides a lossless, backtracking parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! We build a lossless CST that preserves all whitespace (the grammar is
//! whitespace-sensitive after keywords), then extract a typed AST layer on
//! top.
//!
//! ## Architecture
//!
//! ```text
//! Query Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → event log with checkpoint rewinding (ordered choice)
//!     ↓
//! GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers and byte spans
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! ## Acceptance contract
//!
//! A parse either recognizes the whole input under the requested rule or
//! fails with a single [`SyntaxError`] naming the deepest byte offset any
//! alternative reached and the terminals expected there. There is no error
//! recovery and no partial tree.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod canonical;
mod errors;
pub(crate) mod grammar;
mod lexer;
mod syntax_kind;

pub use ast::AstNode;
pub use errors::{ActionError, ParseError, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, RuleKind, parse_query, parse_rule};
pub use syntax_kind::{
    CypherLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
