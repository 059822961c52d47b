//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a `SyntaxNode` and provides methods to access its
//! children; casting is by node kind and never fails after a successful
//! parse of the corresponding rule.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};
use smol_str::SmolStr;

// ============================================================================
// Helper utilities
// ============================================================================

/// Check if a token kind can serve as a name. The grammar deliberately
/// admits keywords and pure-digit words wherever an identifier is expected.
#[inline]
pub(crate) fn is_name_token(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::IDENT || kind == SyntaxKind::INTEGER || kind.is_keyword()
}

/// Strip surrounding single quotes and resolve `\'` and `\\` escapes.
pub(crate) fn unescape_string(text: &str) -> String {
    let inner = text
        .strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(text);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Check if a syntax node has a direct child token of the specified kind.
#[inline]
pub(crate) fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// Find the first direct child token of the specified kind.
#[inline]
pub(crate) fn find_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// Find the first direct child token that can serve as a name.
#[inline]
pub(crate) fn find_name_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| is_name_token(t.kind()))
}

/// Text of a token as a cheap string.
#[inline]
pub(crate) fn token_text(token: &SyntaxToken) -> SmolStr {
    SmolStr::new(token.text())
}

// ============================================================================
// AstNode trait
// ============================================================================

/// A typed view over a syntax node of a known kind
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }

    /// Source span of this node (byte offsets into the input)
    fn text_range(&self) -> rowan::TextRange {
        self.syntax().text_range()
    }
}

/// Generate a tuple struct wrapping a `SyntaxNode` plus its `AstNode` impl
macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Generate a method returning the first child of a given AST type
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Generate a method returning an iterator over children of a given AST type
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

// Submodules — declared after macros so macro_rules! are in scope
mod clauses;
mod expressions;
mod patterns;
mod predicates;

pub use clauses::{
    AsBinding, BoundExpr, Clause, LimitClause, MatchClause, OrderByClause, OrderDirection,
    OrderKey, OrderTarget, Projection, Query, ReturnClause, ReturnProjection, SkipClause,
    WhereClause, WithClause,
};
pub use expressions::{FunctionCall, FunctionName, ListExpr, PropertyAccess, Value};
pub use patterns::{
    AliasLabel, Cardinality, EdgeContent, EdgeDirection, EdgePattern, KeyValue, Label,
    NodePattern, PathBinding, PatternList, PropertyMap, Traversal,
};
pub use predicates::{
    AndExpr, BinaryComparison, CompOp, ComparisonOperand, HasComparison, InComparison,
    IsNullComparison, LabelAssertion, NotExpr, OrExpr, ParenExpr, Predicate, RegexComparison,
    XorExpr,
};
