//! Backtracking recursive descent parser for the read-only Cypher subset
//!
//! Builds a rowan GreenNode tree from tokens.
//!
//! The grammar is an ordered-choice grammar: an alternative that fails at
//! its start position is rolled back and the next one is tried. To make
//! that cheap, parsing does not drive a `GreenNodeBuilder` directly;
//! instead it appends to a flat event log (`Start`/`Token`/`Finish`) and a
//! checkpoint rewind is a simple truncation. Once recognition succeeds the
//! events are replayed into the green tree. This is the rust-analyzer
//! event-parser approach with truncation instead of error recovery: the
//! grammar's contract is accept-or-reject, so the first uncorrectable
//! failure surfaces as a single [`SyntaxError`] carrying the deepest byte
//! offset any alternative reached and the terminals expected there.

use super::errors::{ParseError, SyntaxError};
use super::grammar;
use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextSize};
use rustc_hash::FxHashSet;
use tracing::trace;

/// Parse result containing the green tree for a successfully recognized rule
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    rule: RuleKind,
}

impl Parse {
    /// Get the root syntax node (a `SOURCE` wrapper owning outer whitespace)
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Get the underlying green tree
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// The rule this parse was anchored at
    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    /// Get the node for the requested rule (the `SOURCE` wrapper's only
    /// non-trivia child). A successful parse always has one; should a
    /// rewrite hook strip it, the wrapper itself is returned.
    pub fn rule_node(&self) -> super::SyntaxNode {
        let root = self.syntax();
        root.children().next().unwrap_or(root)
    }

    pub(crate) fn with_green(&self, green: GreenNode) -> Parse {
        Parse {
            green,
            rule: self.rule,
        }
    }
}

/// Named productions usable as parse entry points
///
/// Every production the grammar names can be parsed in isolation, anchored
/// at the input start and required to consume the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Complete query: MATCH/WHERE repetitions, optional WITH section, RETURN section
    Query,
    /// `MATCH ...` / `OPTIONAL MATCH ...`
    MatchClause,
    /// `WHERE <predicate>`
    WhereClause,
    /// `WITH <projections>`
    WithClause,
    /// `ORDER BY <keys>`
    OrderByClause,
    /// `SKIP <integer>`
    SkipClause,
    /// `LIMIT <integer>`
    LimitClause,
    /// `RETURN <projections>`
    ReturnClause,
    /// Comma-joined traversals
    PatternList,
    /// Node/edge chain
    Traversal,
    /// `(alias:Label {props})`
    NodePattern,
    /// Directed or undirected edge
    Edge,
    /// `[alias:Label {props} *min..max]`
    EdgeContent,
    /// `*` / `*min..max`
    Cardinality,
    /// `{key: value, ...}`
    PropertyMap,
    /// `ident.ident`
    PropertyAccess,
    /// `[value, ...]`
    List,
    /// `type`/`count`/`sum`/`percentileDisc`/`stdev` call
    FunctionCall,
    /// Boolean/comparison tree (a WHERE body)
    Predicate,
}

impl RuleKind {
    /// Human-readable name, used in diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::MatchClause => "MATCH clause",
            Self::WhereClause => "WHERE clause",
            Self::WithClause => "WITH clause",
            Self::OrderByClause => "ORDER BY clause",
            Self::SkipClause => "SKIP clause",
            Self::LimitClause => "LIMIT clause",
            Self::ReturnClause => "RETURN clause",
            Self::PatternList => "pattern list",
            Self::Traversal => "traversal",
            Self::NodePattern => "node pattern",
            Self::Edge => "edge",
            Self::EdgeContent => "edge content",
            Self::Cardinality => "cardinality",
            Self::PropertyMap => "property map",
            Self::PropertyAccess => "property access",
            Self::List => "list",
            Self::FunctionCall => "function call",
            Self::Predicate => "predicate",
        }
    }

    fn dispatch(self, p: &mut Parser) -> ParseResult {
        match self {
            Self::Query => grammar::clauses::query(p),
            Self::MatchClause => grammar::clauses::match_clause(p),
            Self::WhereClause => grammar::clauses::where_clause(p),
            Self::WithClause => grammar::clauses::with_clause(p),
            Self::OrderByClause => grammar::clauses::order_by_clause(p),
            Self::SkipClause => grammar::clauses::skip_clause(p),
            Self::LimitClause => grammar::clauses::limit_clause(p),
            Self::ReturnClause => grammar::clauses::return_clause(p),
            Self::PatternList => grammar::patterns::pattern_list(p),
            Self::Traversal => grammar::patterns::traversal(p),
            Self::NodePattern => grammar::patterns::node_pattern(p),
            Self::Edge => grammar::patterns::edge(p),
            Self::EdgeContent => grammar::patterns::edge_content(p),
            Self::Cardinality => grammar::patterns::cardinality(p),
            Self::PropertyMap => grammar::patterns::property_map(p),
            Self::PropertyAccess => grammar::expressions::property_access(p),
            Self::List => grammar::expressions::list(p),
            Self::FunctionCall => grammar::expressions::function_call(p),
            Self::Predicate => grammar::predicates::predicate(p),
        }
    }
}

/// Parse a complete query
pub fn parse_query(input: &str) -> Result<Parse, ParseError> {
    parse_rule(input, RuleKind::Query)
}

/// Parse any named production, anchored at the input start and requiring
/// the whole input to be consumed
pub fn parse_rule(input: &str, rule: RuleKind) -> Result<Parse, ParseError> {
    trace!(rule = rule.display_name(), len = input.len(), "parse");
    let tokens: Vec<_> = tokenize(input);
    let mut parser = Parser::new(&tokens, input);

    parser.eat_trivia();
    let recognized = rule.dispatch(&mut parser);
    if recognized.is_ok() {
        parser.eat_trivia();
        if parser.at_eof() {
            return Ok(Parse {
                green: parser.build_tree(),
                rule,
            });
        }
        // The rule matched a prefix; the leftover lexeme is the failure
        let _ = parser.fail("end of input");
    }
    Err(parser.into_syntax_error().into())
}

/// Local failure marker: the alternative did not match and the caller
/// should rewind. The diagnostic payload lives in the parser itself.
pub(crate) struct Backtrack;

pub(crate) type ParseResult = Result<(), Backtrack>;

/// A position the parser can rewind to
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    pos: usize,
    events: usize,
}

#[derive(Debug, Clone, Copy)]
enum Event {
    Start(SyntaxKind),
    Token,
    Finish,
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    input: &'a str,
    pos: usize,
    events: Vec<Event>,
    /// Deepest byte offset any expectation failed at
    furthest: TextSize,
    /// Terminals expected at `furthest`, in first-recorded order
    expected: Vec<&'static str>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token<'a>], input: &'a str) -> Self {
        Self {
            tokens,
            input,
            pos: 0,
            events: Vec::new(),
            furthest: TextSize::new(0),
            expected: Vec::new(),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn current_kind(&self) -> Option<SyntaxKind> {
        self.current().map(|t| t.kind)
    }

    pub(crate) fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Byte offset of the current token, or the input end at EOF
    pub(crate) fn offset(&self) -> TextSize {
        self.current()
            .map(|t| t.offset)
            .unwrap_or_else(|| TextSize::of(self.input))
    }

    /// True when the current token can serve as a name. The source grammar
    /// is deliberately permissive here: keywords and pure-digit words are
    /// admitted wherever an identifier is expected.
    pub(crate) fn at_name(&self) -> bool {
        match self.current_kind() {
            Some(kind) => {
                kind == SyntaxKind::IDENT || kind == SyntaxKind::INTEGER || kind.is_keyword()
            }
            None => false,
        }
    }

    /// True when the current token is a name with the given
    /// case-insensitive text (contextual function names like `count`)
    pub(crate) fn at_contextual(&self, word: &str) -> bool {
        self.at(SyntaxKind::IDENT) && self.current_text().eq_ignore_ascii_case(word)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub(crate) fn bump(&mut self) {
        if self.pos < self.tokens.len() {
            self.events.push(Event::Token);
            self.pos += 1;
        }
    }

    pub(crate) fn eat_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    /// Eat trivia, then consume one token of `kind` or fail
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> ParseResult {
        self.eat_trivia();
        if self.at(kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.fail(kind.display_name()))
        }
    }

    /// Eat trivia, then consume a name token or fail
    pub(crate) fn expect_name(&mut self) -> ParseResult {
        self.eat_trivia();
        if self.at_name() {
            self.bump();
            Ok(())
        } else {
            Err(self.fail("identifier"))
        }
    }

    /// Consume a keyword. Most keywords demand at least one whitespace
    /// character immediately after so they cannot eat an identifier prefix;
    /// clause-final keywords (NULL, ASC, DESC) and HAS relax that.
    pub(crate) fn keyword(&mut self, kind: SyntaxKind, require_ws: bool) -> ParseResult {
        self.eat_trivia();
        if !self.at(kind) {
            return Err(self.fail(kind.display_name()));
        }
        self.bump();
        if require_ws {
            if self.at(SyntaxKind::WHITESPACE) {
                self.eat_trivia();
                Ok(())
            } else {
                Err(self.fail("whitespace"))
            }
        } else {
            // trailing whitespace is left for the next terminal, so nodes
            // ending in NULL/ASC/DESC keep tight spans
            Ok(())
        }
    }

    // =========================================================================
    // Backtracking
    // =========================================================================

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            events: self.events.len(),
        }
    }

    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.events.truncate(checkpoint.events);
    }

    /// Run an alternative; rewind and report false if it fails
    pub(crate) fn try_parse(&mut self, f: impl FnOnce(&mut Self) -> ParseResult) -> bool {
        let checkpoint = self.checkpoint();
        if f(self).is_ok() {
            true
        } else {
            self.rewind(checkpoint);
            false
        }
    }

    // =========================================================================
    // Failure tracking
    // =========================================================================

    /// Record a failed expectation at the current offset. Failures at a new
    /// deepest offset reset the expected set; ties accumulate.
    pub(crate) fn fail(&mut self, expected: &'static str) -> Backtrack {
        let offset = self.offset();
        if offset > self.furthest {
            trace!(offset = u32::from(offset), expected, "deepest failure");
            self.furthest = offset;
            self.expected.clear();
            self.expected.push(expected);
        } else if offset == self.furthest {
            self.expected.push(expected);
        }
        Backtrack
    }

    pub(crate) fn into_syntax_error(self) -> SyntaxError {
        let mut seen = FxHashSet::default();
        let expected: Vec<&'static str> = self
            .expected
            .into_iter()
            .filter(|e| seen.insert(*e))
            .collect();
        let found = self
            .tokens
            .iter()
            .find(|t| t.offset == self.furthest)
            .map(|t| {
                let snippet: String = t.text.chars().take(16).collect();
                snippet
            })
            .unwrap_or_default();
        SyntaxError::new(self.furthest, expected, found)
    }

    // =========================================================================
    // Node building
    // =========================================================================

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.events.push(Event::Start(kind));
    }

    /// Open a node retroactively at a checkpoint, wrapping everything parsed
    /// since. The matching `finish_node` closes it.
    pub(crate) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.events.insert(checkpoint.events, Event::Start(kind));
    }

    pub(crate) fn finish_node(&mut self) {
        self.events.push(Event::Finish);
    }

    /// Replay the event log into a green tree under a `SOURCE` wrapper
    fn build_tree(&self) -> GreenNode {
        let mut builder = GreenNodeBuilder::new();
        let mut cursor = 0;
        builder.start_node(SyntaxKind::SOURCE.into());
        for event in &self.events {
            match event {
                Event::Start(kind) => builder.start_node((*kind).into()),
                Event::Token => {
                    let token = &self.tokens[cursor];
                    builder.token(token.kind.into(), token.text);
                    cursor += 1;
                }
                Event::Finish => builder.finish_node(),
            }
        }
        builder.finish_node();
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_query() {
        let parse = parse_query("RETURN n").expect("should parse");
        let root = parse.syntax();
        assert_eq!(root.kind(), SyntaxKind::SOURCE);
        assert_eq!(parse.rule_node().kind(), SyntaxKind::QUERY);
    }

    #[test]
    fn test_parse_rule_anchors_at_end() {
        // A valid node followed by junk must not parse
        assert!(parse_rule("(n) extra", RuleKind::NodePattern).is_err());
        assert!(parse_rule("(n)", RuleKind::NodePattern).is_ok());
    }

    #[test]
    fn test_outer_whitespace_is_kept_in_source() {
        let parse = parse_rule("  (n)  ", RuleKind::NodePattern).expect("should parse");
        let root = parse.syntax();
        assert_eq!(u32::from(root.text_range().len()), 7);
        let node = parse.rule_node();
        assert_eq!(node.kind(), SyntaxKind::NODE_PATTERN);
        assert_eq!(u32::from(node.text_range().start()), 2);
        assert_eq!(u32::from(node.text_range().end()), 5);
    }

    #[test]
    fn test_deepest_failure_position() {
        // (n:Node)---(m): `--` parses as one undirected edge, the stranded
        // third `-` fails where a node must start
        let err = parse_query("MATCH (n:Node)---(m) RETURN n").unwrap_err();
        let syntax = err.as_syntax().expect("syntax error");
        assert_eq!(u32::from(syntax.position), 16);
        assert_eq!(syntax.found, "-");
    }

    #[test]
    fn test_expected_set_is_deduplicated() {
        let err = parse_query("MATCH").unwrap_err();
        let syntax = err.as_syntax().expect("syntax error");
        let unique: std::collections::HashSet<_> = syntax.expected.iter().collect();
        assert_eq!(unique.len(), syntax.expected.len());
    }
}
