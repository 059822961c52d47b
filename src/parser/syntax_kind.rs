//! Syntax kinds for the rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! for the read-only Cypher subset.

/// All syntax kinds (tokens and nodes) in the query grammar
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (clauses, patterns, predicates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (the grammar has no comments; whitespace is the only trivia)
    // =========================================================================
    WHITESPACE = 0,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier; a leading digit is allowed
    INTEGER, // 42
    FLOAT,   // 0.5
    STRING,  // 'hello' with \' and \\ escapes

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,   // (
    R_PAREN,   // )
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    COLON,     // :
    COMMA,     // ,
    DOT,       // .
    DOT_DOT,   // ..
    MINUS,     // -
    STAR,      // *

    // =========================================================================
    // OPERATORS (multi-char kinds lex as single tokens, so longest-match
    // ordering between <= and <, <> and < is settled before the parser runs)
    // =========================================================================
    EQ,       // =
    LT,       // <
    LT_EQ,    // <=
    GT,       // >
    GT_EQ,    // >=
    LT_GT,    // <>
    EQ_TILDE, // =~

    // =========================================================================
    // KEYWORDS (case-insensitive in source text)
    // =========================================================================
    MATCH_KW,
    OPTIONAL_KW,
    WHERE_KW,
    WITH_KW,
    AS_KW,
    AND_KW,
    OR_KW,
    XOR_KW,
    NOT_KW,
    RETURN_KW,
    DISTINCT_KW,
    HAS_KW,
    IN_KW,
    IS_KW,
    NULL_KW,
    ORDER_KW,
    BY_KW,
    SKIP_KW,
    LIMIT_KW,
    ASC_KW,
    DESC_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root wrapper: owns leading/trailing whitespace so token offsets stay
    // absolute; its single non-trivia child is the requested rule's node
    SOURCE,

    // Expressions
    PROPERTY_ACCESS, // n.name
    LIST_EXPR,       // ['a', 'b']
    FUNCTION_CALL,   // count(DISTINCT n), type(r), sum(n.x), ...

    // Graph patterns
    LABEL,        // :Person
    ALIAS_LABEL,  // p:Person:Place, :Person, p
    KEY_VALUE,    // name: 'dave'
    PROPERTY_MAP, // {name: 'dave', age: 34}
    NODE_PATTERN, // (p:Person {name: 'dave'})
    EDGE_CONTENT, // [k:KNOWS {since: 1999} *1..5]
    CARDINALITY,  // * or *1..5
    EDGE_PATTERN, // -->, <-[:KNOWS]-, --
    TRAVERSAL,    // (n)-[:KNOWS]->(m)
    PATTERN_LIST, // (n)--(m), (j)--(k)
    PATH_BINDING, // p = (n)-->(m)

    // Comparisons
    HAS_COMPARISON,     // has(n.name)
    BINARY_COMPARISON,  // n.age > 30
    IN_COMPARISON,      // n.name IN ['a', 'b']
    IS_NULL_COMPARISON, // n.prop IS NULL
    REGEX_COMPARISON,   // n.name =~ 'Tob.*'
    LABEL_ASSERTION,    // n:Person

    // Boolean trees
    AND_EXPR,   // a AND b AND c (flattened run)
    OR_EXPR,    // a OR b
    XOR_EXPR,   // a XOR b
    NOT_EXPR,   // NOT a
    PAREN_EXPR, // (a OR b)

    // Projections
    AS_BINDING, // count(n) AS total
    ORDER_KEY,  // n.name DESC

    // Clauses
    MATCH_CLAUSE,
    WHERE_CLAUSE,
    WITH_CLAUSE,
    ORDER_BY_CLAUSE,
    SKIP_CLAUSE,
    LIMIT_CLAUSE,
    RETURN_CLAUSE,
    QUERY,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token
    pub fn is_trivia(self) -> bool {
        self == Self::WHITESPACE
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::MATCH_KW as u16) && (self as u16) <= (Self::DESC_KW as u16)
    }

    /// Check if this is a punctuation or operator token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::EQ_TILDE as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(self, Self::IDENT | Self::INTEGER | Self::FLOAT | Self::STRING)
    }

    /// Check if this is a composite node kind (as opposed to a token kind)
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::SOURCE as u16) && (self as u16) < (Self::ERROR as u16)
    }

    /// Human-readable name for error messages
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",

            Self::IDENT => "identifier",
            Self::INTEGER => "integer",
            Self::FLOAT => "float",
            Self::STRING => "string",

            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::COLON => "':'",
            Self::COMMA => "','",
            Self::DOT => "'.'",
            Self::DOT_DOT => "'..'",
            Self::MINUS => "'-'",
            Self::STAR => "'*'",

            Self::EQ => "'='",
            Self::LT => "'<'",
            Self::LT_EQ => "'<='",
            Self::GT => "'>'",
            Self::GT_EQ => "'>='",
            Self::LT_GT => "'<>'",
            Self::EQ_TILDE => "'=~'",

            Self::MATCH_KW => "'MATCH'",
            Self::OPTIONAL_KW => "'OPTIONAL'",
            Self::WHERE_KW => "'WHERE'",
            Self::WITH_KW => "'WITH'",
            Self::AS_KW => "'AS'",
            Self::AND_KW => "'AND'",
            Self::OR_KW => "'OR'",
            Self::XOR_KW => "'XOR'",
            Self::NOT_KW => "'NOT'",
            Self::RETURN_KW => "'RETURN'",
            Self::DISTINCT_KW => "'DISTINCT'",
            Self::HAS_KW => "'HAS'",
            Self::IN_KW => "'IN'",
            Self::IS_KW => "'IS'",
            Self::NULL_KW => "'NULL'",
            Self::ORDER_KW => "'ORDER'",
            Self::BY_KW => "'BY'",
            Self::SKIP_KW => "'SKIP'",
            Self::LIMIT_KW => "'LIMIT'",
            Self::ASC_KW => "'ASC'",
            Self::DESC_KW => "'DESC'",

            Self::SOURCE => "source",
            Self::PROPERTY_ACCESS => "property access",
            Self::LIST_EXPR => "list",
            Self::FUNCTION_CALL => "function call",
            Self::LABEL => "label",
            Self::ALIAS_LABEL => "alias",
            Self::KEY_VALUE => "key-value pair",
            Self::PROPERTY_MAP => "property map",
            Self::NODE_PATTERN => "node pattern",
            Self::EDGE_CONTENT => "edge content",
            Self::CARDINALITY => "cardinality",
            Self::EDGE_PATTERN => "edge",
            Self::TRAVERSAL => "traversal",
            Self::PATTERN_LIST => "pattern list",
            Self::PATH_BINDING => "path binding",
            Self::HAS_COMPARISON => "has comparison",
            Self::BINARY_COMPARISON => "comparison",
            Self::IN_COMPARISON => "IN comparison",
            Self::IS_NULL_COMPARISON => "IS NULL comparison",
            Self::REGEX_COMPARISON => "regex comparison",
            Self::LABEL_ASSERTION => "label assertion",
            Self::AND_EXPR => "AND expression",
            Self::OR_EXPR => "OR expression",
            Self::XOR_EXPR => "XOR expression",
            Self::NOT_EXPR => "NOT expression",
            Self::PAREN_EXPR => "parenthesized expression",
            Self::AS_BINDING => "AS binding",
            Self::ORDER_KEY => "order key",
            Self::MATCH_CLAUSE => "MATCH clause",
            Self::WHERE_CLAUSE => "WHERE clause",
            Self::WITH_CLAUSE => "WITH clause",
            Self::ORDER_BY_CLAUSE => "ORDER BY clause",
            Self::SKIP_CLAUSE => "SKIP clause",
            Self::LIMIT_CLAUSE => "LIMIT clause",
            Self::RETURN_CLAUSE => "RETURN clause",
            Self::QUERY => "query",

            Self::ERROR => "error",
            Self::__LAST => "token",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CypherLanguage {}

impl rowan::Language for CypherLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<CypherLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<CypherLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<CypherLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<CypherLanguage>;
