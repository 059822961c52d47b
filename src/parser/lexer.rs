//! Logos-based lexer for the read-only Cypher subset
//!
//! Fast tokenization using the logos crate. Whitespace is emitted as a real
//! token because the grammar requires a whitespace boundary after most
//! keywords (`MATCH (n)` parses, `MATCH(n)` does not).
//!
//! Two deliberate oddities, both inherited from the grammar:
//! - Identifiers may start with a digit, so `12ab` is one identifier.
//!   A pure-digit word lexes as `INTEGER`; the parser re-admits it where a
//!   name is expected.
//! - Keywords are matched case-insensitively, and longest match keeps
//!   `MATCHn` a single identifier rather than a keyword plus `n`.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // =========================================================================
    // LITERALS
    // =========================================================================
    // Leading digits are allowed; pure-digit words lose to Integer/Float on
    // priority and equal length, so `34` is an integer but `34x` is an ident
    #[regex(r"[a-zA-Z0-9][a-zA-Z0-9_]*", priority = 2)]
    Ident,

    #[regex(r"[0-9]+", priority = 3)]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+", priority = 4)]
    Float,

    // Single-quoted, escapes for \' and \\, no raw newline inside
    #[regex(r"'([^'\\\n]|\\[^\n])*'")]
    String,

    // =========================================================================
    // MULTI-CHARACTER OPERATORS (must come before single-char)
    // =========================================================================
    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<>")]
    LtGt,

    #[token("=~")]
    EqTilde,

    #[token("..")]
    DotDot,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // =========================================================================
    // KEYWORDS (case-insensitive; function names like `count` stay
    // contextual identifiers so they remain usable as plain names)
    // =========================================================================
    #[token("match", ignore(ascii_case))]
    MatchKw,
    #[token("optional", ignore(ascii_case))]
    OptionalKw,
    #[token("where", ignore(ascii_case))]
    WhereKw,
    #[token("with", ignore(ascii_case))]
    WithKw,
    #[token("as", ignore(ascii_case))]
    AsKw,
    #[token("and", ignore(ascii_case))]
    AndKw,
    #[token("or", ignore(ascii_case))]
    OrKw,
    #[token("xor", ignore(ascii_case))]
    XorKw,
    #[token("not", ignore(ascii_case))]
    NotKw,
    #[token("return", ignore(ascii_case))]
    ReturnKw,
    #[token("distinct", ignore(ascii_case))]
    DistinctKw,
    #[token("has", ignore(ascii_case))]
    HasKw,
    #[token("in", ignore(ascii_case))]
    InKw,
    #[token("is", ignore(ascii_case))]
    IsKw,
    #[token("null", ignore(ascii_case))]
    NullKw,
    #[token("order", ignore(ascii_case))]
    OrderKw,
    #[token("by", ignore(ascii_case))]
    ByKw,
    #[token("skip", ignore(ascii_case))]
    SkipKw,
    #[token("limit", ignore(ascii_case))]
    LimitKw,
    #[token("asc", ignore(ascii_case))]
    AscKw,
    #[token("desc", ignore(ascii_case))]
    DescKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,

            // Literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Float => SyntaxKind::FLOAT,
            String => SyntaxKind::STRING,

            // Multi-char operators
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            LtGt => SyntaxKind::LT_GT,
            EqTilde => SyntaxKind::EQ_TILDE,
            DotDot => SyntaxKind::DOT_DOT,

            // Single-char punctuation
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,

            // Keywords
            MatchKw => SyntaxKind::MATCH_KW,
            OptionalKw => SyntaxKind::OPTIONAL_KW,
            WhereKw => SyntaxKind::WHERE_KW,
            WithKw => SyntaxKind::WITH_KW,
            AsKw => SyntaxKind::AS_KW,
            AndKw => SyntaxKind::AND_KW,
            OrKw => SyntaxKind::OR_KW,
            XorKw => SyntaxKind::XOR_KW,
            NotKw => SyntaxKind::NOT_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            DistinctKw => SyntaxKind::DISTINCT_KW,
            HasKw => SyntaxKind::HAS_KW,
            InKw => SyntaxKind::IN_KW,
            IsKw => SyntaxKind::IS_KW,
            NullKw => SyntaxKind::NULL_KW,
            OrderKw => SyntaxKind::ORDER_KW,
            ByKw => SyntaxKind::BY_KW,
            SkipKw => SyntaxKind::SKIP_KW,
            LimitKw => SyntaxKind::LIMIT_KW,
            AscKw => SyntaxKind::ASC_KW,
            DescKw => SyntaxKind::DESC_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_match_clause() {
        let tokens: Vec<_> = Lexer::new("MATCH (n)").collect();
        assert_eq!(tokens.len(), 5); // MATCH, whitespace, (, n, )
        assert_eq!(tokens[0].kind, SyntaxKind::MATCH_KW);
        assert_eq!(tokens[1].kind, SyntaxKind::WHITESPACE);
        assert_eq!(tokens[2].kind, SyntaxKind::L_PAREN);
        assert_eq!(tokens[3].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[4].kind, SyntaxKind::R_PAREN);
    }

    #[test]
    fn test_lex_keywords_case_insensitive() {
        for input in ["match", "MATCH", "Match", "mAtCh"] {
            let tokens = tokenize(input);
            assert_eq!(tokens[0].kind, SyntaxKind::MATCH_KW, "input: {}", input);
        }
    }

    #[test]
    fn test_lex_keyword_prefix_stays_identifier() {
        // Longest match: an identifier that merely starts with a keyword
        let tokens = tokenize("MATCHn");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, SyntaxKind::IDENT);

        let tokens = tokenize("ordering");
        assert_eq!(tokens[0].kind, SyntaxKind::IDENT);
    }

    #[test]
    fn test_lex_digit_leading_identifier() {
        let tokens = tokenize("12ab");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, SyntaxKind::IDENT);

        let tokens = tokenize("42");
        assert_eq!(tokens[0].kind, SyntaxKind::INTEGER);

        let tokens = tokenize("0.5");
        assert_eq!(tokens[0].kind, SyntaxKind::FLOAT);
    }

    #[test]
    fn test_lex_operators_longest_match() {
        let kinds: Vec<_> = tokenize("<= >= <> =~ < > = ..")
            .into_iter()
            .filter(|t| t.kind != SyntaxKind::WHITESPACE)
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::LT_EQ,
                SyntaxKind::GT_EQ,
                SyntaxKind::LT_GT,
                SyntaxKind::EQ_TILDE,
                SyntaxKind::LT,
                SyntaxKind::GT,
                SyntaxKind::EQ,
                SyntaxKind::DOT_DOT,
            ]
        );
    }

    #[test]
    fn test_lex_edge_stays_single_chars() {
        let kinds: Vec<_> = tokenize("-->").into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![SyntaxKind::MINUS, SyntaxKind::MINUS, SyntaxKind::GT]);
    }

    #[test]
    fn test_lex_string_with_escapes() {
        let tokens = tokenize(r"'it\'s'");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, SyntaxKind::STRING);

        // Unterminated string never lexes as STRING
        let tokens = tokenize("'dave ");
        assert!(tokens.iter().all(|t| t.kind != SyntaxKind::STRING));
    }

    #[test]
    fn test_lex_cardinality() {
        let kinds: Vec<_> = tokenize("*1..5").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::STAR,
                SyntaxKind::INTEGER,
                SyntaxKind::DOT_DOT,
                SyntaxKind::INTEGER,
            ]
        );
    }

    #[test]
    fn test_lex_offsets() {
        let tokens = tokenize("MATCH (n)");
        let offsets: Vec<u32> = tokens.iter().map(|t| t.offset.into()).collect();
        assert_eq!(offsets, vec![0, 5, 6, 7, 8]);
    }
}
