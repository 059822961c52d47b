//! Span and round-trip invariants
//!
//! - the CST is lossless: the root's text is the input, byte for byte
//! - the rule node's span covers the input after stripping outer whitespace
//! - canonical re-emission of any accepted input is accepted again and
//!   produces an equivalent tree (modulo whitespace spans)
//! - re-emitting a RETURN clause reproduces its source substring modulo
//!   whitespace normalization

use cyro::parser::canonical::canonical_text;
use cyro::parser::{AstNode, RuleKind, SyntaxKind, ast, parse_query, parse_rule};

const QUERIES: &[&str] = &[
    "RETURN n",
    "MATCH (n:Person)-[:KNOWS]->(m:Person) RETURN n.name",
    "OPTIONAL MATCH (n:Person {name: 'Dave'})-[k:LIVED_IN]-(m:Place {name: 'Iowa City'}) WHERE n.age > 30 RETURN n, m",
    "MATCH (n) WHERE n.name = 'Peter' OR (n.age < 30 AND n.name = 'Tobias') OR NOT (n.name = 'Tobias' OR n.name='Peter') RETURN count(DISTINCT n) AS c",
    "WITH type(n) AS t, count(*) AS k ORDER BY t DESC SKIP 5 LIMIT 10 RETURN t, k",
    "MATCH p = (n)-[:KNOWS*1..5]->(m) RETURN p",
];

#[test]
fn test_cst_is_lossless() {
    for input in QUERIES {
        let parse = parse_query(input).expect(input);
        assert_eq!(&parse.syntax().text().to_string(), input);
    }
}

#[test]
fn test_rule_node_span_covers_trimmed_input() {
    let input = "  MATCH (n) RETURN n \n";
    let parse = parse_query(input).expect("should parse");
    let root = parse.syntax();
    assert_eq!(u32::from(root.text_range().len()) as usize, input.len());

    let query = parse.rule_node();
    let range = query.text_range();
    let trimmed_start = input.len() - input.trim_start().len();
    let trimmed_end = trimmed_start + input.trim().len();
    assert_eq!(u32::from(range.start()) as usize, trimmed_start);
    assert_eq!(u32::from(range.end()) as usize, trimmed_end);
}

#[test]
fn test_every_node_span_matches_its_text() {
    for input in QUERIES {
        let parse = parse_query(input).expect(input);
        for node in parse.syntax().descendants() {
            let range = node.text_range();
            let slice = &input[u32::from(range.start()) as usize..u32::from(range.end()) as usize];
            assert_eq!(node.text().to_string(), slice, "node {:?} in {}", node.kind(), input);
        }
    }
}

// ============================================================================
// Round-trip through the canonical printer
// ============================================================================

/// Structural equality modulo whitespace: kinds and texts of all non-trivia
/// tokens, plus the node kinds on the way down.
fn shape(node: &cyro::parser::SyntaxNode) -> Vec<String> {
    let mut out = Vec::new();
    for element in node.descendants_with_tokens() {
        if let Some(n) = element.as_node() {
            out.push(format!("{:?}", n.kind()));
        } else if let Some(t) = element.as_token() {
            if t.kind() != SyntaxKind::WHITESPACE {
                out.push(format!("{:?}:{}", t.kind(), t.text()));
            }
        }
    }
    out
}

#[test]
fn test_canonical_round_trip() {
    for input in QUERIES {
        let parse = parse_query(input).expect(input);
        let printed = canonical_text(&parse.syntax());
        let reparse = parse_query(&printed)
            .unwrap_or_else(|e| panic!("canonical form of {:?} rejected: {} ({})", input, printed, e));
        assert_eq!(
            shape(&parse.syntax()),
            shape(&reparse.syntax()),
            "canonical round-trip changed the tree for: {}",
            input
        );
    }
}

#[test]
fn test_return_clause_reemission() {
    let input = "MATCH (n) RETURN count(DISTINCT n) AS c, n.name, 'literal'";
    let parse = parse_query(input).expect("should parse");
    let query = ast::Query::cast(parse.rule_node()).expect("query");
    let return_clause = query.return_clause().expect("return clause");

    let reemitted = canonical_text(return_clause.syntax());
    let original_tail = &input[input.find("RETURN").unwrap()..];

    // equal modulo inter-token whitespace normalization
    let normalize = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
    let strip_spaces = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(strip_spaces(&reemitted), strip_spaces(original_tail));
    assert!(parse_rule(&normalize(&reemitted), RuleKind::ReturnClause).is_ok());
}
