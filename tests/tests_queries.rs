//! Parser Tests - Complete queries
//!
//! Whole-query acceptance, clause ordering, and tree-shape checks for the
//! interesting end-to-end inputs.

use rstest::rstest;
use cyro::parser::{AstNode, RuleKind, ast, parse_query, parse_rule};

fn accepts(input: &str) -> bool {
    parse_query(input).is_ok()
}

// ============================================================================
// Acceptance
// ============================================================================

#[rstest]
#[case("RETURN n")]
#[case("MATCH (n) RETURN n")]
#[case("MATCH  (n) RETURN n")]
#[case("MATCH (n:Person)-[:KNOWS]->(m:Person) RETURN n.name")]
#[case("OPTIONAL MATCH (n:Person {name: 'Dave'})-[k:LIVED_IN]-(m:Place {name: 'Iowa City'}) WHERE n.age > 30 RETURN n, m")]
#[case("MATCH (n) WHERE n.name = 'Peter' OR (n.age < 30 AND n.name = 'Tobias') OR NOT (n.name = 'Tobias' OR n.name='Peter') RETURN count(DISTINCT n) AS c")]
#[case("WITH type(n) AS t, count(*) AS k ORDER BY t DESC SKIP 5 LIMIT 10 RETURN t, k")]
#[case("MATCH (n) WHERE n.age > 30 MATCH (m) WHERE m.age < 30 RETURN n, m")]
#[case("MATCH p = (n)-[:KNOWS*1..5]->(m) RETURN p")]
#[case("MATCH (n) RETURN n ORDER BY n.name SKIP 1 LIMIT 2")]
#[case("match (n) where n.age > 30 return n")]
#[case("MATCH (n)\nWHERE n.age > 30\nRETURN n")]
fn test_query_accepts(#[case] input: &str) {
    assert!(accepts(input), "should accept: {}", input);
}

#[rstest]
// no whitespace after the keyword
#[case("MATCH(n) RETURN n")]
// no RETURN
#[case("MATCH (n)")]
// clause order violations
#[case("RETURN n MATCH (n)")]
#[case("WHERE n.age > 30 RETURN n")]
#[case("MATCH (n) LIMIT 3 RETURN n")]
// pattern failures inside an otherwise fine query
#[case("MATCH (n:Node)---(m) RETURN n")]
#[case("MATCH (n:Person)<-[:BORN_IN]->(m:Place) RETURN n")]
#[case("MATCH (n) RETURN")]
fn test_query_rejects(#[case] input: &str) {
    assert!(!accepts(input), "should reject: {}", input);
}

// ============================================================================
// Tree shapes
// ============================================================================

#[test]
fn test_simple_traversal_query_shape() {
    let parse = parse_query("MATCH (n:Person)-[:KNOWS]->(m:Person) RETURN n.name").unwrap();
    let query = ast::Query::cast(parse.rule_node()).expect("query");

    let clauses = query.clauses();
    assert_eq!(clauses.len(), 2);

    let ast::Clause::Match(match_clause) = &clauses[0] else {
        panic!("expected MATCH first");
    };
    assert!(!match_clause.is_optional());
    let pattern_list = match_clause.pattern_list().expect("pattern list");
    let traversals: Vec<_> = pattern_list.traversals().collect();
    assert_eq!(traversals.len(), 1);
    assert_eq!(traversals[0].nodes().count(), 2);
    assert_eq!(traversals[0].hops(), 1);

    let ast::Clause::Return(return_clause) = &clauses[1] else {
        panic!("expected RETURN last");
    };
    let projections = return_clause.projections();
    assert_eq!(projections.len(), 1);
    let ast::ReturnProjection::Property(property) = &projections[0] else {
        panic!("expected a property projection");
    };
    assert_eq!(property.to_string(), "n.name");
}

#[test]
fn test_optional_match_where_query_shape() {
    let parse = parse_query(
        "OPTIONAL MATCH (n:Person {name: 'Dave'})-[k:LIVED_IN]-(m:Place {name: 'Iowa City'}) \
         WHERE n.age > 30 RETURN n, m",
    )
    .unwrap();
    let query = ast::Query::cast(parse.rule_node()).expect("query");
    let clauses = query.clauses();
    assert_eq!(clauses.len(), 3);

    let ast::Clause::Match(match_clause) = &clauses[0] else {
        panic!("expected MATCH first");
    };
    assert!(match_clause.is_optional());

    let ast::Clause::Where(where_clause) = &clauses[1] else {
        panic!("expected WHERE second");
    };
    let ast::Predicate::Binary(comparison) = where_clause.predicate().expect("predicate") else {
        panic!("expected a binary comparison");
    };
    assert_eq!(comparison.op(), Some(ast::CompOp::Gt));
    assert_eq!(comparison.right(), Some(ast::Value::Integer(30)));

    let ast::Clause::Return(return_clause) = &clauses[2] else {
        panic!("expected RETURN last");
    };
    let projections = return_clause.projections();
    assert!(matches!(&projections[0], ast::ReturnProjection::Name(n) if n == "n"));
    assert!(matches!(&projections[1], ast::ReturnProjection::Name(n) if n == "m"));
}

#[test]
fn test_count_distinct_binding_shape() {
    let parse = parse_query(
        "MATCH (n) WHERE n.name = 'Peter' OR (n.age < 30 AND n.name = 'Tobias') \
         OR NOT (n.name = 'Tobias' OR n.name='Peter') RETURN count(DISTINCT n) AS c",
    )
    .unwrap();
    let query = ast::Query::cast(parse.rule_node()).expect("query");
    let return_clause = query.return_clause().expect("return clause");

    let projections = return_clause.projections();
    assert_eq!(projections.len(), 1);
    let ast::ReturnProjection::Binding(binding) = &projections[0] else {
        panic!("expected an AS binding");
    };
    assert_eq!(binding.alias().as_deref(), Some("c"));
    let Some(ast::BoundExpr::Call(call)) = binding.expr() else {
        panic!("expected a function call");
    };
    assert_eq!(call.name(), Some(ast::FunctionName::Count));
    assert!(call.is_distinct());
    assert_eq!(call.name_argument().as_deref(), Some("n"));
}

#[test]
fn test_with_section_clause_order() {
    let parse =
        parse_query("WITH type(n) AS t, count(*) AS k ORDER BY t DESC SKIP 5 LIMIT 10 RETURN t, k")
            .unwrap();
    let query = ast::Query::cast(parse.rule_node()).expect("query");
    let clauses = query.clauses();

    assert!(matches!(clauses[0], ast::Clause::With(_)));
    assert!(matches!(clauses[1], ast::Clause::OrderBy(_)));
    assert!(matches!(clauses[2], ast::Clause::Skip(_)));
    assert!(matches!(clauses[3], ast::Clause::Limit(_)));
    assert!(matches!(clauses[4], ast::Clause::Return(_)));
    assert_eq!(clauses.len(), 5);

    let ast::Clause::With(with_clause) = &clauses[0] else {
        unreachable!();
    };
    let projections = with_clause.projections();
    assert_eq!(projections.len(), 2);
    assert!(matches!(projections[0], ast::Projection::Binding(_)));
    assert!(matches!(projections[1], ast::Projection::Binding(_)));

    let ast::Clause::OrderBy(order_by) = &clauses[1] else {
        unreachable!();
    };
    let keys: Vec<_> = order_by.keys().collect();
    assert_eq!(keys[0].direction(), ast::OrderDirection::Desc);

    let ast::Clause::Skip(skip) = &clauses[2] else {
        unreachable!();
    };
    assert_eq!(skip.count(), Some(5));

    let ast::Clause::Limit(limit) = &clauses[3] else {
        unreachable!();
    };
    assert_eq!(limit.count(), Some(10));
}

#[test]
fn test_variable_length_path_query() {
    let parse = parse_query("MATCH p = (n)-[:KNOWS*1..5]->(m) RETURN p").unwrap();
    let query = ast::Query::cast(parse.rule_node()).expect("query");
    let ast::Clause::Match(match_clause) = &query.clauses()[0] else {
        panic!("expected MATCH first");
    };
    let path = match_clause.path_binding().expect("path binding");
    let traversal = path.traversal().expect("traversal");
    let edge: ast::EdgePattern = traversal.edges().next().expect("edge");
    assert_eq!(edge.direction(), ast::EdgeDirection::Out);
    let content = edge.content().expect("edge content");
    assert_eq!(content.labels(), vec!["KNOWS"]);
    assert_eq!(content.cardinality().expect("cardinality").bounds(), Some((1, 5)));
}

// ============================================================================
// Failure reporting
// ============================================================================

#[test]
fn test_error_reports_deepest_position_and_expected_set() {
    let err = parse_query("MATCH (n:Node)---(m) RETURN n").unwrap_err();
    let syntax = err.as_syntax().expect("syntax error");
    // the stranded third `-` sits at byte 16
    assert_eq!(u32::from(syntax.position), 16);
    assert!(!syntax.expected.is_empty());
    assert_eq!(syntax.found, "-");
}

#[test]
fn test_error_at_end_of_input_has_empty_snippet() {
    let err = parse_rule("SKIP", RuleKind::SkipClause).unwrap_err();
    let syntax = err.as_syntax().expect("syntax error");
    assert_eq!(u32::from(syntax.position), 4);
    assert_eq!(syntax.found, "");
}
