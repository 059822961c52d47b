//! Rewrite hook tests
//!
//! Attaching, composing, detaching, and failing hooks through the
//! `QueryParser` driver.

use cyro::parser::{ParseError, RuleKind, SyntaxKind, parse_rule};
use cyro::rewrite::QueryParser;

/// Green tree of a parsed snippet, for use as a hook replacement
fn green_of(input: &str, rule: RuleKind) -> cyro::parser::GreenNode {
    parse_rule(input, rule)
        .expect("replacement snippet must parse")
        .rule_node()
        .green()
        .into_owned()
}

#[test]
fn test_hook_replaces_subtree() {
    let mut parser = QueryParser::new();
    let replacement = green_of("(n:Human)", RuleKind::NodePattern);
    parser.attach_action(SyntaxKind::NODE_PATTERN, move |node| {
        if node.text().to_string().contains(":Person") {
            Ok(Some(replacement.clone()))
        } else {
            Ok(None)
        }
    });

    let parse = parser.parse("MATCH (n:Person)-->(m:Place) RETURN n").unwrap();
    let text = parse.syntax().text().to_string();
    assert_eq!(text, "MATCH (n:Human)-->(m:Place) RETURN n");
}

#[test]
fn test_hooks_compose_in_registration_order() {
    let mut parser = QueryParser::new();
    let first = green_of("(a)", RuleKind::NodePattern);
    parser.attach_action(SyntaxKind::NODE_PATTERN, move |node| {
        if node.text().to_string() == "(n)" {
            Ok(Some(first.clone()))
        } else {
            Ok(None)
        }
    });
    // the second hook sees the first one's output
    let second = green_of("(b)", RuleKind::NodePattern);
    parser.attach_action(SyntaxKind::NODE_PATTERN, move |node| {
        if node.text().to_string() == "(a)" {
            Ok(Some(second.clone()))
        } else {
            Ok(None)
        }
    });

    let parse = parser.parse_rule("(n)", RuleKind::NodePattern).unwrap();
    assert_eq!(parse.syntax().text().to_string(), "(b)");
}

#[test]
fn test_parent_hook_sees_rewritten_children() {
    let mut parser = QueryParser::new();
    let replacement = green_of("(x)", RuleKind::NodePattern);
    parser.attach_action(SyntaxKind::NODE_PATTERN, move |_| Ok(Some(replacement.clone())));

    let seen = std::sync::Arc::new(std::sync::Mutex::new(String::new()));
    let seen_in_hook = seen.clone();
    parser.attach_action(SyntaxKind::TRAVERSAL, move |node| {
        *seen_in_hook.lock().unwrap() = node.text().to_string();
        Ok(None)
    });

    parser.parse_rule("(n)-->(m)", RuleKind::Traversal).unwrap();
    assert_eq!(seen.lock().unwrap().as_str(), "(x)-->(x)");
}

#[test]
fn test_detached_hook_no_longer_fires() {
    let mut parser = QueryParser::new();
    let replacement = green_of("(x)", RuleKind::NodePattern);
    let handle =
        parser.attach_action(SyntaxKind::NODE_PATTERN, move |_| Ok(Some(replacement.clone())));
    assert_eq!(parser.action_count(), 1);

    assert!(parser.detach_action(handle));
    assert!(!parser.detach_action(handle));
    assert_eq!(parser.action_count(), 0);

    let parse = parser.parse_rule("(n)", RuleKind::NodePattern).unwrap();
    assert_eq!(parse.syntax().text().to_string(), "(n)");
}

#[test]
fn test_hook_error_aborts_parse() {
    let mut parser = QueryParser::new();
    parser.attach_action(SyntaxKind::PROPERTY_MAP, |_| {
        Err("property maps are not allowed here".to_string())
    });

    let err = parser.parse("MATCH (n {age: 34}) RETURN n").unwrap_err();
    let ParseError::Action(action) = err else {
        panic!("expected an action error");
    };
    assert_eq!(action.rule, "property map");
    assert!(action.cause.contains("not allowed"));
}

#[test]
fn test_hooks_do_not_run_on_failed_parse() {
    let mut parser = QueryParser::new();
    parser.attach_action(SyntaxKind::NODE_PATTERN, |_| {
        Err("should never fire".to_string())
    });
    let err = parser.parse("MATCH (n RETURN n").unwrap_err();
    assert!(matches!(err, ParseError::Syntax(_)));
}

#[test]
fn test_named_rule_handle() {
    let parser = QueryParser::new();
    let rule = parser.rule(RuleKind::Traversal);
    assert_eq!(rule.rule(), RuleKind::Traversal);
    assert!(rule.parse("(n)-->(m)").is_ok());
    assert!(rule.parse("MATCH (n)").is_err());
}
