//! Graph pattern productions: labels, property maps, nodes, edges,
//! traversals, pattern lists, and path bindings
//!
//! Edges are built from single-char tokens (`-`, `<`, `>`), so direction is
//! settled here by ordered choice with the directed forms first. A raw `--`
//! is one undirected edge; the stranded third `-` of `---` fails where the
//! next node must start, which is exactly the position reported.

use super::*;

/// Label = ':' Name
pub(crate) fn label(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::LABEL, |p| {
        p.expect(SyntaxKind::COLON)?;
        p.expect_name()
    })
}

/// AliasLabel = Name Label* | Label+
///
/// The grammar's empty alternative is gated here: callers invoke this only
/// where a name or label is actually present, so emptiness cannot produce
/// spurious matches outside node/edge delimiters.
pub(crate) fn alias_label(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    if !p.at_name() && !p.at(SyntaxKind::COLON) {
        let _ = p.fail("identifier");
        return Err(p.fail("':'"));
    }
    with_node(p, SyntaxKind::ALIAS_LABEL, |p| {
        if p.at_name() {
            p.bump();
        }
        while p.try_parse(label) {}
        Ok(())
    })
}

/// KeyVal = Name ':' ValueExpr
fn key_value(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::KEY_VALUE, |p| {
        p.expect_name()?;
        p.expect(SyntaxKind::COLON)?;
        expressions::value_expr(p)
    })
}

/// PropertyMap = '{' KeyVal (',' KeyVal)* '}'
///
/// Duplicate keys are accepted; pairs keep source order.
pub(crate) fn property_map(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::PROPERTY_MAP, |p| {
        p.expect(SyntaxKind::L_BRACE)?;
        comma_separated(p, key_value)?;
        p.expect(SyntaxKind::R_BRACE)
    })
}

/// Node = '(' AliasLabel? PropertyMap? ')'
pub(crate) fn node_pattern(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::NODE_PATTERN, |p| {
        p.expect(SyntaxKind::L_PAREN)?;
        let _ = p.try_parse(alias_label);
        let _ = p.try_parse(property_map);
        p.expect(SyntaxKind::R_PAREN)
    })
}

/// EdgeContent = '[' AliasLabel? PropertyMap? Cardinality? ']'
pub(crate) fn edge_content(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::EDGE_CONTENT, |p| {
        p.expect(SyntaxKind::L_BRACKET)?;
        let _ = p.try_parse(alias_label);
        let _ = p.try_parse(property_map);
        let _ = p.try_parse(cardinality);
        p.expect(SyntaxKind::R_BRACKET)
    })
}

/// Cardinality = '*' | '*' Integer '..' Integer with min <= max
pub(crate) fn cardinality(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::CARDINALITY, |p| {
        p.expect(SyntaxKind::STAR)?;
        let checkpoint = p.checkpoint();
        p.eat_trivia();
        if !p.at(SyntaxKind::INTEGER) {
            // unbounded `*`; `*..5` and `*1..` never reach here as bounded
            p.rewind(checkpoint);
            return Ok(());
        }
        let min: u64 = p.current_text().parse().unwrap_or(u64::MAX);
        p.bump();
        p.expect(SyntaxKind::DOT_DOT)?;
        p.eat_trivia();
        if !p.at(SyntaxKind::INTEGER) {
            return Err(p.fail("integer"));
        }
        let max: u64 = p.current_text().parse().unwrap_or(u64::MAX);
        if min > max {
            return Err(p.fail("upper bound >= lower bound"));
        }
        p.bump();
        Ok(())
    })
}

/// UndirEdge = '-' EdgeContent? '-' (a fragment of Edge, no node of its own)
fn undirected_edge(p: &mut Parser) -> ParseResult {
    p.expect(SyntaxKind::MINUS)?;
    let _ = p.try_parse(edge_content);
    p.expect(SyntaxKind::MINUS)
}

/// Edge = UndirEdge '>' | '<' UndirEdge | UndirEdge
///
/// Directed forms first so `-->` is one out-edge rather than `--`
/// followed by a stray `>`.
pub(crate) fn edge(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::EDGE_PATTERN, |p| {
        if p.try_parse(|p| {
            undirected_edge(p)?;
            p.expect(SyntaxKind::GT)
        }) {
            return Ok(());
        }
        if p.try_parse(|p| {
            p.expect(SyntaxKind::LT)?;
            undirected_edge(p)
        }) {
            return Ok(());
        }
        undirected_edge(p)
    })
}

/// Traversal = Node (Edge Node)* — stored flat so node and edge children
/// strictly alternate, starting and ending with a node
pub(crate) fn traversal(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::TRAVERSAL, |p| {
        node_pattern(p)?;
        loop {
            let checkpoint = p.checkpoint();
            if edge(p).is_err() {
                p.rewind(checkpoint);
                break;
            }
            if node_pattern(p).is_err() {
                p.rewind(checkpoint);
                break;
            }
        }
        Ok(())
    })
}

/// PatternList = Traversal (',' Traversal)*
pub(crate) fn pattern_list(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::PATTERN_LIST, |p| comma_separated(p, traversal))
}

/// PathBinding = Name '=' Traversal
pub(crate) fn path_binding(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::PATH_BINDING, |p| {
        p.expect_name()?;
        p.expect(SyntaxKind::EQ)?;
        traversal(p)
    })
}
