//! Comparison and boolean-tree productions (WHERE bodies, RETURN
//! expressions)
//!
//! Connective chains are built left-associative, and runs of the same
//! connective flatten into one node: `a AND b AND c` is a single `AND_EXPR`
//! with three operands, while `a AND b OR c` nests the AND chain as the
//! first operand of an `OR_EXPR`. `AND NOT`/`OR NOT`/`XOR NOT` negate the
//! right operand; a bare `NOT` between terms joins them as an implicit AND
//! with the right operand negated.

use super::*;

/// BoolExpr = Term (Connective Term)*
pub(crate) fn predicate(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    let chain_start = p.checkpoint();
    term(p)?;

    let mut open: Option<SyntaxKind> = None;
    loop {
        let lookahead = p.checkpoint();
        p.eat_trivia();
        let connective = match p.current_kind() {
            Some(SyntaxKind::AND_KW) => SyntaxKind::AND_EXPR,
            Some(SyntaxKind::OR_KW) => SyntaxKind::OR_EXPR,
            Some(SyntaxKind::XOR_KW) => SyntaxKind::XOR_EXPR,
            // bare NOT as connective: implicit AND with negated right operand
            Some(SyntaxKind::NOT_KW) => SyntaxKind::AND_EXPR,
            _ => {
                p.rewind(lookahead);
                break;
            }
        };

        // Close a chain of a different connective before this keyword's
        // token lands, then wrap everything since `chain_start` so the
        // finished chain becomes the first operand of the new one
        match open {
            Some(kind) if kind == connective => {}
            Some(_) => {
                p.finish_node();
                p.start_node_at(chain_start, connective);
                open = Some(connective);
            }
            None => {
                p.start_node_at(chain_start, connective);
                open = Some(connective);
            }
        }

        if !p.at(SyntaxKind::NOT_KW) {
            let keyword = match connective {
                SyntaxKind::AND_EXPR => SyntaxKind::AND_KW,
                SyntaxKind::OR_EXPR => SyntaxKind::OR_KW,
                _ => SyntaxKind::XOR_KW,
            };
            p.keyword(keyword, true)?;
        }
        // `term` handles a leading NOT itself, covering both the compound
        // connectives and the bare-NOT join
        term(p)?;
    }
    if open.is_some() {
        p.finish_node();
    }
    Ok(())
}

/// Term = NOT? BaseTerm
fn term(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    if p.at(SyntaxKind::NOT_KW) {
        p.start_node(SyntaxKind::NOT_EXPR);
        let result = p
            .keyword(SyntaxKind::NOT_KW, true)
            .and_then(|_| base_term(p));
        p.finish_node();
        return result;
    }
    base_term(p)
}

/// BaseTerm = ParenGroup | Traversal | HasComparison | Comparison | LabelAssertion
///
/// A leading `(` is ambiguous between a parenthesized subtree and a
/// traversal's first node; the group is tried first and rolled back.
fn base_term(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    if p.at(SyntaxKind::L_PAREN) {
        if p.try_parse(paren_group) {
            return Ok(());
        }
        return patterns::traversal(p);
    }
    if p.at(SyntaxKind::HAS_KW) {
        return has_comparison(p);
    }
    if p.try_parse(comparison) {
        return Ok(());
    }
    label_assertion(p)
}

/// ParenGroup = '(' BoolExpr ')'
fn paren_group(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::PAREN_EXPR, |p| {
        p.expect(SyntaxKind::L_PAREN)?;
        predicate(p)?;
        p.expect(SyntaxKind::R_PAREN)
    })
}

/// HasComparison = HAS '(' PropertyAccess ')'
///
/// Both `has(` and `has (` are accepted: HAS is the one mid-clause keyword
/// whose trailing whitespace is optional.
fn has_comparison(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::HAS_COMPARISON, |p| {
        p.keyword(SyntaxKind::HAS_KW, false)?;
        p.expect(SyntaxKind::L_PAREN)?;
        expressions::property_access(p)?;
        p.expect(SyntaxKind::R_PAREN)
    })
}

/// Comparison = LeftExpr (IsNull | InList | Regex | CompOp ValueExpr)
///
/// The node kind is only known once the operator shows up, so the left
/// expression is wrapped retroactively.
fn comparison(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    let left_start = p.checkpoint();
    left_expr(p)?;
    p.eat_trivia();

    if p.at(SyntaxKind::IS_KW) {
        p.keyword(SyntaxKind::IS_KW, true)?;
        p.keyword(SyntaxKind::NULL_KW, false)?;
        p.start_node_at(left_start, SyntaxKind::IS_NULL_COMPARISON);
        p.finish_node();
        return Ok(());
    }
    if p.at(SyntaxKind::IN_KW) {
        p.keyword(SyntaxKind::IN_KW, true)?;
        expressions::list(p)?;
        p.start_node_at(left_start, SyntaxKind::IN_COMPARISON);
        p.finish_node();
        return Ok(());
    }
    if p.at(SyntaxKind::EQ_TILDE) {
        p.bump();
        p.eat_trivia();
        if !p.at(SyntaxKind::STRING) {
            return Err(p.fail("string"));
        }
        p.bump();
        p.start_node_at(left_start, SyntaxKind::REGEX_COMPARISON);
        p.finish_node();
        return Ok(());
    }

    let is_comp_op = matches!(
        p.current_kind(),
        Some(
            SyntaxKind::EQ
                | SyntaxKind::LT_GT
                | SyntaxKind::LT_EQ
                | SyntaxKind::GT_EQ
                | SyntaxKind::LT
                | SyntaxKind::GT
        )
    );
    if !is_comp_op {
        return Err(p.fail("comparison operator"));
    }
    p.bump();
    expressions::value_expr(p)?;
    p.start_node_at(left_start, SyntaxKind::BINARY_COMPARISON);
    p.finish_node();
    Ok(())
}

/// LeftExpr = PropertyAccess | TypeCall | Name
fn left_expr(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    if p.try_parse(expressions::property_access) {
        return Ok(());
    }
    if p.at_contextual("type") && p.try_parse(expressions::type_call) {
        return Ok(());
    }
    p.expect_name()
}

/// LabelAssertion = Name Label+
///
/// At least one label: a bare identifier is not a predicate leaf.
fn label_assertion(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::LABEL_ASSERTION, |p| {
        p.expect_name()?;
        patterns::label(p)?;
        while p.try_parse(patterns::label) {}
        Ok(())
    })
}
