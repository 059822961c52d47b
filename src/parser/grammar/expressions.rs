//! Expression productions: property access, value expressions, lists, and
//! function calls
//!
//! Function names are contextual identifiers, not keywords, so `count`
//! stays usable as a plain name anywhere a name is accepted. Every call
//! form rejects quoted-string arguments and demands balanced parentheses.

use super::*;

/// PropertyAccess = Name '.' Name
pub(crate) fn property_access(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::PROPERTY_ACCESS, |p| {
        p.expect_name()?;
        p.expect(SyntaxKind::DOT)?;
        p.expect_name()
    })
}

/// ValueExpr = PropertyAccess | StringLiteral | Integer
///
/// Floats are not generic right-hand values; they appear only as the
/// second argument of `percentileDisc`.
pub(crate) fn value_expr(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    if p.try_parse(property_access) {
        return Ok(());
    }
    if p.at(SyntaxKind::STRING) || p.at(SyntaxKind::INTEGER) {
        p.bump();
        return Ok(());
    }
    let _ = p.fail("string");
    Err(p.fail("integer"))
}

/// List = '[' ValueExpr (',' ValueExpr)* ']' — at least one element
pub(crate) fn list(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::LIST_EXPR, |p| {
        p.expect(SyntaxKind::L_BRACKET)?;
        comma_separated(p, value_expr)?;
        p.expect(SyntaxKind::R_BRACKET)
    })
}

/// FunctionCall = TypeCall | CountCall | SumCall | StdevCall | PercentileCall
pub(crate) fn function_call(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    if p.at_contextual("type") {
        return type_call(p);
    }
    if p.at_contextual("count") {
        return count_call(p);
    }
    if p.at_contextual("sum") || p.at_contextual("stdev") {
        return property_aggregate(p);
    }
    if p.at_contextual("percentileDisc") {
        return percentile_call(p);
    }
    Err(p.fail("function name"))
}

/// TypeCall = 'type' '(' Name ')'
pub(crate) fn type_call(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::FUNCTION_CALL, |p| {
        p.bump(); // function name, checked by the caller
        p.expect(SyntaxKind::L_PAREN)?;
        p.expect_name()?;
        p.expect(SyntaxKind::R_PAREN)
    })
}

/// CountCall = 'count' '(' CountArg ')'
/// CountArg = DISTINCT PropertyAccess | DISTINCT Name | PropertyAccess | Name | '*'
fn count_call(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::FUNCTION_CALL, |p| {
        p.bump();
        p.expect(SyntaxKind::L_PAREN)?;
        p.eat_trivia();
        if p.at(SyntaxKind::STAR) {
            p.bump();
        } else {
            if p.at(SyntaxKind::DISTINCT_KW) {
                p.keyword(SyntaxKind::DISTINCT_KW, true)?;
            }
            if !p.try_parse(property_access) {
                p.expect_name()?;
            }
        }
        p.expect(SyntaxKind::R_PAREN)
    })
}

/// SumCall = 'sum' '(' PropertyAccess ')'; StdevCall likewise
fn property_aggregate(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::FUNCTION_CALL, |p| {
        p.bump();
        p.expect(SyntaxKind::L_PAREN)?;
        property_access(p)?;
        p.expect(SyntaxKind::R_PAREN)
    })
}

/// PercentileCall = 'percentileDisc' '(' PropertyAccess ',' Float ')'
fn percentile_call(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::FUNCTION_CALL, |p| {
        p.bump();
        p.expect(SyntaxKind::L_PAREN)?;
        property_access(p)?;
        p.expect(SyntaxKind::COMMA)?;
        p.eat_trivia();
        if !p.at(SyntaxKind::FLOAT) {
            return Err(p.fail("float"));
        }
        p.bump();
        p.expect(SyntaxKind::R_PAREN)
    })
}
