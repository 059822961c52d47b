//! Clause productions and the top-level query
//!
//! Clause sequencing is decided by keyword lookahead, so no backtracking
//! happens above clause level:
//!
//! ```text
//! [OPTIONAL] MATCH ... [WHERE ...]   (repeated)
//! [WITH ... [ORDER BY ...] [SKIP n] [LIMIT n]]
//! RETURN ... [ORDER BY ...] [SKIP n] [LIMIT n]
//! ```

use super::*;

/// MatchClause = OPTIONAL? MATCH (PatternList | PathBinding)
///
/// The path form names a whole traversal: `MATCH p = (n)-->(m)`.
pub(crate) fn match_clause(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::MATCH_CLAUSE, |p| {
        if p.at(SyntaxKind::OPTIONAL_KW) {
            p.keyword(SyntaxKind::OPTIONAL_KW, true)?;
        }
        p.keyword(SyntaxKind::MATCH_KW, true)?;
        p.eat_trivia();
        if p.at(SyntaxKind::L_PAREN) {
            patterns::pattern_list(p)
        } else {
            patterns::path_binding(p)
        }
    })
}

/// WhereClause = WHERE BoolExpr
pub(crate) fn where_clause(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::WHERE_CLAUSE, |p| {
        p.keyword(SyntaxKind::WHERE_KW, true)?;
        predicates::predicate(p)
    })
}

/// AsBinding = (FunctionCall | PropertyAccess | Name) AS Name
fn as_binding(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::AS_BINDING, |p| {
        if !p.try_parse(expressions::function_call) && !p.try_parse(expressions::property_access) {
            p.expect_name()?;
        }
        p.keyword(SyntaxKind::AS_KW, true)?;
        p.expect_name()
    })
}

/// Projection = AsBinding | Name
fn with_projection(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    if p.try_parse(as_binding) {
        return Ok(());
    }
    p.expect_name()
}

/// WithClause = WITH Projection (',' Projection)*
pub(crate) fn with_clause(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::WITH_CLAUSE, |p| {
        p.keyword(SyntaxKind::WITH_KW, true)?;
        comma_separated(p, with_projection)
    })
}

/// OrderKey = (PropertyAccess | Name) (ASC | DESC)?
fn order_key(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::ORDER_KEY, |p| {
        if !p.try_parse(expressions::property_access) {
            p.expect_name()?;
        }
        let lookahead = p.checkpoint();
        p.eat_trivia();
        if p.at(SyntaxKind::ASC_KW) {
            p.keyword(SyntaxKind::ASC_KW, false)?;
        } else if p.at(SyntaxKind::DESC_KW) {
            p.keyword(SyntaxKind::DESC_KW, false)?;
        } else {
            p.rewind(lookahead);
        }
        Ok(())
    })
}

/// OrderByClause = ORDER BY OrderKey (',' OrderKey)*
///
/// ORDER BY is a two-word keyword treated atomically; both words carry the
/// whitespace boundary.
pub(crate) fn order_by_clause(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::ORDER_BY_CLAUSE, |p| {
        p.keyword(SyntaxKind::ORDER_KW, true)?;
        p.keyword(SyntaxKind::BY_KW, true)?;
        comma_separated(p, order_key)
    })
}

/// SkipClause = SKIP Integer
pub(crate) fn skip_clause(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::SKIP_CLAUSE, |p| {
        p.keyword(SyntaxKind::SKIP_KW, true)?;
        p.expect(SyntaxKind::INTEGER)
    })
}

/// LimitClause = LIMIT Integer
pub(crate) fn limit_clause(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::LIMIT_CLAUSE, |p| {
        p.keyword(SyntaxKind::LIMIT_KW, true)?;
        p.expect(SyntaxKind::INTEGER)
    })
}

/// ReturnProjection = String | AsBinding | BoolExpr | FunctionCall | Float
///                  | PropertyAccess | Name
///
/// BoolExpr covers traversals and parenthesized trees; the alternatives are
/// tried in this order and the first committing prefix wins.
fn return_projection(p: &mut Parser) -> ParseResult {
    p.eat_trivia();
    if p.at(SyntaxKind::STRING) {
        p.bump();
        return Ok(());
    }
    if p.try_parse(as_binding) {
        return Ok(());
    }
    // predicate before bare function call, so `type(n) = 'x'` is a
    // comparison rather than a call with a stranded operator
    if p.try_parse(predicates::predicate) {
        return Ok(());
    }
    if p.try_parse(expressions::function_call) {
        return Ok(());
    }
    if p.at(SyntaxKind::FLOAT) {
        p.bump();
        return Ok(());
    }
    if p.try_parse(expressions::property_access) {
        return Ok(());
    }
    p.expect_name()
}

/// ReturnClause = RETURN ReturnProjection (',' ReturnProjection)*
pub(crate) fn return_clause(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::RETURN_CLAUSE, |p| {
        p.keyword(SyntaxKind::RETURN_KW, true)?;
        comma_separated(p, return_projection)
    })
}

/// ORDER BY / SKIP / LIMIT modifiers trailing a WITH or RETURN clause
///
/// Lookahead whitespace is rewound when no modifier follows, so the query
/// node ends at its last clause.
fn tail_modifiers(p: &mut Parser) -> ParseResult {
    let lookahead = p.checkpoint();
    p.eat_trivia();
    if p.at(SyntaxKind::ORDER_KW) {
        order_by_clause(p)?;
    } else {
        p.rewind(lookahead);
    }
    let lookahead = p.checkpoint();
    p.eat_trivia();
    if p.at(SyntaxKind::SKIP_KW) {
        skip_clause(p)?;
    } else {
        p.rewind(lookahead);
    }
    let lookahead = p.checkpoint();
    p.eat_trivia();
    if p.at(SyntaxKind::LIMIT_KW) {
        limit_clause(p)?;
    } else {
        p.rewind(lookahead);
    }
    Ok(())
}

/// Query = (MatchClause WhereClause?)* (WithClause Tail?)? ReturnClause Tail?
///
/// RETURN is the one mandatory clause; everything before it is optional and
/// repeatable per the clause ordering rules.
pub(crate) fn query(p: &mut Parser) -> ParseResult {
    with_node(p, SyntaxKind::QUERY, |p| {
        loop {
            p.eat_trivia();
            if p.at(SyntaxKind::MATCH_KW) || p.at(SyntaxKind::OPTIONAL_KW) {
                match_clause(p)?;
                p.eat_trivia();
                if p.at(SyntaxKind::WHERE_KW) {
                    where_clause(p)?;
                }
            } else {
                break;
            }
        }
        p.eat_trivia();
        if p.at(SyntaxKind::WITH_KW) {
            with_clause(p)?;
            tail_modifiers(p)?;
        }
        return_clause(p)?;
        tail_modifiers(p)
    })
}
