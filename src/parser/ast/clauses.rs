use super::*;

// ============================================================================
// Query — the root node
// ============================================================================

ast_node!(Query, QUERY);

/// Any clause of a query, in source order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clause {
    Match(MatchClause),
    Where(WhereClause),
    With(WithClause),
    OrderBy(OrderByClause),
    Skip(SkipClause),
    Limit(LimitClause),
    Return(ReturnClause),
}

impl Clause {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::MATCH_CLAUSE => MatchClause::cast(node).map(Self::Match),
            SyntaxKind::WHERE_CLAUSE => WhereClause::cast(node).map(Self::Where),
            SyntaxKind::WITH_CLAUSE => WithClause::cast(node).map(Self::With),
            SyntaxKind::ORDER_BY_CLAUSE => OrderByClause::cast(node).map(Self::OrderBy),
            SyntaxKind::SKIP_CLAUSE => SkipClause::cast(node).map(Self::Skip),
            SyntaxKind::LIMIT_CLAUSE => LimitClause::cast(node).map(Self::Limit),
            SyntaxKind::RETURN_CLAUSE => ReturnClause::cast(node).map(Self::Return),
            _ => None,
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Match(c) => c.syntax(),
            Self::Where(c) => c.syntax(),
            Self::With(c) => c.syntax(),
            Self::OrderBy(c) => c.syntax(),
            Self::Skip(c) => c.syntax(),
            Self::Limit(c) => c.syntax(),
            Self::Return(c) => c.syntax(),
        }
    }
}

impl Query {
    /// Clauses in source order
    pub fn clauses(&self) -> Vec<Clause> {
        self.0.children().filter_map(Clause::cast).collect()
    }

    children_method!(match_clauses, MatchClause);
    first_child_method!(return_clause, ReturnClause);
}

// ============================================================================
// MATCH / WHERE
// ============================================================================

ast_node!(MatchClause, MATCH_CLAUSE);

impl MatchClause {
    /// `OPTIONAL MATCH` flag
    pub fn is_optional(&self) -> bool {
        has_token(&self.0, SyntaxKind::OPTIONAL_KW)
    }

    first_child_method!(pattern_list, PatternList);
    first_child_method!(path_binding, PathBinding);
}

ast_node!(WhereClause, WHERE_CLAUSE);

impl WhereClause {
    /// The boolean tree after WHERE
    pub fn predicate(&self) -> Option<Predicate> {
        self.0.children().find_map(Predicate::cast)
    }
}

// ============================================================================
// Projections
// ============================================================================

/// The aliased expression of an `expr AS name` binding
#[derive(Debug, Clone, PartialEq)]
pub enum BoundExpr {
    Call(FunctionCall),
    Property(PropertyAccess),
    Name(SmolStr),
}

ast_node!(AsBinding, AS_BINDING);

impl AsBinding {
    /// The expression being bound
    pub fn expr(&self) -> Option<BoundExpr> {
        for element in self.0.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Node(n) => match n.kind() {
                    SyntaxKind::FUNCTION_CALL => {
                        return FunctionCall::cast(n).map(BoundExpr::Call);
                    }
                    SyntaxKind::PROPERTY_ACCESS => {
                        return PropertyAccess::cast(n).map(BoundExpr::Property);
                    }
                    _ => return None,
                },
                rowan::NodeOrToken::Token(t) => {
                    if t.kind() == SyntaxKind::AS_KW {
                        return None;
                    }
                    if is_name_token(t.kind()) {
                        return Some(BoundExpr::Name(token_text(&t)));
                    }
                }
            }
        }
        None
    }

    /// The alias after AS
    pub fn alias(&self) -> Option<SmolStr> {
        let mut seen_as = false;
        for element in self.0.children_with_tokens() {
            if let Some(token) = element.into_token() {
                if token.kind() == SyntaxKind::AS_KW {
                    seen_as = true;
                } else if seen_as && is_name_token(token.kind()) {
                    return Some(token_text(&token));
                }
            }
        }
        None
    }
}

/// A WITH projection: an AS binding or a bare name
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Binding(AsBinding),
    Name(SmolStr),
}

ast_node!(WithClause, WITH_CLAUSE);

impl WithClause {
    /// Projections in source order
    pub fn projections(&self) -> Vec<Projection> {
        let mut out = Vec::new();
        let mut past_keyword = false;
        for element in self.0.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Node(n) => {
                    if let Some(binding) = AsBinding::cast(n) {
                        out.push(Projection::Binding(binding));
                    }
                }
                rowan::NodeOrToken::Token(t) => {
                    if !past_keyword {
                        // the WITH keyword itself
                        if t.kind() == SyntaxKind::WITH_KW {
                            past_keyword = true;
                        }
                    } else if is_name_token(t.kind()) {
                        out.push(Projection::Name(token_text(&t)));
                    }
                }
            }
        }
        out
    }
}

// ============================================================================
// ORDER BY / SKIP / LIMIT
// ============================================================================

/// Sort direction of an order key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderDirection {
    Asc,
    Desc,
    #[default]
    Unspecified,
}

/// What an order key sorts by
#[derive(Debug, Clone, PartialEq)]
pub enum OrderTarget {
    Property(PropertyAccess),
    Name(SmolStr),
}

ast_node!(OrderKey, ORDER_KEY);

impl OrderKey {
    pub fn target(&self) -> Option<OrderTarget> {
        if let Some(property) = self.0.children().find_map(PropertyAccess::cast) {
            return Some(OrderTarget::Property(property));
        }
        // the first name token is the key; this also covers a column that
        // happens to be named `asc` or `desc`
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| is_name_token(t.kind()))
            .map(|t| OrderTarget::Name(token_text(&t)))
    }

    pub fn direction(&self) -> OrderDirection {
        // only a trailing ASC/DESC counts; a lone one is the key itself
        // (`ORDER BY asc` sorts by a column named `asc`)
        let has_property_key = self
            .0
            .children()
            .any(|n| n.kind() == SyntaxKind::PROPERTY_ACCESS);
        let tokens: Vec<_> = self
            .0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .collect();
        let standalone = !has_property_key && tokens.len() < 2;
        match tokens.last().map(|t| t.kind()) {
            Some(SyntaxKind::ASC_KW) if !standalone => OrderDirection::Asc,
            Some(SyntaxKind::DESC_KW) if !standalone => OrderDirection::Desc,
            _ => OrderDirection::Unspecified,
        }
    }
}

ast_node!(OrderByClause, ORDER_BY_CLAUSE);

impl OrderByClause {
    children_method!(keys, OrderKey);
}

ast_node!(SkipClause, SKIP_CLAUSE);

impl SkipClause {
    /// The row count after SKIP
    pub fn count(&self) -> Option<u64> {
        find_token(&self.0, SyntaxKind::INTEGER).and_then(|t| t.text().parse().ok())
    }
}

ast_node!(LimitClause, LIMIT_CLAUSE);

impl LimitClause {
    /// The row count after LIMIT
    pub fn count(&self) -> Option<u64> {
        find_token(&self.0, SyntaxKind::INTEGER).and_then(|t| t.text().parse().ok())
    }
}

// ============================================================================
// RETURN
// ============================================================================

/// A RETURN projection
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnProjection {
    /// String literal, unescaped
    String(String),
    Binding(AsBinding),
    Call(FunctionCall),
    /// A boolean tree or traversal
    Predicate(Predicate),
    Float(f64),
    Property(PropertyAccess),
    Name(SmolStr),
}

ast_node!(ReturnClause, RETURN_CLAUSE);

impl ReturnClause {
    /// Projections in source order
    pub fn projections(&self) -> Vec<ReturnProjection> {
        let mut out = Vec::new();
        let mut past_keyword = false;
        for element in self.0.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Node(n) => {
                    let projection = match n.kind() {
                        SyntaxKind::AS_BINDING => AsBinding::cast(n).map(ReturnProjection::Binding),
                        SyntaxKind::FUNCTION_CALL => {
                            FunctionCall::cast(n).map(ReturnProjection::Call)
                        }
                        SyntaxKind::PROPERTY_ACCESS => {
                            PropertyAccess::cast(n).map(ReturnProjection::Property)
                        }
                        _ => Predicate::cast(n).map(ReturnProjection::Predicate),
                    };
                    if let Some(projection) = projection {
                        out.push(projection);
                    }
                }
                rowan::NodeOrToken::Token(t) => {
                    if !past_keyword {
                        if t.kind() == SyntaxKind::RETURN_KW {
                            past_keyword = true;
                        }
                        continue;
                    }
                    match t.kind() {
                        SyntaxKind::STRING => {
                            out.push(ReturnProjection::String(unescape_string(t.text())));
                        }
                        SyntaxKind::FLOAT => {
                            if let Ok(value) = t.text().parse() {
                                out.push(ReturnProjection::Float(value));
                            }
                        }
                        kind if is_name_token(kind) => {
                            out.push(ReturnProjection::Name(token_text(&t)));
                        }
                        _ => {}
                    }
                }
            }
        }
        out
    }
}
