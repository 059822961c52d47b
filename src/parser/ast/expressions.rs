use super::*;

// ============================================================================
// PropertyAccess
// ============================================================================

ast_node!(PropertyAccess, PROPERTY_ACCESS);

impl PropertyAccess {
    /// The variable part of `var.key`
    pub fn base(&self) -> Option<SmolStr> {
        find_name_token(&self.0).map(|t| token_text(&t))
    }

    /// The property part of `var.key`
    pub fn key(&self) -> Option<SmolStr> {
        let mut seen_dot = false;
        for element in self.0.children_with_tokens() {
            if let Some(token) = element.into_token() {
                if token.kind() == SyntaxKind::DOT {
                    seen_dot = true;
                } else if seen_dot && is_name_token(token.kind()) {
                    return Some(token_text(&token));
                }
            }
        }
        None
    }
}

impl std::fmt::Display for PropertyAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}",
            self.base().unwrap_or_default(),
            self.key().unwrap_or_default()
        )
    }
}

// ============================================================================
// Value — typed view of a value expression position
// ============================================================================

/// A value on the right-hand side of a comparison, in a list, or in a
/// property map. String content is stored unescaped and unquoted.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Property(PropertyAccess),
    String(String),
    Integer(i64),
}

impl Value {
    /// Extract a value from a CST element (a `PROPERTY_ACCESS` node or a
    /// `STRING`/`INTEGER` token)
    pub(crate) fn from_element(element: super::super::SyntaxElement) -> Option<Value> {
        match element {
            rowan::NodeOrToken::Node(node) => PropertyAccess::cast(node).map(Value::Property),
            rowan::NodeOrToken::Token(token) => match token.kind() {
                SyntaxKind::STRING => Some(Value::String(unescape_string(token.text()))),
                SyntaxKind::INTEGER => token.text().parse().ok().map(Value::Integer),
                _ => None,
            },
        }
    }
}

// ============================================================================
// ListExpr
// ============================================================================

ast_node!(ListExpr, LIST_EXPR);

impl ListExpr {
    /// List elements in source order
    pub fn values(&self) -> Vec<Value> {
        self.0
            .children_with_tokens()
            .filter_map(Value::from_element)
            .collect()
    }
}

// ============================================================================
// FunctionCall
// ============================================================================

/// The function set of the read-only subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    Type,
    Count,
    Sum,
    PercentileDisc,
    Stdev,
}

impl FunctionName {
    pub fn from_text(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("type") {
            Some(Self::Type)
        } else if text.eq_ignore_ascii_case("count") {
            Some(Self::Count)
        } else if text.eq_ignore_ascii_case("sum") {
            Some(Self::Sum)
        } else if text.eq_ignore_ascii_case("percentileDisc") {
            Some(Self::PercentileDisc)
        } else if text.eq_ignore_ascii_case("stdev") {
            Some(Self::Stdev)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Count => "count",
            Self::Sum => "sum",
            Self::PercentileDisc => "percentileDisc",
            Self::Stdev => "stdev",
        }
    }
}

ast_node!(FunctionCall, FUNCTION_CALL);

impl FunctionCall {
    /// Which function this call names
    pub fn name(&self) -> Option<FunctionName> {
        find_token(&self.0, SyntaxKind::IDENT).and_then(|t| FunctionName::from_text(t.text()))
    }

    /// `count(DISTINCT ...)` flag
    pub fn is_distinct(&self) -> bool {
        has_token(&self.0, SyntaxKind::DISTINCT_KW)
    }

    /// `count(*)` flag
    pub fn is_star(&self) -> bool {
        has_token(&self.0, SyntaxKind::STAR)
    }

    first_child_method!(property_argument, PropertyAccess);

    /// A bare-name argument (`count(n)`, `type(r)`), when present
    pub fn name_argument(&self) -> Option<SmolStr> {
        let mut past_paren = false;
        for element in self.0.children_with_tokens() {
            if let Some(token) = element.into_token() {
                match token.kind() {
                    SyntaxKind::L_PAREN => past_paren = true,
                    SyntaxKind::DISTINCT_KW | SyntaxKind::WHITESPACE => {}
                    kind if past_paren && is_name_token(kind) => {
                        return Some(token_text(&token));
                    }
                    _ => {}
                }
            }
        }
        None
    }

    /// The percentile of a `percentileDisc(prop, p)` call
    pub fn percentile(&self) -> Option<f64> {
        find_token(&self.0, SyntaxKind::FLOAT).and_then(|t| t.text().parse().ok())
    }
}
