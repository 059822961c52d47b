use super::*;

// ============================================================================
// Predicate — any node that can appear in a boolean tree
// ============================================================================

/// A boolean tree: internal nodes are the connectives, leaves are
/// comparisons, label assertions, traversals (membership checks), or
/// parenthesized subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    And(AndExpr),
    Or(OrExpr),
    Xor(XorExpr),
    Not(NotExpr),
    Paren(ParenExpr),
    Has(HasComparison),
    Binary(BinaryComparison),
    In(InComparison),
    IsNull(IsNullComparison),
    Regex(RegexComparison),
    LabelAssertion(LabelAssertion),
    Traversal(Traversal),
}

impl Predicate {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::AND_EXPR => AndExpr::cast(node).map(Self::And),
            SyntaxKind::OR_EXPR => OrExpr::cast(node).map(Self::Or),
            SyntaxKind::XOR_EXPR => XorExpr::cast(node).map(Self::Xor),
            SyntaxKind::NOT_EXPR => NotExpr::cast(node).map(Self::Not),
            SyntaxKind::PAREN_EXPR => ParenExpr::cast(node).map(Self::Paren),
            SyntaxKind::HAS_COMPARISON => HasComparison::cast(node).map(Self::Has),
            SyntaxKind::BINARY_COMPARISON => BinaryComparison::cast(node).map(Self::Binary),
            SyntaxKind::IN_COMPARISON => InComparison::cast(node).map(Self::In),
            SyntaxKind::IS_NULL_COMPARISON => IsNullComparison::cast(node).map(Self::IsNull),
            SyntaxKind::REGEX_COMPARISON => RegexComparison::cast(node).map(Self::Regex),
            SyntaxKind::LABEL_ASSERTION => LabelAssertion::cast(node).map(Self::LabelAssertion),
            SyntaxKind::TRAVERSAL => Traversal::cast(node).map(Self::Traversal),
            _ => None,
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::And(e) => e.syntax(),
            Self::Or(e) => e.syntax(),
            Self::Xor(e) => e.syntax(),
            Self::Not(e) => e.syntax(),
            Self::Paren(e) => e.syntax(),
            Self::Has(e) => e.syntax(),
            Self::Binary(e) => e.syntax(),
            Self::In(e) => e.syntax(),
            Self::IsNull(e) => e.syntax(),
            Self::Regex(e) => e.syntax(),
            Self::LabelAssertion(e) => e.syntax(),
            Self::Traversal(e) => e.syntax(),
        }
    }
}

// ============================================================================
// Connectives
// ============================================================================

ast_node!(AndExpr, AND_EXPR);
ast_node!(OrExpr, OR_EXPR);
ast_node!(XorExpr, XOR_EXPR);
ast_node!(NotExpr, NOT_EXPR);
ast_node!(ParenExpr, PAREN_EXPR);

impl AndExpr {
    /// Operands of the flattened run, at least two
    pub fn operands(&self) -> Vec<Predicate> {
        self.0.children().filter_map(Predicate::cast).collect()
    }
}

impl OrExpr {
    pub fn operands(&self) -> Vec<Predicate> {
        self.0.children().filter_map(Predicate::cast).collect()
    }
}

impl XorExpr {
    pub fn operands(&self) -> Vec<Predicate> {
        self.0.children().filter_map(Predicate::cast).collect()
    }
}

impl NotExpr {
    /// The single negated operand
    pub fn operand(&self) -> Option<Predicate> {
        self.0.children().find_map(Predicate::cast)
    }
}

impl ParenExpr {
    /// The parenthesized subtree
    pub fn inner(&self) -> Option<Predicate> {
        self.0.children().find_map(Predicate::cast)
    }
}

// ============================================================================
// Comparison leaves
// ============================================================================

/// The left side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOperand {
    Property(PropertyAccess),
    Call(FunctionCall),
    Name(SmolStr),
}

fn left_operand(node: &SyntaxNode) -> Option<ComparisonOperand> {
    for element in node.children_with_tokens() {
        match element {
            rowan::NodeOrToken::Node(n) => match n.kind() {
                SyntaxKind::PROPERTY_ACCESS => {
                    return PropertyAccess::cast(n).map(ComparisonOperand::Property);
                }
                SyntaxKind::FUNCTION_CALL => {
                    return FunctionCall::cast(n).map(ComparisonOperand::Call);
                }
                _ => return None,
            },
            rowan::NodeOrToken::Token(t) => {
                if is_name_token(t.kind()) {
                    return Some(ComparisonOperand::Name(token_text(&t)));
                }
                if !t.kind().is_trivia() {
                    return None;
                }
            }
        }
    }
    None
}

/// Relational operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompOp {
    fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::EQ => Some(Self::Eq),
            SyntaxKind::LT_GT => Some(Self::Ne),
            SyntaxKind::LT => Some(Self::Lt),
            SyntaxKind::LT_EQ => Some(Self::Le),
            SyntaxKind::GT => Some(Self::Gt),
            SyntaxKind::GT_EQ => Some(Self::Ge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

ast_node!(BinaryComparison, BINARY_COMPARISON);

impl BinaryComparison {
    pub fn left(&self) -> Option<ComparisonOperand> {
        left_operand(&self.0)
    }

    pub fn op(&self) -> Option<CompOp> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find_map(|t| CompOp::from_kind(t.kind()))
    }

    /// The right-hand value; for a name left operand the value is whatever
    /// follows the operator token
    pub fn right(&self) -> Option<Value> {
        let mut seen_op = false;
        for element in self.0.children_with_tokens() {
            if let rowan::NodeOrToken::Token(t) = &element {
                if CompOp::from_kind(t.kind()).is_some() {
                    seen_op = true;
                    continue;
                }
            }
            if seen_op {
                if let Some(value) = Value::from_element(element) {
                    return Some(value);
                }
            }
        }
        None
    }
}

ast_node!(InComparison, IN_COMPARISON);

impl InComparison {
    pub fn left(&self) -> Option<ComparisonOperand> {
        left_operand(&self.0)
    }

    first_child_method!(list, ListExpr);
}

ast_node!(IsNullComparison, IS_NULL_COMPARISON);

impl IsNullComparison {
    pub fn left(&self) -> Option<ComparisonOperand> {
        left_operand(&self.0)
    }
}

ast_node!(RegexComparison, REGEX_COMPARISON);

impl RegexComparison {
    pub fn left(&self) -> Option<ComparisonOperand> {
        left_operand(&self.0)
    }

    /// The regex pattern, unescaped and unquoted
    pub fn pattern(&self) -> Option<String> {
        find_token(&self.0, SyntaxKind::STRING).map(|t| unescape_string(t.text()))
    }
}

ast_node!(HasComparison, HAS_COMPARISON);

impl HasComparison {
    first_child_method!(property, PropertyAccess);
}

ast_node!(LabelAssertion, LABEL_ASSERTION);

impl LabelAssertion {
    /// The asserted variable
    pub fn name(&self) -> Option<SmolStr> {
        find_name_token(&self.0).map(|t| token_text(&t))
    }

    children_method!(labels, Label);
}
