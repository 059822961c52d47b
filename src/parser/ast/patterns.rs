use super::*;

// ============================================================================
// Label / AliasLabel
// ============================================================================

ast_node!(Label, LABEL);

impl Label {
    /// Label name, without the leading `:`
    pub fn name(&self) -> Option<SmolStr> {
        find_name_token(&self.0).map(|t| token_text(&t))
    }
}

ast_node!(AliasLabel, ALIAS_LABEL);

impl AliasLabel {
    /// The binding name, when present (`p` in `p:Person`)
    pub fn alias(&self) -> Option<SmolStr> {
        // the alias token precedes any label; a label's name lives inside
        // the LABEL node, so the only direct name token is the alias
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| is_name_token(t.kind()))
            .map(|t| token_text(&t))
    }

    children_method!(labels, Label);

    /// Label names in source order
    pub fn label_names(&self) -> Vec<SmolStr> {
        self.labels().filter_map(|l| l.name()).collect()
    }
}

// ============================================================================
// PropertyMap
// ============================================================================

ast_node!(KeyValue, KEY_VALUE);

impl KeyValue {
    pub fn key(&self) -> Option<SmolStr> {
        find_name_token(&self.0).map(|t| token_text(&t))
    }

    /// The value element after the `:`
    pub fn value(&self) -> Option<Value> {
        let mut seen_colon = false;
        for element in self.0.children_with_tokens() {
            match &element {
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::COLON => {
                    seen_colon = true;
                    continue;
                }
                _ => {}
            }
            if seen_colon {
                if let Some(value) = Value::from_element(element) {
                    return Some(value);
                }
            }
        }
        None
    }
}

ast_node!(PropertyMap, PROPERTY_MAP);

impl PropertyMap {
    children_method!(entries, KeyValue);

    /// Key/value pairs in source order; duplicate keys are kept
    pub fn pairs(&self) -> Vec<(SmolStr, Value)> {
        self.entries()
            .filter_map(|kv| Some((kv.key()?, kv.value()?)))
            .collect()
    }
}

// ============================================================================
// Node patterns
// ============================================================================

ast_node!(NodePattern, NODE_PATTERN);

impl NodePattern {
    first_child_method!(alias_label, AliasLabel);
    first_child_method!(properties, PropertyMap);

    /// Binding name, when present
    pub fn alias(&self) -> Option<SmolStr> {
        self.alias_label().and_then(|al| al.alias())
    }

    /// Label names, possibly empty
    pub fn labels(&self) -> Vec<SmolStr> {
        self.alias_label()
            .map(|al| al.label_names())
            .unwrap_or_default()
    }
}

// ============================================================================
// Edges
// ============================================================================

ast_node!(Cardinality, CARDINALITY);

impl Cardinality {
    /// `Some((min, max))` for `*min..max`, `None` for unbounded `*`
    pub fn bounds(&self) -> Option<(u64, u64)> {
        let mut integers = self
            .0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::INTEGER);
        let min = integers.next()?.text().parse().ok()?;
        let max = integers.next()?.text().parse().ok()?;
        Some((min, max))
    }

    pub fn is_unbounded(&self) -> bool {
        self.bounds().is_none()
    }
}

ast_node!(EdgeContent, EDGE_CONTENT);

impl EdgeContent {
    first_child_method!(alias_label, AliasLabel);
    first_child_method!(properties, PropertyMap);
    first_child_method!(cardinality, Cardinality);

    pub fn alias(&self) -> Option<SmolStr> {
        self.alias_label().and_then(|al| al.alias())
    }

    pub fn labels(&self) -> Vec<SmolStr> {
        self.alias_label()
            .map(|al| al.label_names())
            .unwrap_or_default()
    }
}

/// Direction of an edge in a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// `-...->`
    Out,
    /// `<-...-`
    In,
    /// `-...-`
    Undirected,
}

ast_node!(EdgePattern, EDGE_PATTERN);

impl EdgePattern {
    /// Direction, derived from the `<`/`>` tokens
    pub fn direction(&self) -> EdgeDirection {
        if has_token(&self.0, SyntaxKind::LT) {
            EdgeDirection::In
        } else if has_token(&self.0, SyntaxKind::GT) {
            EdgeDirection::Out
        } else {
            EdgeDirection::Undirected
        }
    }

    first_child_method!(content, EdgeContent);
}

// ============================================================================
// Traversals
// ============================================================================

ast_node!(Traversal, TRAVERSAL);

impl Traversal {
    children_method!(nodes, NodePattern);
    children_method!(edges, EdgePattern);

    /// Number of edges in the chain
    pub fn hops(&self) -> usize {
        self.edges().count()
    }
}

ast_node!(PatternList, PATTERN_LIST);

impl PatternList {
    children_method!(traversals, Traversal);
}

ast_node!(PathBinding, PATH_BINDING);

impl PathBinding {
    /// The path name bound with `=`
    pub fn name(&self) -> Option<SmolStr> {
        find_name_token(&self.0).map(|t| token_text(&t))
    }

    first_child_method!(traversal, Traversal);
}
