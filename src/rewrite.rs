//! Rewrite hooks and the query parser driver
//!
//! A [`QueryParser`] couples the grammar with an action registry: hooks
//! attached to a node kind run after recognition and may replace the
//! produced subtree. Hooks run bottom-up — children are rewritten before
//! their parent's hooks fire, so a parent hook always sees rewritten
//! children — and, per kind, in registration order. A hook error aborts the
//! whole parse.
//!
//! The registry is owned by the parser instance: attaching and detaching
//! take `&mut self` while parsing takes `&self`, so the borrow checker
//! enforces that the hook set cannot change under an active parse.

use indexmap::IndexMap;
use rowan::NodeOrToken;

use crate::parser::{
    ActionError, GreenNode, Parse, ParseError, RuleKind, SyntaxKind, SyntaxNode, parse_rule,
};

/// A rewrite hook: receives the recognized subtree (as the root of a
/// detached tree) and returns a replacement green node, or `None` to keep
/// the subtree, or an error message to abort the parse.
pub type ActionFn = Box<dyn Fn(&SyntaxNode) -> Result<Option<GreenNode>, String>>;

/// Identifies an attached hook so it can be detached again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionHandle {
    kind: SyntaxKind,
    id: u64,
}

/// The driver: grammar entry points plus the action registry
#[derive(Default)]
pub struct QueryParser {
    actions: IndexMap<SyntaxKind, Vec<(u64, ActionFn)>>,
    next_id: u64,
}

impl QueryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete query and run any registered hooks
    pub fn parse(&self, input: &str) -> Result<Parse, ParseError> {
        self.parse_rule(input, RuleKind::Query)
    }

    /// Parse any named production and run any registered hooks
    pub fn parse_rule(&self, input: &str, rule: RuleKind) -> Result<Parse, ParseError> {
        let parse = parse_rule(input, rule)?;
        if self.actions.is_empty() {
            return Ok(parse);
        }
        let rewritten = self.rewrite_node(&parse.syntax())?;
        Ok(parse.with_green(rewritten))
    }

    /// Access a single production for embedded use in tests or tooling
    pub fn rule(&self, rule: RuleKind) -> NamedRule<'_> {
        NamedRule { parser: self, rule }
    }

    /// Register a hook on a node kind. Hooks on the same kind compose in
    /// registration order, each seeing the previous one's output.
    pub fn attach_action<F>(&mut self, kind: SyntaxKind, hook: F) -> ActionHandle
    where
        F: Fn(&SyntaxNode) -> Result<Option<GreenNode>, String> + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.actions.entry(kind).or_default().push((id, Box::new(hook)));
        ActionHandle { kind, id }
    }

    /// Remove a previously attached hook; returns whether it was present
    pub fn detach_action(&mut self, handle: ActionHandle) -> bool {
        match self.actions.get_mut(&handle.kind) {
            Some(hooks) => {
                let before = hooks.len();
                hooks.retain(|(id, _)| *id != handle.id);
                before != hooks.len()
            }
            None => false,
        }
    }

    /// Number of attached hooks, across all kinds
    pub fn action_count(&self) -> usize {
        self.actions.values().map(Vec::len).sum()
    }

    /// Rebuild `node` bottom-up, firing hooks on the way out
    fn rewrite_node(&self, node: &SyntaxNode) -> Result<GreenNode, ActionError> {
        let mut children: Vec<NodeOrToken<GreenNode, rowan::GreenToken>> = Vec::new();
        for element in node.children_with_tokens() {
            match element {
                NodeOrToken::Node(child) => {
                    children.push(NodeOrToken::Node(self.rewrite_node(&child)?));
                }
                NodeOrToken::Token(token) => {
                    children.push(NodeOrToken::Token(token.green().to_owned()));
                }
            }
        }
        let mut green = GreenNode::new(node.kind().into(), children);

        if let Some(hooks) = self.actions.get(&node.kind()) {
            for (_, hook) in hooks {
                let current = SyntaxNode::new_root(green.clone());
                match hook(&current) {
                    Ok(Some(replacement)) => green = replacement,
                    Ok(None) => {}
                    Err(cause) => {
                        return Err(ActionError {
                            rule: node.kind().display_name(),
                            cause,
                        });
                    }
                }
            }
        }
        Ok(green)
    }
}

impl std::fmt::Debug for QueryParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, hooks) in &self.actions {
            map.entry(&kind.display_name(), &hooks.len());
        }
        map.finish()
    }
}

/// A single production bound to a parser, for embedded use
#[derive(Debug, Clone, Copy)]
pub struct NamedRule<'a> {
    parser: &'a QueryParser,
    rule: RuleKind,
}

impl NamedRule<'_> {
    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    pub fn parse(&self, input: &str) -> Result<Parse, ParseError> {
        self.parser.parse_rule(input, self.rule)
    }
}
