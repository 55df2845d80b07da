use std::ops::Range;

/// A parsed stylesheet.
///
/// The tree never owns a re-serialised copy of the source: declarations keep
/// the byte span of their value so callers can splice replacements into the
/// original text and leave every other byte untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    AtRule(AtRule),
    Rule(Rule),
    Declaration(Declaration),
}

/// `@name prelude;` or `@name prelude { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    pub name: String,
    pub prelude: String,
    pub block: Option<Vec<Node>>,
}

impl AtRule {
    /// `@keyframes` and its vendor-prefixed spellings (`@-webkit-keyframes`).
    pub fn is_keyframes(&self) -> bool {
        let name = self.name.to_ascii_lowercase();
        name == "keyframes" || (name.starts_with('-') && name.ends_with("-keyframes"))
    }
}

/// `selector { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub block: Vec<Node>,
}

/// `property: value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    /// Byte range of `value` within the parsed source.
    pub value_span: Range<usize>,
    /// 1-based source line of the property name.
    pub line: usize,
    /// 1-based source column of the property name.
    pub col: usize,
}

/// A declaration reached while walking the tree, with its ancestry summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclarationRef<'a> {
    pub declaration: &'a Declaration,
    /// True when any enclosing at-rule is a keyframes rule.
    pub in_keyframes: bool,
}

impl Stylesheet {
    /// All declarations in source order, each tagged with whether it sits
    /// (directly or transitively) inside a keyframes at-rule.
    pub fn declarations(&self) -> Vec<DeclarationRef<'_>> {
        let mut out = Vec::new();
        walk(&self.nodes, false, &mut out);
        out
    }
}

fn walk<'a>(nodes: &'a [Node], in_keyframes: bool, out: &mut Vec<DeclarationRef<'a>>) {
    for node in nodes {
        match node {
            Node::Declaration(declaration) => out.push(DeclarationRef { declaration, in_keyframes }),
            Node::Rule(rule) => walk(&rule.block, in_keyframes, out),
            Node::AtRule(at) => {
                if let Some(block) = &at.block {
                    walk(block, in_keyframes || at.is_keyframes(), out);
                }
            }
        }
    }
}
