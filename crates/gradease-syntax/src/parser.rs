use crate::ast::{AtRule, Declaration, Node, Rule, Stylesheet};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser<'s> {
    src: &'s str,
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl<'s> Parser<'s> {
    pub fn new(src: &'s str, tokens: Vec<TokenWithPos>) -> Self {
        // Comments carry no structure; dropping them up front keeps the
        // lookahead below simple. Their bytes survive inside value spans.
        let tokens = tokens.into_iter().filter(|t| t.token != Token::Comment).collect();
        Self { src, tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn peek_at(&self, index: usize) -> &Token {
        self.tokens.get(index).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    /// Source text covered by tokens `from..to` (exclusive), trimmed.
    fn text_between(&self, from: usize, to: usize) -> &'s str {
        if from >= to {
            return "";
        }
        let src = self.src;
        let start = self.tokens[from].span.start;
        let end = self.tokens[to - 1].span.end;
        src[start..end].trim()
    }

    /// Index of the first token at or after `from` that ends an item.
    fn item_end(&self, from: usize) -> usize {
        let mut i = from;
        while !matches!(self.peek_at(i), Token::Semicolon | Token::LBrace | Token::RBrace | Token::Eof) {
            i += 1;
        }
        i
    }

    // ── Stylesheet ────────────────────────────────────────────────────────

    pub fn parse_stylesheet(&mut self) -> Result<Stylesheet, ParseError> {
        let nodes = self.parse_items(false)?;
        Ok(Stylesheet { nodes })
    }

    // ── Items ─────────────────────────────────────────────────────────────

    /// Parse items until EOF (top level) or the `}` closing the current block.
    fn parse_items(&mut self, nested: bool) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            match self.peek() {
                Token::Eof => {
                    if nested {
                        return Err(self.err("unclosed '{' block"));
                    }
                    break;
                }
                Token::RBrace => {
                    if !nested {
                        return Err(self.err("unexpected '}'"));
                    }
                    self.advance();
                    break;
                }
                Token::Semicolon => { self.advance(); }
                Token::AtKeyword(_) => nodes.push(self.parse_at_rule()?),
                _ => nodes.push(self.parse_rule_or_declaration()?),
            }
        }
        Ok(nodes)
    }

    // ── At-rule ───────────────────────────────────────────────────────────

    fn parse_at_rule(&mut self) -> Result<Node, ParseError> {
        let name = match self.advance() {
            Token::AtKeyword(name) => name,
            tok => return Err(self.err(format!("expected at-keyword, got {:?}", tok))),
        };
        let end = self.item_end(self.pos);
        let prelude = self.text_between(self.pos, end).to_string();
        self.pos = end;

        let block = match self.peek() {
            Token::Semicolon => { self.advance(); None }
            Token::LBrace => {
                self.advance();
                Some(self.parse_items(true)?)
            }
            // `}` or EOF: statement at-rule without a terminator.
            _ => None,
        };

        Ok(Node::AtRule(AtRule { name, prelude, block }))
    }

    // ── Rule / Declaration ────────────────────────────────────────────────

    /// A run ending in `{` is a (possibly nested) rule; anything else is a
    /// `property: value` declaration.
    fn parse_rule_or_declaration(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        let end = self.item_end(start);

        if self.peek_at(end) == &Token::LBrace {
            let selector = self.text_between(start, end).to_string();
            self.pos = end + 1;
            let block = self.parse_items(true)?;
            return Ok(Node::Rule(Rule { selector, block }));
        }

        let Some(colon) = (start..end).find(|&i| self.peek_at(i) == &Token::Colon) else {
            return Err(self.err(format!(
                "expected ':' in declaration {:?}",
                self.text_between(start, end)
            )));
        };

        let first = &self.tokens[start];
        let (line, col) = (first.line, first.col);
        let property = self.text_between(start, colon).to_string();

        let value_span = if colon + 1 < end {
            self.tokens[colon + 1].span.start..self.tokens[end - 1].span.end
        } else {
            let at = self.tokens[colon].span.end;
            at..at
        };
        let value = self.src[value_span.clone()].to_string();

        self.pos = end;
        if self.peek() == &Token::Semicolon {
            self.advance();
        }

        Ok(Node::Declaration(Declaration { property, value, value_span, line, col }))
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse CSS source into a [`Stylesheet`].
pub fn parse_stylesheet(src: &str) -> Result<Stylesheet, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(src, tokens).parse_stylesheet()
}
