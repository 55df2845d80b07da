use std::ops::Range;

use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `@name` introducing an at-rule. Holds the name without the `@`.
    AtKeyword(String),
    /// Any other run of source text. Parenthesised groups and quoted strings
    /// are swallowed whole, so `url(a;b)` is a single token.
    Text,
    /// A `/* ... */` comment.
    Comment,
    // Punctuation
    Colon,
    Semicolon,
    LBrace,
    RBrace,
    // Sentinel
    Eof,
}

/// A token together with its byte span and 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub span: Range<usize>,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let eof = tok.token == Token::Eof;
            tokens.push(tok);
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>, line: usize, col: usize) -> ParseError {
        ParseError::new(msg, line, col)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn next_token(&mut self) -> Result<TokenWithPos, ParseError> {
        self.skip_whitespace();

        let (start, line, col) = (self.pos, self.line, self.col);
        let Some(ch) = self.peek() else {
            return Ok(TokenWithPos { token: Token::Eof, span: start..start, line, col });
        };

        let token = match ch {
            ':' => { self.advance(); Token::Colon }
            ';' => { self.advance(); Token::Semicolon }
            '{' => { self.advance(); Token::LBrace }
            '}' => { self.advance(); Token::RBrace }
            '@' => self.lex_at_keyword(),
            '/' if self.rest().starts_with("/*") => {
                self.skip_comment(line, col)?;
                Token::Comment
            }
            _ => {
                let end = self.lex_text()?;
                return Ok(TokenWithPos { token: Token::Text, span: start..end, line, col });
            }
        };

        Ok(TokenWithPos { token, span: start..self.pos, line, col })
    }

    fn lex_at_keyword(&mut self) -> Token {
        self.advance(); // consume `@`
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '-' || c == '_') {
            self.advance();
        }
        Token::AtKeyword(self.src[start..self.pos].to_string())
    }

    fn skip_comment(&mut self, line: usize, col: usize) -> Result<(), ParseError> {
        self.advance(); self.advance(); // consume `/*`
        loop {
            if self.rest().starts_with("*/") {
                self.advance(); self.advance(); // consume `*/`
                return Ok(());
            }
            if self.advance().is_none() {
                return Err(self.err("unterminated comment", line, col));
            }
        }
    }

    /// Consume a text run and return its end offset with trailing whitespace
    /// trimmed off.
    fn lex_text(&mut self) -> Result<usize, ParseError> {
        let mut end = self.pos;
        loop {
            match self.peek() {
                None | Some(':' | ';' | '{' | '}') => break,
                Some('/') if self.rest().starts_with("/*") => break,
                Some(')') => return Err(self.err("unbalanced ')'", self.line, self.col)),
                Some('(') => self.skip_group()?,
                Some(q @ ('"' | '\'')) => self.skip_string(q)?,
                Some(c) => {
                    self.advance();
                    if c.is_whitespace() {
                        continue;
                    }
                }
            }
            end = self.pos;
        }
        Ok(end)
    }

    /// Consume a balanced `( ... )` group, strings included.
    fn skip_group(&mut self) -> Result<(), ParseError> {
        let (line, col) = (self.line, self.col);
        self.advance(); // consume `(`
        let mut depth = 1usize;
        while depth > 0 {
            match self.peek() {
                None => return Err(self.err("unclosed '('", line, col)),
                Some(q @ ('"' | '\'')) => self.skip_string(q)?,
                Some(c) => {
                    self.advance();
                    match c {
                        '(' => depth += 1,
                        ')' => depth -= 1,
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    fn skip_string(&mut self, quote: char) -> Result<(), ParseError> {
        let (line, col) = (self.line, self.col);
        self.advance(); // consume opening quote
        loop {
            match self.advance() {
                None => return Err(self.err("unterminated string literal", line, col)),
                Some('\\') => {
                    if self.advance().is_none() {
                        return Err(self.err("unterminated escape sequence", line, col));
                    }
                }
                Some(c) if c == quote => return Ok(()),
                Some(_) => {}
            }
        }
    }
}
