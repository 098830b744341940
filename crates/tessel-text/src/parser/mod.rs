//! Parser for the circuit text format.

mod target;

use tessel_ir::{Circuit, Operation};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse a circuit source string into a Circuit.
///
/// Operation names are not checked against any table here; unknown names
/// come back as [`tessel_ir::OpKind::Unsupported`] operations.
pub fn parse(source: &str) -> ParseResult<Circuit> {
    let mut parser = Parser::new(source)?;
    parser.parse_block(false)
}

/// Parser state.
pub(super) struct Parser {
    pub(super) tokens: Vec<SpannedToken>,
    pub(super) pos: usize,
    pub(super) line: usize,
}

impl Parser {
    /// Create a new parser from source.
    fn new(source: &str) -> ParseResult<Self> {
        let token_results = tokenize(source);
        let mut tokens = Vec::new();

        for result in token_results {
            match result {
                Ok(t) => tokens.push(t),
                Err((span, msg)) => {
                    return Err(ParseError::LexerError {
                        position: span.start,
                        message: msg,
                    });
                }
            }
        }

        Ok(Self {
            tokens,
            pos: 0,
            line: 1,
        })
    }

    /// Check if we've reached the end.
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Peek at the current token.
    pub(super) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// Advance and return the current token.
    pub(super) fn advance(&mut self) -> Option<Token> {
        if self.is_eof() {
            return None;
        }
        let token = self.tokens[self.pos].token.clone();
        self.pos += 1;
        if token == Token::Newline {
            self.line += 1;
        }
        Some(token)
    }

    /// Expect a specific token.
    #[allow(clippy::needless_pass_by_value)]
    pub(super) fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let found = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {expected}")))?;

        if std::mem::discriminant(&found) != std::mem::discriminant(&expected) {
            return Err(self.unexpected(&expected.to_string(), &found));
        }
        Ok(())
    }

    /// Check if current token matches.
    pub(super) fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    /// Consume token if it matches.
    pub(super) fn consume(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn unexpected(&self, expected: &str, found: &Token) -> ParseError {
        ParseError::UnexpectedToken {
            line: self.line,
            expected: expected.into(),
            found: found.to_string(),
        }
    }

    /// At a newline, a closing brace, or the end of input.
    fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(Token::Newline | Token::RBrace))
    }

    /// Parse instructions until the end of input or, inside a repeat block,
    /// until the matching `}`.
    fn parse_block(&mut self, nested: bool) -> ParseResult<Circuit> {
        let mut circuit = Circuit::new();
        loop {
            while self.consume(&Token::Newline) {}

            match self.peek() {
                None if nested => return Err(ParseError::UnexpectedEof("'}'".into())),
                None => return Ok(circuit),
                Some(Token::RBrace) if nested => {
                    self.advance();
                    return Ok(circuit);
                }
                Some(Token::RBrace) => return Err(ParseError::UnmatchedBrace(self.line)),
                Some(_) => self.parse_line(&mut circuit)?,
            }
        }
    }

    /// Parse one instruction line or a whole repeat block.
    fn parse_line(&mut self, circuit: &mut Circuit) -> ParseResult<()> {
        let name = match self.advance() {
            Some(Token::Identifier(name)) => name,
            Some(other) => return Err(self.unexpected("instruction name", &other)),
            None => return Err(ParseError::UnexpectedEof("instruction name".into())),
        };

        if name == "REPEAT" {
            let count = self.parse_int_literal()?;
            self.expect(Token::LBrace)?;
            let body = self.parse_block(true)?;
            circuit.repeat(count, body)?;
            return Ok(());
        }

        let args = if self.consume(&Token::LParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        let mut targets = Vec::new();
        while !self.at_line_end() {
            targets.push(self.parse_target()?);
        }

        circuit.append(Operation::new(name, targets, args));
        Ok(())
    }

    /// Parse a parenthesised argument list; the `(` is already consumed.
    fn parse_arguments(&mut self) -> ParseResult<Vec<f64>> {
        let mut args = Vec::new();
        if self.consume(&Token::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_number()?);
            if self.consume(&Token::RParen) {
                return Ok(args);
            }
            self.expect(Token::Comma)?;
        }
    }

    /// Parse a possibly negative numeric literal.
    #[allow(clippy::cast_precision_loss)]
    fn parse_number(&mut self) -> ParseResult<f64> {
        let negative = self.consume(&Token::Minus);
        let value = match self.advance() {
            Some(Token::FloatLiteral(v)) => v,
            Some(Token::IntLiteral(v)) => v as f64,
            Some(other) => return Err(self.unexpected("number", &other)),
            None => return Err(ParseError::UnexpectedEof("number".into())),
        };
        Ok(if negative { -value } else { value })
    }

    /// Parse an integer literal.
    pub(super) fn parse_int_literal(&mut self) -> ParseResult<u64> {
        match self.advance() {
            Some(Token::IntLiteral(v)) => Ok(v),
            Some(other) => Err(self.unexpected("integer", &other)),
            None => Err(ParseError::UnexpectedEof("integer".into())),
        }
    }
}
