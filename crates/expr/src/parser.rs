//! Recursive descent parser.
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/' | '%') unary)*
//! unary := ('+' | '-') unary | power
//! power := atom (('^' | '**') unary)?
//! atom  := NUMBER | NAME | NAME '(' args ')' | '(' expr ')'
//! ```

use crate::{
    ParseError,
    builtin::{Builtin, constant},
    expr::{BinOp, Node},
    token::{Token, TokenKind, tokenize},
};

const OPERAND: &str = "a number, name, or '('";

/// Deepest expression tree the parser will build.
///
/// Each nested operand and each operator in a `+`/`*` chain is one level.
pub(crate) const MAX_DEPTH: usize = 256;

/// Parses `source` into an expression tree.
///
/// When `allow_x` is false the variable `x` is rejected as an unknown name.
pub(crate) fn parse(source: &str, allow_x: bool) -> Result<Node, ParseError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        end: source.len(),
        allow_x,
    };
    let node = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(ParseError::Unexpected {
            expected: "an operator or the end of the expression",
            found: token.kind.describe(),
            offset: token.offset,
        });
    }

    Ok(node)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    end: usize,
    allow_x: bool,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|token| &token.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), ParseError> {
        match self.next() {
            Some(token) if &token.kind == kind => Ok(()),
            Some(token) => Err(ParseError::Unexpected {
                expected,
                found: token.kind.describe(),
                offset: token.offset,
            }),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    /// Enters one more level of the tree, failing past [`MAX_DEPTH`].
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            let offset = self.peek().map_or(self.end, |token| token.offset);
            return Err(ParseError::TooDeep { offset });
        }
        self.depth += 1;
        Ok(())
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;
        let mut chained = 0;
        loop {
            let op = match self.peek().map(|token| &token.kind) {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => break,
            };
            self.descend()?;
            chained += 1;
            self.pos += 1;
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth -= chained;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;
        let mut chained = 0;
        loop {
            let op = match self.peek().map(|token| &token.kind) {
                Some(TokenKind::Star) => BinOp::Mul,
                Some(TokenKind::Slash) => BinOp::Div,
                Some(TokenKind::Percent) => BinOp::Rem,
                _ => break,
            };
            self.descend()?;
            chained += 1;
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth -= chained;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        self.descend()?;
        let node = self.signed();
        self.depth -= 1;
        node
    }

    fn signed(&mut self) -> Result<Node, ParseError> {
        if self.eat(&TokenKind::Minus) {
            return Ok(Node::Neg(Box::new(self.unary()?)));
        }
        if self.eat(&TokenKind::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.atom()?;
        if self.eat(&TokenKind::Power) {
            let exponent = self.unary()?;
            return Ok(binary(BinOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Node, ParseError> {
        let Some(token) = self.next() else {
            return Err(ParseError::UnexpectedEnd { expected: OPERAND });
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Node::Number(value)),
            TokenKind::LParen => {
                let inner = self.expr()?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::Name(raw) => self.name(&raw, token.offset),
            other => Err(ParseError::Unexpected {
                expected: OPERAND,
                found: other.describe(),
                offset: token.offset,
            }),
        }
    }

    fn name(&mut self, raw: &str, offset: usize) -> Result<Node, ParseError> {
        let name = raw.strip_prefix("math.").unwrap_or(raw);

        if self.eat(&TokenKind::LParen) {
            let func = Builtin::lookup(name).ok_or_else(|| ParseError::UnknownName {
                name: raw.to_owned(),
                offset,
            })?;
            let args = self.args()?;
            if !func.accepts(args.len()) {
                return Err(ParseError::Arity {
                    name: func.name(),
                    expected: func.arity(),
                    got: args.len(),
                    offset,
                });
            }
            return Ok(Node::Call { func, args });
        }

        if name == "x" && self.allow_x {
            return Ok(Node::X);
        }
        if let Some(value) = constant(name) {
            return Ok(Node::Number(value));
        }
        if Builtin::lookup(name).is_some() {
            return Err(ParseError::MissingCall {
                name: raw.to_owned(),
                offset,
            });
        }
        Err(ParseError::UnknownName {
            name: raw.to_owned(),
            offset,
        })
    }

    /// Parses a comma-separated argument list after the opening parenthesis.
    fn args(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expr()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.expect(&TokenKind::RParen, "',' or ')'")?;
            return Ok(args);
        }
    }
}

fn binary(op: BinOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
