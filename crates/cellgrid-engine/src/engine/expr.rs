//! Arithmetic expression evaluator.
//!
//! A recursive descent parser over already-substituted formula text.
//! Grammar (standard precedence, left associative):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | STRING | '(' expr ')'
//! ```
//!
//! `+` concatenates when either side is text; every other operator requires
//! numbers. Results that are not finite are rejected.

use super::cell::Value;
use super::format::format_number;
use crate::error::{EngineError, Result};

/// Evaluate an arithmetic expression containing only literals and operators.
pub fn evaluate_expression(input: &str) -> Result<Value> {
    let mut parser = ExprParser::new(input)?;
    let value = parser.parse_expr()?;
    if parser.current != Token::Eof {
        return Err(EngineError::Evaluation(format!(
            "unexpected {:?} in {:?}",
            parser.current, input
        )));
    }
    Ok(value.into())
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Str(String),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    Eof,
}

/// Intermediate result while evaluating.
#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Number(f64),
    Text(String),
}

impl Operand {
    fn number(self, op: char) -> Result<f64> {
        match self {
            Operand::Number(n) => Ok(n),
            Operand::Text(s) => Err(EngineError::Evaluation(format!(
                "operator '{}' applied to text {:?}",
                op, s
            ))),
        }
    }

    fn into_text(self) -> String {
        match self {
            Operand::Number(n) => format_number(n),
            Operand::Text(s) => s,
        }
    }
}

impl From<Operand> for Value {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Number(n) => Value::Number(n),
            Operand::Text(s) => Value::Text(s),
        }
    }
}

fn finite(n: f64) -> Result<Operand> {
    if n.is_finite() {
        Ok(Operand::Number(n))
    } else {
        Err(EngineError::Evaluation("result is not a finite number".into()))
    }
}

struct ExprParser<'a> {
    input: &'a str,
    pos: usize,
    current: Token,
}

impl<'a> ExprParser<'a> {
    fn new(input: &'a str) -> Result<Self> {
        let mut parser = Self {
            input,
            pos: 0,
            current: Token::Eof,
        };
        parser.advance()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance(&mut self) -> Result<()> {
        self.current = self.scan_token()?;
        Ok(())
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn scan_token(&mut self) -> Result<Token> {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.bump();
        }

        let Some(c) = self.peek_char() else {
            return Ok(Token::Eof);
        };

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '"' => return self.scan_string(),
            '0'..='9' | '.' => return self.scan_number(),
            other => {
                return Err(EngineError::Evaluation(format!(
                    "unexpected character '{}' at offset {}",
                    other, self.pos
                )));
            }
        };
        self.bump();
        Ok(token)
    }

    fn scan_number(&mut self) -> Result<Token> {
        let start = self.pos;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.peek_char() == Some('.') {
            self.bump();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.bump();
            }
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }

        let text = &self.input[start..self.pos];
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EngineError::Evaluation(format!("malformed number {:?}", text)))
    }

    fn scan_string(&mut self) -> Result<Token> {
        self.bump(); // opening quote
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::Str(text)),
                Some('\\') => match self.bump() {
                    Some(escaped) => text.push(escaped),
                    None => break,
                },
                Some(c) => text.push(c),
                None => break,
            }
        }
        Err(EngineError::Evaluation("unterminated string literal".into()))
    }

    // === Grammar ===

    fn parse_expr(&mut self) -> Result<Operand> {
        let mut left = self.parse_term()?;
        loop {
            match self.current {
                Token::Plus => {
                    self.advance()?;
                    let right = self.parse_term()?;
                    left = add(left, right)?;
                }
                Token::Minus => {
                    self.advance()?;
                    let right = self.parse_term()?;
                    left = finite(left.number('-')? - right.number('-')?)?;
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_term(&mut self) -> Result<Operand> {
        let mut left = self.parse_unary()?;
        loop {
            match self.current {
                Token::Star => {
                    self.advance()?;
                    let right = self.parse_unary()?;
                    left = finite(left.number('*')? * right.number('*')?)?;
                }
                Token::Slash => {
                    self.advance()?;
                    let right = self.parse_unary()?;
                    left = finite(left.number('/')? / right.number('/')?)?;
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_unary(&mut self) -> Result<Operand> {
        match self.current {
            Token::Plus => {
                self.advance()?;
                Ok(Operand::Number(self.parse_unary()?.number('+')?))
            }
            Token::Minus => {
                self.advance()?;
                Ok(Operand::Number(-self.parse_unary()?.number('-')?))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Operand> {
        match std::mem::replace(&mut self.current, Token::Eof) {
            Token::Number(n) => {
                self.advance()?;
                Ok(Operand::Number(n))
            }
            Token::Str(s) => {
                self.advance()?;
                Ok(Operand::Text(s))
            }
            Token::LeftParen => {
                self.advance()?;
                let inner = self.parse_expr()?;
                if self.current != Token::RightParen {
                    return Err(EngineError::Evaluation("missing closing parenthesis".into()));
                }
                self.advance()?;
                Ok(inner)
            }
            Token::Eof => Err(EngineError::Evaluation("unexpected end of expression".into())),
            other => Err(EngineError::Evaluation(format!("unexpected {:?}", other))),
        }
    }
}

fn add(left: Operand, right: Operand) -> Result<Operand> {
    match (left, right) {
        (Operand::Number(a), Operand::Number(b)) => finite(a + b),
        (left, right) => {
            let mut text = left.into_text();
            text.push_str(&right.into_text());
            Ok(Operand::Text(text))
        }
    }
}
