//! Formula parser
//!
//! A tokenizer plus a constrained recursive descent parser. The accepted
//! grammar is:
//!
//! ```text
//! formula  := ['='] body EOF
//! body     := NAME '(' CELL ':' CELL ')'      SUM, AVERAGE, MIN, MAX
//!           | NAME '(' CELL ')'               SQRT
//!           | CELL
//!           | operand OP operand              OP is one of + - * /
//! operand  := ['-' | '+'] NUMBER | CELL
//! ```
//!
//! Anything else (a lone number, a second operator, trailing tokens, unknown
//! names or characters) is a malformed formula.

use crate::ast::{BinaryOperator, FormulaExpr};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::{self, Aggregate};
use sheetcalc_core::{CellAddress, CellRange};

/// Parse a formula string into an AST
///
/// # Example
/// ```rust
/// use sheetcalc_formula::parse_formula;
///
/// let ast = parse_formula("A1+2").unwrap();
/// let ast = parse_formula("=SUM(A1:B10)").unwrap();
/// let ast = parse_formula("SQRT(C4)").unwrap();
/// assert!(parse_formula("A1+B1+C1").is_err());
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<FormulaExpr> {
    let formula = formula.trim();
    let formula = formula.strip_prefix('=').unwrap_or(formula);

    let mut parser = FormulaParser::new(formula)?;
    let expr = parser.parse_body()?;

    // Make sure we consumed all input
    if !matches!(parser.current_token(), Token::Eof) {
        return Err(malformed(format!(
            "unexpected {} after expression",
            parser.current_token().describe()
        )));
    }

    Ok(expr)
}

fn malformed<S: Into<String>>(message: S) -> FormulaError {
    FormulaError::MalformedFormula(message.into())
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    CellRef(CellAddress),
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Colon,

    // Delimiters
    LeftParen,
    RightParen,

    Eof,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {}", n),
            Token::CellRef(addr) => format!("reference {}", addr),
            Token::Identifier(name) => format!("name '{}'", name),
            Token::Plus => "'+'".into(),
            Token::Minus => "'-'".into(),
            Token::Star => "'*'".into(),
            Token::Slash => "'/'".into(),
            Token::Colon => "':'".into(),
            Token::LeftParen => "'('".into(),
            Token::RightParen => "')'".into(),
            Token::Eof => "end of formula".into(),
        }
    }

    fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Minus => Some(BinaryOperator::Subtract),
            Token::Star => Some(BinaryOperator::Multiply),
            Token::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }
}

/// Formula parser
struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    current_token: Token,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> FormulaResult<Self> {
        let mut parser = Self {
            input,
            pos: 0,
            current_token: Token::Eof,
        };
        parser.advance_token()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance_token(&mut self) -> FormulaResult<()> {
        self.current_token = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> FormulaResult<Token> {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        let single = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            ':' => Some(Token::Colon),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        };
        if let Some(token) = single {
            self.advance();
            return Ok(token);
        }

        if c.is_ascii_digit()
            || (c == '.' && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit()))
        {
            return self.scan_number();
        }

        if c.is_ascii_alphabetic() {
            return self.scan_identifier_or_ref();
        }

        Err(malformed(format!("unsupported character '{}'", c)))
    }

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        // Integer part
        self.skip_digits();

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            self.skip_digits();
        }

        // Exponent part, only when digits actually follow
        if self.peek_char().map_or(false, |c| c == 'e' || c == 'E') {
            let signed = self
                .peek_char_at(1)
                .map_or(false, |c| c == '+' || c == '-');
            let digit_at = if signed { 2 } else { 1 };
            if self
                .peek_char_at(digit_at)
                .map_or(false, |c| c.is_ascii_digit())
            {
                for _ in 0..digit_at {
                    self.advance();
                }
                self.skip_digits();
            }
        }

        let num_str = &self.input[start..self.pos];
        num_str
            .parse()
            .map(Token::Number)
            .map_err(|_| malformed(format!("invalid number '{}'", num_str)))
    }

    fn scan_identifier_or_ref(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        while self.peek_char().map_or(false, |c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let text = &self.input[start..self.pos];

        // Pure letters name a function; letters followed by digits must be
        // a well-formed address
        if text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Ok(Token::Identifier(text.to_string()));
        }

        CellAddress::parse(text)
            .map(Token::CellRef)
            .map_err(FormulaError::from)
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_digits(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn current_token(&self) -> &Token {
        &self.current_token
    }

    fn consume(&mut self) -> FormulaResult<Token> {
        let token = std::mem::replace(&mut self.current_token, Token::Eof);
        self.advance_token()?;
        Ok(token)
    }

    fn expect(&mut self, expected: &Token) -> FormulaResult<()> {
        if self.current_token() == expected {
            self.consume()?;
            Ok(())
        } else {
            Err(malformed(format!(
                "expected {}, got {}",
                expected.describe(),
                self.current_token().describe()
            )))
        }
    }

    fn expect_cell(&mut self) -> FormulaResult<CellAddress> {
        match self.consume()? {
            Token::CellRef(addr) => Ok(addr),
            other => Err(malformed(format!(
                "expected a cell reference, got {}",
                other.describe()
            ))),
        }
    }

    // === Grammar ===

    fn parse_body(&mut self) -> FormulaResult<FormulaExpr> {
        if let Token::Identifier(name) = self.current_token().clone() {
            self.consume()?;
            return self.parse_function_call(&name);
        }

        let left = self.parse_operand()?;

        let op = match self.current_token().binary_operator() {
            Some(op) => op,
            None if matches!(left, FormulaExpr::CellRef(_)) => return Ok(left),
            None => {
                return Err(malformed(
                    "a formula needs a reference, a function or two operands and an operator",
                ))
            }
        };
        self.consume()?;

        let right = self.parse_operand()?;

        Ok(FormulaExpr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_operand(&mut self) -> FormulaResult<FormulaExpr> {
        // A sign belongs to the literal it precedes
        let negate = match self.current_token() {
            Token::Minus => true,
            Token::Plus => false,
            _ => return self.parse_primary(),
        };
        self.consume()?;

        match self.consume()? {
            Token::Number(n) => Ok(FormulaExpr::Number(if negate { -n } else { n })),
            other => Err(malformed(format!(
                "a sign must be followed by a number, got {}",
                other.describe()
            ))),
        }
    }

    fn parse_primary(&mut self) -> FormulaResult<FormulaExpr> {
        match self.consume()? {
            Token::Number(n) => Ok(FormulaExpr::Number(n)),
            Token::CellRef(addr) => Ok(FormulaExpr::CellRef(addr)),
            other => Err(malformed(format!(
                "expected a number or a cell reference, got {}",
                other.describe()
            ))),
        }
    }

    fn parse_function_call(&mut self, name: &str) -> FormulaResult<FormulaExpr> {
        self.expect(&Token::LeftParen)?;

        let expr = if let Some(function) = Aggregate::from_name(name) {
            let start = self.expect_cell()?;
            self.expect(&Token::Colon)?;
            let end = self.expect_cell()?;
            let range = CellRange::new(start, end)?;
            FormulaExpr::Aggregate { function, range }
        } else if name.eq_ignore_ascii_case(functions::SQRT) {
            FormulaExpr::Sqrt(self.expect_cell()?)
        } else {
            return Err(malformed(format!("unknown function '{}'", name)));
        };

        self.expect(&Token::RightParen)?;
        Ok(expr)
    }
}
