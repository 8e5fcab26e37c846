//! Gettext plural-form expressions.
//!
//! A locale selects the plural form of a message with a C-like expression
//! over `n`, e.g. `(n != 1)` or the three-form Slavic rule. The expression
//! is parsed once when a catalog is loaded and evaluated per lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

const MAX_NESTING: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expr {
    N,
    Literal(i64),
    Not(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Ternary(Box<Expr>, Box<Expr>, Box<Expr>),
}

impl Expr {
    fn eval(&self, n: i64) -> i64 {
        match self {
            Self::N => n,
            Self::Literal(value) => *value,
            Self::Not(inner) => i64::from(inner.eval(n) == 0),
            Self::Ternary(condition, then, otherwise) => {
                if condition.eval(n) != 0 {
                    then.eval(n)
                } else {
                    otherwise.eval(n)
                }
            }
            Self::Binary(BinaryOp::And, left, right) => {
                i64::from(left.eval(n) != 0 && right.eval(n) != 0)
            }
            Self::Binary(BinaryOp::Or, left, right) => {
                i64::from(left.eval(n) != 0 || right.eval(n) != 0)
            }
            Self::Binary(op, left, right) => {
                let a = left.eval(n);
                let b = right.eval(n);
                match op {
                    BinaryOp::Eq => i64::from(a == b),
                    BinaryOp::Ne => i64::from(a != b),
                    BinaryOp::Lt => i64::from(a < b),
                    BinaryOp::Le => i64::from(a <= b),
                    BinaryOp::Gt => i64::from(a > b),
                    BinaryOp::Ge => i64::from(a >= b),
                    BinaryOp::Add => a.wrapping_add(b),
                    BinaryOp::Sub => a.wrapping_sub(b),
                    BinaryOp::Mul => a.wrapping_mul(b),
                    // Division by zero yields 0 instead of trapping.
                    BinaryOp::Div => a.checked_div(b).unwrap_or(0),
                    BinaryOp::Rem => a.checked_rem(b).unwrap_or(0),
                    BinaryOp::And | BinaryOp::Or => unreachable!("handled above"),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    N,
    Number(i64),
    Op(&'static str),
    Open,
    Close,
    Question,
    Colon,
}

fn tokenize(source: &str) -> Result<Vec<Token>, String> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut index = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => index += 1,
            b'n' => {
                tokens.push(Token::N);
                index += 1;
            }
            b'0'..=b'9' => {
                let start = index;
                while index < bytes.len() && bytes[index].is_ascii_digit() {
                    index += 1;
                }
                let value = source[start..index]
                    .parse::<i64>()
                    .map_err(|e| format!("bad number at {start}: {e}"))?;
                tokens.push(Token::Number(value));
            }
            b'(' => {
                tokens.push(Token::Open);
                index += 1;
            }
            b')' => {
                tokens.push(Token::Close);
                index += 1;
            }
            b'?' => {
                tokens.push(Token::Question);
                index += 1;
            }
            b':' => {
                tokens.push(Token::Colon);
                index += 1;
            }
            _ if !byte.is_ascii() => {
                return Err(format!("non-ascii input at {index}"));
            }
            _ => {
                let two = source.get(index..index + 2).unwrap_or("");
                let op = match two {
                    "==" | "!=" | "<=" | ">=" | "&&" | "||" => Some(two),
                    _ => None,
                };
                if let Some(op) = op {
                    tokens.push(Token::Op(intern_op(op)));
                    index += 2;
                    continue;
                }
                let one = &source[index..index + 1];
                match one {
                    "<" | ">" | "!" | "+" | "-" | "*" | "/" | "%" => {
                        tokens.push(Token::Op(intern_op(one)));
                        index += 1;
                    }
                    _ => return Err(format!("unexpected character `{}` at {index}", byte as char)),
                }
            }
        }
    }
    Ok(tokens)
}

fn intern_op(op: &str) -> &'static str {
    match op {
        "==" => "==",
        "!=" => "!=",
        "<=" => "<=",
        ">=" => ">=",
        "&&" => "&&",
        "||" => "||",
        "<" => "<",
        ">" => ">",
        "!" => "!",
        "+" => "+",
        "-" => "-",
        "*" => "*",
        "/" => "/",
        _ => "%",
    }
}

struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        self.position += 1;
        token
    }

    fn eat_op(&mut self, candidates: &[&'static str]) -> Option<&'static str> {
        match self.peek() {
            Some(Token::Op(op)) if candidates.contains(&op) => {
                self.position += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn ternary(&mut self) -> Result<Expr, String> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err("expression nests too deeply".to_owned());
        }
        let condition = self.or()?;
        let expr = if self.peek() == Some(Token::Question) {
            self.position += 1;
            let then = self.ternary()?;
            if self.advance() != Some(Token::Colon) {
                return Err("expected `:` in conditional".to_owned());
            }
            let otherwise = self.ternary()?;
            Expr::Ternary(Box::new(condition), Box::new(then), Box::new(otherwise))
        } else {
            condition
        };
        self.depth -= 1;
        Ok(expr)
    }

    fn binary_level(
        &mut self,
        ops: &[&'static str],
        next: fn(&mut Self) -> Result<Expr, String>,
    ) -> Result<Expr, String> {
        let mut left = next(self)?;
        while let Some(op) = self.eat_op(ops) {
            let right = next(self)?;
            left = Expr::Binary(binary_op(op), Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn or(&mut self) -> Result<Expr, String> {
        self.binary_level(&["||"], Self::and)
    }

    fn and(&mut self) -> Result<Expr, String> {
        self.binary_level(&["&&"], Self::equality)
    }

    fn equality(&mut self) -> Result<Expr, String> {
        self.binary_level(&["==", "!="], Self::relational)
    }

    fn relational(&mut self) -> Result<Expr, String> {
        self.binary_level(&["<", "<=", ">", ">="], Self::additive)
    }

    fn additive(&mut self) -> Result<Expr, String> {
        self.binary_level(&["+", "-"], Self::multiplicative)
    }

    fn multiplicative(&mut self) -> Result<Expr, String> {
        self.binary_level(&["*", "/", "%"], Self::unary)
    }

    fn unary(&mut self) -> Result<Expr, String> {
        if self.eat_op(&["!"]).is_some() {
            self.depth += 1;
            if self.depth > MAX_NESTING {
                return Err("expression nests too deeply".to_owned());
            }
            let inner = self.unary()?;
            self.depth -= 1;
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, String> {
        match self.advance() {
            Some(Token::N) => Ok(Expr::N),
            Some(Token::Number(value)) => Ok(Expr::Literal(value)),
            Some(Token::Open) => {
                let inner = self.ternary()?;
                if self.advance() != Some(Token::Close) {
                    return Err("expected `)`".to_owned());
                }
                Ok(inner)
            }
            Some(other) => Err(format!("unexpected token {other:?}")),
            None => Err("unexpected end of expression".to_owned()),
        }
    }
}

fn binary_op(op: &str) -> BinaryOp {
    match op {
        "||" => BinaryOp::Or,
        "&&" => BinaryOp::And,
        "==" => BinaryOp::Eq,
        "!=" => BinaryOp::Ne,
        "<" => BinaryOp::Lt,
        "<=" => BinaryOp::Le,
        ">" => BinaryOp::Gt,
        ">=" => BinaryOp::Ge,
        "+" => BinaryOp::Add,
        "-" => BinaryOp::Sub,
        "*" => BinaryOp::Mul,
        "/" => BinaryOp::Div,
        _ => BinaryOp::Rem,
    }
}

/// Parsed plural-index function of a locale.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluralRule {
    source: String,
    nplurals: Option<usize>,
    expr: Expr,
}

impl PluralRule {
    /// Parses either a bare expression (`(n != 1)`) or a full header
    /// (`nplurals=2; plural=(n != 1);`).
    pub fn parse(source: &str) -> ControlResult<Self> {
        let invalid = |reason: String| ControlError::InvalidPluralRule {
            expression: source.to_owned(),
            reason,
        };

        let (nplurals, expression) = split_header(source).map_err(invalid)?;
        let tokens = tokenize(expression).map_err(invalid)?;
        if tokens.is_empty() {
            return Err(invalid("empty expression".to_owned()));
        }
        let mut parser = Parser {
            tokens,
            position: 0,
            depth: 0,
        };
        let expr = parser.ternary().map_err(invalid)?;
        if parser.position != parser.tokens.len() {
            return Err(invalid(format!(
                "trailing input after token {}",
                parser.position
            )));
        }

        Ok(Self {
            source: source.trim().to_owned(),
            nplurals,
            expr,
        })
    }

    /// Germanic two-form rule, used when a catalog declares none.
    #[must_use]
    pub fn germanic() -> Self {
        Self {
            source: "(n != 1)".to_owned(),
            nplurals: Some(2),
            expr: Expr::Binary(
                BinaryOp::Ne,
                Box::new(Expr::N),
                Box::new(Expr::Literal(1)),
            ),
        }
    }

    /// Plural-form index for `count`.
    #[must_use]
    pub fn index(&self, count: u64) -> usize {
        let n = i64::try_from(count).unwrap_or(i64::MAX);
        usize::try_from(self.expr.eval(n)).unwrap_or(0)
    }

    #[must_use]
    pub fn nplurals(&self) -> Option<usize> {
        self.nplurals
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Default for PluralRule {
    fn default() -> Self {
        Self::germanic()
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PluralRule").field(&self.source).finish()
    }
}

impl TryFrom<String> for PluralRule {
    type Error = ControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PluralRule> for String {
    fn from(rule: PluralRule) -> Self {
        rule.source
    }
}

fn split_header(source: &str) -> Result<(Option<usize>, &str), String> {
    let trimmed = source.trim();
    if !trimmed.starts_with("nplurals") {
        return Ok((None, trimmed.trim_end_matches(';').trim_end()));
    }

    let mut nplurals = None;
    let mut expression = None;
    for part in trimmed.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| format!("malformed header part `{part}`"))?;
        match key.trim() {
            "nplurals" => {
                let count = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| format!("bad nplurals: {e}"))?;
                nplurals = Some(count);
            }
            "plural" => expression = Some(value.trim()),
            other => return Err(format!("unknown header key `{other}`")),
        }
    }

    let expression = expression.ok_or_else(|| "header has no `plural=` part".to_owned())?;
    Ok((nplurals, expression))
}

#[cfg(test)]
mod tests {
    use super::PluralRule;

    #[test]
    fn germanic_rule_picks_singular_only_for_one() {
        let rule = PluralRule::parse("(n != 1)").expect("parse");
        assert_eq!(rule.index(0), 1);
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(5), 1);
    }

    #[test]
    fn header_form_records_nplurals() {
        let rule = PluralRule::parse("nplurals=2; plural=(n > 1);").expect("parse");
        assert_eq!(rule.nplurals(), Some(2));
        assert_eq!(rule.index(0), 0);
        assert_eq!(rule.index(2), 1);
    }

    #[test]
    fn ternaries_are_right_associative() {
        let rule = PluralRule::parse("n==1 ? 0 : n==2 ? 1 : 2").expect("parse");
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(2), 1);
        assert_eq!(rule.index(7), 2);
    }

    #[test]
    fn precedence_follows_c() {
        let rule = PluralRule::parse("1 + 2 * 3 == 7 && !0").expect("parse");
        assert_eq!(rule.index(0), 1);
    }

    #[test]
    fn division_by_zero_evaluates_to_zero() {
        let rule = PluralRule::parse("n / 0 + n % 0").expect("parse");
        assert_eq!(rule.index(9), 0);
    }

    #[test]
    fn malformed_expressions_are_rejected() {
        for source in ["", "(n != 1", "n ? 1", "n $ 2", "n 1", "nplurals=2;"] {
            assert!(PluralRule::parse(source).is_err(), "{source:?} should fail");
        }
    }

    #[test]
    fn deep_nesting_is_rejected_without_overflow() {
        let source = format!("{}n{}", "(".repeat(500), ")".repeat(500));
        assert!(PluralRule::parse(&source).is_err());
        let negations = format!("{}n", "!".repeat(500));
        assert!(PluralRule::parse(&negations).is_err());
    }
}
