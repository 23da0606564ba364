use crate::error::SymbolicError;
use crate::polynomial::Polynomial;
use crate::rational::Rational;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A symbolic expression over exact rationals.
///
/// Only the polynomial fragment is supported: sums, products, negation and
/// non-negative integer powers of symbols and constants.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Const(Rational),
    Symbol(String),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Pow(Box<Expr>, u32),
}

impl Expr {
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn constant(value: impl Into<Rational>) -> Self {
        Self::Const(value.into())
    }

    pub fn pow(self, exp: u32) -> Self {
        Self::Pow(Box::new(self), exp)
    }

    /// Replace every occurrence of `name` with `value`.
    pub fn subs(&self, name: &str, value: &Expr) -> Expr {
        match self {
            Self::Symbol(s) if s == name => value.clone(),
            Self::Const(_) | Self::Symbol(_) => self.clone(),
            Self::Add(a, b) => Self::Add(
                Box::new(a.subs(name, value)),
                Box::new(b.subs(name, value)),
            ),
            Self::Mul(a, b) => Self::Mul(
                Box::new(a.subs(name, value)),
                Box::new(b.subs(name, value)),
            ),
            Self::Neg(a) => Self::Neg(Box::new(a.subs(name, value))),
            Self::Pow(a, e) => Self::Pow(Box::new(a.subs(name, value)), *e),
        }
    }

    /// Reduce to polynomial normal form. Two expressions are symbolically
    /// equal exactly when the normal form of their difference is zero.
    pub fn simplify(&self) -> Result<Polynomial, SymbolicError> {
        match self {
            Self::Const(c) => Ok(Polynomial::constant(c.clone())),
            Self::Symbol(s) => Ok(Polynomial::symbol(s)),
            Self::Add(a, b) => Ok(&a.simplify()? + &b.simplify()?),
            Self::Mul(a, b) => a.simplify()?.checked_mul(&b.simplify()?),
            Self::Neg(a) => Ok(-&a.simplify()?),
            Self::Pow(a, e) => a.simplify()?.checked_pow(*e),
        }
    }

    /// Evaluate to a single rational. Fails if any symbol remains free.
    pub fn evaluate(&self) -> Result<Rational, SymbolicError> {
        let poly = self.simplify()?;
        match poly.as_constant() {
            Some(c) => Ok(c),
            None => Err(SymbolicError::UnboundSymbol(
                poly.symbols().into_iter().next().unwrap_or_default(),
            )),
        }
    }

    /// Free symbols, sorted and deduplicated.
    pub fn free_symbols(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out.sort();
        out.dedup();
        out
    }

    fn collect_symbols(&self, out: &mut Vec<String>) {
        match self {
            Self::Const(_) => {}
            Self::Symbol(s) => out.push(s.clone()),
            Self::Add(a, b) | Self::Mul(a, b) => {
                a.collect_symbols(out);
                b.collect_symbols(out);
            }
            Self::Neg(a) | Self::Pow(a, _) => a.collect_symbols(out),
        }
    }

    fn is_atom(&self) -> bool {
        match self {
            Self::Symbol(_) => true,
            Self::Const(c) => c.is_integer() && !c.is_negative(),
            _ => false,
        }
    }
}

impl From<Rational> for Expr {
    fn from(value: Rational) -> Self {
        Self::Const(value)
    }
}

impl Add for Expr {
    type Output = Expr;
    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;
    fn sub(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(Expr::Neg(Box::new(rhs))))
    }
}

impl Mul for Expr {
    type Output = Expr;
    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(c) if c.is_integer() => write!(f, "{}", c),
            Self::Const(c) => write!(f, "({})", c),
            Self::Symbol(s) => write!(f, "{}", s),
            Self::Add(a, b) => match b.as_ref() {
                Self::Neg(inner) => write!(f, "{} - {}", a, Paren(inner)),
                _ => write!(f, "{} + {}", a, b),
            },
            Self::Mul(a, b) => write!(f, "{}*{}", Paren(a), Paren(b)),
            Self::Neg(a) => write!(f, "-{}", Paren(a)),
            Self::Pow(a, e) => write!(f, "{}^{}", Paren(a), e),
        }
    }
}

struct Paren<'a>(&'a Expr);

impl fmt::Display for Paren<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_atom() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}
