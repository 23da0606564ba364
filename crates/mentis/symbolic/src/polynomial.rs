use crate::error::SymbolicError;
use crate::rational::Rational;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Neg};

/// Product of symbols raised to positive powers. The empty monomial is `1`.
pub type Monomial = BTreeMap<String, u32>;

/// Multivariate polynomial with exact rational coefficients in canonical form:
/// no zero coefficients, each monomial stored once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Rational>,
}

impl Polynomial {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn constant(c: Rational) -> Self {
        let mut terms = BTreeMap::new();
        if !c.is_zero() {
            terms.insert(Monomial::new(), c);
        }
        Self { terms }
    }

    pub fn symbol(name: &str) -> Self {
        let mut mono = Monomial::new();
        mono.insert(name.to_string(), 1);
        let mut terms = BTreeMap::new();
        terms.insert(mono, Rational::one());
        Self { terms }
    }

    /// The symbolic zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The constant value, if no symbol appears.
    pub fn as_constant(&self) -> Option<Rational> {
        match self.terms.len() {
            0 => Some(Rational::zero()),
            1 => self
                .terms
                .iter()
                .next()
                .filter(|(mono, _)| mono.is_empty())
                .map(|(_, c)| c.clone()),
            _ => None,
        }
    }

    pub fn symbols(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .terms
            .keys()
            .flat_map(|mono| mono.keys().cloned())
            .collect();
        out.sort();
        out.dedup();
        out
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, SymbolicError> {
        let mut terms = BTreeMap::new();
        for (lm, lc) in &self.terms {
            for (rm, rc) in &rhs.terms {
                let mut mono = lm.clone();
                for (sym, exp) in rm {
                    let slot = mono.entry(sym.clone()).or_insert(0);
                    *slot = slot
                        .checked_add(*exp)
                        .ok_or(SymbolicError::Overflow("monomial degree"))?;
                }
                accumulate(&mut terms, mono, lc * rc);
            }
        }
        Ok(Self { terms })
    }

    pub fn checked_pow(&self, exp: u32) -> Result<Self, SymbolicError> {
        // Constants take the fast path so a bound square stays a single multiply.
        if let Some(c) = self.as_constant() {
            return Ok(Self::constant(c.checked_pow(exp)?));
        }
        let mut result = Self::constant(Rational::one());
        for _ in 0..exp {
            result = result.checked_mul(self)?;
        }
        Ok(result)
    }
}

fn accumulate(terms: &mut BTreeMap<Monomial, Rational>, mono: Monomial, c: Rational) {
    let sum = match terms.get(&mono) {
        Some(existing) => existing + &c,
        None => c,
    };
    if sum.is_zero() {
        terms.remove(&mono);
    } else {
        terms.insert(mono, sum);
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut terms = self.terms.clone();
        for (mono, c) in &rhs.terms {
            accumulate(&mut terms, mono.clone(), c.clone());
        }
        Polynomial { terms }
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        let terms = self
            .terms
            .iter()
            .map(|(mono, c)| (mono.clone(), -c))
            .collect();
        Polynomial { terms }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (mono, c)) in self.terms.iter().rev().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            let factors: Vec<String> = mono
                .iter()
                .map(|(s, e)| if *e == 1 { s.clone() } else { format!("{}^{}", s, e) })
                .collect();
            match (factors.is_empty(), c.is_one()) {
                (true, _) => write!(f, "{}", c)?,
                (false, true) => write!(f, "{}", factors.join("*"))?,
                (false, false) => write!(f, "{}*{}", c, factors.join("*"))?,
            }
        }
        Ok(())
    }
}
