#![deny(unsafe_code)]
//! # mentis-symbolic
//!
//! Exact symbolic arithmetic for hypothesis testing: rational constants,
//! expression trees with substitution, and a polynomial normal form that
//! decides "simplifies to zero" without floating-point tolerance.
//!
//! ## Key Types
//!
//! - [`Rational`]: arbitrary-precision rational in lowest terms
//! - [`Expr`]: expression tree (`+`, `*`, unary `-`, integer powers)
//! - [`Polynomial`]: canonical form produced by [`Expr::simplify`]

pub mod error;
pub mod expr;
pub mod polynomial;
pub mod rational;

pub use error::SymbolicError;
pub use expr::Expr;
pub use polynomial::{Monomial, Polynomial};
pub use rational::Rational;
