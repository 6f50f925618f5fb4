//! Data structures for parsed dice expressions (signed sums of dice and constants) and their evaluation.

use alloc::vec::Vec;
use core::fmt;

use crate::dice::{Dice, RandomSource};

/// Sign preceding a term in an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[expect(clippy::exhaustive_enums, reason = "A sign is either positive or negative")]
pub enum Sign {
	/// `+`, or no sign at all
	#[default]
	Pos,

	/// `-`
	Neg,
}

impl Sign {
	/// Gets the multiplier the sign applies to its term's value.
	#[must_use]
	#[inline]
	pub const fn factor(self) -> i128 {
		match self {
			Self::Pos => 1,
			Self::Neg => -1,
		}
	}

	/// Gets the symbol that represents the sign.
	#[must_use]
	pub const fn symbol(self) -> char {
		match self {
			Self::Pos => '+',
			Self::Neg => '-',
		}
	}
}

/// Individual signed elements of a dice expression
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_enums, reason = "Sums of dice and constants are the whole grammar")]
pub enum Term {
	/// Dice to roll and sum
	Dice {
		/// Dice rolled for the term
		dice: Dice,

		/// Sign applied to the dice total
		sign: Sign,
	},

	/// Constant integer
	Const {
		/// Unsigned value of the constant, saturated at [`u64::MAX`]
		value: u64,

		/// Sign applied to the value
		sign: Sign,
	},
}

impl Term {
	/// Gets the sign of the term.
	#[must_use]
	pub const fn sign(&self) -> Sign {
		match self {
			Self::Dice { sign, .. } | Self::Const { sign, .. } => *sign,
		}
	}

	/// Replaces the sign of the term.
	#[must_use]
	pub fn with_sign(self, sign: Sign) -> Self {
		match self {
			Self::Dice { dice, .. } => Self::Dice { dice, sign },
			Self::Const { value, .. } => Self::Const { value, sign },
		}
	}

	/// Evaluates the term, rolling its dice (if any) with the given random source.
	///
	/// The result cannot overflow: both dice totals and constants fit in a [`u64`].
	pub fn eval<R: RandomSource + ?Sized>(&self, random: &mut R) -> i128 {
		match self {
			Self::Dice { dice, sign } => i128::from(dice.roll(random).total()) * sign.factor(),
			Self::Const { value, sign } => i128::from(*value) * sign.factor(),
		}
	}

	/// Checks whether the term will always yield the same value.
	#[must_use]
	pub const fn is_deterministic(&self) -> bool {
		matches!(self, Self::Const { .. })
	}
}

impl fmt::Display for Term {
	/// Formats the term without its sign.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Dice { dice, .. } => write!(f, "{dice}"),
			Self::Const { value, .. } => write!(f, "{value}"),
		}
	}
}

/// Parsed dice expression: an ordered, non-empty sequence of signed terms that are summed together
///
/// # Examples
/// ```
/// use ability_dice::{
/// 	dice::{random::Max, Dice},
/// 	expr::{Expr, Sign, Term},
/// };
///
/// let expr = Expr::new(vec![
/// 	Term::Dice {
/// 		dice: Dice::new(2, 6),
/// 		sign: Sign::Pos,
/// 	},
/// 	Term::Const {
/// 		value: 3,
/// 		sign: Sign::Neg,
/// 	},
/// ])
/// .unwrap();
///
/// assert_eq!(expr.to_string(), "2d6 - 3");
/// assert_eq!(expr.eval(&mut Max), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
	/// Terms in source order
	terms: Vec<Term>,
}

impl Expr {
	/// Creates an expression from a sequence of terms. Returns `None` if there are no terms, since an empty expression
	/// is not a valid way to write zero.
	#[must_use]
	pub fn new(terms: Vec<Term>) -> Option<Self> {
		(!terms.is_empty()).then_some(Self { terms })
	}

	/// Gets the terms of the expression in source order.
	#[must_use]
	#[inline]
	pub fn terms(&self) -> &[Term] {
		&self.terms
	}

	/// Evaluates the expression by evaluating each term in order and summing the results.
	/// Dice within a term are drawn left to right, so the same random sequence always yields the same total.
	///
	/// The sum is exact; only the final total is clamped to the range of an [`i32`].
	pub fn eval<R: RandomSource + ?Sized>(&self, random: &mut R) -> i32 {
		let total = self
			.terms
			.iter()
			.fold(0_i128, |total, term| total.saturating_add(term.eval(random)));

		i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
	}

	/// Checks whether the expression is deterministic (will always yield the same value with every evaluation).
	/// This is only the case when it contains no dice at all.
	#[must_use]
	pub fn is_deterministic(&self) -> bool {
		self.terms.iter().all(Term::is_deterministic)
	}
}

impl fmt::Display for Expr {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// Terms are separated by their signs surrounded with spaces. A leading `+` is omitted.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, term) in self.terms.iter().enumerate() {
			match (idx, term.sign()) {
				(0, Sign::Pos) => {}
				(0, Sign::Neg) => f.write_str("-")?,
				(_, sign) => write!(f, " {} ", sign.symbol())?,
			}
			write!(f, "{term}")?;
		}

		Ok(())
	}
}

