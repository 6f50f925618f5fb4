//! Parsers for dice expressions like `4d6+2` or `2d6+1d4-3`, built with [chumsky].
//!
//! Expressions are sanitized before parsing: all whitespace is removed and letters are lower-cased. After that, an
//! expression is one or more terms separated by `+` or `-` signs. Each term is either dice (`NdM`, with `N` optional)
//! or a constant (`K`). When several signs are stacked, only the one directly before a term counts, and signs with no
//! term after them are ignored, so `2++3` is `2 + 3` and `4d6-` is just `4d6`.

use alloc::{
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::str::FromStr;

use chumsky::{prelude::*, span::SimpleSpan};

use crate::{
	dice::{Dice, MAX_COUNT, MAX_SIDES, MIN_SIDES},
	expr::{Expr, Sign, Term},
};

/// Generates a parser for a run of decimal digits. The digits are kept as written so leading zeros can be inspected.
fn digits<'src>() -> impl Parser<'src, &'src str, String, extra::Err<Rich<'src, char>>> + Clone {
	any()
		.filter(char::is_ascii_digit)
		.repeated()
		.at_least(1)
		.collect()
}

/// Converts the digits of a dice count or side count, rejecting any with leading zeros (such as `01`).
fn dice_number<'src>(digits: &str, what: &str, span: SimpleSpan) -> Result<u32, Rich<'src, char>> {
	if digits.len() > 1 && digits.starts_with('0') {
		return Err(Rich::custom(span, format!("{what} must not have leading zeros")));
	}

	digits
		.parse()
		.map_err(|err| Rich::custom(span, format!("{what}: {err}")))
}

/// Generates a parser that specifically handles dice terms like "d20", "4d6", etc.
/// The count must be within 1 to [`MAX_COUNT`] and the sides within [`MIN_SIDES`] to [`MAX_SIDES`].
pub fn dice_part<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	digits()
		.or_not()
		.then_ignore(just('d'))
		.then(digits())
		.try_map(|(count, sides), span| {
			let count = match count {
				Some(count) => dice_number(&count, "dice count", span)?,
				None => 1,
			};
			let sides = dice_number(&sides, "dice sides", span)?;

			u8::try_from(count)
				.ok()
				.zip(u16::try_from(sides).ok())
				.map(|(count, sides)| Dice::new(count, sides))
				.filter(Dice::is_within_limits)
				.ok_or_else(|| {
					Rich::custom(
						span,
						format!("dice must be 1 to {MAX_COUNT} dice with {MIN_SIDES} to {MAX_SIDES} sides each"),
					)
				})
		})
}

/// Generates a parser that specifically handles dice terms like "d20", "4d6", etc. and expects end of input
pub fn dice<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	dice_part().then_ignore(end())
}

/// Generates a parser for unsigned integer constants. Unlike dice, constants may be written with leading zeros.
/// Any run of digits is a constant; values beyond [`u64::MAX`] saturate.
pub fn constant<'src>() -> impl Parser<'src, &'src str, u64, extra::Err<Rich<'src, char>>> + Clone {
	digits().map(|digits| {
		digits
			.chars()
			.filter_map(|digit| digit.to_digit(10))
			.fold(0_u64, |value, digit| value.saturating_mul(10).saturating_add(u64::from(digit)))
	})
}

/// Generates a parser for a `+` or `-` sign.
fn sign<'src>() -> impl Parser<'src, &'src str, Sign, extra::Err<Rich<'src, char>>> + Clone {
	choice((just('+').to(Sign::Pos), just('-').to(Sign::Neg)))
}

/// Generates a parser for a run of stacked signs, yielding the last one (the one closest to the following term).
fn signs<'src>() -> impl Parser<'src, &'src str, Sign, extra::Err<Rich<'src, char>>> + Clone {
	sign()
		.repeated()
		.at_least(1)
		.collect::<Vec<_>>()
		.map(|signs| signs.last().copied().unwrap_or_default())
}

/// Generates a parser for an unsigned term (dice or a constant), which is given a positive sign.
fn operand<'src>() -> impl Parser<'src, &'src str, Term, extra::Err<Rich<'src, char>>> + Clone {
	choice((
		dice_part().map(|dice| Term::Dice { dice, sign: Sign::Pos }),
		constant().map(|value| Term::Const { value, sign: Sign::Pos }),
	))
}

/// Generates a parser for a term with optional leading signs, like "4d6", "-2", or "+-d8".
pub fn term<'src>() -> impl Parser<'src, &'src str, Term, extra::Err<Rich<'src, char>>> + Clone {
	signs()
		.or_not()
		.then(operand())
		.map(|(sign, term)| term.with_sign(sign.unwrap_or_default()))
}

/// Generates a parser that handles full expressions: a term with optional signs, followed by any number of terms
/// that each must be preceded by at least one sign, followed by any number of trailing signs.
pub fn expr_part<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	let signed_term = signs().then(operand()).map(|(sign, term)| term.with_sign(sign));

	term()
		.then(signed_term.repeated().collect::<Vec<_>>())
		.then_ignore(sign().repeated())
		.try_map(|(first, rest), span| {
			let mut terms = Vec::with_capacity(rest.len().saturating_add(1));
			terms.push(first);
			terms.extend(rest);
			Expr::new(terms).ok_or_else(|| Rich::custom(span, "expression has no terms"))
		})
}

/// Generates a parser that handles full expressions and expects end of input
pub fn expr<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	expr_part().then_ignore(end())
}

/// Removes all whitespace from an expression and lower-cases it.
fn sanitize(input: &str) -> String {
	input
		.chars()
		.filter(|c| !c.is_whitespace())
		.flat_map(char::to_lowercase)
		.collect()
}

/// Parses a dice expression after sanitizing it. Nothing is ever partially parsed: either every term is valid, or
/// an error is returned.
///
/// # Errors
/// If the expression is empty, has no terms (only signs), contains anything other than dice and constants separated
/// by signs, or has dice with a count or number of sides that is out of range or written with leading zeros, an error
/// is returned.
///
/// # Examples
/// ```
/// use ability_dice::{
/// 	dice::Dice,
/// 	expr::{Sign, Term},
/// 	parse::parse,
/// };
///
/// let expr = parse("2d6 + 3")?;
/// assert_eq!(
/// 	expr.terms(),
/// 	[
/// 		Term::Dice {
/// 			dice: Dice::new(2, 6),
/// 			sign: Sign::Pos,
/// 		},
/// 		Term::Const {
/// 			value: 3,
/// 			sign: Sign::Pos,
/// 		},
/// 	]
/// );
///
/// assert!(parse("1d").is_err());
/// assert!(parse("01d6").is_err());
/// # Ok::<(), ability_dice::parse::Error>(())
/// ```
pub fn parse(input: &str) -> Result<Expr, Error> {
	let sanitized = sanitize(input);
	let result = if sanitized.is_empty() {
		Err(Error {
			details: "expression is empty".to_string(),
		})
	} else {
		expr().parse(sanitized.as_str()).into_result().map_err(Error::from_rich)
	};

	if let Err(err) = &result {
		tracing::debug!(input, error = %err, "rejected dice expression");
	}
	result
}

/// Checks whether a dice expression is valid. This is exactly whether [`parse()`] succeeds.
///
/// # Examples
/// ```
/// use ability_dice::is_dice_expression_valid;
///
/// assert!(is_dice_expression_valid("4d6-2"));
/// assert!(!is_dice_expression_valid("2+1d"));
/// ```
#[must_use]
pub fn is_dice_expression_valid(input: &str) -> bool {
	parse(input).is_ok()
}

/// Error produced when a dice expression can't be parsed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid dice expression: {details}")]
#[non_exhaustive]
pub struct Error {
	/// Description of everything that went wrong
	pub details: String,
}

impl Error {
	/// Combines a set of parser errors into one.
	fn from_rich(errs: Vec<Rich<'_, char>>) -> Self {
		Self {
			details: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
		}
	}
}

impl FromStr for Dice {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let sanitized = sanitize(s);
		let parser = dice();
		parser.parse(sanitized.as_str()).into_result().map_err(Error::from_rich)
	}
}

impl FromStr for Expr {
	type Err = Error;

	#[inline]
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}
