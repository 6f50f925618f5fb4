//! Built-in methods for rolling a full set of ability scores, and the table describing them.
//!
//! The set of methods is closed: every [`MethodId`] has exactly one [`MethodDescriptor`] in a table that is built at
//! compile time and never modified.

use alloc::{borrow::ToOwned, string::String, vec::Vec};
use core::{fmt, iter, str::FromStr};

#[cfg(all(feature = "std", feature = "fastrand"))]
use crate::dice::random::FastRand;
use crate::{
	ability::Ability,
	dice::{Dice, RandomSource, Rolled},
	parse,
};

/// Maximum number of times a single die is rerolled by [`three_d6_reroll_ones`]
pub const REROLL_CAP: u8 = 100;

/// Value a die is forced to when it still shows a 1 after [`REROLL_CAP`] rerolls
pub const REROLL_FALLBACK: u16 = 2;

/// Expression suggested to users of [`MethodId::CustomExpression`] before they enter their own
pub const DEFAULT_EXPRESSION: &str = "4d6";

/// Identifier of a method for rolling ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "The set of methods is fixed")]
pub enum MethodId {
	/// Rolls a user-supplied dice expression for each score
	CustomExpression,

	/// Rolls 4d6 for each score and drops the lowest die
	FourD6DropLowest,

	/// Rolls 3d6 for each score
	ThreeD6,

	/// Rolls 3d6 for each score, rerolling any die that shows a 1
	ThreeD6RerollOnes,
}

impl MethodId {
	/// All method identifiers, in the order they should be presented
	pub const ALL: [Self; 4] = [
		Self::CustomExpression,
		Self::FourD6DropLowest,
		Self::ThreeD6,
		Self::ThreeD6RerollOnes,
	];

	/// Gets the string form of the identifier (`custom_expression`, `four_d6_drop_lowest`, etc.).
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::CustomExpression => "custom_expression",
			Self::FourD6DropLowest => "four_d6_drop_lowest",
			Self::ThreeD6 => "three_d6",
			Self::ThreeD6RerollOnes => "three_d6_reroll_ones",
		}
	}

	/// Gets the descriptor for the method.
	#[must_use]
	pub fn descriptor(self) -> &'static MethodDescriptor {
		match self {
			Self::CustomExpression => &CUSTOM_EXPRESSION,
			Self::FourD6DropLowest => &FOUR_D6_DROP_LOWEST,
			Self::ThreeD6 => &THREE_D6,
			Self::ThreeD6RerollOnes => &THREE_D6_REROLL_ONES,
		}
	}
}

impl fmt::Display for MethodId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for MethodId {
	type Err = Error;

	/// Parses the string form of an identifier. Only the exact identifiers from [`MethodId::as_str()`] are accepted.
	///
	/// # Examples
	/// ```
	/// use ability_dice::{method::Error, MethodId};
	///
	/// assert_eq!("three_d6".parse::<MethodId>()?, MethodId::ThreeD6);
	/// assert!(matches!("five_d6".parse::<MethodId>(), Err(Error::UnknownMethod(..))));
	/// # Ok::<(), Error>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|id| id.as_str() == s)
			.ok_or_else(|| Error::UnknownMethod(s.to_owned()))
	}
}

/// Signature of the functions that roll a full set of scores for a method: the expression to roll (only used by
/// [`MethodId::CustomExpression`]) and the random source to draw from
pub type RollFn = fn(Option<&str>, &mut dyn RandomSource) -> Result<Vec<i32>, Error>;

/// Everything there is to know about a method for rolling ability scores
#[non_exhaustive]
pub struct MethodDescriptor {
	/// Identifier of the method
	pub id: MethodId,

	/// Short human-readable name
	pub label: &'static str,

	/// One-line human-readable explanation of how the method rolls
	pub description: &'static str,

	/// Whether the method can be rolled without any input beyond an optional random source.
	/// [`MethodId::CustomExpression`] counts, since callers supply its expression as part of rolling.
	pub can_auto_roll: bool,

	/// Rolls the full set of scores
	roll_fn: RollFn,
}

impl fmt::Debug for MethodDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MethodDescriptor")
			.field("id", &self.id)
			.field("label", &self.label)
			.field("description", &self.description)
			.field("can_auto_roll", &self.can_auto_roll)
			.finish_non_exhaustive()
	}
}

impl MethodDescriptor {
	/// Gets the descriptors of all methods, in the order they should be presented.
	#[must_use]
	pub fn all() -> impl Iterator<Item = &'static Self> {
		MethodId::ALL.into_iter().map(MethodId::descriptor)
	}

	/// Rolls one value for each ability score.
	///
	/// If `options` has no random source, a fresh [`FastRand`] source is used when the `std` and `fastrand` features
	/// are enabled.
	///
	/// [`FastRand`]: crate::dice::random::FastRand
	///
	/// # Errors
	/// If the method needs an expression that is missing or invalid, or if no random source is available, an error
	/// variant is returned. A valid expression always rolls successfully.
	///
	/// # Examples
	/// ```
	/// use ability_dice::{dice::random::Max, MethodId, RollOptions};
	///
	/// let method = MethodId::ThreeD6.descriptor();
	/// let scores = method.roll(RollOptions::new().random(&mut Max))?;
	/// assert_eq!(scores, [18; 6]);
	/// # Ok::<(), ability_dice::method::Error>(())
	/// ```
	pub fn roll(&self, options: RollOptions<'_>) -> Result<Vec<i32>, Error> {
		let RollOptions { expression, random } = options;
		let scores = match random {
			Some(random) => (self.roll_fn)(expression, random),
			#[cfg(all(feature = "std", feature = "fastrand"))]
			None => (self.roll_fn)(expression, &mut FastRand::default()),
			#[cfg(not(all(feature = "std", feature = "fastrand")))]
			None => Err(Error::NoRandomSource),
		}?;

		tracing::trace!(method = %self.id, ?scores, "rolled ability scores");
		Ok(scores)
	}
}

/// Gets the descriptor for a method from the string form of its identifier.
///
/// # Examples
/// ```
/// use ability_dice::get_dice_method;
///
/// let method = get_dice_method("four_d6_drop_lowest").unwrap();
/// assert_eq!(method.label, "4d6 Drop Lowest");
/// assert!(method.can_auto_roll);
///
/// assert!(get_dice_method("roll_for_shoes").is_none());
/// ```
#[must_use]
pub fn get_dice_method(id: &str) -> Option<&'static MethodDescriptor> {
	match id.parse::<MethodId>() {
		Ok(id) => Some(id.descriptor()),
		Err(err) => {
			tracing::debug!(error = %err, "dice method lookup failed");
			None
		}
	}
}

/// Inputs for rolling a method, built with a fluent interface
///
/// # Examples
/// ```
/// use ability_dice::{dice::random::Val, RollOptions};
///
/// let mut random = Val(0.5);
/// let options = RollOptions::new().expression("4d6+2").random(&mut random);
/// ```
#[derive(Default)]
#[non_exhaustive]
pub struct RollOptions<'a> {
	/// Dice expression to roll, for [`MethodId::CustomExpression`]
	pub expression: Option<&'a str>,

	/// Source to draw random values from
	pub random: Option<&'a mut dyn RandomSource>,
}

impl<'a> RollOptions<'a> {
	/// Creates a new set of options with no expression and no random source.
	#[must_use]
	#[inline]
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the dice expression to roll.
	#[must_use]
	pub fn expression(mut self, expression: &'a str) -> Self {
		self.expression = Some(expression);
		self
	}

	/// Sets the random source to draw from.
	#[must_use]
	pub fn random(mut self, random: &'a mut dyn RandomSource) -> Self {
		self.random = Some(random);
		self
	}
}

impl fmt::Debug for RollOptions<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RollOptions")
			.field("expression", &self.expression)
			.field("random", &self.random.as_ref().map(|_random| "dyn RandomSource"))
			.finish()
	}
}

/// Converts a dice total into a score.
fn score(rolled: &Rolled<'_>) -> i32 {
	i32::try_from(rolled.total()).unwrap_or(i32::MAX)
}

/// Rolls 4d6 and sums the highest three dice, dropping exactly one of the lowest.
///
/// # Examples
/// ```
/// use ability_dice::{
/// 	dice::random::{value_for_face, Iter},
/// 	method::four_d6_drop_lowest,
/// };
///
/// let mut random = Iter::new([2, 5, 6, 1].map(|face| value_for_face(face, 6)));
/// assert_eq!(four_d6_drop_lowest(&mut random), 13);
/// ```
pub fn four_d6_drop_lowest<R: RandomSource + ?Sized>(random: &mut R) -> i32 {
	let dice = Dice::builder().count(4).sides(6).drop_low(1).build();
	score(&dice.roll(random))
}

/// Rolls 3d6 and sums all of them.
pub fn three_d6<R: RandomSource + ?Sized>(random: &mut R) -> i32 {
	score(&Dice::new(3, 6).roll(random))
}

/// Rolls 3d6, rerolling each die that shows a 1 until it shows 2 or more, then sums them.
///
/// Each die is rerolled at most [`REROLL_CAP`] times. A die that still shows a 1 after that counts as
/// [`REROLL_FALLBACK`], so this always finishes, even with a random source that only ever produces ones.
///
/// # Examples
/// ```
/// use ability_dice::{dice::random::Val, method::three_d6_reroll_ones};
///
/// assert_eq!(three_d6_reroll_ones(&mut Val(0.0)), 6);
/// ```
pub fn three_d6_reroll_ones<R: RandomSource + ?Sized>(random: &mut R) -> i32 {
	let dice = Dice::builder()
		.count(3)
		.sides(6)
		.reroll(1, REROLL_CAP, REROLL_FALLBACK)
		.build();
	score(&dice.roll(random))
}

/// Calls a roll function once for each ability score.
fn repeat_scores(roll: impl FnMut() -> i32) -> Vec<i32> {
	iter::repeat_with(roll).take(Ability::ALL.len()).collect()
}

/// Parses the expression once, then evaluates it for each ability score.
fn roll_custom_expression(expression: Option<&str>, random: &mut dyn RandomSource) -> Result<Vec<i32>, Error> {
	let expr = parse::parse(expression.ok_or(Error::MissingExpression)?)?;

	Ok(repeat_scores(|| expr.eval(random)))
}

/// Rolls [`four_d6_drop_lowest`] for each ability score.
fn roll_four_d6_drop_lowest(_expression: Option<&str>, random: &mut dyn RandomSource) -> Result<Vec<i32>, Error> {
	Ok(repeat_scores(|| four_d6_drop_lowest(random)))
}

/// Rolls [`three_d6`] for each ability score.
fn roll_three_d6(_expression: Option<&str>, random: &mut dyn RandomSource) -> Result<Vec<i32>, Error> {
	Ok(repeat_scores(|| three_d6(random)))
}

/// Rolls [`three_d6_reroll_ones`] for each ability score.
fn roll_three_d6_reroll_ones(_expression: Option<&str>, random: &mut dyn RandomSource) -> Result<Vec<i32>, Error> {
	Ok(repeat_scores(|| three_d6_reroll_ones(random)))
}

/// Descriptor for [`MethodId::CustomExpression`]
static CUSTOM_EXPRESSION: MethodDescriptor = MethodDescriptor {
	id: MethodId::CustomExpression,
	label: "Custom Expression",
	description: "Enter any dice expression (e.g., 4d6+2) then roll for each score.",
	can_auto_roll: true,
	roll_fn: roll_custom_expression,
};

/// Descriptor for [`MethodId::FourD6DropLowest`]
static FOUR_D6_DROP_LOWEST: MethodDescriptor = MethodDescriptor {
	id: MethodId::FourD6DropLowest,
	label: "4d6 Drop Lowest",
	description: "Roll 4d6 per score; drop the lowest die before summing.",
	can_auto_roll: true,
	roll_fn: roll_four_d6_drop_lowest,
};

/// Descriptor for [`MethodId::ThreeD6`]
static THREE_D6: MethodDescriptor = MethodDescriptor {
	id: MethodId::ThreeD6,
	label: "3d6 Classic",
	description: "Roll 3d6 per score; classic old-school method.",
	can_auto_roll: true,
	roll_fn: roll_three_d6,
};

/// Descriptor for [`MethodId::ThreeD6RerollOnes`]
static THREE_D6_REROLL_ONES: MethodDescriptor = MethodDescriptor {
	id: MethodId::ThreeD6RerollOnes,
	label: "3d6 Reroll 1s",
	description: "Roll 3d6, reroll each die showing 1 until it is 2+.",
	can_auto_roll: true,
	roll_fn: roll_three_d6_reroll_ones,
};

/// An error resulting from looking up or rolling a method
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The method identifier doesn't match any known method.
	#[error("unknown dice method: {0}")]
	UnknownMethod(String),

	/// The method needs a dice expression, but none was given.
	#[error("a dice expression is required")]
	MissingExpression,

	/// The dice expression couldn't be parsed.
	#[error(transparent)]
	Expression(#[from] parse::Error),

	/// No random source was given, and there is no default one available without the `std` and `fastrand` features.
	#[error("no random source is available")]
	NoRandomSource,
}
