//! All functionality for directly creating dice, rolling them, and working with their resulting rolls.
//!
//! This is the home of the dice "primitives". For using dice as part of a larger expression, see [`Term::Dice`].
//!
//! [`Term::Dice`]: crate::expr::Term::Dice

pub mod modifier;
pub mod random;

use alloc::{
	borrow::Cow,
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::{cmp, fmt};

pub use self::{modifier::Modifier, random::RandomSource};

/// Maximum number of dice a single dice term may roll
pub const MAX_COUNT: u8 = 100;

/// Minimum number of sides a die may have
pub const MIN_SIDES: u16 = 2;

/// Maximum number of sides a die may have
pub const MAX_SIDES: u16 = 1000;

/// A set of one or more rollable dice with a specific number of sides, along with a collection of modifiers to apply to
/// any resulting rolls from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "Dice are plain data, and constructed directly in tests")]
pub struct Dice {
	/// Number of dice to roll
	pub count: u8,

	/// Number of sides for each die
	pub sides: u16,

	/// Modifiers to automatically apply to rolls from this set of dice
	pub modifiers: Vec<Modifier>,
}

impl Dice {
	/// Creates a new set of dice with a given count and number of sides.
	#[must_use]
	pub const fn new(count: u8, sides: u16) -> Self {
		Self {
			count,
			sides,
			modifiers: Vec::new(),
		}
	}

	/// Creates a new dice builder.
	#[must_use]
	#[inline]
	pub fn builder() -> Builder {
		Builder::default()
	}

	/// Checks whether the count and sides are within the limits accepted in dice expressions:
	/// 1 to [`MAX_COUNT`] dice, each with [`MIN_SIDES`] to [`MAX_SIDES`] sides.
	///
	/// # Examples
	/// ```
	/// use ability_dice::Dice;
	///
	/// assert!(Dice::new(4, 6).is_within_limits());
	/// assert!(Dice::new(100, 1000).is_within_limits());
	/// assert!(!Dice::new(0, 6).is_within_limits());
	/// assert!(!Dice::new(101, 6).is_within_limits());
	/// assert!(!Dice::new(1, 1).is_within_limits());
	/// ```
	#[must_use]
	pub const fn is_within_limits(&self) -> bool {
		self.count >= 1 && self.count <= MAX_COUNT && self.sides >= MIN_SIDES && self.sides <= MAX_SIDES
	}

	/// Rolls the dice using the given random source, drawing each die left to right, then applies all of the dice's
	/// modifiers in order.
	///
	/// # Examples
	/// ```
	/// use ability_dice::dice::{random::Max, Dice};
	///
	/// let dice = Dice::new(3, 6);
	/// let rolled = dice.roll(&mut Max);
	/// assert_eq!(rolled.total(), 18);
	/// ```
	pub fn roll<'d, R: RandomSource + ?Sized>(&'d self, random: &mut R) -> Rolled<'d> {
		let mut rolls = Vec::with_capacity(usize::from(self.count));
		for _ in 0..self.count {
			rolls.push(DieRoll::new(random.roll_die(self.sides)));
		}

		let mut rolled = Rolled {
			rolls,
			dice: Cow::Borrowed(self),
		};

		for modifier in &self.modifiers {
			modifier.apply(&mut rolled, random);
		}

		rolled
	}
}

impl fmt::Display for Dice {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"{}d{}{}",
			self.count,
			self.sides,
			self.modifiers.iter().map(ToString::to_string).collect::<String>()
		)
	}
}

/// Single die produced from rolling [`Dice`] and optionally applying [`Modifier`]s
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DieRoll {
	/// Value that was rolled
	pub val: u16,

	/// Modifier that caused the drop of this die, if any
	pub dropped_by: Option<Modifier>,

	/// Modifications that were made to the value of the roll
	pub changes: Vec<ValChange>,
}

impl DieRoll {
	/// Marks this die roll as dropped by a given modifier, setting [`Self::dropped_by`].
	///
	/// # Panics
	/// Panics if `Self::dropped_by` is already [`Some`].
	pub fn drop(&mut self, from: Modifier) {
		assert!(
			self.dropped_by.is_none(),
			"marking a die as dropped that has already been marked as dropped by another modifier"
		);
		self.dropped_by = Some(from);
	}

	/// Replaces the die roll's value and logs the change made.
	pub fn change(&mut self, from: Modifier, new_val: u16) {
		self.changes.push(ValChange {
			before: self.val,
			after: new_val,
			cause: from,
		});
		self.val = new_val;
	}

	/// Indicates whether this die roll has been dropped by a modifier.
	#[must_use]
	#[inline]
	pub const fn is_dropped(&self) -> bool {
		self.dropped_by.is_some()
	}

	/// Indicates whether this die roll is being kept (has *not* been dropped by a modifier).
	/// This is the direct inverse of [`DieRoll::is_dropped()`].
	#[must_use]
	#[inline]
	pub const fn is_kept(&self) -> bool {
		self.dropped_by.is_none()
	}

	/// Indicates whether this die roll's value has been directly changed by a modifier.
	#[must_use]
	#[inline]
	pub fn is_changed(&self) -> bool {
		!self.changes.is_empty()
	}

	/// Creates a new die roll with the given value.
	#[must_use]
	pub const fn new(val: u16) -> Self {
		Self {
			val,
			dropped_by: None,
			changes: Vec::new(),
		}
	}
}

impl PartialOrd for DieRoll {
	fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for DieRoll {
	fn cmp(&self, other: &Self) -> cmp::Ordering {
		self.val.cmp(&other.val)
	}
}

impl fmt::Display for DieRoll {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The format of a die roll is simply the plain numeric value of the roll.
	/// If the roll was changed by a modifier, it is appended with ` (m)`, and if it was dropped, with ` (d)`.
	///
	/// # Examples
	/// ```
	/// use ability_dice::dice::{DieRoll, Modifier};
	///
	/// let mut roll = DieRoll::new(1);
	/// assert_eq!(roll.to_string(), "1");
	///
	/// roll.drop(Modifier::DropLow(1));
	/// assert_eq!(roll.to_string(), "1 (d)");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}{}{}",
			self.val,
			if self.is_changed() { " (m)" } else { "" },
			if self.is_dropped() { " (d)" } else { "" }
		)
	}
}

/// Details about a modification made to a [`DieRoll`] as a result of a [`Modifier`] being applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct ValChange {
	/// Roll value before the change was made
	pub before: u16,

	/// Roll value after the change was made
	pub after: u16,

	/// Modifier that caused the change
	pub cause: Modifier,
}

/// Representation of the result from rolling [`Dice`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Rolled<'a> {
	/// Each individual die roll that was made
	pub rolls: Vec<DieRoll>,

	/// Dice that were rolled to produce this
	pub dice: Cow<'a, Dice>,
}

impl Rolled<'_> {
	/// Calculates the total of all kept roll values.
	///
	/// The total cannot overflow: even the largest possible set of dice (255 dice with 65535 sides each) sums to well
	/// below [`u32::MAX`].
	///
	/// # Examples
	/// ```
	/// use ability_dice::dice::{Dice, Rolled};
	///
	/// let dice = Dice::new(4, 8);
	/// let rolled = Rolled::from_dice_and_rolls(&dice, [3, 8, 1, 5]);
	/// assert_eq!(rolled.total(), 17);
	/// ```
	#[must_use]
	pub fn total(&self) -> u32 {
		self.rolls
			.iter()
			.filter(|roll| roll.is_kept())
			.map(|roll| u32::from(roll.val))
			.sum()
	}

	/// Creates a new rolled set of dice from a given set of dice and an iterator of values.
	#[must_use]
	pub fn from_dice_and_rolls(dice: &Dice, rolls: impl IntoIterator<Item = u16>) -> Rolled<'_> {
		Rolled {
			rolls: rolls.into_iter().map(DieRoll::new).collect(),
			dice: Cow::Borrowed(dice),
		}
	}

	/// Builds a string of the dice the roll is from and a list of all of the individual rolled dice
	/// (see [`DieRoll::fmt()`]).
	///
	/// If `list_limit` is specified and there are more rolls than it, the list of rolled dice will be truncated and
	/// appended with "X more..." (where X is the remaining roll count past the max).
	///
	/// # Examples
	/// ```
	/// use ability_dice::dice::{
	/// 	random::{value_for_face, Iter},
	/// 	Dice,
	/// };
	///
	/// let dice = Dice::builder().count(4).sides(6).drop_low(1).build();
	/// let mut random = Iter::new([2, 5, 6, 1].map(|face| value_for_face(face, 6)));
	/// let rolled = dice.roll(&mut random);
	///
	/// assert_eq!(rolled.describe(None), "4d6dl[2, 5, 6, 1 (d)]");
	/// assert_eq!(rolled.describe(Some(2)), "4d6dl[2, 5, 2 more...]");
	/// ```
	///
	/// [`DieRoll::fmt()`]: ./struct.DieRoll.html#method.fmt
	#[must_use]
	pub fn describe(&self, list_limit: Option<usize>) -> String {
		let list_limit = list_limit.unwrap_or(usize::MAX);
		let total_rolls = self.rolls.len();
		let truncated_rolls = total_rolls.saturating_sub(list_limit);

		format!(
			"{}[{}{}]",
			self.dice,
			self.rolls
				.iter()
				.take(list_limit)
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(", "),
			if truncated_rolls > 0 {
				format!(", {truncated_rolls} more...")
			} else {
				String::new()
			}
		)
	}
}

impl fmt::Display for Rolled<'_> {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is equivalent to calling [`Self::describe(None)`].
	///
	/// [`Self::describe(None)`]: Self::describe()
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}

/// Builds [`Dice`] with a fluent interface.
///
/// # Examples
///
/// ## Basic dice
/// ```
/// use ability_dice::Dice;
///
/// let dice = Dice::builder().count(3).sides(6).build();
/// assert_eq!(dice, Dice::new(3, 6));
/// ```
///
/// ## With modifiers
/// ```
/// use ability_dice::dice::{Dice, Modifier};
///
/// let dice = Dice::builder().count(3).sides(6).reroll(1, 100, 2).build();
/// assert_eq!(
/// 	dice.modifiers,
/// 	vec![Modifier::Reroll {
/// 		face: 1,
/// 		cap: 100,
/// 		fallback: 2,
/// 	}],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Builder(Dice);

impl Default for Builder {
	fn default() -> Self {
		Self(Dice::new(1, 6))
	}
}

impl Builder {
	/// Sets the number of dice to roll.
	#[must_use]
	pub const fn count(mut self, count: u8) -> Self {
		self.0.count = count;
		self
	}

	/// Sets the number of sides per die.
	#[must_use]
	pub const fn sides(mut self, sides: u16) -> Self {
		self.0.sides = sides;
		self
	}

	/// Adds a capped reroll modifier to the dice.
	#[must_use]
	pub fn reroll(mut self, face: u16, cap: u8, fallback: u16) -> Self {
		self.0.modifiers.push(Modifier::Reroll { face, cap, fallback });
		self
	}

	/// Adds a drop lowest modifier to the dice.
	#[must_use]
	pub fn drop_low(mut self, count: u8) -> Self {
		self.0.modifiers.push(Modifier::DropLow(count));
		self
	}

	/// Finalizes the dice.
	#[must_use]
	pub fn build(self) -> Dice {
		self.0
	}
}
