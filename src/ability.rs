//! The six ability scores of a character, and rolling a full set of them.

use core::{fmt, ops::Index};

use crate::method::{Error, MethodDescriptor, MethodId, RollOptions};

/// Score given to any ability that a roll didn't produce a value for
pub const BASELINE_SCORE: i32 = 10;

/// One of the six abilities every character has a score for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[expect(clippy::exhaustive_enums, reason = "The six abilities are fixed")]
pub enum Ability {
	/// Strength
	Strength,

	/// Dexterity
	Dexterity,

	/// Constitution
	Constitution,

	/// Intelligence
	Intelligence,

	/// Wisdom
	Wisdom,

	/// Charisma
	Charisma,
}

impl Ability {
	/// All abilities, in the order rolled values are assigned to them
	pub const ALL: [Self; 6] = [
		Self::Strength,
		Self::Dexterity,
		Self::Constitution,
		Self::Intelligence,
		Self::Wisdom,
		Self::Charisma,
	];

	/// Gets the lower-case key of the ability (`strength`, `dexterity`, etc.).
	#[must_use]
	pub const fn key(self) -> &'static str {
		match self {
			Self::Strength => "strength",
			Self::Dexterity => "dexterity",
			Self::Constitution => "constitution",
			Self::Intelligence => "intelligence",
			Self::Wisdom => "wisdom",
			Self::Charisma => "charisma",
		}
	}

	/// Gets the human-readable name of the ability.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Strength => "Strength",
			Self::Dexterity => "Dexterity",
			Self::Constitution => "Constitution",
			Self::Intelligence => "Intelligence",
			Self::Wisdom => "Wisdom",
			Self::Charisma => "Charisma",
		}
	}
}

impl fmt::Display for Ability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A score for each of the six abilities
///
/// Scores are conceptually within 1 to 30, but that isn't enforced here: rolled values are kept exactly as rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "The six abilities are fixed")]
pub struct AbilityScores {
	/// Strength score
	pub strength: i32,

	/// Dexterity score
	pub dexterity: i32,

	/// Constitution score
	pub constitution: i32,

	/// Intelligence score
	pub intelligence: i32,

	/// Wisdom score
	pub wisdom: i32,

	/// Charisma score
	pub charisma: i32,
}

impl AbilityScores {
	/// Creates a set of scores that are all the same value.
	#[must_use]
	pub const fn blank(value: i32) -> Self {
		Self {
			strength: value,
			dexterity: value,
			constitution: value,
			intelligence: value,
			wisdom: value,
			charisma: value,
		}
	}

	/// Creates a set of scores by assigning values to abilities in the order of [`Ability::ALL`].
	/// Any ability left without a value gets [`BASELINE_SCORE`], and any extra values are ignored.
	///
	/// # Examples
	/// ```
	/// use ability_dice::{Ability, AbilityScores};
	///
	/// let scores = AbilityScores::from_values(&[15, 14, 13]);
	/// assert_eq!(scores[Ability::Strength], 15);
	/// assert_eq!(scores[Ability::Constitution], 13);
	/// assert_eq!(scores[Ability::Intelligence], 10);
	/// assert_eq!(scores[Ability::Charisma], 10);
	/// ```
	#[must_use]
	pub fn from_values(values: &[i32]) -> Self {
		let value = |idx: usize| values.get(idx).copied().unwrap_or(BASELINE_SCORE);
		Self {
			strength: value(0),
			dexterity: value(1),
			constitution: value(2),
			intelligence: value(3),
			wisdom: value(4),
			charisma: value(5),
		}
	}

	/// Gets the score for an ability.
	#[must_use]
	pub const fn get(&self, ability: Ability) -> i32 {
		match ability {
			Ability::Strength => self.strength,
			Ability::Dexterity => self.dexterity,
			Ability::Constitution => self.constitution,
			Ability::Intelligence => self.intelligence,
			Ability::Wisdom => self.wisdom,
			Ability::Charisma => self.charisma,
		}
	}

	/// Iterates over every ability along with its score, in the order of [`Ability::ALL`].
	pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
		Ability::ALL.into_iter().map(|ability| (ability, self.get(ability)))
	}

	/// Rolls a full set of scores using the given method.
	///
	/// # Errors
	/// If the method fails to roll (see [`MethodDescriptor::roll()`]), its error is returned unchanged.
	///
	/// # Examples
	/// ```
	/// use ability_dice::{dice::random::Max, AbilityScores, MethodId, RollOptions};
	///
	/// let method = MethodId::FourD6DropLowest.descriptor();
	/// let scores = AbilityScores::roll(method, RollOptions::new().random(&mut Max))?;
	/// assert_eq!(scores, AbilityScores::blank(18));
	/// # Ok::<(), ability_dice::method::Error>(())
	/// ```
	pub fn roll(method: &MethodDescriptor, options: RollOptions<'_>) -> Result<Self, Error> {
		let values = method.roll(options)?;
		Ok(Self::from_values(&values))
	}
}

impl Default for AbilityScores {
	/// Creates a set of scores that are all [`BASELINE_SCORE`].
	#[inline]
	fn default() -> Self {
		Self::blank(BASELINE_SCORE)
	}
}

impl Index<Ability> for AbilityScores {
	type Output = i32;

	fn index(&self, ability: Ability) -> &Self::Output {
		match ability {
			Ability::Strength => &self.strength,
			Ability::Dexterity => &self.dexterity,
			Ability::Constitution => &self.constitution,
			Ability::Intelligence => &self.intelligence,
			Ability::Wisdom => &self.wisdom,
			Ability::Charisma => &self.charisma,
		}
	}
}

/// Rolls a full set of ability scores with the method identified by `method_id` (see [`MethodId::as_str()`]).
///
/// # Errors
/// If the method identifier is unknown, or the method fails to roll, an error variant is returned.
/// Failures never produce a partial set of scores.
///
/// # Examples
/// ```
/// use ability_dice::{
/// 	dice::random::{value_for_face, Iter},
/// 	method::Error,
/// 	roll_ability_scores, RollOptions,
/// };
///
/// // 2d4 + 1 for each score, with every die landing on a 3
/// let mut random = Iter::new([value_for_face(3, 4); 12]);
/// let options = RollOptions::new().expression("2d4+1").random(&mut random);
/// let scores = roll_ability_scores("custom_expression", options)?;
/// assert_eq!(scores.strength, 7);
/// assert_eq!(scores.charisma, 7);
///
/// let options = RollOptions::new().expression("1d");
/// assert!(matches!(roll_ability_scores("custom_expression", options), Err(Error::Expression(..))));
///
/// let options = RollOptions::new();
/// assert!(matches!(roll_ability_scores("point_buy", options), Err(Error::UnknownMethod(..))));
/// # Ok::<(), Error>(())
/// ```
pub fn roll_ability_scores(method_id: &str, options: RollOptions<'_>) -> Result<AbilityScores, Error> {
	let method = method_id
		.parse::<MethodId>()
		.inspect_err(|err| tracing::debug!(error = %err, "cannot roll ability scores"))?;
	AbilityScores::roll(method.descriptor(), options)
}

impl From<AbilityScores> for [i32; 6] {
	fn from(scores: AbilityScores) -> Self {
		Ability::ALL.map(|ability| scores.get(ability))
	}
}
