//! Dice modifiers.

use alloc::vec::Vec;
use core::fmt;

use super::{random::RandomSource, Rolled};

/// Routines that can be applied to [`Dice`](super::Dice) to automatically manipulate resulting [`Rolled`] dice sets
/// from them as part of their rolling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Modifier {
	/// Rerolls each die showing a specific face in place, repeatedly, until it shows anything else.
	///
	/// Every die is rerolled at most `cap` times. A die that spends its whole cap has its value forced to `fallback`,
	/// whatever its last reroll landed on, so applying this always terminates, no matter what the random source
	/// produces.
	///
	/// # Examples
	///
	/// ## Reroll ones (`rr1`)
	/// ```
	/// use ability_dice::dice::{
	/// 	random::{value_for_face, Iter},
	/// 	Dice, Rolled,
	/// };
	///
	/// // Build the 3d6rr1 dice set and a random source with predetermined faces for the dice rolls
	/// let dice = Dice::builder().count(3).sides(6).reroll(1, 100, 2).build();
	/// let mut random = Iter::new([3, 1, 5, 1, 4].map(|face| value_for_face(face, 6)));
	///
	/// // Upon being applied, the modifier will reroll the 1 into another 1, then reroll that into a 4.
	/// // Final expected rolled dice set, after rr1 modifier: 3d6rr1[3, 4 (m), 5]
	/// let rolled = dice.roll(&mut random);
	/// let rr1_mod = dice.modifiers[0];
	///
	/// let mut expected = Rolled::from_dice_and_rolls(&dice, [3, 1, 5]);
	/// expected.rolls[1].change(rr1_mod, 1);
	/// expected.rolls[1].change(rr1_mod, 4);
	/// assert_eq!(rolled, expected);
	/// assert_eq!(rolled.total(), 12);
	/// ```
	Reroll {
		/// Face that causes a die to be rerolled
		face: u16,

		/// Maximum number of rerolls per die
		cap: u8,

		/// Value a die is forced to when it still shows `face` after `cap` rerolls
		fallback: u16,
	},

	/// Drops the lowest x dice, keeping the rest. Ties are broken in favour of dropping the earlier die.
	///
	/// # Examples
	///
	/// ## Drop lowest die (`dl`)
	/// ```
	/// use ability_dice::dice::{
	/// 	random::{value_for_face, Iter},
	/// 	Dice, Modifier, Rolled,
	/// };
	///
	/// // Build the 4d6dl dice set and a random source with predetermined faces for the dice rolls
	/// let dice = Dice::builder().count(4).sides(6).drop_low(1).build();
	/// let premade_rolls = [2, 5, 6, 1];
	/// let mut random = Iter::new(premade_rolls.map(|face| value_for_face(face, 6)));
	///
	/// // Upon being applied, the modifier will drop only the lowest roll, which is the 1.
	/// // Final expected rolled dice set, after dl modifier: 4d6dl[2, 5, 6, 1 (d)]
	/// let rolled = dice.roll(&mut random);
	/// let mut expected = Rolled::from_dice_and_rolls(&dice, premade_rolls);
	/// expected.rolls[3].drop(Modifier::DropLow(1));
	/// assert_eq!(rolled, expected);
	/// assert_eq!(rolled.total(), 13);
	/// ```
	DropLow(u8),
}

impl Modifier {
	/// Applies the modifier to a set of rolls, using a given random source if additional die rolls are needed.
	pub fn apply<R: RandomSource + ?Sized>(self, rolled: &mut Rolled, random: &mut R) {
		match self {
			Self::Reroll { face, cap, fallback } => self.apply_reroll(rolled, random, face, cap, fallback),
			Self::DropLow(count) => self.apply_drop_low(rolled, count),
		}
	}

	/// Applies the [`Self::Reroll`] variant to a set of rolled dice.
	fn apply_reroll<R: RandomSource + ?Sized>(
		self,
		rolled: &mut Rolled,
		random: &mut R,
		face: u16,
		cap: u8,
		fallback: u16,
	) {
		let sides = rolled.dice.sides;

		for roll in rolled.rolls.iter_mut().filter(|roll| roll.is_kept() && roll.val == face) {
			let mut rerolls: u8 = 0;
			while roll.val == face && rerolls < cap {
				roll.change(self, random.roll_die(sides));
				rerolls = rerolls.saturating_add(1);
			}

			if rerolls >= cap {
				tracing::warn!(
					face,
					cap,
					fallback,
					last = roll.val,
					"die used all of its rerolls, forcing fallback value"
				);
				if roll.val != fallback {
					roll.change(self, fallback);
				}
			}
		}
	}

	/// Applies the [`Self::DropLow`] variant to a set of rolled dice.
	fn apply_drop_low(self, rolled: &mut Rolled, count: u8) {
		let mut refs = rolled
			.rolls
			.iter_mut()
			.filter(|roll| roll.is_kept())
			.collect::<Vec<_>>();
		refs.sort();
		refs.into_iter()
			.take(usize::from(count))
			.for_each(|roll| roll.drop(self));
	}
}

impl fmt::Display for Modifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Reroll { face, .. } => write!(f, "rr{face}"),
			Self::DropLow(1) => f.write_str("dl"),
			Self::DropLow(count) => write!(f, "dl{count}"),
		}
	}
}
