//! Sources of randomness that dice draw their values from.

use core::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

/// Produces uniformly-distributed values in `[0, 1)` for dice to draw from.
///
/// Random sources are always handed to rolling functions explicitly, so any roll can be made deterministic by passing a
/// predictable source. Any `FnMut() -> f64` closure is a random source.
///
/// # Examples
/// ```
/// use ability_dice::dice::{random::RandomSource, Dice};
///
/// let mut always_low = || 0.0_f64;
/// assert_eq!(always_low.roll_die(20), 1);
///
/// let dice = Dice::new(3, 6);
/// let rolled = dice.roll(&mut always_low);
/// assert_eq!(rolled.total(), 3);
/// ```
pub trait RandomSource {
	/// Draws the next value, which should be in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// Rolls a single die by mapping the next drawn value onto `1..=sides` (`floor(value * sides) + 1`).
	///
	/// Drawn values outside of `[0, 1)` are clamped, so the result always lies within `1..=sides`.
	/// A die without any sides always rolls 0.
	fn roll_die(&mut self, sides: u16) -> u16 {
		if sides == 0 {
			return 0;
		}

		#[expect(
			clippy::cast_possible_truncation,
			clippy::cast_sign_loss,
			reason = "Float to int casts saturate and truncate toward zero, which is the floor for non-negative values"
		)]
		let face = (self.next_f64() * f64::from(sides)) as u16;
		face.saturating_add(1).min(sides)
	}
}

impl<F: FnMut() -> f64> RandomSource for F {
	#[inline]
	fn next_f64(&mut self) -> f64 {
		self()
	}
}

/// Computes the value a random source must produce for a die with `sides` sides to land on `face`.
/// Mainly useful for building deterministic sources for testing purposes.
///
/// # Examples
/// ```
/// use ability_dice::dice::random::{value_for_face, RandomSource, Val};
///
/// assert_eq!(Val(value_for_face(5, 6)).roll_die(6), 5);
/// assert_eq!(Val(value_for_face(1, 1000)).roll_die(1000), 1);
/// ```
#[must_use]
pub fn value_for_face(face: u16, sides: u16) -> f64 {
	(f64::from(face) - 0.5) / f64::from(sides)
}

/// Draws random values using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand source
/// ```
/// use ability_dice::dice::{random::FastRand, Dice};
///
/// let mut random = FastRand::default();
///
/// let dice = Dice::new(4, 6);
/// let _ = dice.roll(&mut random);
/// let _ = dice.roll(&mut random);
/// ```
///
/// ## Manually seeded fastrand source
/// ```
/// use ability_dice::dice::{random::FastRand, Dice};
///
/// let dice = Dice::new(4, 6);
/// let first = dice.roll(&mut FastRand::with_seed(0x750c38d574400));
/// let second = dice.roll(&mut FastRand::with_seed(0x750c38d574400));
/// assert_eq!(first, second);
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand source that uses a pre-seeded RNG instance to draw values.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl RandomSource for FastRand {
	/// Draws a value using the [`fastrand::Rng`] the source was created with.
	#[inline]
	fn next_f64(&mut self) -> f64 {
		self.0.f64()
	}
}

/// Always draws one specific value.
///
/// # Examples
/// ```
/// use ability_dice::dice::{random::Val, Dice};
///
/// // 0.0 always lands on the lowest face
/// let dice = Dice::new(4, 6);
/// let rolled = dice.roll(&mut Val(0.0));
/// assert!(rolled.rolls.iter().all(|roll| roll.val == 1));
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub f64);

impl RandomSource for Val {
	#[inline]
	fn next_f64(&mut self) -> f64 {
		self.0
	}
}

/// Always draws the largest value below 1, so every die lands on its highest face.
///
/// # Examples
/// ```
/// use ability_dice::dice::{random::Max, Dice};
///
/// let dice = Dice::new(2, 20);
/// let rolled = dice.roll(&mut Max);
/// assert!(rolled.rolls.iter().all(|roll| roll.val == 20));
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl RandomSource for Max {
	#[inline]
	fn next_f64(&mut self) -> f64 {
		1.0 - f64::EPSILON
	}
}

/// Draws values from an iterator. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use ability_dice::dice::{random::{value_for_face, Iter}, Dice, DieRoll};
///
/// let mut random = Iter::new([1, 2, 3, 4, 6].map(|face| value_for_face(face, 6)));
/// let dice = Dice::new(5, 6);
/// let rolled = dice.roll(&mut random);
/// assert_eq!(
/// 	rolled.rolls,
/// 	vec![DieRoll::new(1), DieRoll::new(2), DieRoll::new(3), DieRoll::new(4), DieRoll::new(6)]
/// );
/// assert!(!random.can_draw());
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = f64>>(Peekable<I>);

impl<I: Iterator<Item = f64>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_draw(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new source that uses the given iterator to provide values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = f64>> RandomSource for Iter<I> {
	/// Draws the next value from the iterator.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_draw() is expected"
	)]
	fn next_f64(&mut self) -> f64 {
		self.0.next().expect("iterator is finished")
	}
}
