use super::faces;
use crate::{
	ability::BASELINE_SCORE,
	dice::random::{FastRand, Max},
	method::Error,
	roll_ability_scores, Ability, AbilityScores, MethodId, RollOptions,
};

#[test]
fn abilities_in_order() {
	let keys = Ability::ALL.map(Ability::key);
	assert_eq!(
		keys,
		["strength", "dexterity", "constitution", "intelligence", "wisdom", "charisma"]
	);
	assert_eq!(Ability::Wisdom.label(), "Wisdom");
	assert_eq!(Ability::Charisma.to_string(), "Charisma");
}

#[test]
fn values_assigned_positionally() {
	let scores = AbilityScores::from_values(&[8, 10, 12, 13, 14, 15]);
	assert_eq!(
		scores,
		AbilityScores {
			strength: 8,
			dexterity: 10,
			constitution: 12,
			intelligence: 13,
			wisdom: 14,
			charisma: 15,
		}
	);
	assert_eq!(<[i32; 6]>::from(scores), [8, 10, 12, 13, 14, 15]);
}

#[test]
fn missing_values_get_baseline() {
	let scores = AbilityScores::from_values(&[16, 9]);
	assert_eq!(scores.strength, 16);
	assert_eq!(scores.dexterity, 9);
	for ability in &Ability::ALL[2..] {
		assert_eq!(scores[*ability], BASELINE_SCORE);
	}

	assert_eq!(AbilityScores::from_values(&[]), AbilityScores::default());
}

#[test]
fn extra_values_ignored() {
	let scores = AbilityScores::from_values(&[1, 2, 3, 4, 5, 6, 7, 8]);
	assert_eq!(<[i32; 6]>::from(scores), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn default_scores() {
	assert_eq!(AbilityScores::default(), AbilityScores::blank(10));
	assert!(AbilityScores::default().iter().all(|(_, score)| score == 10));
}

#[test]
fn iter_and_index_agree() {
	let scores = AbilityScores::from_values(&[3, 18, 7, 11, 9, 14]);
	let pairs = scores.iter().collect::<Vec<_>>();
	assert_eq!(pairs.len(), 6);
	for (ability, score) in pairs {
		assert_eq!(scores[ability], score);
		assert_eq!(scores.get(ability), score);
	}
}

#[test]
fn roll_each_method() {
	let mut random = Max;
	for id in MethodId::ALL {
		let options = RollOptions::new().expression("4d6").random(&mut random);
		let scores = roll_ability_scores(id.as_str(), options).unwrap();
		let expected = if id == MethodId::CustomExpression { 24 } else { 18 };
		assert_eq!(scores, AbilityScores::blank(expected));
	}
}

#[test]
fn roll_with_default_random_source() {
	let scores = roll_ability_scores("three_d6", RollOptions::new()).unwrap();
	assert!(scores.iter().all(|(_, score)| (3..=18).contains(&score)));
}

#[test]
fn roll_drop_lowest_sequence() {
	let mut random = faces(6, &[2, 5, 6, 1, 6, 6, 6, 6, 1, 1, 1, 1, 3, 4, 5, 6, 2, 2, 2, 2, 6, 5, 4, 3]);
	let scores = roll_ability_scores("four_d6_drop_lowest", RollOptions::new().random(&mut random)).unwrap();
	assert_eq!(<[i32; 6]>::from(scores), [13, 18, 3, 15, 6, 15]);
}

#[test]
fn seeded_rolls_are_repeatable() {
	let roll = |seed| {
		let mut random = FastRand::with_seed(seed);
		roll_ability_scores("three_d6_reroll_ones", RollOptions::new().random(&mut random)).unwrap()
	};
	assert_eq!(roll(42), roll(42));
}

#[test]
fn unknown_method() {
	let result = roll_ability_scores("point_buy", RollOptions::new());
	assert!(matches!(result, Err(Error::UnknownMethod(id)) if id == "point_buy"));
}

#[test]
fn invalid_custom_expressions() {
	for expression in ["1d", "", "4d6x", "0d6"] {
		let options = RollOptions::new().expression(expression);
		let result = roll_ability_scores("custom_expression", options);
		assert!(matches!(result, Err(Error::Expression(..))), "{expression:?} should be rejected");
	}

	let result = roll_ability_scores("custom_expression", RollOptions::new());
	assert!(matches!(result, Err(Error::MissingExpression)));
}
