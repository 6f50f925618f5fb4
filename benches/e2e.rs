#![feature(test)]

extern crate test;

use ability_dice::{dice::random::FastRand, roll_ability_scores, RollOptions};
use test::Bencher;

#[bench]
fn e2e_four_d6_drop_lowest(b: &mut Bencher) {
	let mut random = FastRand::default();
	b.iter(|| roll_ability_scores("four_d6_drop_lowest", RollOptions::new().random(&mut random)).unwrap());
}

#[bench]
fn e2e_three_d6_reroll_ones(b: &mut Bencher) {
	let mut random = FastRand::default();
	b.iter(|| roll_ability_scores("three_d6_reroll_ones", RollOptions::new().random(&mut random)).unwrap());
}

#[bench]
fn e2e_custom_expression(b: &mut Bencher) {
	let mut random = FastRand::default();
	b.iter(|| {
		let options = RollOptions::new().expression("2d6 + 1d4 - 1").random(&mut random);
		roll_ability_scores("custom_expression", options).unwrap()
	});
}
