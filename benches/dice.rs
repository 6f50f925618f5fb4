#![feature(test)]

extern crate test;

use std::borrow::Cow;

use test::Bencher;

use ability_dice::dice::{random::FastRand, Dice, DieRoll, Modifier, Rolled};

#[bench]
fn roll_3d6(b: &mut Bencher) {
	let dice = Dice::new(3, 6);
	let mut random = FastRand::default();
	b.iter(|| dice.roll(&mut random).total());
}

#[bench]
fn roll_4d6dl(b: &mut Bencher) {
	let dice = Dice::builder().count(4).sides(6).drop_low(1).build();
	let mut random = FastRand::default();
	b.iter(|| dice.roll(&mut random).total());
}

#[bench]
fn roll_3d6rr1(b: &mut Bencher) {
	let dice = Dice::builder().count(3).sides(6).reroll(1, 100, 2).build();
	let mut random = FastRand::default();
	b.iter(|| dice.roll(&mut random).total());
}

#[bench]
fn roll_100d1000(b: &mut Bencher) {
	let dice = Dice::new(100, 1000);
	let mut random = FastRand::default();
	b.iter(|| dice.roll(&mut random).total());
}

#[bench]
fn roll_3d6rr1_worst_case(b: &mut Bencher) {
	let dice = Dice::builder().count(3).sides(6).reroll(1, 100, 2).build();
	let mut random = || 0.0_f64;
	b.iter(|| dice.roll(&mut random).total());
}

#[bench]
fn describe_4d6dl_result(b: &mut Bencher) {
	let dice = Dice::builder().count(4).sides(6).drop_low(1).build();
	let mut lowest = DieRoll::new(1);
	lowest.drop(Modifier::DropLow(1));
	let rolled = Rolled {
		rolls: vec![DieRoll::new(6), DieRoll::new(3), lowest, DieRoll::new(5)],
		dice: Cow::Owned(dice),
	};
	b.iter(|| rolled.describe(None));
}
