#![feature(test)]

extern crate test;

use ability_dice::{dice::Dice, expr::Expr, parse};
use chumsky::Parser;
use test::Bencher;

const LONG_EXPR: &str = "4d6 + 2d8 - d20 + 100d1000 - 17 + 3d4 + 007 - 2d12 + 1d2 - 99";

#[bench]
fn parse_basic(b: &mut Bencher) {
	let parser = parse::expr();
	b.iter(|| parser.parse("4d6+2").into_result().unwrap());
}

#[bench]
fn parse_long(b: &mut Bencher) {
	b.iter(|| parse::parse(LONG_EXPR).unwrap());
}

#[bench]
fn parser_creation(b: &mut Bencher) {
	b.iter(parse::expr);
}

#[bench]
fn fromstr_basic(b: &mut Bencher) {
	b.iter(|| "4d6 + 2".parse::<Expr>().unwrap());
}

#[bench]
fn fromstr_dice(b: &mut Bencher) {
	b.iter(|| "4d6".parse::<Dice>().unwrap());
}

#[bench]
fn reject_invalid(b: &mut Bencher) {
	b.iter(|| parse::parse("4d6 + 1d").unwrap_err());
}
