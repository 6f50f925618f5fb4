use chumsky::Parser;

use crate::{
	dice::Dice,
	expr::{Expr, Sign, Term},
	is_dice_expression_valid,
	parse::{self, parse},
};

#[test]
fn valid_expressions() {
	for input in [
		"4d6",
		"d20",
		"2d6+3",
		"2d6 + 3",
		"-1d4+10",
		"+d8",
		"1d6+1d4-2",
		"100d1000",
		"1d2",
		"3",
		"007",
		"4D6",
		" 2 d 6 \t+\n1 ",
		"10-20",
		"4d6-",
		"2++3",
		"+-3",
		"1d6--2",
		"99999999999",
		"1d6+4294967296",
	] {
		assert!(is_dice_expression_valid(input), "{input:?} should be valid");
	}
}

#[test]
fn invalid_expressions() {
	for input in [
		"",
		"   ",
		"1d",
		"d",
		"0d6",
		"101d6",
		"1d1",
		"1d0",
		"1d1001",
		"01d6",
		"1d06",
		"4d6x",
		"4d6dl",
		"+",
		"-",
		"+-",
		"--+",
		"2+-1d",
		"abc",
		"1.5",
		"1d6*2",
		"(1d6)",
		"256d6",
		"4294967297d6",
	] {
		assert!(!is_dice_expression_valid(input), "{input:?} should be invalid");
	}
}

#[test]
fn dice_and_constant_terms() {
	let expr = parse("2d6+3").unwrap();
	assert_eq!(
		expr.terms(),
		[
			Term::Dice {
				dice: Dice::new(2, 6),
				sign: Sign::Pos,
			},
			Term::Const {
				value: 3,
				sign: Sign::Pos,
			},
		]
	);
}

#[test]
fn signs_attach_to_terms() {
	let expr = parse("-1d4 + 10 - d8").unwrap();
	assert_eq!(
		expr.terms().iter().map(Term::sign).collect::<Vec<_>>(),
		[Sign::Neg, Sign::Pos, Sign::Neg]
	);
	assert_eq!(
		expr.terms()[2],
		Term::Dice {
			dice: Dice::new(1, 8),
			sign: Sign::Neg,
		}
	);
}

#[test]
fn implicit_dice_count() {
	let expr = parse("d20").unwrap();
	assert_eq!(
		expr.terms(),
		[Term::Dice {
			dice: Dice::new(1, 20),
			sign: Sign::Pos,
		}]
	);
}

#[test]
fn dice_limits() {
	assert!(is_dice_expression_valid("1d2"));
	assert!(is_dice_expression_valid("100d6"));
	assert!(is_dice_expression_valid("1d1000"));
	assert!(!is_dice_expression_valid("1d1"));
	assert!(!is_dice_expression_valid("101d6"));
	assert!(!is_dice_expression_valid("1d1001"));
}

#[test]
fn stray_signs_are_skipped() {
	assert_eq!(parse("4d6-").unwrap(), parse("4d6").unwrap());
	assert_eq!(parse("2++3").unwrap(), parse("2+3").unwrap());
	assert_eq!(parse("1d6--2").unwrap(), parse("1d6-2").unwrap());
	assert_eq!(parse("-+-d8+").unwrap(), parse("-d8").unwrap());
}

#[test]
fn closest_sign_wins() {
	let expr = parse("+-3").unwrap();
	assert_eq!(
		expr.terms(),
		[Term::Const {
			value: 3,
			sign: Sign::Neg,
		}]
	);

	let expr = parse("5-+2").unwrap();
	assert_eq!(expr.terms()[1].sign(), Sign::Pos);
}

#[test]
fn huge_constants_saturate() {
	let expr = parse("99999999999").unwrap();
	assert_eq!(
		expr.terms(),
		[Term::Const {
			value: 99_999_999_999,
			sign: Sign::Pos,
		}]
	);

	let expr = parse("1d6 + 123456789012345678901234567890").unwrap();
	assert_eq!(
		expr.terms()[1],
		Term::Const {
			value: u64::MAX,
			sign: Sign::Pos,
		}
	);
}

#[test]
fn constants_allow_leading_zeros() {
	let expr = parse("1d6 + 007").unwrap();
	assert_eq!(
		expr.terms()[1],
		Term::Const {
			value: 7,
			sign: Sign::Pos,
		}
	);
	assert!(parse("0").is_ok());
}

#[test]
fn dice_reject_leading_zeros() {
	assert!(parse("02d6").is_err());
	assert!(parse("2d06").is_err());
	assert!(parse("0d6").is_err());
}

#[test]
fn sanitization() {
	let sanitized = parse(" 4 D 6 - 2 ").unwrap();
	assert_eq!(sanitized, parse("4d6-2").unwrap());
	assert_eq!(sanitized.to_string(), "4d6 - 2");
}

#[test]
fn empty_expression_error() {
	let err = parse(" \t ").unwrap_err();
	assert_eq!(err.details, "expression is empty");
	assert_eq!(err.to_string(), "invalid dice expression: expression is empty");
}

#[test]
fn validity_matches_parse() {
	for input in ["4d6", "1d", "2d6 + 3", "2++3", "", "d100", "-", "4d6-"] {
		assert_eq!(is_dice_expression_valid(input), parse(input).is_ok());
	}
}

#[test]
fn expr_fromstr() {
	let expr: Expr = "3d6 - 1".parse().unwrap();
	assert_eq!(expr.terms().len(), 2);
	assert!("3d6 - x".parse::<Expr>().is_err());
}

#[test]
fn dice_fromstr() {
	assert_eq!("4d6".parse::<Dice>().unwrap(), Dice::new(4, 6));
	assert_eq!(" D12 ".parse::<Dice>().unwrap(), Dice::new(1, 12));
	assert!("4d6+1".parse::<Dice>().is_err());
	assert!("7".parse::<Dice>().is_err());
}

#[test]
fn term_parser() {
	let term = parse::term().parse("-3").into_result().unwrap();
	assert_eq!(
		term,
		Term::Const {
			value: 3,
			sign: Sign::Neg,
		}
	);

	let constant = parse::constant().parse("0042").into_result().unwrap();
	assert_eq!(constant, 42);
}

