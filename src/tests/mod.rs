mod ability;
mod parse;

use crate::dice::random::{value_for_face, Iter};

/// Builds a random source that lands dice with the given number of sides on each of the given faces, in order.
fn faces(sides: u16, faces: &[u16]) -> Iter<impl Iterator<Item = f64> + '_> {
	Iter::new(faces.iter().map(move |&face| value_for_face(face, sides)))
}
