use super::super::Lanes;

pub fn theta(lanes: &mut Lanes) {
	let mut parities = [0u64; 5];

	for x in 0 .. 5 {
		parities[x] = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
	}

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed_parities = parities[xm1] ^ parities[xp1].rotate_left(1);

		for y in 0 .. 5 {
			lanes[x + 5 * y] ^= crossed_parities;
		}
	}
}

#[test]
fn single_bit_reaches_neighboring_columns() {
	let mut lanes = [0; 25];
	lanes[0] = 1;

	theta(&mut lanes);

	for y in 0 .. 5 {
		// column 1 sees C[0] directly, column 4 sees it rotated by one
		assert_eq!(lanes[1 + 5 * y], 1);
		assert_eq!(lanes[4 + 5 * y], 2);
		assert_eq!(lanes[2 + 5 * y], 0);
		assert_eq!(lanes[3 + 5 * y], 0);
	}

	assert_eq!(lanes[0], 1);
	assert_eq!(lanes[5], 0);
}

#[test]
fn even_parity_columns_are_untouched() {
	// four equal lanes per column cancel out, so every D[x] is zero
	let mut lanes = [0xdead_beef_0123_4567; 25];
	for x in 0 .. 5 {
		lanes[x + 20] = 0;
	}
	let expected = lanes;

	theta(&mut lanes);

	assert_eq!(lanes, expected);
}
