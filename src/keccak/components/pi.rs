use super::super::Lanes;

/// `A'[x, y] = A[(x + 3y) mod 5, x]`
pub fn pi(lanes: &mut Lanes) {
	let old = *lanes;

	for y in 0 .. 5 {
		for x in 0 .. 5 {
			let from_x = (x + 3 * y) % 5;
			let from_y = x;

			lanes[x + 5 * y] = old[from_x + 5 * from_y];
		}
	}
}

#[test]
fn lanes_move_without_changing() {
	let mut lanes = [0; 25];
	for i in 0 .. 25 {
		lanes[i] = i as u64;
	}

	pi(&mut lanes);

	// A[0, 0] stays put, A[1, 1] moves to (1, 0) and A[1, 0] ends up at (0, 2)
	assert_eq!(lanes[0], 0);
	assert_eq!(lanes[1], 6);
	assert_eq!(lanes[10], 1);
	assert_eq!(lanes[6], 9);

	let mut seen = lanes;
	seen.sort_unstable();
	for i in 0 .. 25 {
		assert_eq!(seen[i], i as u64);
	}
}
