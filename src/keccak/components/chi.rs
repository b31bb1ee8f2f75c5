use super::super::Lanes;

pub fn chi(lanes: &mut Lanes) {
	for row in lanes.chunks_exact_mut(5) {
		let old = [row[0], row[1], row[2], row[3], row[4]];

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			row[x] = old[x] ^ (!old[xp1] & old[xp2]);
		}
	}
}

#[test]
fn rows_are_independent() {
	let mut lanes = [0; 25];
	lanes[1] = !0;

	chi(&mut lanes);

	// A'[4] = A[4] ^ (!A[0] & A[1]) picks up the set lane; A'[0] is masked by !A[1]
	assert_eq!(&lanes[.. 5], &[0u64, !0, 0, 0, !0]);
	assert!(lanes[5 ..].iter().all(|&lane| lane == 0));
}

#[test]
fn zero_state_is_fixed() {
	let mut lanes = [0; 25];

	chi(&mut lanes);

	assert_eq!(lanes, [0; 25]);
}
