use super::super::{Lanes, ROUND_CONSTANTS};

pub fn iota(lanes: &mut Lanes, round: usize) {
	lanes[0] ^= ROUND_CONSTANTS[round];
}

#[test]
fn only_touches_first_lane() {
	let mut lanes = [0; 25];

	iota(&mut lanes, 2);

	assert_eq!(lanes[0], 0x800000000000808a);
	assert!(lanes[1 ..].iter().all(|&lane| lane == 0));
}
