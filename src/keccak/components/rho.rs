use super::super::{Lanes, RHO_OFFSETS};

pub fn rho(lanes: &mut Lanes) {
	for (lane, &offset) in lanes.iter_mut().zip(RHO_OFFSETS.iter()) {
		*lane = lane.rotate_left(offset);
	}
}

#[test]
fn each_lane_rotates_by_its_offset() {
	let mut lanes = [1; 25];

	rho(&mut lanes);

	for i in 0 .. 25 {
		assert_eq!(lanes[i], 1u64 << RHO_OFFSETS[i]);
	}
}
