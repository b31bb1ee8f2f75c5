//! The Keccak-f\[1600\] permutation, FIPS 202 §3.

mod rotation_offsets;
mod round_constants;

pub use rotation_offsets::RHO_OFFSETS;
pub use round_constants::ROUND_CONSTANTS;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub mod sha3;

pub const NUM_LANES: usize = 25;
pub const NUM_ROUNDS: usize = 24;

/// The 1600-bit state as 25 lanes. Lane `A[x, y]` lives at index `x + 5 * y`.
pub type Lanes = [u64; NUM_LANES];

pub fn keccak_f1600(lanes: &mut Lanes) {
	for round in 0 .. NUM_ROUNDS {
		theta(lanes);
		rho(lanes);
		pi(lanes);
		chi(lanes);
		iota(lanes, round);
	}
}

#[test]
fn zero_state_test_vector() {
	let mut lanes = [0; NUM_LANES];

	keccak_f1600(&mut lanes);

	assert_eq!(lanes[0], 0xf1258f7940e1dde7);
	assert_eq!(lanes[1], 0x84d5ccf933c0478a);
	assert_eq!(lanes[24], 0xeaf1ff7b5ceca249);
}

#[test]
fn permuting_twice_keeps_going() {
	let mut once = [0; NUM_LANES];
	keccak_f1600(&mut once);

	let mut twice = once;
	keccak_f1600(&mut twice);

	assert_ne!(once, twice);
	assert_eq!(twice[0], 0x2d5c954df96ecb3c);
}
