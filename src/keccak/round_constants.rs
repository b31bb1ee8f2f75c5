// rc(t) from FIPS 202 §3.2.5, run as the Galois form of x^8 + x^6 + x^5 + x^4 + 1.
// Returns the next register value and the output bit.
const fn step_lfsr(state: u8) -> (u8, bool) {
	let output = state & 0x01 != 0;

	let new_state = if state & 0x80 != 0 {
		(state << 1) ^ 0x71
	} else {
		state << 1
	};

	(new_state, output)
}

const fn compute_round_constants() -> [u64; 24] {
	let mut lfsr = 0x01;
	let mut out = [0; 24];

	let mut round = 0;

	while round < 24 {
		let mut j = 0;

		// bit j of the LFSR output lands on bit 2^j - 1 of the lane
		while j < 7 {
			let (new_lfsr, bit) = step_lfsr(lfsr);
			lfsr = new_lfsr;

			if bit {
				out[round] |= 1 << ((1 << j) - 1);
			}

			j += 1;
		}

		round += 1;
	}

	out
}

/// The constant XORed into lane `(0, 0)` by iota, one per round.
pub const ROUND_CONSTANTS: [u64; 24] = compute_round_constants();

#[test]
fn matches_published_table() {
	let published = [
		0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
		0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
		0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
		0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
		0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
		0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
	];

	assert_eq!(ROUND_CONSTANTS, published);
}
