// FIPS 202 §3.2.2: starting from (1, 0), step t visits (x, y) -> (y, 2x + 3y)
// and rotates that lane by the t-th triangular number. Lane (0, 0) is never visited.
const fn compute_rho_offsets() -> [u32; 25] {
	let mut out = [0; 25];

	let mut x = 1;
	let mut y = 0;
	let mut t = 0;

	while t < 24 {
		out[x + 5 * y] = (((t + 1) * (t + 2) / 2) % 64) as u32;

		let new_y = (2 * x + 3 * y) % 5;
		x = y;
		y = new_y;

		t += 1;
	}

	out
}

/// Left-rotation applied to each lane by rho, indexed like the state.
pub const RHO_OFFSETS: [u32; 25] = compute_rho_offsets();

#[test]
fn matches_published_table() {
	let published = [
		 0,  1, 62, 28, 27,
		36, 44,  6, 55, 20,
		 3, 10, 43, 25, 39,
		41, 45, 15, 21,  8,
		18,  2, 61, 56, 14,
	];

	assert_eq!(RHO_OFFSETS, published);
}
