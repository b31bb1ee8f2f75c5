//! An implementation of [SHA-3](https://en.wikipedia.org/wiki/SHA-3), following
//! [FIPS 202](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf).
//!
//! [`HashState`] hashes input that arrives in pieces, and the `sha3_*`
//! functions hash a complete byte slice. The [`handle`] module exposes the
//! same three operations with every argument optional, for callers that may
//! hold no state or no buffer.
//!
//! Only the four fixed-length functions are provided; the digest is always
//! squeezed from a single block.

pub mod handle;

mod state;
mod variant;

pub use state::{HashState, MAX_RATE_BYTES};
pub use variant::{Variant, MAX_DIGEST_BYTES};

fn hash_whole<const N: usize>(variant: Variant, bytes: &[u8]) -> [u8; N] {
	debug_assert_eq!(N, variant.digest_len());

	let mut state = HashState::with_variant(variant);
	state.absorb(bytes);

	let mut out = [0; N];
	state.finish(&mut out);

	out
}

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sha3_224(bytes: &[u8]) -> [u8; 28] {
	hash_whole(Variant::Sha3_224, bytes)
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; 32] {
	hash_whole(Variant::Sha3_256, bytes)
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sha3_384(bytes: &[u8]) -> [u8; 48] {
	hash_whole(Variant::Sha3_384, bytes)
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sha3_512(bytes: &[u8]) -> [u8; 64] {
	hash_whole(Variant::Sha3_512, bytes)
}

#[test]
fn whole_message_functions() {
	assert_eq!(
		hex::encode(sha3_224(b"abc")),
		"e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
	);

	assert_eq!(
		hex::encode(sha3_256(b"abc")),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		hex::encode(sha3_384(b"")),
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);

	assert_eq!(
		hex::encode(sha3_512(b"abc")),
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);
}

#[test]
fn whole_message_matches_incremental() {
	let message = [0x3c; 1000];

	let mut state = HashState::with_variant(Variant::Sha3_384);
	for chunk in message.chunks(37) {
		state.update(chunk).unwrap();
	}

	let mut digest = [0; 48];
	state.finalize_into(&mut digest).unwrap();

	assert_eq!(digest, sha3_384(&message));
}
