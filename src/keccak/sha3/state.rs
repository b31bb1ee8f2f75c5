use core::fmt;

use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{keccak_f1600, Lanes, NUM_LANES};
use super::Variant;
use crate::Error;

/// Size of the block buffer: the rate of SHA3-224, the widest variant.
pub const MAX_RATE_BYTES: usize = 144;

// SHA-3 domain suffix `01` followed by the first bit of pad10*1
const DOMAIN_PADDING: u8 = 0x06;
// last bit of pad10*1
const FINAL_PADDING: u8 = 0x80;

/// One in-progress SHA-3 computation.
///
/// A state starts out zeroed and unusable. [`init`](Self::init) picks the
/// variant, [`update`](Self::update) absorbs input in chunks of any size, and
/// [`finalize_into`](Self::finalize_into) writes the digest and wipes every
/// field back to zero. Reusing a finalized state requires another `init`.
///
/// The state owns all of its storage, so it can live on the stack or in a
/// `static`; nothing here allocates.
#[derive(Clone)]
pub struct HashState {
	rate_bytes: usize,
	lanes: Lanes,
	block_buffer: [u8; MAX_RATE_BYTES],
	buffer_offset: usize,
}

impl HashState {
	/// A zeroed state. It rejects everything except `init`.
	pub const fn new() -> Self {
		Self {
			rate_bytes: 0,
			lanes: [0; NUM_LANES],
			block_buffer: [0; MAX_RATE_BYTES],
			buffer_offset: 0,
		}
	}

	/// A state that is already initialized for `variant`.
	pub fn with_variant(variant: Variant) -> Self {
		let mut state = Self::new();
		state.reset(variant);
		state
	}

	/// Initializes the state for a digest of `bitsize` bits.
	///
	/// Only 224, 256, 384 and 512 are accepted. On failure the state is left
	/// exactly as it was.
	pub fn init(&mut self, bitsize: u32) -> Result<(), Error> {
		let variant = Variant::try_from(bitsize).map_err(Error::rejected)?;

		self.reset(variant);
		trace!("sha3: init {:?}, rate {} bytes", variant, variant.rate_bytes());

		Ok(())
	}

	/// Absorbs `data`. Splitting the input across several calls gives the same
	/// digest as passing it all at once.
	pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
		self.check_ready()?;
		self.absorb(data);

		Ok(())
	}

	/// Pads, runs the last permutation and writes the digest to the front of
	/// `digest`, returning its length. The state is wiped afterwards.
	///
	/// `digest` must hold at least [`digest_len`](Self::digest_len) bytes.
	/// Anything past that is left alone, and on failure nothing is written.
	pub fn finalize_into(&mut self, digest: &mut [u8]) -> Result<usize, Error> {
		self.check_ready()?;

		let digest_len = self.digest_len();

		if digest.len() < digest_len {
			return Err(Error::DigestTooShort {expected: digest_len, actual: digest.len()}.rejected());
		}

		self.finish(&mut digest[.. digest_len]);

		Ok(digest_len)
	}

	pub fn variant(&self) -> Option<Variant> {
		Variant::from_rate_bytes(self.rate_bytes)
	}

	pub fn is_ready(&self) -> bool {
		self.rate_bytes != 0
	}

	pub fn rate_bytes(&self) -> usize {
		self.rate_bytes
	}

	/// Zero when the state is not initialized.
	pub fn digest_len(&self) -> usize {
		self.variant().map_or(0, Variant::digest_len)
	}

	/// Number of buffered bytes still waiting for a full block.
	pub fn buffer_offset(&self) -> usize {
		self.buffer_offset
	}

	/// Whether every field holds zero, as after `finalize_into`.
	pub fn is_scrubbed(&self) -> bool {
		self.rate_bytes == 0 &&
			self.buffer_offset == 0 &&
			self.lanes.iter().all(|&lane| lane == 0) &&
			self.block_buffer.iter().all(|&byte| byte == 0)
	}

	fn reset(&mut self, variant: Variant) {
		self.zeroize();
		self.rate_bytes = variant.rate_bytes();
	}

	fn check_ready(&self) -> Result<(), Error> {
		if self.is_ready() {
			Ok(())
		} else {
			Err(Error::NotReady.rejected())
		}
	}

	pub(super) fn absorb(&mut self, mut data: &[u8]) {
		while !data.is_empty() {
			let free = self.rate_bytes - self.buffer_offset;
			let (head, rest) = data.split_at(free.min(data.len()));

			let end = self.buffer_offset + head.len();
			self.block_buffer[self.buffer_offset .. end].copy_from_slice(head);
			self.buffer_offset = end;
			data = rest;

			if self.buffer_offset == self.rate_bytes {
				self.permute_block();
				self.buffer_offset = 0;
			}
		}
	}

	// `out` must not be longer than the digest
	pub(super) fn finish(&mut self, out: &mut [u8]) {
		self.pad();
		self.permute_block();
		self.squeeze(out);

		trace!("sha3: finalized {} byte digest", out.len());

		self.zeroize();
	}

	fn pad(&mut self) {
		self.block_buffer[self.buffer_offset ..].fill(0);

		// with one free byte left both land in the same place, giving 0x86
		self.block_buffer[self.buffer_offset] |= DOMAIN_PADDING;
		self.block_buffer[self.rate_bytes - 1] |= FINAL_PADDING;
	}

	fn permute_block(&mut self) {
		let block = &self.block_buffer[.. self.rate_bytes];

		for (lane, chunk) in self.lanes.iter_mut().zip(block.chunks_exact(8)) {
			let mut bytes = [0; 8];
			bytes.copy_from_slice(chunk);

			*lane ^= u64::from_le_bytes(bytes);
		}

		keccak_f1600(&mut self.lanes);
	}

	fn squeeze(&self, out: &mut [u8]) {
		for (chunk, lane) in out.chunks_mut(8).zip(self.lanes.iter()) {
			chunk.copy_from_slice(&lane.to_le_bytes()[.. chunk.len()]);
		}
	}
}

impl Default for HashState {
	fn default() -> Self {
		Self::new()
	}
}

impl Zeroize for HashState {
	fn zeroize(&mut self) {
		self.rate_bytes.zeroize();
		self.lanes.zeroize();
		self.block_buffer.zeroize();
		self.buffer_offset.zeroize();
	}
}

impl Drop for HashState {
	fn drop(&mut self) {
		self.zeroize();
	}
}

impl ZeroizeOnDrop for HashState {}

// never print lanes or buffered input
impl fmt::Debug for HashState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HashState")
			.field("variant", &self.variant())
			.field("buffer_offset", &self.buffer_offset)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
use super::MAX_DIGEST_BYTES;

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
fn hash_hex(variant: Variant, chunks: &[&[u8]]) -> String {
	let mut state = HashState::new();
	state.init(variant.bits()).unwrap();

	for chunk in chunks {
		state.update(chunk).unwrap();
	}

	let mut digest = [0; MAX_DIGEST_BYTES];
	let len = state.finalize_into(&mut digest).unwrap();
	assert_eq!(len, variant.digest_len());

	hex::encode(&digest[.. len])
}

#[cfg(test)]
fn hash_in_pieces(variant: Variant, data: &[u8], cuts: &[usize]) -> Vec<u8> {
	let mut cuts: Vec<_> = cuts.iter().map(|&cut| cut.min(data.len())).collect();
	cuts.sort_unstable();

	let mut state = HashState::with_variant(variant);
	let mut start = 0;

	for cut in cuts {
		state.update(&data[start .. cut]).unwrap();
		start = cut;
	}

	state.update(&data[start ..]).unwrap();

	let mut digest = vec![0; variant.digest_len()];
	state.finalize_into(&mut digest).unwrap();
	digest
}

#[cfg(test)]
const NIST_56: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

#[test]
fn nist_sha3_256_vectors() {
	assert_eq!(
		hash_hex(Variant::Sha3_256, &[b"abc"]),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		hash_hex(Variant::Sha3_256, &[NIST_56]),
		"41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
	);
}

#[test]
fn empty_inputs() {
	assert_eq!(
		hash_hex(Variant::Sha3_224, &[]),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);

	assert_eq!(
		hash_hex(Variant::Sha3_256, &[]),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		hash_hex(Variant::Sha3_384, &[]),
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);

	assert_eq!(
		hash_hex(Variant::Sha3_512, &[b""]),
		"a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
	);
}

#[test]
fn abc_all_variants() {
	assert_eq!(
		hash_hex(Variant::Sha3_224, &[b"abc"]),
		"e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
	);

	assert_eq!(
		hash_hex(Variant::Sha3_384, &[b"abc"]),
		"ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
	);

	assert_eq!(
		hash_hex(Variant::Sha3_512, &[b"abc"]),
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);
}

#[test]
fn nist_56_byte_message_all_variants() {
	assert_eq!(
		hash_hex(Variant::Sha3_224, &[NIST_56]),
		"8a24108b154ada21c9fd5574494479ba5c7e7ab76ef264ead0fcce33",
	);

	assert_eq!(
		hash_hex(Variant::Sha3_384, &[NIST_56]),
		"991c665755eb3a4b6bbdfb75c78a492e8c56a22c5c4d7e429bfdbc32b9d4ad5aa04a1f076e62fea19eef51acd0657c22",
	);

	assert_eq!(
		hash_hex(Variant::Sha3_512, &[NIST_56]),
		"04a371e84ecfb5b8b77cb48610fca8182dd457ce6f326a0fd3d7ec2f1e91636dee691fbe0c985302ba1b0d8dc78c086346b533b49c030d99a27daf1139d6e75e",
	);
}

#[test]
fn one_million_a() {
	let block = [b'a'; 1000];
	let chunks = [&block[..]; 1000];

	assert_eq!(
		hash_hex(Variant::Sha3_256, &chunks),
		"5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1",
	);
}

#[test]
fn input_filling_whole_blocks_still_gets_a_padding_block() {
	let a = [b'a'; 2 * MAX_RATE_BYTES];

	let expected = [
		(
			Variant::Sha3_224,
			"f9019111996dcf160e284e320fd6d8825cabcd41a5ffdc4c5e9d64b6",
			"da3443b7def69a88f105249a0f6cff48e4b94fd4871c9c458405829c",
		),
		(
			Variant::Sha3_256,
			"3fc5559f14db8e453a0a3091edbd2bc25e11528d81c66fa570a4efdcc2695ee1",
			"a490357b9b3fb39d0a89a117734e5b020b1f33c7bf3fa3575c396425432003d3",
		),
		(
			Variant::Sha3_384,
			"3a4f3b6284e571238884e95655e8c8a60e068e4059a9734abc08823a900d161592860243f00619ae699a29092ed91a16",
			"05480f3d469c7859f5e04d3a97d8e00ceddbc1400da0bcacf427f39de104298c67a2bb5ddc988c93002f288b6324b481",
		),
		(
			Variant::Sha3_512,
			"a8ae722a78e10cbbc413886c02eb5b369a03f6560084aff566bd597bb7ad8c1ccd86e81296852359bf2faddb5153c0a7445722987875e74287adac21adebe952",
			"446cd4d7ba19510dcc776b21045bc68d424b5b840e14685e149bb238b5f473c0356b69e04f0f5785eefce20ff09e678b080d8aac64568c5edf001cd32b2ed7a8",
		),
	];

	for (variant, one_block, two_blocks) in expected {
		let rate = variant.rate_bytes();

		let mut state = HashState::with_variant(variant);
		state.update(&a[.. rate]).unwrap();
		assert_eq!(state.buffer_offset(), 0);

		assert_eq!(hash_hex(variant, &[&a[.. rate]]), one_block);
		assert_eq!(hash_hex(variant, &[&a[.. 2 * rate]]), two_blocks);
	}
}

#[test]
fn one_free_byte_merges_both_padding_bits() {
	let a = [b'a'; MAX_RATE_BYTES];

	let expected = [
		(Variant::Sha3_224, "73b1b22b54f515f626a6abdde6af25cd4801dc6e9dc7fa3f77e1c122"),
		(Variant::Sha3_256, "8094bb53c44cfb1e67b7c30447f9a1c33696d2463ecc1d9c92538913392843c9"),
		(
			Variant::Sha3_384,
			"af61fb4fd1c6afe80857fcba888318a0a1426635b4509f09707e3787630bdb621655ffa54f5884088ccc000f81436414",
		),
		(
			Variant::Sha3_512,
			"070faf98d2a8fddf8ed886408744dc06456096c2e045f26f3c7b010530e6bbb3db535a54d636856f4e0e1e982461cb9a7e8e57ff8895cff1619af9f0e486e28c",
		),
	];

	for (variant, digest) in expected {
		let rate = variant.rate_bytes();

		let mut state = HashState::with_variant(variant);
		state.update(&a[.. rate - 1]).unwrap();
		assert_eq!(state.buffer_offset(), rate - 1);

		state.pad();
		assert_eq!(state.block_buffer[rate - 1], 0x86);
		assert_eq!(state.block_buffer[rate - 2], b'a');

		assert_eq!(hash_hex(variant, &[&a[.. rate - 1]]), digest);
	}
}

#[test]
fn padding_of_a_partial_block() {
	let mut state = HashState::with_variant(Variant::Sha3_512);
	state.block_buffer = [0xff; MAX_RATE_BYTES];
	state.update(b"abc").unwrap();

	state.pad();

	assert_eq!(&state.block_buffer[.. 4], b"abc\x06");
	assert!(state.block_buffer[4 .. 71].iter().all(|&byte| byte == 0));
	assert_eq!(state.block_buffer[71], 0x80);
}

#[test]
fn every_split_of_a_short_message_agrees() {
	for variant in Variant::ALL {
		let whole = hash_in_pieces(variant, NIST_56, &[]);

		for cut in 0 ..= NIST_56.len() {
			assert_eq!(hash_in_pieces(variant, NIST_56, &[cut]), whole);
		}
	}
}

#[test]
fn byte_at_a_time_matches_one_call() {
	let data: Vec<u8> = (0 ..= 255).cycle().take(1024).collect();
	let cuts: Vec<usize> = (0 .. data.len()).collect();

	let digest = hash_in_pieces(Variant::Sha3_512, &data, &cuts);

	assert_eq!(
		hex::encode(digest),
		"b052fd4a09f988bbe4112d9a3eca8ccc517e56da866c1609504c37871146da80731bb681674a2000a41bcb78230b3d9069eb42820293ce23cba294550a1d4d3b",
	);
}

#[test]
fn finalize_scrubs_the_state() {
	for variant in Variant::ALL {
		let mut state = HashState::with_variant(variant);
		state.update(NIST_56).unwrap();
		assert!(!state.is_scrubbed());

		let mut digest = [0; MAX_DIGEST_BYTES];
		state.finalize_into(&mut digest).unwrap();

		assert!(state.is_scrubbed());
		assert!(!state.is_ready());
		assert_eq!(state.variant(), None);
	}
}

#[test]
fn finalized_state_must_be_initialized_again() {
	let mut state = HashState::with_variant(Variant::Sha3_256);
	let mut digest = [0; 32];
	state.finalize_into(&mut digest).unwrap();

	assert_eq!(state.update(b"abc"), Err(Error::NotReady));
	assert_eq!(state.finalize_into(&mut digest), Err(Error::NotReady));

	state.init(256).unwrap();
	state.update(b"abc").unwrap();
	state.finalize_into(&mut digest).unwrap();

	assert_eq!(hex::encode(digest), "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532");
}

#[test]
fn uninitialized_state_is_rejected() {
	let mut state = HashState::default();
	let mut digest = [0xaa; 32];

	assert_eq!(state.update(b""), Err(Error::NotReady));
	assert_eq!(state.finalize_into(&mut digest), Err(Error::NotReady));
	assert_eq!(digest, [0xaa; 32]);
	assert_eq!(state.digest_len(), 0);
}

#[test]
fn init_rejects_unknown_sizes_without_touching_the_state() {
	let mut state = HashState::with_variant(Variant::Sha3_384);
	state.update(b"abc").unwrap();

	for bits in [0, 200, 225, 1600] {
		assert_eq!(state.init(bits), Err(Error::UnsupportedBitsize(bits)));
	}

	assert_eq!(state.variant(), Some(Variant::Sha3_384));
	assert_eq!(state.buffer_offset(), 3);
}

#[test]
fn init_discards_earlier_input() {
	let mut state = HashState::with_variant(Variant::Sha3_224);
	state.update(&[0x5a; 500]).unwrap();

	state.init(256).unwrap();
	assert_eq!(state.rate_bytes(), 136);
	assert_eq!(state.buffer_offset(), 0);

	state.update(b"abc").unwrap();
	let mut digest = [0; 32];
	state.finalize_into(&mut digest).unwrap();

	assert_eq!(hex::encode(digest), "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532");
}

#[test]
fn short_digest_buffer_is_rejected() {
	let mut state = HashState::with_variant(Variant::Sha3_512);
	state.update(b"abc").unwrap();

	let mut digest = [0xaa; 63];
	assert_eq!(
		state.finalize_into(&mut digest),
		Err(Error::DigestTooShort {expected: 64, actual: 63}),
	);
	assert_eq!(digest, [0xaa; 63]);

	// the failed call left the state usable
	let mut digest = [0; 64];
	assert_eq!(state.finalize_into(&mut digest), Ok(64));
	assert_eq!(hex::encode(digest), "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0");
}

#[test]
fn long_digest_buffer_keeps_its_tail() {
	let mut state = HashState::with_variant(Variant::Sha3_224);

	let mut digest = [0xaa; MAX_DIGEST_BYTES];
	assert_eq!(state.finalize_into(&mut digest), Ok(28));

	assert_eq!(hex::encode(&digest[.. 28]), "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7");
	assert!(digest[28 ..].iter().all(|&byte| byte == 0xaa));
}

#[test]
fn debug_output_hides_contents() {
	let mut state = HashState::with_variant(Variant::Sha3_256);
	state.update(b"secret").unwrap();

	let printed = format!("{:?}", state);

	assert_eq!(printed, "HashState { variant: Some(Sha3_256), buffer_offset: 6, .. }");
}

#[cfg(test)]
proptest! {
	#[test]
	fn chunking_does_not_change_the_digest(
		variant in proptest::sample::select(Variant::ALL.to_vec()),
		data in proptest::collection::vec(any::<u8>(), 0 .. 600),
		cuts in proptest::collection::vec(0usize .. 600, 0 .. 12),
	) {
		prop_assert_eq!(hash_in_pieces(variant, &data, &cuts), hash_in_pieces(variant, &data, &[]));
	}

	#[test]
	fn fresh_states_are_deterministic(
		variant in proptest::sample::select(Variant::ALL.to_vec()),
		data in proptest::collection::vec(any::<u8>(), 0 .. 400),
	) {
		let first = hash_in_pieces(variant, &data, &[]);
		let second = hash_in_pieces(variant, &data, &[]);

		prop_assert_eq!(first.len(), variant.digest_len());
		prop_assert_eq!(first, second);
	}
}
