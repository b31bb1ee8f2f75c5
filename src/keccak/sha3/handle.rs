//! Handle-style entry points.
//!
//! These mirror `init`/`update`/`finalize` for callers that pass state and
//! buffers around as possibly-absent handles. An absent argument is an error
//! and nothing is modified; every other check is the one [`HashState`] makes.

use super::HashState;
use crate::Error;

pub fn init(state: Option<&mut HashState>, bitsize: u32) -> Result<(), Error> {
	let state = state.ok_or_else(|| Error::MissingState.rejected())?;

	state.init(bitsize)
}

/// `Some(&[])` is a successful no-op; `None` is always rejected.
pub fn update(state: Option<&mut HashState>, data: Option<&[u8]>) -> Result<(), Error> {
	let state = state.ok_or_else(|| Error::MissingState.rejected())?;
	let data = data.ok_or_else(|| Error::MissingData.rejected())?;

	state.update(data)
}

/// Writes the digest into `digest` and returns its length.
pub fn finalize(digest: Option<&mut [u8]>, state: Option<&mut HashState>) -> Result<usize, Error> {
	let digest = digest.ok_or_else(|| Error::MissingDigest.rejected())?;
	let state = state.ok_or_else(|| Error::MissingState.rejected())?;

	state.finalize_into(digest)
}

#[test]
fn full_lifecycle() {
	let mut state = HashState::new();
	let mut digest = [0; 32];

	init(Some(&mut state), 256).unwrap();
	update(Some(&mut state), Some(&b"ab"[..])).unwrap();
	update(Some(&mut state), Some(&b""[..])).unwrap();
	update(Some(&mut state), Some(&b"c"[..])).unwrap();

	assert_eq!(finalize(Some(&mut digest[..]), Some(&mut state)), Ok(32));
	assert_eq!(hex::encode(digest), "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532");
	assert!(state.is_scrubbed());
}

#[test]
fn absent_state_is_rejected() {
	let mut digest = [0xaa; 32];

	assert_eq!(init(None, 256), Err(Error::MissingState));
	assert_eq!(update(None, Some(&b"abc"[..])), Err(Error::MissingState));
	assert_eq!(finalize(Some(&mut digest[..]), None), Err(Error::MissingState));

	assert_eq!(digest, [0xaa; 32]);
}

#[test]
fn absent_buffers_are_rejected() {
	let mut state = HashState::new();
	init(Some(&mut state), 224).unwrap();
	update(Some(&mut state), Some(&b"abc"[..])).unwrap();

	assert_eq!(update(Some(&mut state), None), Err(Error::MissingData));
	assert_eq!(state.buffer_offset(), 3);

	assert_eq!(finalize(None, Some(&mut state)), Err(Error::MissingDigest));
	assert!(state.is_ready());

	// nothing above disturbed the hash in progress
	let mut digest = [0; 28];
	assert_eq!(finalize(Some(&mut digest[..]), Some(&mut state)), Ok(28));
	assert_eq!(hex::encode(digest), "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf");
}

#[test]
fn unsupported_variant_is_rejected() {
	let mut state = HashState::new();

	assert_eq!(init(Some(&mut state), 200), Err(Error::UnsupportedBitsize(200)));
	assert!(!state.is_ready());
}
