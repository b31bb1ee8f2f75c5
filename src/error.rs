//! Errors returned by the SHA-3 entry points.
//!
//! Every failure is an invalid argument: nothing here is retryable, and a
//! rejected call leaves the state and any output buffer untouched.

use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("unsupported digest size of {0} bits, expected 224, 256, 384 or 512")]
	UnsupportedBitsize(u32),

	#[error("no hash state was given")]
	MissingState,

	#[error("no input buffer was given")]
	MissingData,

	#[error("no digest buffer was given")]
	MissingDigest,

	#[error("digest buffer holds {actual} bytes but the digest needs {expected}")]
	DigestTooShort {
		expected: usize,
		actual: usize,
	},

	/// The state was never initialized, or has already been finalized.
	#[error("hash state is not initialized")]
	NotReady,
}

impl Error {
	pub(crate) fn rejected(self) -> Self {
		debug!("sha3: rejected call: {}", self);
		self
	}
}

#[test]
fn messages_name_the_bad_argument() {
	assert_eq!(
		Error::UnsupportedBitsize(200).to_string(),
		"unsupported digest size of 200 bits, expected 224, 256, 384 or 512",
	);

	assert_eq!(
		Error::DigestTooShort {expected: 32, actual: 16}.to_string(),
		"digest buffer holds 16 bytes but the digest needs 32",
	);
}
