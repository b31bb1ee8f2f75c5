use crate::Error;

/// Largest digest any variant produces, in bytes.
pub const MAX_DIGEST_BYTES: usize = 64;

/// The four fixed-length SHA-3 functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
}

impl Variant {
	pub const ALL: [Self; 4] = [Self::Sha3_224, Self::Sha3_256, Self::Sha3_384, Self::Sha3_512];

	/// Digest size in bits. The capacity is twice this.
	pub const fn bits(self) -> u32 {
		match self {
			Self::Sha3_224 => 224,
			Self::Sha3_256 => 256,
			Self::Sha3_384 => 384,
			Self::Sha3_512 => 512,
		}
	}

	/// Bytes absorbed per permutation call: `(1600 - 2 * bits) / 8`.
	pub const fn rate_bytes(self) -> usize {
		(1600 - 2 * self.bits() as usize) / 8
	}

	pub const fn digest_len(self) -> usize {
		self.bits() as usize / 8
	}

	pub(crate) fn from_rate_bytes(rate_bytes: usize) -> Option<Self> {
		Self::ALL.into_iter().find(|variant| variant.rate_bytes() == rate_bytes)
	}
}

impl TryFrom<u32> for Variant {
	type Error = Error;

	fn try_from(bits: u32) -> Result<Self, Error> {
		match bits {
			224 => Ok(Self::Sha3_224),
			256 => Ok(Self::Sha3_256),
			384 => Ok(Self::Sha3_384),
			512 => Ok(Self::Sha3_512),
			_ => Err(Error::UnsupportedBitsize(bits)),
		}
	}
}

#[test]
fn rates_and_digest_lengths() {
	let expected = [(144, 28), (136, 32), (104, 48), (72, 64)];

	for (variant, (rate, digest_len)) in Variant::ALL.into_iter().zip(expected) {
		assert_eq!(variant.rate_bytes(), rate);
		assert_eq!(variant.digest_len(), digest_len);
		assert_eq!(variant.digest_len() * 8, variant.bits() as usize);

		// single-block squeeze only works while the digest fits in one rate
		assert!(variant.digest_len() <= variant.rate_bytes());
		assert!(variant.digest_len() <= MAX_DIGEST_BYTES);
		assert_eq!(variant.rate_bytes() % 8, 0);
	}
}

#[test]
fn only_four_bit_sizes_are_accepted() {
	for variant in Variant::ALL {
		assert_eq!(Variant::try_from(variant.bits()), Ok(variant));
		assert_eq!(Variant::from_rate_bytes(variant.rate_bytes()), Some(variant));
	}

	for bits in [0, 128, 200, 255, 257, 1024, u32::MAX] {
		assert_eq!(Variant::try_from(bits), Err(Error::UnsupportedBitsize(bits)));
	}

	assert_eq!(Variant::from_rate_bytes(0), None);
}
