#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Incremental SHA-3 hashing (FIPS 202) that never allocates.
//!
//! ```
//! use libsha3::sha3::HashState;
//!
//! let mut state = HashState::new();
//! state.init(256)?;
//! state.update(b"ab")?;
//! state.update(b"c")?;
//!
//! let mut digest = [0; 32];
//! state.finalize_into(&mut digest)?;
//!
//! assert_eq!(digest, libsha3::sha3::sha3_256(b"abc"));
//! # Ok::<(), libsha3::Error>(())
//! ```

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod error;
pub mod keccak;

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use keccak::sha3;
