//! SHA-3 Hash Objects
//!
//! This crate provides incremental hash objects for the SHA-3 hash functions
//! and the SHAKE extendable-output functions standardized in [FIPS 202].
//!
//! A [`HashObject`] absorbs input in as many [`update`](HashObject::update)
//! calls as needed and can be shared between threads. Output is read with
//! [`digest`](HashObject::digest) for the fixed-length SHA-3 variants and
//! with [`digest_xof`](HashObject::digest_xof) for SHAKE, which squeezes an
//! output stream of arbitrary length.
//!
//! The Keccak permutation and sponge arithmetic are not implemented here.
//! They are provided by a [`SpongeEngine`], by default [`KeccakSponge`].
//!
//! # Example Usage
//! ```
//! # use sha3_hashobj::{sha3_256, shake_128};
//! #
//! let hasher = sha3_256(b"your input ")?;
//! hasher.update(b"bytes")?;
//! let expected = "414d4b6d11a92aaeeebe35f9374942f563848d345631bf5537407252dca6b378";
//! assert_eq!(expected, hasher.hexdigest()?);
//!
//! let xof = shake_128(b"")?;
//! assert_eq!("7f9c2ba4e88f827d", xof.hexdigest_xof(8)?);
//! // squeezing continues the output stream
//! assert_eq!("616045507605853e", xof.hexdigest_xof(8)?);
//! # Ok::<(), sha3_hashobj::HashError>(())
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

mod absorb;
mod error;
mod guard;
mod hasher;
mod sponge;
mod variant;

pub use crate::absorb::{MAX_CHUNK, absorb_all};
pub use crate::error::{HashError, Result};
pub use crate::guard::LOCK_THRESHOLD;
pub use crate::hasher::{HashObject, HashOptions, MAX_XOF_LENGTH};
pub use crate::sponge::{KeccakSponge, SpongeEngine};
pub use crate::variant::{Family, STATE_BITS, Variant, VariantDescriptor};

/// Name of the sponge engine backing [`HashObject::new`].
pub const IMPLEMENTATION: &str = "RustCrypto";

/// Create a hash object for the algorithm called `name`, e.g. `"sha3_256"`
/// or `"SHAKE128"`.
pub fn new(name: &str, data: &[u8]) -> Result<HashObject> {
    HashObject::new(name.parse()?, data)
}

/// SHA-3 hash object with 224 bits (28 bytes) output.
pub fn sha3_224(data: &[u8]) -> Result<HashObject> {
    HashObject::new(Variant::Sha3_224, data)
}

/// SHA-3 hash object with 256 bits (32 bytes) output.
pub fn sha3_256(data: &[u8]) -> Result<HashObject> {
    HashObject::new(Variant::Sha3_256, data)
}

/// SHA-3 hash object with 384 bits (48 bytes) output.
pub fn sha3_384(data: &[u8]) -> Result<HashObject> {
    HashObject::new(Variant::Sha3_384, data)
}

/// SHA-3 hash object with 512 bits (64 bytes) output.
pub fn sha3_512(data: &[u8]) -> Result<HashObject> {
    HashObject::new(Variant::Sha3_512, data)
}

/// SHAKE128 extendable-output hash object.
pub fn shake_128(data: &[u8]) -> Result<HashObject> {
    HashObject::new(Variant::Shake128, data)
}

/// SHAKE256 extendable-output hash object.
pub fn shake_256(data: &[u8]) -> Result<HashObject> {
    HashObject::new(Variant::Shake256, data)
}
