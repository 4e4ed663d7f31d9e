//! Sponge engines driving the Keccak-f\[1600\] state.
//!
//! The [`SpongeEngine`] trait is the only way hash objects touch the sponge.
//! Padding, the permutation and the absorb/squeeze arithmetic live behind
//! it. [`KeccakSponge`] is the production engine, backed by the RustCrypto
//! `sha3` crate.
use sha3::digest::core_api::BlockSizeUser;
use sha3::digest::{ExtendableOutput, FixedOutput, Update, XofReader};
use sha3::{
    Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake128Reader, Shake256, Shake256Reader,
};

use crate::absorb::MAX_CHUNK;
use crate::error::{HashError, Result};
use crate::variant::Variant;

/// Capabilities a hash object needs from the sponge underneath it.
///
/// Dropping an engine frees its state.
pub trait SpongeEngine: Send + Sized {
    fn allocate(variant: Variant) -> Result<Self>;

    /// Absorb at most [`MAX_CHUNK`] bytes. Errors are fatal.
    fn absorb(&mut self, chunk: &[u8]) -> Result<()>;

    /// Fill `output` with the next bytes of the output stream.
    ///
    /// Only valid for extendable-output variants.
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Digest of everything absorbed so far. Does not consume the state.
    ///
    /// Only valid for fixed-digest variants.
    fn digest(&self) -> Result<Vec<u8>>;

    fn try_clone(&self) -> Result<Self>;

    /// Rate of the sponge in bytes.
    fn block_len(&self) -> usize;

    fn is_extendable(&self) -> bool;

    /// Digest length in bytes, `0` for extendable-output variants.
    fn output_len(&self) -> usize;
}

/// Keccak sponge backed by RustCrypto `sha3`.
///
/// For SHAKE the absorbing state is kept next to the output reader. The
/// reader is created on the first squeeze and dropped again by the next
/// absorb, so squeezes continue one stream until more input arrives.
#[derive(Clone)]
pub struct KeccakSponge {
    variant: Variant,
    state: State,
    /// Largest chunk accepted by `absorb`, [`MAX_CHUNK`] outside tests.
    chunk_limit: usize,
}

#[derive(Clone)]
enum State {
    Sha3_224(Sha3_224),
    Sha3_256(Sha3_256),
    Sha3_384(Sha3_384),
    Sha3_512(Sha3_512),
    Shake128(Shake128, Option<Shake128Reader>),
    Shake256(Shake256, Option<Shake256Reader>),
}

impl SpongeEngine for KeccakSponge {
    fn allocate(variant: Variant) -> Result<Self> {
        let state = match variant {
            Variant::Sha3_224 => State::Sha3_224(Sha3_224::default()),
            Variant::Sha3_256 => State::Sha3_256(Sha3_256::default()),
            Variant::Sha3_384 => State::Sha3_384(Sha3_384::default()),
            Variant::Sha3_512 => State::Sha3_512(Sha3_512::default()),
            Variant::Shake128 => State::Shake128(Shake128::default(), None),
            Variant::Shake256 => State::Shake256(Shake256::default(), None),
        };
        Ok(Self {
            variant,
            state,
            chunk_limit: MAX_CHUNK,
        })
    }

    fn absorb(&mut self, chunk: &[u8]) -> Result<()> {
        if chunk.len() > self.chunk_limit {
            return Err(HashError::EngineFault(format!(
                "chunk of {} bytes exceeds the absorb limit",
                chunk.len()
            )));
        }
        match &mut self.state {
            State::Sha3_224(h) => h.update(chunk),
            State::Sha3_256(h) => h.update(chunk),
            State::Sha3_384(h) => h.update(chunk),
            State::Sha3_512(h) => h.update(chunk),
            State::Shake128(h, reader) => {
                *reader = None;
                h.update(chunk);
            }
            State::Shake256(h, reader) => {
                *reader = None;
                h.update(chunk);
            }
        }
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        let variant = self.variant;
        match &mut self.state {
            State::Shake128(h, reader) => reader
                .get_or_insert_with(|| h.clone().finalize_xof())
                .read(output),
            State::Shake256(h, reader) => reader
                .get_or_insert_with(|| h.clone().finalize_xof())
                .read(output),
            _ => return Err(wrong_family(variant, "squeeze")),
        }
        Ok(())
    }

    fn digest(&self) -> Result<Vec<u8>> {
        let digest = match &self.state {
            State::Sha3_224(h) => h.clone().finalize_fixed().to_vec(),
            State::Sha3_256(h) => h.clone().finalize_fixed().to_vec(),
            State::Sha3_384(h) => h.clone().finalize_fixed().to_vec(),
            State::Sha3_512(h) => h.clone().finalize_fixed().to_vec(),
            State::Shake128(..) | State::Shake256(..) => {
                return Err(wrong_family(self.variant, "digest"));
            }
        };
        Ok(digest)
    }

    fn try_clone(&self) -> Result<Self> {
        Ok(self.clone())
    }

    fn block_len(&self) -> usize {
        match self.state {
            State::Sha3_224(_) => Sha3_224::block_size(),
            State::Sha3_256(_) => Sha3_256::block_size(),
            State::Sha3_384(_) => Sha3_384::block_size(),
            State::Sha3_512(_) => Sha3_512::block_size(),
            State::Shake128(..) => Shake128::block_size(),
            State::Shake256(..) => Shake256::block_size(),
        }
    }

    fn is_extendable(&self) -> bool {
        matches!(self.state, State::Shake128(..) | State::Shake256(..))
    }

    fn output_len(&self) -> usize {
        self.variant.digest_size()
    }
}

fn wrong_family(variant: Variant, operation: &'static str) -> HashError {
    HashError::WrongFamily {
        name: variant.name(),
        operation,
    }
}
