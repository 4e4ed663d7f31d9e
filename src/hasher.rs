use std::fmt;

use tracing::{debug, trace};

use crate::absorb::absorb_all;
use crate::error::{HashError, Result};
use crate::guard::{ConcurrencyGuard, LOCK_THRESHOLD};
use crate::sponge::{KeccakSponge, SpongeEngine};
use crate::variant::{STATE_BITS, Variant};

/// Largest accepted output length (exclusive) for extendable-output digests.
pub const MAX_XOF_LENGTH: usize = 1 << 29;

/// Construction options for a [`HashObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOptions {
    /// Whether the digest is used in a security context. Accepted for
    /// compatibility only: every variant uses the same engine either way.
    pub used_for_security: bool,
    /// Payload size below which a single owner may skip locking. Reported
    /// only: [`HashObject::update`] always locks, and
    /// [`HashObject::update_mut`] never does.
    pub lock_threshold: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            used_for_security: true,
            lock_threshold: LOCK_THRESHOLD,
        }
    }
}

impl HashOptions {
    pub fn with_used_for_security(mut self, used_for_security: bool) -> Self {
        self.used_for_security = used_for_security;
        self
    }

    pub fn with_lock_threshold(mut self, lock_threshold: usize) -> Self {
        self.lock_threshold = lock_threshold;
        self
    }
}

/// An incremental SHA-3 or SHAKE computation.
///
/// The object owns exactly one sponge engine and can be shared between
/// threads (e.g. through an `Arc`). Operations on one object are serialized
/// by its own lock, and distinct objects never contend.
///
/// ```
/// # use sha3_hashobj::{HashObject, Variant};
/// let hasher = HashObject::new(Variant::Sha3_256, b"your input ")?;
/// hasher.update(b"bytes")?;
/// let expected = "414d4b6d11a92aaeeebe35f9374942f563848d345631bf5537407252dca6b378";
/// assert_eq!(expected, hasher.hexdigest()?);
/// # Ok::<(), sha3_hashobj::HashError>(())
/// ```
pub struct HashObject<E: SpongeEngine = KeccakSponge> {
    variant: Variant,
    options: HashOptions,
    block_size: usize,
    guard: ConcurrencyGuard<E>,
}

impl HashObject {
    /// Create a hash object with the default engine and options, absorbing
    /// `data` if it is non-empty.
    pub fn new(variant: Variant, data: &[u8]) -> Result<Self> {
        Self::with_options(variant, data, HashOptions::default())
    }
}

impl<E: SpongeEngine> HashObject<E> {
    pub fn with_options(variant: Variant, data: &[u8], options: HashOptions) -> Result<Self> {
        let mut engine = E::allocate(variant)?;
        debug_assert_eq!(variant.is_extendable(), engine.is_extendable());
        debug_assert_eq!(variant.digest_size(), engine.output_len());
        // Nothing else can reach the engine yet, so no lock is needed. On
        // failure the engine is dropped before the error propagates.
        if !data.is_empty() {
            absorb_all(&mut engine, data)?;
        }
        trace!(
            variant = variant.name(),
            initial_len = data.len(),
            "hash object created"
        );
        Ok(Self::wrap(variant, options, engine))
    }

    fn wrap(variant: Variant, options: HashOptions, engine: E) -> Self {
        Self {
            variant,
            options,
            block_size: engine.block_len(),
            guard: ConcurrencyGuard::new(engine),
        }
    }

    /// Absorb `data` into the state.
    pub fn update(&self, data: &[u8]) -> Result<()> {
        self.guard.with_engine(|engine| absorb_all(engine, data))
    }

    /// Absorb `data` through an exclusive borrow, without taking the lock.
    pub fn update_mut(&mut self, data: &[u8]) -> Result<()> {
        absorb_all(self.guard.engine_mut()?, data)
    }

    /// Return an independent object with a deep copy of the current state.
    pub fn copy(&self) -> Result<Self> {
        let engine = self.guard.with_engine(|engine| engine.try_clone())?;
        trace!(variant = self.variant.name(), "hash object copied");
        Ok(Self::wrap(self.variant, self.options, engine))
    }

    /// Digest of the data absorbed so far. Fixed-digest variants only.
    ///
    /// The state is not consumed: further updates are allowed, and repeated
    /// calls without updates return the same bytes.
    pub fn digest(&self) -> Result<Vec<u8>> {
        self.require_fixed("digest")?;
        self.guard.with_engine(|engine| engine.digest())
    }

    /// [`digest`](Self::digest) as lowercase hex.
    pub fn hexdigest(&self) -> Result<String> {
        self.require_fixed("hexdigest")?;
        self.digest().map(hex::encode)
    }

    /// Squeeze the next `length` bytes of output. Extendable-output variants
    /// only.
    ///
    /// Each call continues the output stream where the previous one
    /// stopped. After an [`update`](Self::update) the stream restarts over
    /// all absorbed data. A zero `length` returns an empty vector without
    /// touching the state.
    pub fn digest_xof(&self, length: isize) -> Result<Vec<u8>> {
        self.require_extendable("digest_xof")?;
        let length = check_xof_length(length)?;
        if length == 0 {
            return Ok(Vec::new());
        }
        let mut output = Vec::new();
        output
            .try_reserve_exact(length)
            .map_err(|_| HashError::OutOfMemory)?;
        output.resize(length, 0);
        self.guard.with_engine(|engine| engine.squeeze(&mut output))?;
        Ok(output)
    }

    /// [`digest_xof`](Self::digest_xof) as lowercase hex.
    pub fn hexdigest_xof(&self, length: isize) -> Result<String> {
        self.require_extendable("hexdigest_xof")?;
        self.digest_xof(length).map(hex::encode)
    }

    /// Free the engine state. Calling this more than once is a no-op.
    ///
    /// Every other operation fails with [`HashError::Released`] afterwards.
    pub fn release(&self) {
        if let Some(engine) = self.guard.take() {
            drop(engine);
            trace!(variant = self.variant.name(), "hash object released");
        }
    }

    pub fn is_released(&self) -> bool {
        self.guard.is_released()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn name(&self) -> &'static str {
        self.variant.name()
    }

    /// Rate of the sponge in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Digest size in bytes, `0` for extendable-output variants.
    pub fn digest_size(&self) -> usize {
        self.variant.digest_size()
    }

    pub fn rate_bits(&self) -> usize {
        self.block_size * 8
    }

    pub fn capacity_bits(&self) -> usize {
        STATE_BITS - self.rate_bits()
    }

    /// Domain separation suffix, `0x06` for SHA-3 and `0x1f` for SHAKE.
    pub fn suffix(&self) -> u8 {
        self.variant.suffix()
    }

    pub fn used_for_security(&self) -> bool {
        self.options.used_for_security
    }

    pub fn lock_threshold(&self) -> usize {
        self.options.lock_threshold
    }

    fn require_fixed(&self, operation: &'static str) -> Result<()> {
        if self.variant.is_extendable() {
            return Err(self.wrong_family(operation));
        }
        Ok(())
    }

    fn require_extendable(&self, operation: &'static str) -> Result<()> {
        if !self.variant.is_extendable() {
            return Err(self.wrong_family(operation));
        }
        Ok(())
    }

    fn wrong_family(&self, operation: &'static str) -> HashError {
        HashError::WrongFamily {
            name: self.variant.name(),
            operation,
        }
    }
}

fn check_xof_length(length: isize) -> Result<usize> {
    let Ok(length) = usize::try_from(length) else {
        debug!(length, "rejected negative digest length");
        return Err(HashError::NegativeLength);
    };
    if length >= MAX_XOF_LENGTH {
        debug!(length, "rejected oversized digest length");
        return Err(HashError::LengthOverflow);
    }
    Ok(length)
}

impl<E: SpongeEngine> fmt::Debug for HashObject<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashObject")
            .field("name", &self.name())
            .field("block_size", &self.block_size)
            .field("options", &self.options)
            .field("released", &self.is_released())
            .finish()
    }
}
