//! The closed set of SHA-3 and SHAKE algorithm descriptors.
use std::{fmt, str::FromStr};

use crate::error::HashError;

/// Width of the Keccak-f\[1600\] state in bits.
pub const STATE_BITS: usize = 1600;

/// Output mode of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// SHA-3: fixed-length digest.
    FixedDigest,
    /// SHAKE: caller-chosen output length.
    ExtendableOutput,
}

/// Immutable parameters of one algorithm.
#[derive(Debug, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub name: &'static str,
    pub family: Family,
    /// `None` for [`Family::ExtendableOutput`].
    pub digest_size: Option<usize>,
    /// Domain separation bits, including the first bit of `pad10*1`.
    pub suffix: u8,
    pub capacity_bits: usize,
}

const SHA3_SUFFIX: u8 = 0b0000_0110;
const SHAKE_SUFFIX: u8 = 0b0001_1111;

static DESCRIPTORS: [VariantDescriptor; 6] = [
    sha3_descriptor(224),
    sha3_descriptor(256),
    sha3_descriptor(384),
    sha3_descriptor(512),
    shake_descriptor(128),
    shake_descriptor(256),
];

const fn sha3_descriptor(bits: usize) -> VariantDescriptor {
    VariantDescriptor {
        name: match bits {
            224 => "sha3_224",
            256 => "sha3_256",
            384 => "sha3_384",
            _ => "sha3_512",
        },
        family: Family::FixedDigest,
        digest_size: Some(bits / 8),
        suffix: SHA3_SUFFIX,
        capacity_bits: bits * 2,
    }
}

const fn shake_descriptor(security_bits: usize) -> VariantDescriptor {
    VariantDescriptor {
        name: match security_bits {
            128 => "shake_128",
            _ => "shake_256",
        },
        family: Family::ExtendableOutput,
        digest_size: None,
        suffix: SHAKE_SUFFIX,
        capacity_bits: security_bits * 2,
    }
}

/// One of the six supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Sha3_224,
        Variant::Sha3_256,
        Variant::Sha3_384,
        Variant::Sha3_512,
        Variant::Shake128,
        Variant::Shake256,
    ];

    pub fn descriptor(self) -> &'static VariantDescriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn family(self) -> Family {
        self.descriptor().family
    }

    pub fn is_extendable(self) -> bool {
        self.family() == Family::ExtendableOutput
    }

    /// Digest size in bytes, `0` for extendable-output variants.
    pub fn digest_size(self) -> usize {
        self.descriptor().digest_size.unwrap_or(0)
    }

    pub fn suffix(self) -> u8 {
        self.descriptor().suffix
    }

    pub fn capacity_bits(self) -> usize {
        self.descriptor().capacity_bits
    }

    pub fn rate_bits(self) -> usize {
        STATE_BITS - self.capacity_bits()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = HashError;

    /// Accepts the canonical names (`sha3_256`, `shake_128`) as well as the
    /// FIPS 202 spellings (`SHA3-256`, `SHAKE128`), ignoring case. At most
    /// one `_` or `-` may separate the family from the size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || HashError::UnsupportedAlgorithm(s.to_owned());
        let lower = s.to_ascii_lowercase();
        let (family, rest) = if let Some(rest) = lower.strip_prefix("sha3") {
            (Family::FixedDigest, rest)
        } else if let Some(rest) = lower.strip_prefix("shake") {
            (Family::ExtendableOutput, rest)
        } else {
            return Err(unsupported());
        };
        let bits = rest.strip_prefix(['_', '-']).unwrap_or(rest);
        let variant = match (family, bits) {
            (Family::FixedDigest, "224") => Variant::Sha3_224,
            (Family::FixedDigest, "256") => Variant::Sha3_256,
            (Family::FixedDigest, "384") => Variant::Sha3_384,
            (Family::FixedDigest, "512") => Variant::Sha3_512,
            (Family::ExtendableOutput, "128") => Variant::Shake128,
            (Family::ExtendableOutput, "256") => Variant::Shake256,
            _ => return Err(unsupported()),
        };
        Ok(variant)
    }
}
